//! Fixed identities shared by every onboarded CSV asset.
//!
//! The endpoint, connector type and connection records carry the same
//! identifiers for every call; only their derived names differ. The values
//! live in [`CatalogIdentities`] so a deployment (or a test) can inject its
//! own identity space instead of the built-in defaults.

use serde::{Deserialize, Serialize};

/// Type name of every onboarded file asset. Also the qualified-name prefix.
pub const CSV_FILE_TYPE_NAME: &str = "CSVFile";

/// Default identifier of the shared file endpoint.
pub const DEFAULT_ENDPOINT_GUID: &str = "1b7f0e57-8f3c-4d43-9a0e-2a6c5d9e0c11";
/// Default identifier of the shared CSV connector type.
pub const DEFAULT_CONNECTOR_TYPE_GUID: &str = "2e0f9c7a-1f1e-4c4e-8e53-7d5b8a3b6f22";
/// Default identifier of the shared connection.
pub const DEFAULT_CONNECTION_GUID: &str = "3c91d0f4-6a2b-4b8e-b1f7-4e2d9c0a7e33";
/// Default reference to the connector implementation that reads CSV files.
pub const DEFAULT_CONNECTOR_PROVIDER: &str = "csv-file-store-connector";

/// Process-wide identities assigned to the sub-objects of every onboarded asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIdentities {
    /// Identifier given to every endpoint descriptor.
    pub endpoint_guid: String,
    /// Identifier given to every connector-type descriptor.
    pub connector_type_guid: String,
    /// Identifier given to every connection descriptor.
    pub connection_guid: String,
    /// Connector implementation referenced by the connector type.
    pub connector_provider: String,
}

impl Default for CatalogIdentities {
    fn default() -> Self {
        Self {
            endpoint_guid: DEFAULT_ENDPOINT_GUID.to_string(),
            connector_type_guid: DEFAULT_CONNECTOR_TYPE_GUID.to_string(),
            connection_guid: DEFAULT_CONNECTION_GUID.to_string(),
            connector_provider: DEFAULT_CONNECTOR_PROVIDER.to_string(),
        }
    }
}

/// Qualified name of the asset for `full_path`.
///
/// Depends on the path only, so the same file always maps to the same name.
#[must_use]
pub fn asset_qualified_name(full_path: &str) -> String {
    format!("{CSV_FILE_TYPE_NAME}:{full_path}")
}

/// Qualified name of the endpoint for `full_path`.
#[must_use]
pub fn endpoint_qualified_name(full_path: &str) -> String {
    format!("{full_path} File Endpoint")
}

/// Qualified name of the shared connector type.
pub const CONNECTOR_TYPE_QUALIFIED_NAME: &str = "CSV File Connector Type";

/// Qualified name of the connection for `full_path`.
#[must_use]
pub fn connection_qualified_name(full_path: &str) -> String {
    format!("{full_path}Structured File Store Connection")
}
