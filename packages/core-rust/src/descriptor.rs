//! Unpersisted catalog records produced by the descriptor builder.
//!
//! An [`AssetGraph`] is the unit handed to the catalog store: one asset, an
//! optional tabular schema, and the connection bundle that tells a consumer
//! how to open the file.

use serde::{Deserialize, Serialize};

use crate::properties::{PropertyMap, PropertyValue, DELIMITER_PROPERTY, QUOTE_PROPERTY};

/// Catalog record for the file itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    /// Fixed type identity, always `CSVFile`.
    pub type_name: String,
    /// `CSVFile:<full path>`. Natural external key of the asset.
    pub qualified_name: String,
    pub display_name: String,
    pub description: String,
    /// Resolved delimiter and quote character.
    pub extended_properties: PropertyMap,
}

impl AssetDescriptor {
    /// Resolved delimiter recorded on the asset.
    #[must_use]
    pub fn delimiter(&self) -> Option<char> {
        self.extended_properties
            .get(DELIMITER_PROPERTY)
            .and_then(PropertyValue::as_char)
    }

    /// Resolved quote character recorded on the asset.
    #[must_use]
    pub fn quote(&self) -> Option<char> {
        self.extended_properties
            .get(QUOTE_PROPERTY)
            .and_then(PropertyValue::as_char)
    }
}

/// Tabular shape of the file. Only present when column headers were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDescriptor {
    pub qualified_name: String,
    pub display_name: String,
    /// One attribute per column header, in header order.
    pub attributes: Vec<SchemaAttribute>,
}

impl SchemaDescriptor {
    /// Attribute names in column order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }
}

/// A single column of a [`SchemaDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaAttribute {
    pub qualified_name: String,
    /// Column header text, verbatim.
    pub name: String,
    /// Zero-based column index.
    pub position: usize,
}

/// Network or file-system address of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    pub guid: String,
    pub qualified_name: String,
    pub address: String,
}

/// Reference to the connector implementation able to read the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorTypeDescriptor {
    pub guid: String,
    pub qualified_name: String,
    pub connector_provider: String,
}

/// Everything a consumer needs to physically open the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDescriptor {
    pub guid: String,
    pub qualified_name: String,
    pub endpoint: EndpointDescriptor,
    pub connector_type: ConnectorTypeDescriptor,
    /// Connector settings. `None` rather than an empty map when nothing applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_properties: Option<PropertyMap>,
}

impl ConnectionDescriptor {
    /// Looks up a configuration property by key.
    #[must_use]
    pub fn configuration_property(&self, key: &str) -> Option<&PropertyValue> {
        self.configuration_properties
            .as_ref()
            .and_then(|props| props.get(key))
    }
}

/// The linked set of descriptors submitted to the store as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetGraph {
    pub asset: AssetDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaDescriptor>,
    pub connection: ConnectionDescriptor,
}
