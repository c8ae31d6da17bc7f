use async_trait::async_trait;
use csv_onboard_core::{AssetGraph, StoreError};

use crate::audit::AuditEvent;

/// Pluggable catalog persistence backend.
/// Implementations: in-memory (tests, CLI); remote catalog services plug in here.
///
/// The store owns identity assignment, durability, uniqueness, and making the
/// submission atomic. Used as `Arc<dyn CatalogStore>`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Record the whole graph as one unit and return the asset's new identifier.
    ///
    /// `user_id` is the caller on whose behalf the asset is created; the store
    /// performs its own authorization against it.
    async fn create_asset(&self, user_id: &str, graph: AssetGraph) -> Result<String, StoreError>;
}

/// Best-effort sink for unexpected onboarding failures.
///
/// Callers ignore (and log) errors returned from here: an audit outage must
/// never change the outcome of an onboarding call.
pub trait AuditLog: Send + Sync {
    /// Record an unexpected failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be recorded.
    fn log_unexpected(&self, event: &AuditEvent) -> anyhow::Result<()>;
}
