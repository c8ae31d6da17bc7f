/// Behaviour switches for [`InMemoryCatalogStore`](super::InMemoryCatalogStore).
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Reject a second asset with an already-stored qualified name.
    /// Off by default: duplicates are accepted.
    pub enforce_unique_names: bool,
    /// Users allowed to create assets. `None` allows everyone.
    pub authorized_users: Option<Vec<String>>,
}
