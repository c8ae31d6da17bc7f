//! In-memory [`CatalogStore`] implementation backed by [`DashMap`].
//!
//! Assets are keyed by their generated identifier, with a secondary index
//! from qualified name to identifiers. A submission is recorded in full or
//! not at all.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use csv_onboard_core::{AssetGraph, StoreError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use super::config::StoreConfig;
use crate::traits::CatalogStore;

/// An asset graph as recorded by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub guid: String,
    pub created_by: String,
    pub graph: AssetGraph,
}

/// Concurrent in-memory catalog.
pub struct InMemoryCatalogStore {
    assets: DashMap<String, StoredAsset>,
    by_qualified_name: DashMap<String, Vec<String>>,
    enforce_unique_names: bool,
    authorized_users: Option<HashSet<String>>,
    available: AtomicBool,
}

impl InMemoryCatalogStore {
    /// Creates an empty store that accepts every user and allows duplicates.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            assets: DashMap::new(),
            by_qualified_name: DashMap::new(),
            enforce_unique_names: config.enforce_unique_names,
            authorized_users: config
                .authorized_users
                .map(|users| users.into_iter().collect()),
            available: AtomicBool::new(true),
        }
    }

    /// Marks the store as (un)available. While unavailable every submission
    /// fails with [`StoreError::PropertyServer`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Release);
    }

    #[must_use]
    pub fn get(&self, guid: &str) -> Option<StoredAsset> {
        self.assets.get(guid).map(|entry| entry.value().clone())
    }

    /// All assets recorded under `qualified_name`, in creation order.
    #[must_use]
    pub fn find_by_qualified_name(&self, qualified_name: &str) -> Vec<StoredAsset> {
        self.by_qualified_name
            .get(qualified_name)
            .map(|guids| guids.iter().filter_map(|g| self.get(g)).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    fn check_authorized(&self, user_id: &str) -> Result<(), StoreError> {
        match &self.authorized_users {
            Some(users) if !users.contains(user_id) => Err(StoreError::UserNotAuthorized {
                user_id: user_id.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(user_id: &str, graph: &AssetGraph) -> Result<(), StoreError> {
    if user_id.trim().is_empty() {
        return Err(StoreError::invalid_parameter("userId", "must not be empty"));
    }
    let full_path = &graph.connection.endpoint.address;
    if full_path.trim().is_empty() {
        return Err(StoreError::invalid_parameter("fullPath", "must not be empty"));
    }
    if full_path.contains('\0') {
        return Err(StoreError::invalid_parameter(
            "fullPath",
            "must not contain NUL characters",
        ));
    }
    Ok(())
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn create_asset(&self, user_id: &str, graph: AssetGraph) -> Result<String, StoreError> {
        if !self.available.load(Ordering::Acquire) {
            return Err(StoreError::PropertyServer(
                "catalog store is not available".to_string(),
            ));
        }
        validate(user_id, &graph)?;
        self.check_authorized(user_id)?;

        let guid = Uuid::new_v4().to_string();
        let qualified_name = graph.asset.qualified_name.clone();

        let stored = StoredAsset {
            guid: guid.clone(),
            created_by: user_id.to_string(),
            graph,
        };

        // Lock order is name index, then assets. The asset is inserted while
        // the index entry is still held, so readers never see a dangling guid.
        match self.by_qualified_name.entry(qualified_name) {
            Entry::Occupied(mut occupied) => {
                if self.enforce_unique_names {
                    return Err(StoreError::invalid_parameter(
                        "qualifiedName",
                        format!("an asset named '{}' already exists", occupied.key()),
                    ));
                }
                occupied.get_mut().push(guid.clone());
                self.assets.insert(guid.clone(), stored);
            }
            Entry::Vacant(vacant) => {
                let _indexed = vacant.insert(vec![guid.clone()]);
                self.assets.insert(guid.clone(), stored);
            }
        }

        tracing::debug!(guid = %guid, user = %user_id, "asset graph stored");
        Ok(guid)
    }
}
