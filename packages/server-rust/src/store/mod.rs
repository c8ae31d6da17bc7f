//! Catalog store implementations.
//!
//! The [`CatalogStore`](crate::traits::CatalogStore) trait is the seam; this
//! module provides [`InMemoryCatalogStore`], a `DashMap`-backed store used by
//! tests, the `onboard` binary, and embedders that need no durable backend.

pub mod config;
pub mod memory;

pub use config::StoreConfig;
pub use memory::{InMemoryCatalogStore, StoredAsset};
