//! In-memory document store.
//!
//! Used when `STORAGE=memory` and by the HTTP tests. Contents are lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use quill_core::StoreError;
use quill_core::ports::{CollectionName, DocumentStore, Snapshot};

pub struct InMemoryStore {
    collections: RwLock<HashMap<CollectionName, (Vec<Value>, u64)>>,
}

impl InMemoryStore {
    /// A store with every collection present and empty.
    pub fn new() -> Self {
        let collections = CollectionName::ALL
            .into_iter()
            .map(|c| (c, (Vec::new(), 0)))
            .collect();
        Self {
            collections: RwLock::new(collections),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn load(&self, collection: CollectionName) -> Result<Snapshot, StoreError> {
        let collections = self.collections.read().await;
        let (records, version) = collections
            .get(&collection)
            .ok_or_else(|| StoreError::Missing(collection.to_string()))?;
        Ok(Snapshot {
            records: records.clone(),
            version: *version,
        })
    }

    async fn save(
        &self,
        collection: CollectionName,
        records: Vec<Value>,
        expected_version: u64,
    ) -> Result<u64, StoreError> {
        let mut collections = self.collections.write().await;
        let entry = collections
            .get_mut(&collection)
            .ok_or_else(|| StoreError::Missing(collection.to_string()))?;
        if entry.1 != expected_version {
            return Err(StoreError::VersionConflict(collection.to_string()));
        }
        *entry = (records, expected_version + 1);
        Ok(entry.1)
    }
}
