//! Flat-file document store: one JSON array per collection under a data directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use quill_core::StoreError;
use quill_core::ports::{CollectionName, DocumentStore, Snapshot};

/// Stores `<data_dir>/authors.json` and `<data_dir>/blogPosts.json`.
///
/// Versions live in memory only; every process starts at version 0.
pub struct JsonFileStore {
    data_dir: PathBuf,
    versions: Mutex<HashMap<CollectionName, u64>>,
}

impl JsonFileStore {
    /// Open the store, creating the directory and any missing collection as `[]`.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {e}", data_dir.display())))?;

        for collection in CollectionName::ALL {
            let path = collection_path(&data_dir, collection);
            if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
                write_atomic(&path, b"[]").await?;
                tracing::info!(path = %path.display(), "Created empty collection file");
            }
        }

        Ok(Self::existing(data_dir))
    }

    /// Use a directory as-is. Missing files surface as errors on first access.
    pub fn existing(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            versions: Mutex::new(HashMap::new()),
        }
    }

    pub fn path(&self, collection: CollectionName) -> PathBuf {
        collection_path(&self.data_dir, collection)
    }
}

fn collection_path(dir: &Path, collection: CollectionName) -> PathBuf {
    dir.join(format!("{}.json", collection.as_str()))
}

async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, bytes)
        .await
        .map_err(|e| StoreError::Io(format!("{}: {e}", tmp.display())))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self, collection: CollectionName) -> Result<Snapshot, StoreError> {
        let versions = self.versions.lock().await;
        let path = self.path(collection);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::Missing(collection.to_string()));
            }
            Err(e) => return Err(StoreError::Io(format!("{}: {e}", path.display()))),
        };

        let records = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                return Err(StoreError::Malformed {
                    collection: collection.to_string(),
                    reason: "top-level value is not an array".into(),
                });
            }
            Err(e) => {
                return Err(StoreError::Malformed {
                    collection: collection.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        Ok(Snapshot {
            records,
            version: versions.get(&collection).copied().unwrap_or(0),
        })
    }

    async fn save(
        &self,
        collection: CollectionName,
        records: Vec<Value>,
        expected_version: u64,
    ) -> Result<u64, StoreError> {
        let mut versions = self.versions.lock().await;
        let current = versions.entry(collection).or_insert(0);
        if *current != expected_version {
            return Err(StoreError::VersionConflict(collection.to_string()));
        }

        let bytes = serde_json::to_vec(&records).map_err(|e| StoreError::Malformed {
            collection: collection.to_string(),
            reason: e.to_string(),
        })?;
        write_atomic(&self.path(collection), &bytes).await?;

        *current += 1;
        tracing::debug!(collection = %collection, records = records.len(), "Collection file written");
        Ok(*current)
    }
}
