//! Typed view over one persisted collection.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::error::{DomainError, StoreError};
use crate::ports::{CollectionName, DocumentStore};

/// A collection of `T` records backed by a [`DocumentStore`].
///
/// Writers are serialized: [`Collection::mutate`] holds a lock across the whole
/// load, edit and save cycle, so two concurrent edits of the same collection
/// never overwrite each other. Clones share the lock.
pub struct Collection<T> {
    name: CollectionName,
    store: Arc<dyn DocumentStore>,
    writer: Arc<Mutex<()>>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            store: self.store.clone(),
            writer: self.writer.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(name: CollectionName, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            name,
            store,
            writer: Arc::new(Mutex::new(())),
            _record: PhantomData,
        }
    }

    pub fn name(&self) -> CollectionName {
        self.name
    }

    /// Every record, in insertion order.
    pub async fn all(&self) -> Result<Vec<T>, DomainError> {
        let snapshot = self.store.load(self.name).await?;
        Ok(self.decode(snapshot.records)?)
    }

    /// Run `edit` against the loaded records and persist them if it succeeds.
    ///
    /// Nothing is written when `edit` returns an error.
    pub async fn mutate<R, F>(&self, edit: F) -> Result<R, DomainError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, DomainError> + Send,
    {
        let _guard = self.writer.lock().await;

        let snapshot = self.store.load(self.name).await?;
        let mut records = self.decode(snapshot.records)?;

        let outcome = edit(&mut records)?;

        let encoded = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Malformed {
                collection: self.name.to_string(),
                reason: e.to_string(),
            })?;

        let version = self
            .store
            .save(self.name, encoded, snapshot.version)
            .await?;
        tracing::debug!(collection = %self.name, version, "Collection saved");

        Ok(outcome)
    }

    fn decode(&self, records: Vec<serde_json::Value>) -> Result<Vec<T>, StoreError> {
        records
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| StoreError::Malformed {
                collection: self.name.to_string(),
                reason: e.to_string(),
            })
    }
}
