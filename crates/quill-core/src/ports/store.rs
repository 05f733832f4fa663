//! Document store port - whole-collection persistence.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// The persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
    Authors,
    BlogPosts,
}

impl CollectionName {
    pub const ALL: [CollectionName; 2] = [CollectionName::Authors, CollectionName::BlogPosts];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::Authors => "authors",
            CollectionName::BlogPosts => "blogPosts",
        }
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Folder an uploaded image is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    Authors,
    Covers,
}

impl ImageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageCategory::Authors => "authors",
            ImageCategory::Covers => "covers",
        }
    }
}

/// A whole collection as read from the backend, with the version it was read at.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub records: Vec<Value>,
    pub version: u64,
}

/// Whole-collection document store.
///
/// Every collection is a single JSON array. There is no per-record access:
/// callers load the array, edit it in memory and save it back.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the entire array. Fails if the collection is missing or not an array.
    async fn load(&self, collection: CollectionName) -> Result<Snapshot, StoreError>;

    /// Replace the entire array and return the new version.
    ///
    /// Fails with [`StoreError::VersionConflict`] when the stored version is no
    /// longer `expected_version`.
    async fn save(
        &self,
        collection: CollectionName,
        records: Vec<Value>,
        expected_version: u64,
    ) -> Result<u64, StoreError>;
}
