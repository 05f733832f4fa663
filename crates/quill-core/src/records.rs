//! Array mutators shared by every collection.
//!
//! A collection is edited as a plain `Vec` of records: locate by id, patch in
//! place, append at the end, or filter out. The same four operations serve
//! authors, blog posts and the comments nested inside a post.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A record stored in a collection.
pub trait Record: Clone {
    /// Validated input for a new record.
    type Draft;
    /// Typed partial update; only the fields it carries are replaced.
    type Patch;

    fn id(&self) -> &str;

    /// Build the record from its draft with a fresh id and creation time.
    fn from_draft(draft: Self::Draft, id: String, now: DateTime<Utc>) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch);

    fn set_updated_at(&mut self, now: DateTime<Utc>);
}

/// Position of the record with exactly this id.
pub fn find_index<T: Record>(records: &[T], id: &str) -> Option<usize> {
    records.iter().position(|r| r.id() == id)
}

/// Patch the record at `index` and stamp its `updatedAt`.
///
/// Panics if `index` is out of bounds; callers obtain it from [`find_index`].
pub fn upsert_at<T: Record>(records: &mut [T], index: usize, patch: T::Patch) -> T {
    let record = &mut records[index];
    record.apply_patch(patch);
    record.set_updated_at(Utc::now());
    record.clone()
}

/// Create a record from `draft` and push it to the end of the collection.
pub fn append<T: Record>(records: &mut Vec<T>, draft: T::Draft) -> T {
    let record = T::from_draft(draft, Uuid::new_v4().to_string(), Utc::now());
    records.push(record.clone());
    record
}

/// Drop every record with this id. A no-op when nothing matches.
pub fn remove<T: Record>(records: &mut Vec<T>, id: &str) {
    records.retain(|r| r.id() != id);
}
