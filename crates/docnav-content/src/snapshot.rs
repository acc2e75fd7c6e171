//! Shared, immutable view of a loaded collection.

use std::sync::Arc;

use crate::entry::ContentEntry;
use crate::store::{ContentStore, StoreError};

/// Entries of one collection, loaded once and shared by pointer.
///
/// Two snapshots are the same set exactly when [`Arc::ptr_eq`] holds, which
/// is what derived indexes key their caches on.
pub type ContentSnapshot = Arc<[ContentEntry]>;

/// Load `collection` from `store` into a snapshot.
///
/// # Errors
///
/// Propagates the store's [`StoreError`].
pub fn load_snapshot(
    store: &dyn ContentStore,
    collection: &str,
) -> Result<ContentSnapshot, StoreError> {
    let entries = store.get_all(collection)?;
    tracing::debug!(collection, count = entries.len(), "Content snapshot loaded");
    Ok(entries.into())
}
