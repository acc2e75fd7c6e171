//! Mock content store for testing.
//!
//! Provides [`MockContentStore`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::entry::{ContentEntry, FrontMatter};
use crate::store::{ContentStore, StoreError, StoreErrorKind};

/// In-memory content store.
///
/// # Example
///
/// ```
/// use docnav_content::{ContentStore, MockContentStore};
///
/// let store = MockContentStore::new()
///     .with_page("docs", "en/guides/pages", "Pages")
///     .with_page("docs", "zh/guides/pages", "页面");
///
/// assert_eq!(store.get_all("docs").unwrap().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockContentStore {
    collections: RwLock<HashMap<String, Vec<ContentEntry>>>,
    loads: AtomicUsize,
}

impl MockContentStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to a collection.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_entry(self, collection: &str, entry: ContentEntry) -> Self {
        self.push(collection, entry);
        self
    }

    /// Add a titled entry with an empty body.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, collection: &str, id: &str, title: &str) -> Self {
        self.with_entry(collection, ContentEntry::new(id, FrontMatter::titled(title), ""))
    }

    /// Add an entry after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn push(&self, collection: &str, entry: ContentEntry) {
        self.collections
            .write()
            .unwrap()
            .entry(collection.to_owned())
            .or_default()
            .push(entry);
    }

    /// Number of `get_all` calls served so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ContentStore for MockContentStore {
    fn get_all(&self, collection: &str) -> Result<Vec<ContentEntry>, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.collections
            .read()
            .unwrap()
            .get(collection)
            .cloned()
            .ok_or_else(|| {
                StoreError::new(StoreErrorKind::NotFound)
                    .with_backend("Mock")
                    .with_path(collection)
            })
    }
}
