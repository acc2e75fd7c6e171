//! Index reuse across queries.

use std::sync::Arc;

use docnav_content::ContentSnapshot;

use crate::index::SearchIndex;
use crate::options::SearchOptions;
use crate::result::SearchHit;

/// Keeps the index of the last entry set and rebuilds it only when a
/// different set (by pointer) is searched.
#[derive(Default)]
pub struct SearchSession {
    options: SearchOptions,
    index: Option<Arc<SearchIndex>>,
    rebuilds: usize,
}

impl SearchSession {
    /// Create a session whose indexes use `options`.
    #[must_use]
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            index: None,
            rebuilds: 0,
        }
    }

    /// Index for `entries`, reusing the current one when it was built from
    /// the same snapshot.
    pub fn index_for(&mut self, entries: &ContentSnapshot) -> Arc<SearchIndex> {
        if let Some(index) = &self.index
            && Arc::ptr_eq(index.entries(), entries)
        {
            return Arc::clone(index);
        }

        tracing::debug!(entries = entries.len(), "Building search index");
        let index = Arc::new(SearchIndex::new(Arc::clone(entries), self.options));
        self.index = Some(Arc::clone(&index));
        self.rebuilds += 1;
        index
    }

    /// Search `entries` for `query`. A blank query returns nothing without
    /// building an index.
    pub fn search(
        &mut self,
        entries: &ContentSnapshot,
        query: &str,
        limit: Option<usize>,
    ) -> Vec<SearchHit> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.index_for(entries).hits(query, limit)
    }

    /// Number of indexes built so far.
    #[must_use]
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }
}
