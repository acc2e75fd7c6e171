//! Application state.
//!
//! Shared state for all request handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use docnav_search::{SearchIndex, SearchOptions};
use docnav_site::{Feature, Site};

use crate::error::ServerError;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Navigation data source.
    pub(crate) site: Arc<Site>,
    /// Matcher options for new search indexes.
    pub(crate) search_options: SearchOptions,
    /// Last built search index per locale.
    pub(crate) indexes: Mutex<HashMap<String, Arc<SearchIndex>>>,
}

impl AppState {
    pub(crate) fn new(site: Arc<Site>, search_options: SearchOptions) -> Self {
        Self {
            site,
            search_options,
            indexes: Mutex::new(HashMap::new()),
        }
    }

    /// Locale of a request: the explicit `locale` parameter, else a locale
    /// segment leading `path`, else the default locale.
    pub(crate) fn request_locale(&self, locale: Option<&str>, path: Option<&str>) -> String {
        let registry = self.site.registry();
        if let Some(locale) = locale.filter(|l| !l.is_empty()) {
            return locale.to_owned();
        }
        path.and_then(|p| p.split('/').find(|s| !s.is_empty()))
            .filter(|first| registry.is_locale_key(first))
            .unwrap_or_else(|| registry.default_locale())
            .to_owned()
    }

    /// Reject the request when the display settings switch `feature` off.
    pub(crate) fn require(&self, feature: Feature) -> Result<(), ServerError> {
        if self.site.is_enabled(feature) {
            Ok(())
        } else {
            Err(ServerError::FeatureDisabled(feature))
        }
    }

    /// Search index for the current entries of `locale`.
    ///
    /// The index lock is held only to look up and to store an index. A
    /// stale index is rebuilt without it, so searches in other locales are
    /// not blocked by the build.
    ///
    /// # Panics
    ///
    /// Panics if the index lock is poisoned.
    pub(crate) fn search_index(&self, locale: &str) -> Result<Arc<SearchIndex>, ServerError> {
        let entries = self.site.filtered(locale)?;
        if let Some(index) = self.indexes.lock().unwrap().get(locale)
            && Arc::ptr_eq(index.entries(), &entries)
        {
            return Ok(Arc::clone(index));
        }

        tracing::debug!(locale, entries = entries.len(), "Building search index");
        let index = Arc::new(SearchIndex::new(entries, self.search_options));
        self.indexes
            .lock()
            .unwrap()
            .insert(locale.to_owned(), Arc::clone(&index));
        Ok(index)
    }
}
