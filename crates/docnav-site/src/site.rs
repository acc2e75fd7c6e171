//! Site facade over a content store.
//!
//! # Thread Safety
//!
//! `Site` is designed for concurrent access:
//! - `snapshot()` returns the shared entry set with minimal locking (an `Arc`
//!   clone on the fast path)
//! - reloads use double-checked locking so one caller loads while others wait
//! - `invalidate()` is lock-free (atomic flag); readers keep their snapshot
//!
//! Per-locale filtered views are memoized inside the loaded state, so an
//! invalidation drops them together with the snapshot.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use docnav_config::{Config, MenuItemConfig};
use docnav_content::{
    ContentEntry, ContentSnapshot, ContentStore, extract_headings, filter_entries, load_snapshot,
};
use docnav_i18n::LocaleRegistry;

use crate::breadcrumbs::{BreadcrumbEntry, build_breadcrumbs};
use crate::datetime::{display_datetime, format_datetime};
use crate::error::SiteError;
use crate::info::{Feature, SiteInfo};
use crate::links::{MenuLink, menu_items_by_locale};
use crate::menu::{MenuNode, build_tree};
use crate::order::OrderMap;
use crate::toc::{PageOutline, create_heading_hierarchy};

/// Configuration for [`Site`].
#[derive(Clone, Debug, Default)]
pub struct SiteOptions {
    /// Collection to load from the store.
    pub collection: String,
    /// Curated navigation order.
    pub order: Vec<String>,
    /// Header menu items.
    pub menu_items: Vec<MenuItemConfig>,
    /// Site identity and enabled features.
    pub info: SiteInfo,
}

impl SiteOptions {
    /// Options taken from the application config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            collection: config.site.collection.clone(),
            order: config.navigation.order.clone(),
            menu_items: config.navigation.menu_items.clone(),
            info: SiteInfo::from_config(&config.site, &config.display),
        }
    }
}

/// Loaded content and its derived per-locale views.
struct SiteState {
    snapshot: ContentSnapshot,
    filtered: RwLock<HashMap<String, ContentSnapshot>>,
}

impl SiteState {
    fn new(snapshot: ContentSnapshot) -> Self {
        Self {
            snapshot,
            filtered: RwLock::new(HashMap::new()),
        }
    }
}

/// Navigation data of a documentation site.
///
/// Owns the content store, locale registry and ordering, and answers menu,
/// breadcrumb and filtered-entry queries per locale.
pub struct Site {
    store: Arc<dyn ContentStore>,
    registry: Arc<LocaleRegistry>,
    collection: String,
    order: OrderMap,
    menu_items: Vec<MenuItemConfig>,
    info: SiteInfo,
    /// Mutex for serializing reload operations.
    reload_lock: Mutex<()>,
    /// Current state (atomically swappable).
    current_state: RwLock<Arc<SiteState>>,
    /// Cache validity flag.
    cache_valid: AtomicBool,
}

impl Site {
    /// Create a site. Content is loaded on first use.
    #[must_use]
    pub fn new(
        store: Arc<dyn ContentStore>,
        registry: Arc<LocaleRegistry>,
        options: SiteOptions,
    ) -> Self {
        let empty: ContentSnapshot = Arc::from(Vec::new());
        Self {
            store,
            registry,
            collection: options.collection,
            order: OrderMap::new(&options.order),
            menu_items: options.menu_items,
            info: options.info,
            reload_lock: Mutex::new(()),
            current_state: RwLock::new(Arc::new(SiteState::new(empty))),
            cache_valid: AtomicBool::new(false),
        }
    }

    /// Locale registry the site resolves against.
    #[must_use]
    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Site identity and enabled features.
    #[must_use]
    pub fn info(&self) -> &SiteInfo {
        &self.info
    }

    /// Whether the display settings keep `feature`.
    #[must_use]
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.info.is_enabled(feature)
    }

    /// Shared handle to the locale registry.
    #[must_use]
    pub fn registry_handle(&self) -> Arc<LocaleRegistry> {
        Arc::clone(&self.registry)
    }

    /// All entries of the collection, every locale included.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Store`] if the content cannot be loaded.
    ///
    /// # Panics
    ///
    /// Panics if internal locks are poisoned.
    pub fn snapshot(&self) -> Result<ContentSnapshot, SiteError> {
        Ok(Arc::clone(&self.reload_if_needed()?.snapshot))
    }

    /// Entries of `locale` with the locale prefix stripped.
    ///
    /// The returned `Arc` stays the same until [`Site::invalidate`], which
    /// search indexes rely on to skip rebuilds.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Locale`] for an undeclared locale and
    /// [`SiteError::Store`] if the content cannot be loaded.
    ///
    /// # Panics
    ///
    /// Panics if internal locks are poisoned.
    pub fn filtered(&self, locale: &str) -> Result<ContentSnapshot, SiteError> {
        self.registry.resolve(locale)?;
        let state = self.reload_if_needed()?;

        if let Some(entries) = state.filtered.read().unwrap().get(locale) {
            return Ok(Arc::clone(entries));
        }

        let mut filtered = state.filtered.write().unwrap();
        let entries = filtered.entry(locale.to_owned()).or_insert_with(|| {
            filter_entries(&state.snapshot, locale, self.registry.default_locale()).into()
        });
        Ok(Arc::clone(entries))
    }

    /// Side navigation tree for `locale`.
    ///
    /// # Errors
    ///
    /// Same as [`Site::filtered`].
    pub fn menu(&self, locale: &str) -> Result<Vec<MenuNode>, SiteError> {
        let entries = self.filtered(locale)?;
        let t = self.registry.translate_for(locale)?;
        Ok(build_tree(
            &entries,
            self.registry.is_default(locale),
            &self.order,
            t,
        ))
    }

    /// Breadcrumb trail for `path` in `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Locale`] for an undeclared locale.
    pub fn breadcrumbs(&self, path: &str, locale: &str) -> Result<Vec<BreadcrumbEntry>, SiteError> {
        Ok(build_breadcrumbs(path, locale, &self.registry)?)
    }

    /// Header menu links for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Locale`] for an undeclared locale.
    pub fn links(&self, locale: &str) -> Result<Vec<MenuLink>, SiteError> {
        Ok(menu_items_by_locale(&self.menu_items, locale, &self.registry)?)
    }

    /// Entry of `locale` at `path`, ignoring any locale prefix in `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Site::filtered`].
    pub fn entry(&self, path: &str, locale: &str) -> Result<Option<ContentEntry>, SiteError> {
        let id = self.registry.slug_without_locale(path);
        let id = id.trim_start_matches('/');
        let entries = self.filtered(locale)?;
        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    /// Title, display timestamp and table of contents of the entry at
    /// `path`, or `None` if there is no such entry.
    ///
    /// The timestamp is omitted when the datetime feature is off and loses
    /// its time of day when the time feature is off.
    ///
    /// # Errors
    ///
    /// Same as [`Site::filtered`].
    pub fn outline(&self, path: &str, locale: &str) -> Result<Option<PageOutline>, SiteError> {
        let Some(entry) = self.entry(path, locale)? else {
            return Ok(None);
        };
        let datetime = if self.is_enabled(Feature::Datetime) {
            display_datetime(entry.data.pub_datetime, entry.data.mod_datetime)
                .map(|dt| format_datetime(dt, self.is_enabled(Feature::Time)))
        } else {
            None
        };
        Ok(Some(PageOutline {
            title: entry.display_title(),
            datetime,
            items: create_heading_hierarchy(&extract_headings(&entry.body)),
        }))
    }

    /// Mark the loaded content stale. The next query reloads it.
    ///
    /// Current readers continue using the snapshot they hold.
    pub fn invalidate(&self) {
        self.cache_valid.store(false, Ordering::Release);
    }

    fn state(&self) -> Arc<SiteState> {
        Arc::clone(&self.current_state.read().unwrap())
    }

    fn reload_if_needed(&self) -> Result<Arc<SiteState>, SiteError> {
        // Fast path: cache valid
        if self.cache_valid.load(Ordering::Acquire) {
            return Ok(self.state());
        }

        let _guard = self.reload_lock.lock().unwrap();

        // Double-check after acquiring lock
        if self.cache_valid.load(Ordering::Acquire) {
            return Ok(self.state());
        }

        let snapshot = load_snapshot(self.store.as_ref(), &self.collection)?;
        tracing::debug!(
            collection = %self.collection,
            entries = snapshot.len(),
            "Site content reloaded"
        );
        let state = Arc::new(SiteState::new(snapshot));

        *self.current_state.write().unwrap() = Arc::clone(&state);
        self.cache_valid.store(true, Ordering::Release);

        Ok(state)
    }
}
