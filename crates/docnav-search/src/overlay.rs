//! Search overlay state and its keyboard shortcut.
//!
//! [`KeyBindings`] is the page-level listener list. Listeners are held
//! weakly; the [`KeyBinding`] guard returned by [`KeyBindings::register`]
//! owns the callback, so dropping the guard removes the listener. Dead
//! entries are pruned on the next dispatch.

use std::fmt;
use std::sync::{Arc, Mutex, Weak};

use docnav_content::ContentSnapshot;

use crate::options::SearchOptions;
use crate::result::SearchHit;
use crate::session::SearchSession;

/// Key that opens the overlay together with Cmd or Ctrl.
pub const SEARCH_KEY: char = 'k';

/// A key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Pressed key.
    pub key: char,
    /// Cmd (macOS) or Meta held.
    pub meta: bool,
    /// Ctrl held.
    pub ctrl: bool,
}

impl KeyEvent {
    /// Key press without modifiers.
    #[must_use]
    pub const fn new(key: char) -> Self {
        Self {
            key,
            meta: false,
            ctrl: false,
        }
    }

    #[must_use]
    pub const fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    #[must_use]
    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Whether this is the platform modifier plus [`SEARCH_KEY`].
    #[must_use]
    pub const fn is_search_shortcut(&self) -> bool {
        self.key == SEARCH_KEY && (self.meta || self.ctrl)
    }
}

/// Listener callback; returns `true` when it handled the event.
type Listener = dyn Fn(&KeyEvent) -> bool + Send + Sync;

/// Page-level key listeners.
///
/// Clones share the same listener list.
#[derive(Clone, Default)]
pub struct KeyBindings {
    listeners: Arc<Mutex<Vec<Weak<Listener>>>>,
}

impl KeyBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for as long as the returned guard lives.
    ///
    /// # Panics
    ///
    /// Panics if the listener lock is poisoned.
    #[must_use = "dropping the guard removes the listener"]
    pub fn register(
        &self,
        listener: impl Fn(&KeyEvent) -> bool + Send + Sync + 'static,
    ) -> KeyBinding {
        let strong: Arc<Listener> = Arc::new(listener);
        self.listeners.lock().unwrap().push(Arc::downgrade(&strong));
        KeyBinding { _listener: strong }
    }

    /// Deliver `event` to live listeners in registration order.
    ///
    /// Returns `true` if any listener handled it (the page should then
    /// suppress the default action).
    ///
    /// # Panics
    ///
    /// Panics if the listener lock is poisoned.
    pub fn dispatch(&self, event: &KeyEvent) -> bool {
        let live: Vec<Arc<Listener>> = {
            let mut listeners = self.listeners.lock().unwrap();
            listeners.retain(|w| w.strong_count() > 0);
            listeners.iter().filter_map(Weak::upgrade).collect()
        };

        let mut handled = false;
        for listener in live {
            handled |= listener(event);
        }
        handled
    }

    /// Number of listeners whose guard is still alive.
    ///
    /// # Panics
    ///
    /// Panics if the listener lock is poisoned.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }
}

/// Guard keeping a key listener registered.
pub struct KeyBinding {
    _listener: Arc<Listener>,
}

impl fmt::Debug for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBinding").finish_non_exhaustive()
    }
}

#[derive(Default)]
struct OverlayState {
    open: bool,
    query: String,
}

/// Search dialog: open state, query and the results for the current query.
pub struct SearchOverlay {
    state: Arc<Mutex<OverlayState>>,
    entries: ContentSnapshot,
    session: SearchSession,
}

impl SearchOverlay {
    /// Overlay searching `entries`, closed and with an empty query.
    #[must_use]
    pub fn new(entries: ContentSnapshot, options: SearchOptions) -> Self {
        Self {
            state: Arc::default(),
            entries,
            session: SearchSession::new(options),
        }
    }

    /// Listen for the search shortcut on `bindings`; each press toggles the
    /// overlay. The listener is removed when the returned guard is dropped.
    #[must_use = "dropping the guard removes the shortcut"]
    pub fn mount(&self, bindings: &KeyBindings) -> KeyBinding {
        let state = Arc::clone(&self.state);
        bindings.register(move |event| {
            if !event.is_search_shortcut() {
                return false;
            }
            if let Ok(mut state) = state.lock() {
                state.open = !state.open;
            }
            true
        })
    }

    /// # Panics
    ///
    /// Panics if the state lock is poisoned.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.lock().unwrap().open
    }

    /// # Panics
    ///
    /// Panics if the state lock is poisoned.
    pub fn set_open(&self, open: bool) {
        self.state.lock().unwrap().open = open;
    }

    /// # Panics
    ///
    /// Panics if the state lock is poisoned.
    #[must_use]
    pub fn query(&self) -> String {
        self.state.lock().unwrap().query.clone()
    }

    /// # Panics
    ///
    /// Panics if the state lock is poisoned.
    pub fn set_query(&self, query: impl Into<String>) {
        self.state.lock().unwrap().query = query.into();
    }

    /// Replace the searched entries, e.g. after a locale switch.
    pub fn set_entries(&mut self, entries: ContentSnapshot) {
        self.entries = entries;
    }

    /// Results for the current query; empty when the query is empty.
    pub fn results(&mut self, limit: Option<usize>) -> Vec<SearchHit> {
        let query = self.query();
        if query.is_empty() {
            return Vec::new();
        }
        self.session.search(&self.entries, &query, limit)
    }

    /// Whether the "no results" notice applies: a query was typed and
    /// nothing matched.
    pub fn shows_no_results(&mut self) -> bool {
        !self.query().is_empty() && self.results(Some(1)).is_empty()
    }

    /// Follow `hit`: close the overlay and return the link to navigate to.
    pub fn select(&self, hit: &SearchHit) -> String {
        self.set_open(false);
        hit.href.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use docnav_content::{ContentEntry, FrontMatter};
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(KeyBindings: Send, Sync);

    fn overlay() -> SearchOverlay {
        let entries: ContentSnapshot = vec![
            ContentEntry::new("getting-started", FrontMatter::titled("Getting Started"), ""),
            ContentEntry::new("guides/search", FrontMatter::titled("Search Configuration"), ""),
        ]
        .into();
        SearchOverlay::new(entries, SearchOptions::default())
    }

    #[test]
    fn test_shortcut_detection() {
        assert!(KeyEvent::new('k').with_meta().is_search_shortcut());
        assert!(KeyEvent::new('k').with_ctrl().is_search_shortcut());
        assert!(!KeyEvent::new('k').is_search_shortcut());
        assert!(!KeyEvent::new('j').with_ctrl().is_search_shortcut());
    }

    #[test]
    fn test_shortcut_toggles_overlay() {
        let bindings = KeyBindings::new();
        let overlay = overlay();
        let _binding = overlay.mount(&bindings);

        assert!(bindings.dispatch(&KeyEvent::new('k').with_meta()));
        assert!(overlay.is_open());

        assert!(bindings.dispatch(&KeyEvent::new('k').with_ctrl()));
        assert!(!overlay.is_open());

        assert!(!bindings.dispatch(&KeyEvent::new('k')));
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_dropping_guard_deregisters_listener() {
        let bindings = KeyBindings::new();
        let overlay = overlay();

        let binding = overlay.mount(&bindings);
        assert_eq!(bindings.listener_count(), 1);

        drop(binding);
        assert_eq!(bindings.listener_count(), 0);
        assert!(!bindings.dispatch(&KeyEvent::new('k').with_meta()));
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let bindings = KeyBindings::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let guards: Vec<KeyBinding> = (0..3)
            .map(|i| {
                let calls = Arc::clone(&calls);
                let seen = Arc::clone(&seen);
                bindings.register(move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    seen.lock().unwrap().push(i);
                    false
                })
            })
            .collect();

        assert!(!bindings.dispatch(&KeyEvent::new('x')));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
        drop(guards);
    }

    #[test]
    fn test_empty_query_has_no_results() {
        let mut overlay = overlay();

        assert!(overlay.results(None).is_empty());
        assert!(!overlay.shows_no_results());
    }

    #[test]
    fn test_query_results_and_selection() {
        let mut overlay = overlay();
        overlay.set_open(true);
        overlay.set_query("serch");

        let results = overlay.results(None);

        assert_eq!(results[0].title, "Search Configuration");
        assert_eq!(overlay.select(&results[0]), "/guides/search");
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_unmatched_query_shows_notice() {
        let mut overlay = overlay();
        overlay.set_query("kubernetes");

        assert!(overlay.shows_no_results());
    }
}
