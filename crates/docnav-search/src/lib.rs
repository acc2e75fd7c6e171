//! Fuzzy full-text search for docnav.
//!
//! This crate provides:
//! - [`SearchIndex`]: weighted multi-field index over a content snapshot
//! - [`SearchSession`]: index reuse keyed by snapshot identity
//! - [`Snippet`]: highlighted context around the first match of a result
//! - [`SearchOverlay`] and [`KeyBindings`]: the search dialog and its
//!   Cmd/Ctrl+K shortcut
//!
//! Queries use an extended syntax: `=exact`, `'include`, `^prefix`,
//! `suffix$`, the negations `!include`, `!^prefix` and `!suffix$`, and plain
//! fuzzy terms. Space-separated terms must all match one field; `|`
//! separates alternatives.
//!
//! # Example
//!
//! ```
//! use docnav_content::{ContentEntry, ContentSnapshot, FrontMatter};
//! use docnav_search::{SearchIndex, SearchOptions};
//!
//! let entries: ContentSnapshot = vec![ContentEntry::new(
//!     "guides/search",
//!     FrontMatter::titled("Search Configuration"),
//!     "",
//! )]
//! .into();
//! let index = SearchIndex::new(entries, SearchOptions::default());
//!
//! let hits = index.hits("serch", Some(10));
//! assert_eq!(hits[0].href, "/guides/search");
//! ```

mod bitap;
mod extended;
mod fields;
mod index;
mod options;
mod overlay;
mod result;
mod session;
mod snippet;

pub use fields::Field;
pub use index::SearchIndex;
pub use options::SearchOptions;
pub use overlay::{KeyBinding, KeyBindings, KeyEvent, SEARCH_KEY, SearchOverlay};
pub use result::{FieldMatch, SearchHit, SearchResult};
pub use session::SearchSession;
pub use snippet::Snippet;
