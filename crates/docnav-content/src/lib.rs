//! Content entries and stores for docnav.
//!
//! This crate provides:
//! - [`ContentEntry`] and [`FrontMatter`]: one markdown document and its
//!   parsed front matter
//! - [`ContentStore`] trait with [`FsContentStore`] for on-disk collections
//!   and [`MockContentStore`] for tests (behind the `mock` feature)
//! - [`filter_entries`]: per-locale view of a collection
//! - [`extract_headings`]: ATX headings of a markdown body
//! - [`ContentSnapshot`]: the shared, immutable entry set
//!
//! # Example
//!
//! ```no_run
//! use docnav_content::{ContentStore, FsContentStore, filter_entries};
//!
//! let store = FsContentStore::new("src/content");
//! let entries = store.get_all("docs")?;
//! let english = filter_entries(&entries, "en", "en");
//! # Ok::<(), docnav_content::StoreError>(())
//! ```

mod entry;
mod filter;
mod front_matter;
mod fs;
mod headings;
#[cfg(feature = "mock")]
mod mock;
mod snapshot;
mod store;

pub use entry::{ContentEntry, FrontMatter, capitalize_first_letter};
pub use filter::filter_entries;
pub use front_matter::FrontMatterError;
pub use fs::FsContentStore;
pub use headings::{Heading, extract_headings};
#[cfg(feature = "mock")]
pub use mock::MockContentStore;
pub use snapshot::{ContentSnapshot, load_snapshot};
pub use store::{ContentStore, StoreError, StoreErrorKind};
