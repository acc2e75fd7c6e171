//! Navigation structure for docnav sites.
//!
//! This crate turns a flat set of content entries into the navigation a
//! documentation page needs:
//! - [`build_menu`]: nested side navigation with curated ordering
//! - [`build_breadcrumbs`]: the trail from the site root to a page
//! - [`create_heading_hierarchy`]: table of contents grouping
//! - [`menu_items_by_locale`]: localized header links
//! - [`SiteInfo`]: site identity and the features the display settings keep
//! - [`Site`]: a thread-safe facade that loads content lazily and memoizes
//!   per-locale views
//!
//! All builders are pure functions of their inputs; only [`Site`] holds
//! state.

mod breadcrumbs;
mod datetime;
mod error;
mod info;
mod links;
mod menu;
mod order;
mod site;
mod toc;

pub use breadcrumbs::{BreadcrumbEntry, build_breadcrumbs};
pub use datetime::{display_datetime, format_datetime};
pub use error::SiteError;
pub use info::{Feature, SiteInfo};
pub use links::{MenuLink, menu_items_by_locale};
pub use menu::{MenuNode, build_menu};
pub use order::OrderMap;
pub use site::{Site, SiteOptions};
pub use toc::{HeadingNode, PageOutline, create_heading_hierarchy};
