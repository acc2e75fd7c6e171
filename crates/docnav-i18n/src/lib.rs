//! Locale profiles and translation for docnav.
//!
//! This crate provides:
//! - [`LocaleRegistry`]: the immutable set of declared locales, the default
//!   locale, and locale-aware path helpers
//! - [`LocaleProfile`]: per-locale display settings and string table
//! - [`Translator`]: key lookup that falls back to the key itself
//!
//! # Quick Start
//!
//! ```
//! use docnav_i18n::LocaleRegistry;
//!
//! let registry = LocaleRegistry::builtin();
//! assert_eq!(registry.default_locale(), "en");
//!
//! let t = registry.translate_for("zh").unwrap();
//! assert_eq!(t.translate("nav.home"), "首页");
//! assert_eq!(t.translate("paths.unknown"), "paths.unknown");
//! ```

mod error;
mod messages;
mod profile;
mod registry;
mod translator;

pub use error::I18nError;
pub use profile::{LocaleProfile, TextDirection};
pub use registry::LocaleRegistry;
pub use translator::Translator;
