//! HTTP request handlers.

pub(crate) mod breadcrumbs;
pub(crate) mod locales;
pub(crate) mod navigation;
pub(crate) mod search;
pub(crate) mod site;
pub(crate) mod toc;

use serde::Deserialize;

/// Optional `?locale=xx` query parameter.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    pub(crate) locale: Option<String>,
}
