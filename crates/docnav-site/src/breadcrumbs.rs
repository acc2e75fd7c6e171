//! Breadcrumb trail for a page path.

use docnav_i18n::{I18nError, LocaleRegistry};
use serde::Serialize;

/// One step of a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub link: String,
}

/// Build the breadcrumb trail for `path` in `locale`.
///
/// The locale prefix of `path` is ignored. Each segment contributes one
/// entry titled by its `paths.<segment>` message (or the key itself), linking
/// to the accumulated path, qualified with `/<locale>` for non-default
/// locales.
///
/// # Errors
///
/// Returns [`I18nError::UnsupportedLocale`] if `locale` is not declared.
pub fn build_breadcrumbs(
    path: &str,
    locale: &str,
    registry: &LocaleRegistry,
) -> Result<Vec<BreadcrumbEntry>, I18nError> {
    let t = registry.translate_for(locale)?;
    let stripped = registry.slug_without_locale(path);

    let mut current = String::new();
    let crumbs = stripped
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            current.push('/');
            current.push_str(segment);
            BreadcrumbEntry {
                title: t.translate(&format!("paths.{segment}")),
                link: registry.localize_href(&current, locale),
            }
        })
        .collect();

    Ok(crumbs)
}
