//! Header menu links.

use docnav_config::MenuItemConfig;
use docnav_i18n::{I18nError, LocaleRegistry};
use serde::Serialize;

/// Header menu link localized for one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuLink {
    /// Translated title.
    pub title: String,
    /// Link target.
    pub href: String,
}

/// Localize configured header menu items.
///
/// # Errors
///
/// Returns [`I18nError::UnsupportedLocale`] if `locale` is not declared.
pub fn menu_items_by_locale(
    items: &[MenuItemConfig],
    locale: &str,
    registry: &LocaleRegistry,
) -> Result<Vec<MenuLink>, I18nError> {
    let t = registry.translate_for(locale)?;
    Ok(items
        .iter()
        .map(|item| MenuLink {
            title: t.translate(&item.title_key),
            href: registry.localize_href(&item.href, locale),
        })
        .collect())
}
