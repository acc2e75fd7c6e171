//! Declared locales and locale-aware paths.
//!
//! The registry is built once and never changes afterwards. Declaration
//! order is preserved: it decides both the order of [`LocaleRegistry::list_supported`]
//! and the default locale when no profile is flagged.

use std::collections::{BTreeMap, HashMap};

use docnav_config::LocaleConfig;

use crate::messages;
use crate::profile::{LocaleProfile, TextDirection};
use crate::translator::Translator;
use crate::I18nError;

/// Immutable set of declared locales.
#[derive(Debug)]
pub struct LocaleRegistry {
    keys: Vec<String>,
    profiles: HashMap<String, LocaleProfile>,
    default_locale: String,
}

impl LocaleRegistry {
    /// Build a registry from profiles in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::NoLocales`] for an empty list and
    /// [`I18nError::InvalidLocale`] for a key that is empty, not lowercase,
    /// contains `/`, is declared twice, or when more than one profile is
    /// flagged default.
    pub fn new(profiles: Vec<(String, LocaleProfile)>) -> Result<Self, I18nError> {
        if profiles.is_empty() {
            return Err(I18nError::NoLocales);
        }

        let mut keys = Vec::with_capacity(profiles.len());
        let mut by_key = HashMap::with_capacity(profiles.len());
        let mut flagged: Option<String> = None;

        for (key, profile) in profiles {
            validate_key(&key)?;
            if by_key.contains_key(&key) {
                return Err(invalid(&key, "declared more than once"));
            }
            if profile.default {
                if let Some(previous) = &flagged {
                    return Err(invalid(
                        &key,
                        &format!("'{previous}' is already the default locale"),
                    ));
                }
                flagged = Some(key.clone());
            }
            keys.push(key.clone());
            by_key.insert(key, profile);
        }

        let default_locale = flagged.unwrap_or_else(|| keys[0].clone());

        Ok(Self {
            keys,
            profiles: by_key,
            default_locale,
        })
    }

    /// Registry with the locales shipped with the crate: `zh`, then `en`
    /// (default).
    #[must_use]
    pub fn builtin() -> Self {
        let zh = LocaleProfile {
            name: "中文".to_owned(),
            messages: messages::builtin("zh").unwrap_or_default(),
            lang_tag: "zh-CN".to_owned(),
            direction: TextDirection::Ltr,
            google_font_name: "Noto+Sans+SC".to_owned(),
            default: false,
        };
        let en = LocaleProfile {
            name: "English".to_owned(),
            messages: messages::builtin("en").unwrap_or_default(),
            lang_tag: "en-US".to_owned(),
            direction: TextDirection::Ltr,
            google_font_name: "IBM+Plex+Mono".to_owned(),
            default: true,
        };

        Self {
            keys: vec!["zh".to_owned(), "en".to_owned()],
            profiles: HashMap::from([("zh".to_owned(), zh), ("en".to_owned(), en)]),
            default_locale: "en".to_owned(),
        }
    }

    /// Build a registry from `[[i18n.locales]]` declarations.
    ///
    /// An empty list yields [`LocaleRegistry::builtin`]. Declared messages are
    /// layered over the built-in table of the same key, when there is one.
    ///
    /// # Errors
    ///
    /// Same as [`LocaleRegistry::new`], plus an invalid `direction`.
    pub fn from_config(locales: &[LocaleConfig]) -> Result<Self, I18nError> {
        if locales.is_empty() {
            return Ok(Self::builtin());
        }

        let profiles = locales
            .iter()
            .map(|config| {
                let base = messages::builtin(&config.key).unwrap_or_default();
                LocaleProfile::from_config(config, base).map(|p| (config.key.clone(), p))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let registry = Self::new(profiles)?;
        tracing::debug!(
            locales = ?registry.keys,
            default = %registry.default_locale,
            "Locale registry built from config"
        );
        Ok(registry)
    }

    /// Profile for a locale key.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnsupportedLocale`] if `key` is not declared.
    pub fn resolve(&self, key: &str) -> Result<&LocaleProfile, I18nError> {
        self.profiles
            .get(key)
            .ok_or_else(|| I18nError::UnsupportedLocale(key.to_owned()))
    }

    /// Declared locale keys, in declaration order.
    #[must_use]
    pub fn list_supported(&self) -> &[String] {
        &self.keys
    }

    /// Default locale key.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Whether `key` is the default locale.
    #[must_use]
    pub fn is_default(&self, key: &str) -> bool {
        self.default_locale == key
    }

    /// Whether `key` is a declared locale.
    #[must_use]
    pub fn is_locale_key(&self, key: &str) -> bool {
        self.profiles.contains_key(key)
    }

    /// Map of locale key to BCP-47 language tag.
    #[must_use]
    pub fn lang_tags(&self) -> BTreeMap<&str, &str> {
        self.keys
            .iter()
            .filter_map(|k| {
                self.profiles
                    .get(k)
                    .map(|p| (k.as_str(), p.lang_tag.as_str()))
            })
            .collect()
    }

    /// Translator for a locale.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnsupportedLocale`] if `locale` is not declared.
    pub fn translate_for<'a>(&'a self, locale: &str) -> Result<Translator<'a>, I18nError> {
        let (key, profile) = self
            .profiles
            .get_key_value(locale)
            .ok_or_else(|| I18nError::UnsupportedLocale(locale.to_owned()))?;
        Ok(Translator::new(key, &profile.messages))
    }

    /// Strip a leading locale segment from a path.
    ///
    /// The result always starts with `/` and has no empty segments:
    /// - `"/zh/guides/pages"` -> `"/guides/pages"`
    /// - `"en/guides"` -> `"/guides"`
    /// - `"/guides/"` -> `"/guides"`
    /// - `"/zh"` -> `"/"`
    ///
    /// A first segment that is not a declared locale is kept.
    #[must_use]
    pub fn slug_without_locale(&self, path: &str) -> String {
        let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();
        if segments.peek().is_some_and(|first| self.is_locale_key(first)) {
            segments.next();
        }

        let mut result = String::new();
        for segment in segments {
            result.push('/');
            result.push_str(segment);
        }
        if result.is_empty() {
            result.push('/');
        }
        result
    }

    /// Whether `pathname` and `href` point at the same page, ignoring locale
    /// prefixes.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnsupportedLocale`] if `locale` is not declared.
    pub fn match_path(&self, pathname: &str, href: &str, locale: &str) -> Result<bool, I18nError> {
        if !self.is_locale_key(locale) {
            return Err(I18nError::UnsupportedLocale(locale.to_owned()));
        }
        Ok(self.slug_without_locale(pathname) == self.slug_without_locale(href))
    }

    /// Qualify a default-locale href for `locale`.
    ///
    /// The default locale keeps `href` as is; other locales get a `/<locale>`
    /// prefix.
    #[must_use]
    pub fn localize_href(&self, href: &str, locale: &str) -> String {
        if self.is_default(locale) {
            href.to_owned()
        } else {
            format!("/{locale}{href}")
        }
    }
}

fn invalid(key: &str, reason: &str) -> I18nError {
    I18nError::InvalidLocale {
        key: key.to_owned(),
        reason: reason.to_owned(),
    }
}

fn validate_key(key: &str) -> Result<(), I18nError> {
    if key.is_empty() {
        return Err(invalid(key, "key cannot be empty"));
    }
    if key.contains('/') {
        return Err(invalid(key, "key cannot contain '/'"));
    }
    if key.chars().any(char::is_uppercase) {
        return Err(invalid(key, "key must be lowercase"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(LocaleRegistry: Send, Sync);

    fn profile(name: &str, default: bool) -> LocaleProfile {
        LocaleProfile {
            name: name.to_owned(),
            messages: HashMap::new(),
            lang_tag: format!("{name}-XX"),
            direction: TextDirection::Ltr,
            google_font_name: String::new(),
            default,
        }
    }

    fn locale_config(key: &str, default: bool) -> LocaleConfig {
        LocaleConfig {
            key: key.to_owned(),
            name: key.to_uppercase(),
            lang_tag: format!("{key}-XX"),
            direction: "ltr".to_owned(),
            google_font_name: String::new(),
            default,
            messages: HashMap::new(),
        }
    }

    #[test]
    fn test_builtin_declaration_order_and_default() {
        let registry = LocaleRegistry::builtin();

        assert_eq!(registry.list_supported(), &["zh".to_owned(), "en".to_owned()]);
        assert_eq!(registry.default_locale(), "en");
        assert!(registry.is_default("en"));
        assert!(!registry.is_default("zh"));
    }

    #[test]
    fn test_resolve_builtin_profile() {
        let registry = LocaleRegistry::builtin();

        let zh = registry.resolve("zh").unwrap();

        assert_eq!(zh.name, "中文");
        assert_eq!(zh.lang_tag, "zh-CN");
        assert_eq!(zh.google_font_name, "Noto+Sans+SC");
        assert!(!zh.default);
    }

    #[test]
    fn test_resolve_unsupported_locale() {
        let registry = LocaleRegistry::builtin();

        let err = registry.resolve("fr").unwrap_err();

        assert_eq!(err, I18nError::UnsupportedLocale("fr".to_owned()));
    }

    #[test]
    fn test_default_falls_back_to_first_declared() {
        let registry = LocaleRegistry::new(vec![
            ("de".to_owned(), profile("de", false)),
            ("en".to_owned(), profile("en", false)),
        ])
        .unwrap();

        assert_eq!(registry.default_locale(), "de");
    }

    #[test]
    fn test_flagged_default_wins_over_declaration_order() {
        let registry = LocaleRegistry::new(vec![
            ("de".to_owned(), profile("de", false)),
            ("en".to_owned(), profile("en", true)),
        ])
        .unwrap();

        assert_eq!(registry.default_locale(), "en");
    }

    #[test]
    fn test_new_rejects_two_defaults() {
        let err = LocaleRegistry::new(vec![
            ("de".to_owned(), profile("de", true)),
            ("en".to_owned(), profile("en", true)),
        ])
        .unwrap_err();

        assert!(matches!(err, I18nError::InvalidLocale { ref key, .. } if key == "en"));
    }

    #[test]
    fn test_new_rejects_uppercase_and_duplicates() {
        let upper = LocaleRegistry::new(vec![("EN".to_owned(), profile("en", false))]);
        assert!(matches!(upper, Err(I18nError::InvalidLocale { .. })));

        let dup = LocaleRegistry::new(vec![
            ("en".to_owned(), profile("en", false)),
            ("en".to_owned(), profile("en", false)),
        ]);
        assert!(matches!(dup, Err(I18nError::InvalidLocale { .. })));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(LocaleRegistry::new(Vec::new()).unwrap_err(), I18nError::NoLocales);
    }

    #[test]
    fn test_from_config_empty_uses_builtin() {
        let registry = LocaleRegistry::from_config(&[]).unwrap();

        assert_eq!(registry.list_supported(), &["zh".to_owned(), "en".to_owned()]);
    }

    #[test]
    fn test_from_config_layers_messages_over_builtin() {
        let mut en = locale_config("en", true);
        en.messages
            .insert("paths.guides".to_owned(), "Guides".to_owned());
        en.messages
            .insert("nav.home".to_owned(), "Start".to_owned());

        let registry = LocaleRegistry::from_config(&[en, locale_config("fr", false)]).unwrap();
        let t = registry.translate_for("en").unwrap();

        assert_eq!(t.translate("paths.guides"), "Guides");
        assert_eq!(t.translate("nav.home"), "Start");
        assert_eq!(t.translate("nav.about"), "About");

        let fr = registry.translate_for("fr").unwrap();
        assert_eq!(fr.translate("nav.home"), "nav.home");
    }

    #[test]
    fn test_from_config_invalid_direction() {
        let mut en = locale_config("en", true);
        en.direction = "up".to_owned();

        let err = LocaleRegistry::from_config(&[en]).unwrap_err();

        assert!(matches!(err, I18nError::InvalidLocale { ref reason, .. } if reason.contains("up")));
    }

    #[test]
    fn test_lang_tags() {
        let registry = LocaleRegistry::builtin();

        let tags = registry.lang_tags();

        assert_eq!(tags.get("en"), Some(&"en-US"));
        assert_eq!(tags.get("zh"), Some(&"zh-CN"));
    }

    #[test]
    fn test_translate_for_unsupported() {
        let registry = LocaleRegistry::builtin();

        assert!(matches!(
            registry.translate_for("fr"),
            Err(I18nError::UnsupportedLocale(_))
        ));
    }

    #[test]
    fn test_slug_without_locale() {
        let registry = LocaleRegistry::builtin();

        assert_eq!(registry.slug_without_locale("/zh/guides/pages"), "/guides/pages");
        assert_eq!(registry.slug_without_locale("en/guides"), "/guides");
        assert_eq!(registry.slug_without_locale("/guides/"), "/guides");
        assert_eq!(registry.slug_without_locale("/zh"), "/");
        assert_eq!(registry.slug_without_locale(""), "/");
        assert_eq!(registry.slug_without_locale("/fr/guides"), "/fr/guides");
    }

    #[test]
    fn test_match_path_ignores_locale_prefix() {
        let registry = LocaleRegistry::builtin();

        assert!(registry.match_path("/zh/guides/pages", "/guides/pages", "zh").unwrap());
        assert!(!registry.match_path("/guides/pages", "/guides", "en").unwrap());
    }

    #[test]
    fn test_match_path_unsupported_locale() {
        let registry = LocaleRegistry::builtin();

        let err = registry.match_path("/guides", "/guides", "fr").unwrap_err();

        assert_eq!(err, I18nError::UnsupportedLocale("fr".to_owned()));
    }

    #[test]
    fn test_localize_href() {
        let registry = LocaleRegistry::builtin();

        assert_eq!(registry.localize_href("/about", "en"), "/about");
        assert_eq!(registry.localize_href("/about", "zh"), "/zh/about");
    }
}
