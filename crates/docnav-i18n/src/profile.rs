//! Per-locale display profile.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;

use crate::I18nError;

/// Text direction of a locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
    Auto,
}

impl FromStr for TextDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            "auto" => Ok(Self::Auto),
            other => Err(format!("direction must be ltr, rtl or auto, got '{other}'")),
        }
    }
}

/// Static configuration of one locale.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleProfile {
    /// Display name (e.g. "English", "中文").
    pub name: String,
    /// Message table.
    #[serde(skip)]
    pub messages: HashMap<String, String>,
    /// BCP-47 tag for date and number formatting.
    pub lang_tag: String,
    /// Text direction.
    pub direction: TextDirection,
    /// Google Fonts family name (e.g. "IBM+Plex+Mono").
    pub google_font_name: String,
    /// Whether this locale is the default.
    pub default: bool,
}

impl LocaleProfile {
    /// Build a profile from a config declaration, layering its messages over
    /// `base`.
    pub(crate) fn from_config(
        config: &docnav_config::LocaleConfig,
        base: HashMap<String, String>,
    ) -> Result<Self, I18nError> {
        let direction = config
            .direction
            .parse()
            .map_err(|reason| I18nError::InvalidLocale {
                key: config.key.clone(),
                reason,
            })?;

        let mut messages = base;
        messages.extend(
            config
                .messages
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        Ok(Self {
            name: config.name.clone(),
            messages,
            lang_tag: config.lang_tag.clone(),
            direction,
            google_font_name: config.google_font_name.clone(),
            default: config.default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("ltr".parse::<TextDirection>(), Ok(TextDirection::Ltr));
        assert_eq!("rtl".parse::<TextDirection>(), Ok(TextDirection::Rtl));
        assert_eq!("auto".parse::<TextDirection>(), Ok(TextDirection::Auto));
        assert!("sideways".parse::<TextDirection>().is_err());
    }

    #[test]
    fn test_profile_serialization_skips_messages() {
        let profile = LocaleProfile {
            name: "English".to_owned(),
            messages: HashMap::from([("nav.home".to_owned(), "Home".to_owned())]),
            lang_tag: "en-US".to_owned(),
            direction: TextDirection::Ltr,
            google_font_name: "IBM+Plex+Mono".to_owned(),
            default: true,
        };

        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["name"], "English");
        assert_eq!(json["langTag"], "en-US");
        assert_eq!(json["direction"], "ltr");
        assert_eq!(json["googleFontName"], "IBM+Plex+Mono");
        assert!(json.get("messages").is_none());
    }
}
