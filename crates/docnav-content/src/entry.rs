//! Content entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One document of a content collection.
///
/// # Path Convention
///
/// Both `id` and `slug` are slash-delimited and locale-prefixed as loaded
/// from a store:
/// - `"en/getting-started"` - top-level page
/// - `"en/guides/pages"` - nested page
/// - `"zh/guides/pages"` - same page in another locale
///
/// [`filter_entries`](crate::filter_entries) strips the prefix.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContentEntry {
    /// Unique identifier (e.g., "en/guides/pages").
    pub id: String,
    /// URL path (e.g., "en/guides/pages").
    pub slug: String,
    /// Parsed front matter.
    pub data: FrontMatter,
    /// Raw markdown after the front matter block.
    pub body: String,
}

impl ContentEntry {
    /// Create an entry whose slug equals its id.
    #[must_use]
    pub fn new(id: impl Into<String>, data: FrontMatter, body: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            slug: id.clone(),
            id,
            data,
            body: body.into(),
        }
    }

    /// Entry title, if the front matter has one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.data.title.as_deref()
    }

    /// Title to show for the entry: its own title, or the capitalized last
    /// slug segment when it has none.
    #[must_use]
    pub fn display_title(&self) -> String {
        match self.data.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_owned(),
            _ => capitalize_first_letter(self.slug_leaf()),
        }
    }

    /// Last segment of the slug (e.g., "pages" for "en/guides/pages").
    #[must_use]
    pub fn slug_leaf(&self) -> &str {
        self.slug
            .rsplit('/')
            .find(|s| !s.is_empty())
            .unwrap_or_default()
    }
}

/// Capitalize the first character of `s`.
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Front matter of a content entry.
///
/// Keys are camelCase in documents (`pubDatetime`); snake_case is accepted
/// too.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    /// Page title.
    pub title: Option<String>,
    /// Short summary.
    pub description: Option<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Work in progress.
    pub draft: bool,
    /// Publication time.
    #[serde(alias = "pub_datetime")]
    pub pub_datetime: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(alias = "mod_datetime")]
    pub mod_datetime: Option<DateTime<Utc>>,
}

impl FrontMatter {
    /// Front matter with only a title set.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_sets_slug_to_id() {
        let entry = ContentEntry::new("en/guides/pages", FrontMatter::titled("Pages"), "body");

        assert_eq!(entry.slug, "en/guides/pages");
        assert_eq!(entry.title(), Some("Pages"));
    }

    #[test]
    fn test_slug_leaf() {
        let entry = ContentEntry::new("en/guides/table-of-contents", FrontMatter::default(), "");
        assert_eq!(entry.slug_leaf(), "table-of-contents");

        let entry = ContentEntry::new("", FrontMatter::default(), "");
        assert_eq!(entry.slug_leaf(), "");
    }

    #[test]
    fn test_display_title_falls_back_to_slug_leaf() {
        let titled = ContentEntry::new("en/guides/pages", FrontMatter::titled("Pages"), "");
        let untitled = ContentEntry::new("en/guides/table-of-contents", FrontMatter::default(), "");

        assert_eq!(titled.display_title(), "Pages");
        assert_eq!(untitled.display_title(), "Table-of-contents");
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("guides"), "Guides");
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("éclair"), "Éclair");
        assert_eq!(capitalize_first_letter("指南"), "指南");
    }

    #[test]
    fn test_front_matter_defaults() {
        let fm: FrontMatter = serde_yaml::from_str("title: Intro").unwrap();

        assert_eq!(fm.title.as_deref(), Some("Intro"));
        assert!(fm.description.is_none());
        assert!(fm.tags.is_empty());
        assert!(!fm.draft);
        assert!(fm.pub_datetime.is_none());
    }

    #[test]
    fn test_front_matter_camel_and_snake_datetime() {
        let camel: FrontMatter =
            serde_yaml::from_str("pubDatetime: 2024-03-01T10:00:00Z").unwrap();
        let snake: FrontMatter =
            serde_yaml::from_str("pub_datetime: 2024-03-01T10:00:00Z").unwrap();

        assert!(camel.pub_datetime.is_some());
        assert_eq!(camel.pub_datetime, snake.pub_datetime);
    }

    #[test]
    fn test_front_matter_serializes_camel_case() {
        let fm = FrontMatter {
            draft: true,
            ..FrontMatter::titled("Intro")
        };

        let json = serde_json::to_value(&fm).unwrap();

        assert_eq!(json["title"], "Intro");
        assert_eq!(json["draft"], true);
        assert!(json.get("pubDatetime").is_some());
    }
}
