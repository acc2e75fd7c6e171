//! Locale filtering of content entries.

use crate::entry::ContentEntry;

/// Keep entries of `locale` and strip the locale prefix.
///
/// An entry belongs to `locale` when its id starts with `"{locale}/"`. The
/// prefix is removed from the id always, and from the slug only for the
/// default locale, whose pages are served without a locale segment.
///
/// Input order is preserved and the inputs are not modified.
pub fn filter_entries(
    entries: &[ContentEntry],
    locale: &str,
    default_locale: &str,
) -> Vec<ContentEntry> {
    let prefix = format!("{locale}/");
    let is_default = locale == default_locale;

    entries
        .iter()
        .filter_map(|entry| {
            let id = entry.id.strip_prefix(&prefix)?;
            let slug = if is_default {
                entry.slug.strip_prefix(&prefix).unwrap_or(&entry.slug)
            } else {
                &entry.slug
            };
            Some(ContentEntry {
                id: id.to_owned(),
                slug: slug.to_owned(),
                data: entry.data.clone(),
                body: entry.body.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entry::FrontMatter;

    fn entry(id: &str) -> ContentEntry {
        ContentEntry::new(id, FrontMatter::titled(id), "")
    }

    fn sample() -> Vec<ContentEntry> {
        vec![
            entry("en/guides/pages"),
            entry("zh/guides/pages"),
            entry("en/getting-started"),
            entry("english/notes"),
        ]
    }

    #[test]
    fn test_filter_default_locale_strips_id_and_slug() {
        let filtered = filter_entries(&sample(), "en", "en");

        let pairs: Vec<_> = filtered
            .iter()
            .map(|e| (e.id.as_str(), e.slug.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("guides/pages", "guides/pages"),
                ("getting-started", "getting-started"),
            ]
        );
    }

    #[test]
    fn test_filter_non_default_locale_keeps_slug_prefix() {
        let filtered = filter_entries(&sample(), "zh", "en");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "guides/pages");
        assert_eq!(filtered[0].slug, "zh/guides/pages");
    }

    #[test]
    fn test_filter_requires_slash_after_locale() {
        let filtered = filter_entries(&[entry("english/notes"), entry("en")], "en", "en");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_leaves_input_untouched() {
        let entries = sample();
        let before = entries.clone();

        let _ = filter_entries(&entries, "en", "en");

        assert_eq!(entries, before);
    }

    #[test]
    fn test_filter_unknown_locale_is_empty() {
        assert!(filter_entries(&sample(), "fr", "en").is_empty());
    }

    #[test]
    fn test_filter_keeps_front_matter_and_body() {
        let mut source = entry("en/intro");
        source.body = "# Intro".to_owned();
        source.data.tags = vec!["start".to_owned()];

        let filtered = filter_entries(&[source], "en", "en");

        assert_eq!(filtered[0].body, "# Intro");
        assert_eq!(filtered[0].data.tags, vec!["start".to_owned()]);
    }
}
