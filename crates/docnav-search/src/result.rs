//! Search results.

use docnav_content::ContentEntry;
use serde::Serialize;

use crate::fields::Field;
use crate::snippet::Snippet;

/// Matched ranges of one field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldMatch<'a> {
    /// Field the ranges refer to.
    pub key: Field,
    /// Raw field value.
    pub value: &'a str,
    /// Inclusive `(start, end)` character ranges.
    pub indices: Vec<(usize, usize)>,
}

/// One matching entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    /// Matched entry.
    pub item: &'a ContentEntry,
    /// Position of the entry in the indexed set.
    pub ref_index: usize,
    /// Relevance; lower is better, 0 is a perfect match.
    pub score: f64,
    /// Fields with match ranges, in field order.
    pub matches: Vec<FieldMatch<'a>>,
}

impl SearchResult<'_> {
    /// Snippet around the first range of the first match.
    #[must_use]
    pub fn snippet(&self, context: usize) -> Option<Snippet> {
        let first = self.matches.first()?;
        let range = *first.indices.first()?;
        Snippet::around(first.value, range, context)
    }
}

/// Display-ready search result.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Entry title, or its capitalized last slug segment.
    pub title: String,
    /// Entry slug.
    pub slug: String,
    /// Link target (`/{slug}`).
    pub href: String,
    /// Relevance; lower is better.
    pub score: f64,
    /// Position of the entry in the indexed set.
    pub ref_index: usize,
    /// Highlighted context, when match ranges exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<Snippet>,
}

impl SearchHit {
    /// Convert a result, building its snippet with `context` characters.
    #[must_use]
    pub fn from_result(result: &SearchResult<'_>, context: usize) -> Self {
        Self {
            title: result.item.display_title(),
            slug: result.item.slug.clone(),
            href: format!("/{}", result.item.slug),
            score: result.score,
            ref_index: result.ref_index,
            snippet: result.snippet(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use docnav_content::FrontMatter;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hit_uses_display_title_and_slug_link() {
        let entry = ContentEntry::new("zh/guides/table-of-contents", FrontMatter::default(), "");
        let result = SearchResult {
            item: &entry,
            ref_index: 3,
            score: 0.25,
            matches: vec![FieldMatch {
                key: Field::Body,
                value: "table of contents",
                indices: vec![(0, 4)],
            }],
        };

        let hit = SearchHit::from_result(&result, 40);

        assert_eq!(hit.title, "Table-of-contents");
        assert_eq!(hit.href, "/zh/guides/table-of-contents");
        assert_eq!(hit.ref_index, 3);
        assert_eq!(hit.snippet.unwrap().highlight, "table");
    }

    #[test]
    fn test_no_matches_means_no_snippet() {
        let entry = ContentEntry::new("en/a", FrontMatter::titled("A"), "");
        let result = SearchResult {
            item: &entry,
            ref_index: 0,
            score: 0.5,
            matches: Vec::new(),
        };

        let hit = SearchHit::from_result(&result, 40);

        assert_eq!(hit.snippet, None);
        let json = serde_json::to_value(&hit).unwrap();
        assert!(json.get("snippet").is_none());
    }
}
