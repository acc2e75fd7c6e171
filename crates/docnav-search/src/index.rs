//! Fuzzy search index over a content snapshot.

use std::cmp::Ordering;

use docnav_content::{ContentEntry, ContentSnapshot};

use crate::bitap::lower_chars;
use crate::extended::ExtendedQuery;
use crate::fields::{Field, field_norm};
use crate::options::SearchOptions;
use crate::result::{FieldMatch, SearchHit, SearchResult};

struct IndexedField {
    field: Field,
    value: String,
    lowered: Vec<char>,
    norm: f64,
}

/// Searchable form of an entry set.
///
/// Built once per snapshot; queries never modify it, so one index can serve
/// any number of concurrent readers.
pub struct SearchIndex {
    entries: ContentSnapshot,
    records: Vec<Vec<IndexedField>>,
    options: SearchOptions,
}

impl SearchIndex {
    /// Index every non-blank field of every entry in `entries`.
    #[must_use]
    pub fn new(entries: ContentSnapshot, options: SearchOptions) -> Self {
        let records = entries.iter().map(index_entry).collect();
        Self {
            entries,
            records,
            options,
        }
    }

    /// The indexed entry set.
    #[must_use]
    pub fn entries(&self) -> &ContentSnapshot {
        &self.entries
    }

    /// Matcher options the index was built with.
    #[must_use]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run `query` and return matching entries, best first.
    ///
    /// Each field is matched independently; an entry's score is the product
    /// of `field_score ^ (weight * norm)` over its matching fields. Ties keep
    /// index order. A blank query returns nothing.
    #[must_use]
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<SearchResult<'_>> {
        let parsed = ExtendedQuery::parse(query, self.options);
        if parsed.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<SearchResult<'_>> = self
            .entries
            .iter()
            .zip(&self.records)
            .enumerate()
            .filter_map(|(ref_index, (item, fields))| {
                score_entry(&parsed, item, ref_index, fields)
            })
            .collect();

        results.sort_by(|a, b| match a.score.total_cmp(&b.score) {
            Ordering::Equal => a.ref_index.cmp(&b.ref_index),
            other => other,
        });
        if let Some(limit) = limit {
            results.truncate(limit);
        }
        results
    }

    /// Run `query` and convert the results for display.
    #[must_use]
    pub fn hits(&self, query: &str, limit: Option<usize>) -> Vec<SearchHit> {
        self.search(query, limit)
            .iter()
            .map(|result| SearchHit::from_result(result, self.options.context_length))
            .collect()
    }
}

fn index_entry(entry: &ContentEntry) -> Vec<IndexedField> {
    Field::ALL
        .iter()
        .filter_map(|&field| {
            let value = field.value(entry)?;
            Some(IndexedField {
                field,
                lowered: lower_chars(&value),
                norm: field_norm(&value),
                value,
            })
        })
        .collect()
}

fn score_entry<'a>(
    query: &ExtendedQuery,
    item: &'a ContentEntry,
    ref_index: usize,
    fields: &'a [IndexedField],
) -> Option<SearchResult<'a>> {
    let mut score = 1.0;
    let mut matched = false;
    let mut matches = Vec::new();

    for indexed in fields {
        let result = query.search_in(&indexed.lowered);
        if !result.is_match {
            continue;
        }
        matched = true;

        let field_score = if result.score <= 0.0 {
            f64::EPSILON
        } else {
            result.score
        };
        score *= field_score.powf(indexed.field.normalized_weight() * indexed.norm);

        if !result.indices.is_empty() {
            matches.push(FieldMatch {
                key: indexed.field,
                value: &indexed.value,
                indices: result.indices,
            });
        }
    }

    matched.then_some(SearchResult {
        item,
        ref_index,
        score,
        matches,
    })
}
