//! Markdown heading extraction.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)").expect("invalid heading regex"));

/// ATX heading found in a markdown body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Level, 1 to 6.
    pub depth: u8,
    /// Anchor slug, unique within the document.
    pub slug: String,
    /// Heading text.
    pub text: String,
}

/// Extract ATX headings (`#` to `######`) line by line, in document order.
///
/// Lines inside fenced code blocks are ignored.
pub fn extract_headings(body: &str) -> Vec<Heading> {
    let mut slugger = Slugger::default();
    let mut in_fence = false;
    let mut headings = Vec::new();

    for line in body.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        let Some(caps) = HEADING_PATTERN.captures(line) else {
            continue;
        };
        let text = caps[2].trim_end();
        #[allow(clippy::cast_possible_truncation)]
        let depth = caps[1].len() as u8;
        headings.push(Heading {
            depth,
            slug: slugger.slug(text),
            text: text.to_owned(),
        });
    }

    headings
}

/// Anchor slug generator with per-document deduplication.
///
/// Lowercases, drops punctuation, and joins words with `-`. A repeated slug
/// gets a `-1`, `-2`, ... suffix.
#[derive(Default)]
struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    fn slug(&mut self, text: &str) -> String {
        let base: String = text
            .trim()
            .chars()
            .filter_map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    Some(c.to_lowercase().collect::<String>())
                } else if c.is_whitespace() {
                    Some("-".to_owned())
                } else {
                    None
                }
            })
            .collect();

        let count = self.seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        slug
    }
}
