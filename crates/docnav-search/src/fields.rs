//! Searchable fields of a content entry.

use std::fmt;
use std::sync::LazyLock;

use docnav_content::ContentEntry;
use regex::Regex;
use serde::Serialize;

static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)").expect("invalid header regex"));

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^ ]+").expect("invalid word regex"));

/// Field of an entry that queries are matched against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Raw markdown body.
    Body,
    /// Front matter title.
    Title,
    /// Front matter description.
    Description,
    /// Tags joined by a space.
    Tags,
    /// Heading text of the body joined by a space.
    Headers,
}

impl Field {
    /// All fields, in match reporting order.
    pub const ALL: [Field; 5] = [
        Field::Body,
        Field::Title,
        Field::Description,
        Field::Tags,
        Field::Headers,
    ];

    /// Key the field is reported under.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Title => "title",
            Self::Description => "description",
            Self::Tags => "tags",
            Self::Headers => "headers",
        }
    }

    /// Relative weight before normalization.
    #[must_use]
    pub fn weight(self) -> f64 {
        match self {
            Self::Body => 1.0,
            Self::Title | Self::Headers => 2.0,
            Self::Description => 1.75,
            Self::Tags => 1.5,
        }
    }

    /// Weight divided by the sum of all weights.
    #[must_use]
    pub fn normalized_weight(self) -> f64 {
        let total: f64 = Self::ALL.iter().map(|f| f.weight()).sum();
        self.weight() / total
    }

    /// Value of this field for `entry`; `None` when missing or blank.
    pub(crate) fn value(self, entry: &ContentEntry) -> Option<String> {
        let value = match self {
            Self::Body => entry.body.clone(),
            Self::Title => entry.data.title.clone()?,
            Self::Description => entry.data.description.clone()?,
            Self::Tags => entry.data.tags.join(" "),
            Self::Headers => header_text(&entry.body).join(" "),
        };
        (!value.trim().is_empty()).then_some(value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Text of every line of `body` that looks like an ATX heading.
fn header_text(body: &str) -> Vec<&str> {
    body.split('\n')
        .filter_map(|line| HEADER_LINE.captures(line))
        .filter_map(|caps| caps.get(2))
        .map(|m| m.as_str())
        .collect()
}

/// Length norm of a field value: `1 / sqrt(words)` to three decimals.
pub(crate) fn field_norm(value: &str) -> f64 {
    let words = WORD.find_iter(value).count().max(1);
    #[allow(clippy::cast_precision_loss)]
    let norm = 1.0 / (words as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}
