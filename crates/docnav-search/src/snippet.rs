//! Highlighted context around a match.

use serde::Serialize;

const ELLIPSIS: &str = "...";

/// Excerpt of a field value split around the highlighted range.
///
/// Concatenating the five parts gives the rendered snippet; without
/// `prefix` and `suffix` it is a substring of the field value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// `"..."` when the excerpt does not start at the beginning of the value.
    pub prefix: String,
    /// Context before the highlight.
    pub before: String,
    /// Matched text.
    pub highlight: String,
    /// Context after the highlight.
    pub after: String,
    /// `"..."` when the excerpt does not reach the end of the value.
    pub suffix: String,
}

impl Snippet {
    /// Build the snippet for the inclusive character range `start..=end` of
    /// `value`, with up to `context` characters on each side.
    ///
    /// Returns `None` for an empty value or a range that starts past it.
    #[must_use]
    pub fn around(value: &str, (start, end): (usize, usize), context: usize) -> Option<Self> {
        let chars: Vec<char> = value.chars().collect();
        if start >= chars.len() {
            return None;
        }
        let end = end.clamp(start, chars.len() - 1);

        let window_start = start.saturating_sub(context);
        let window_end = (end + context + 1).min(chars.len());
        let text = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();

        Some(Self {
            prefix: if window_start > 0 { ELLIPSIS } else { "" }.to_owned(),
            before: text(window_start..start),
            highlight: text(start..end + 1),
            after: text(end + 1..window_end),
            suffix: if window_end < chars.len() { ELLIPSIS } else { "" }.to_owned(),
        })
    }

    /// Snippet text without ellipses.
    #[must_use]
    pub fn excerpt(&self) -> String {
        [self.before.as_str(), &self.highlight, &self.after].concat()
    }
}
