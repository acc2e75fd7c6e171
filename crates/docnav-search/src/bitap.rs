//! Bitap approximate string matching.
//!
//! Text and pattern are compared as `char` slices so match indices are
//! character positions. Patterns longer than [`MAX_BITS`] characters are
//! split into overlapping chunks searched independently.
//!
//! # Scoring
//!
//! A candidate with `e` errors at position `p` scores
//! `e / pattern_len + |p - location| / distance`. Lower is better; the best
//! score that stays within the threshold wins. Exact occurrences are found
//! first and tighten the threshold before the fuzzy passes start.

use std::collections::HashMap;

use crate::options::SearchOptions;

/// Longest pattern handled in a single pass.
pub(crate) const MAX_BITS: usize = 32;

/// Outcome of matching one pattern against one text.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MatchResult {
    pub is_match: bool,
    /// Score in `[0, 1]`; 0 is a perfect match.
    pub score: f64,
    /// Inclusive `(start, end)` character ranges.
    pub indices: Vec<(usize, usize)>,
}

impl MatchResult {
    pub(crate) fn miss() -> Self {
        Self {
            is_match: false,
            score: 1.0,
            indices: Vec::new(),
        }
    }
}

/// Lowercase `s` one character at a time, keeping character positions.
///
/// Characters whose lowercase form expands keep only its first character.
pub(crate) fn lower_chars(s: &str) -> Vec<char> {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// First occurrence of `pattern` in `text` at or after `from`.
pub(crate) fn find_from(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if pattern.is_empty() || from > text.len() {
        return None;
    }
    text[from..]
        .windows(pattern.len())
        .position(|w| w == pattern)
        .map(|p| p + from)
}

struct Chunk {
    pattern: Vec<char>,
    alphabet: HashMap<char, u64>,
    start_index: usize,
}

impl Chunk {
    fn new(pattern: &[char], start_index: usize) -> Self {
        let len = pattern.len();
        let mut alphabet: HashMap<char, u64> = HashMap::new();
        for (i, &c) in pattern.iter().enumerate() {
            *alphabet.entry(c).or_insert(0) |= 1 << (len - i - 1);
        }
        Self {
            pattern: pattern.to_vec(),
            alphabet,
            start_index,
        }
    }
}

/// Fuzzy matcher for one lowercased pattern.
pub(crate) struct BitapSearcher {
    pattern: Vec<char>,
    chunks: Vec<Chunk>,
    options: SearchOptions,
}

impl BitapSearcher {
    pub(crate) fn new(pattern: &str, options: SearchOptions) -> Self {
        let pattern = lower_chars(pattern);
        let len = pattern.len();
        let mut chunks = Vec::new();

        if len > MAX_BITS {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            let mut i = 0;
            while i < end {
                chunks.push(Chunk::new(&pattern[i..i + MAX_BITS], i));
                i += MAX_BITS;
            }
            if remainder > 0 {
                let start = len - MAX_BITS;
                chunks.push(Chunk::new(&pattern[start..], start));
            }
        } else if len > 0 {
            chunks.push(Chunk::new(&pattern, 0));
        }

        Self {
            pattern,
            chunks,
            options,
        }
    }

    /// Match against lowercased `text`.
    pub(crate) fn search_in(&self, text: &[char]) -> MatchResult {
        if !self.pattern.is_empty() && self.pattern == text {
            return MatchResult {
                is_match: true,
                score: 0.0,
                indices: vec![(0, text.len() - 1)],
            };
        }
        if self.chunks.is_empty() {
            return MatchResult::miss();
        }

        let mut indices = Vec::new();
        let mut total_score = 0.0;
        let mut has_matches = false;

        for chunk in &self.chunks {
            let result = search_chunk(
                text,
                chunk,
                self.options.location + chunk.start_index,
                &self.options,
            );
            total_score += result.score;
            if result.is_match {
                has_matches = true;
                indices.extend(result.indices);
            }
        }

        if !has_matches {
            return MatchResult::miss();
        }

        #[allow(clippy::cast_precision_loss)]
        let score = total_score / self.chunks.len() as f64;
        MatchResult {
            is_match: true,
            score,
            indices,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_score(
    pattern_len: usize,
    errors: usize,
    current: usize,
    expected: usize,
    distance: usize,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    let proximity = current.abs_diff(expected);
    if distance == 0 {
        return if proximity > 0 { 1.0 } else { accuracy };
    }
    accuracy + proximity as f64 / distance as f64
}

fn search_chunk(
    text: &[char],
    chunk: &Chunk,
    location: usize,
    options: &SearchOptions,
) -> MatchResult {
    let pattern = &chunk.pattern;
    let pattern_len = pattern.len();
    let text_len = text.len();
    let expected = location.min(text_len);
    let score_at = |errors: usize, current: usize| {
        compute_score(pattern_len, errors, current, expected, options.distance)
    };

    let mut threshold = options.threshold;
    let mut match_mask = vec![false; text_len];

    let mut from = expected;
    while let Some(index) = find_from(text, pattern, from) {
        threshold = threshold.min(score_at(0, index));
        from = index + pattern_len;
        for marked in &mut match_mask[index..from] {
            *marked = true;
        }
    }

    let mut best_location: Option<usize> = None;
    let mut last_bits: Vec<u64> = Vec::new();
    let mut final_score = 1.0;
    let mut bin_max = pattern_len + text_len;
    let mask = 1u64 << (pattern_len - 1);

    for errors in 0..pattern_len {
        // Widest window around `expected` that can still beat the threshold.
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            if score_at(errors, expected + bin_mid) <= threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = (expected + 1).saturating_sub(bin_mid).max(1);
        let finish = if options.find_all_matches {
            text_len
        } else {
            (expected + bin_mid).min(text_len) + pattern_len
        };

        let mut bits = vec![0u64; finish + 2];
        bits[finish + 1] = (1u64 << errors) - 1;
        let last = |k: usize| last_bits.get(k).copied().unwrap_or(0);

        let mut j = finish;
        while j >= start {
            let current = j - 1;
            let char_match = text
                .get(current)
                .and_then(|c| chunk.alphabet.get(c))
                .copied()
                .unwrap_or(0);
            if let Some(marked) = match_mask.get_mut(current) {
                *marked = char_match != 0;
            }

            bits[j] = ((bits[j + 1] << 1) | 1) & char_match;
            if errors > 0 {
                bits[j] |= ((last(j + 1) | last(j)) << 1) | 1 | last(j + 1);
            }

            if bits[j] & mask != 0 {
                final_score = score_at(errors, current);
                if final_score <= threshold {
                    threshold = final_score;
                    best_location = Some(current);
                    if current <= expected {
                        break;
                    }
                    start = (2 * expected).saturating_sub(current).max(1);
                }
            }
            j -= 1;
        }

        if score_at(errors + 1, expected) > threshold {
            break;
        }
        last_bits = bits;
    }

    let indices = mask_to_indices(&match_mask, options.min_match_char_length);
    if best_location.is_none() || indices.is_empty() {
        return MatchResult {
            is_match: false,
            score: f64::max(0.001, final_score),
            indices: Vec::new(),
        };
    }

    MatchResult {
        is_match: true,
        score: f64::max(0.001, final_score),
        indices,
    }
}

/// Collapse a per-character match mask into inclusive ranges of at least
/// `min_len` characters.
fn mask_to_indices(mask: &[bool], min_len: usize) -> Vec<(usize, usize)> {
    let mut indices = Vec::new();
    let mut start = None;

    for (i, &matched) in mask.iter().enumerate() {
        match (matched, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= min_len {
                    indices.push((s, i - 1));
                }
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start
        && mask.len() - s >= min_len
    {
        indices.push((s, mask.len() - 1));
    }

    indices
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn search(pattern: &str, text: &str) -> MatchResult {
        BitapSearcher::new(pattern, SearchOptions::default()).search_in(&lower_chars(text))
    }

    #[test]
    fn test_exact_full_text_scores_zero() {
        let result = search("Search", "search");

        assert!(result.is_match);
        assert!(result.score.abs() < f64::EPSILON);
        assert_eq!(result.indices, vec![(0, 5)]);
    }

    #[test]
    fn test_one_typo_matches() {
        let result = search("serch", "Search Configuration");

        assert!(result.is_match);
        assert!((result.score - 0.2).abs() < 1e-9, "score {}", result.score);
        assert!(result.indices.contains(&(0, 1)));
    }

    #[test]
    fn test_exact_substring_at_start_scores_floor() {
        let result = search("config", "config files");

        assert!(result.is_match);
        assert!((result.score - 0.001).abs() < 1e-9);
        assert_eq!(result.indices[0], (0, 5));
    }

    #[test]
    fn test_far_occurrence_is_penalized() {
        let near = search("pages", "pages and more");
        let far = search("pages", &format!("{}pages", "x".repeat(30)));

        assert!(near.is_match);
        assert!(far.is_match);
        assert!(near.score < far.score);
    }

    #[test]
    fn test_unrelated_text_misses() {
        let result = search("breadcrumbs", "zzz yyy");

        assert!(!result.is_match);
        assert!((result.score - 1.0).abs() < f64::EPSILON);
        assert!(result.indices.is_empty());
    }

    #[test]
    fn test_empty_pattern_misses() {
        assert!(!search("", "anything").is_match);
    }

    #[test]
    fn test_long_pattern_is_chunked() {
        let pattern = "a".repeat(40);
        let searcher = BitapSearcher::new(&pattern, SearchOptions::default());

        assert_eq!(searcher.chunks.len(), 2);
        assert_eq!(searcher.chunks[1].start_index, 8);

        let text = format!("{pattern} tail");
        assert!(searcher.search_in(&lower_chars(&text)).is_match);
    }

    #[test]
    fn test_mask_to_indices_respects_min_length() {
        let mask = [true, false, true, true, false, true, true, true];

        assert_eq!(mask_to_indices(&mask, 2), vec![(2, 3), (5, 7)]);
        assert_eq!(mask_to_indices(&mask, 1), vec![(0, 0), (2, 3), (5, 7)]);
    }

    #[test]
    fn test_find_from() {
        let text = lower_chars("abcabc");
        let pattern = lower_chars("bc");

        assert_eq!(find_from(&text, &pattern, 0), Some(1));
        assert_eq!(find_from(&text, &pattern, 2), Some(4));
        assert_eq!(find_from(&text, &pattern, 5), None);
        assert_eq!(find_from(&text, &pattern, 10), None);
    }

    #[test]
    fn test_lower_chars_keeps_length() {
        let s = "İSTANBUL Straße";
        assert_eq!(lower_chars(s).len(), s.chars().count());
    }
}
