//! Extended query syntax.
//!
//! A query is a list of OR-groups separated by `|`. Each group is a list of
//! space-separated tokens that must all match the same field value:
//!
//! | Token  | Matches when the value              |
//! |--------|-------------------------------------|
//! | `=x`   | equals `x`                          |
//! | `'x`   | contains `x`                        |
//! | `^x`   | starts with `x`                     |
//! | `!^x`  | does not start with `x`             |
//! | `!x$`  | does not end with `x`               |
//! | `x$`   | ends with `x`                       |
//! | `!x`   | does not contain `x`                |
//! | `x`    | fuzzily contains `x`                |
//!
//! Every operand may be double-quoted to include spaces (`="getting started"`).

use std::sync::LazyLock;

use regex::Regex;

use crate::bitap::{BitapSearcher, MatchResult, find_from, lower_chars};
use crate::options::SearchOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenKind {
    Exact,
    Include,
    Prefix,
    InversePrefix,
    InverseSuffix,
    Suffix,
    InverseExact,
    Fuzzy,
}

struct TokenForm {
    kind: TokenKind,
    quoted: Regex,
    bare: Regex,
}

/// Token forms in precedence order.
static TOKEN_FORMS: LazyLock<Vec<TokenForm>> = LazyLock::new(|| {
    let form = |kind, quoted: &str, bare: &str| TokenForm {
        kind,
        quoted: Regex::new(quoted).expect("invalid quoted token regex"),
        bare: Regex::new(bare).expect("invalid token regex"),
    };
    vec![
        form(TokenKind::Exact, r#"^="(.*)"$"#, r"^=(.*)$"),
        form(TokenKind::Include, r#"^'"(.*)"$"#, r"^'(.*)$"),
        form(TokenKind::Prefix, r#"^\^"(.*)"$"#, r"^\^(.*)$"),
        form(TokenKind::InversePrefix, r#"^!\^"(.*)"$"#, r"^!\^(.*)$"),
        form(TokenKind::InverseSuffix, r#"^!"(.*)"\$$"#, r"^!(.*)\$$"),
        form(TokenKind::Suffix, r#"^"(.*)"\$$"#, r"^(.*)\$$"),
        form(TokenKind::InverseExact, r#"^!"(.*)"$"#, r"^!(.*)$"),
        form(TokenKind::Fuzzy, r#"^"(.*)"$"#, r"^(.*)$"),
    ]
});

fn operand<'a>(re: &Regex, token: &'a str) -> Option<&'a str> {
    re.captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

/// Classify a token. Quoted forms take precedence over bare ones.
fn classify(token: &str) -> Option<(TokenKind, &str)> {
    TOKEN_FORMS
        .iter()
        .find_map(|f| operand(&f.quoted, token).map(|op| (f.kind, op)))
        .or_else(|| {
            TOKEN_FORMS
                .iter()
                .find_map(|f| operand(&f.bare, token).map(|op| (f.kind, op)))
        })
}

/// Split a group on runs of spaces that lie outside double quotes.
fn split_tokens(group: &str) -> Vec<&str> {
    let bytes = group.as_bytes();
    let total_quotes = bytes.iter().filter(|&&b| b == b'"').count();
    let mut seen_quotes = 0;
    let mut tokens = Vec::new();
    let mut token_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                seen_quotes += 1;
                i += 1;
            }
            b' ' => {
                let run_start = i;
                while i < bytes.len() && bytes[i] == b' ' {
                    i += 1;
                }
                if (total_quotes - seen_quotes) % 2 == 0 {
                    tokens.push(&group[token_start..run_start]);
                    token_start = i;
                }
            }
            _ => i += 1,
        }
    }
    tokens.push(&group[token_start..]);

    tokens.retain(|t| !t.trim().is_empty());
    tokens
}

enum TokenMatcher {
    Exact(Vec<char>),
    Include(Vec<char>),
    Prefix(Vec<char>),
    InversePrefix(Vec<char>),
    InverseSuffix(Vec<char>),
    Suffix(Vec<char>),
    InverseExact(Vec<char>),
    Fuzzy(BitapSearcher),
}

impl TokenMatcher {
    fn new(kind: TokenKind, operand: &str, options: SearchOptions) -> Self {
        let chars = || operand.chars().collect();
        match kind {
            TokenKind::Exact => Self::Exact(chars()),
            TokenKind::Include => Self::Include(chars()),
            TokenKind::Prefix => Self::Prefix(chars()),
            TokenKind::InversePrefix => Self::InversePrefix(chars()),
            TokenKind::InverseSuffix => Self::InverseSuffix(chars()),
            TokenKind::Suffix => Self::Suffix(chars()),
            TokenKind::InverseExact => Self::InverseExact(chars()),
            TokenKind::Fuzzy => Self::Fuzzy(BitapSearcher::new(operand, options)),
        }
    }

    /// Whether a match contributes a list of ranges rather than one range.
    fn is_multi(&self) -> bool {
        matches!(self, Self::Include(_) | Self::Fuzzy(_))
    }

    fn search(&self, text: &[char]) -> MatchResult {
        let whole = (0, text.len().saturating_sub(1));
        let head = |pattern: &[char]| (0, pattern.len().saturating_sub(1));

        let (is_match, indices) = match self {
            Self::Fuzzy(searcher) => return searcher.search_in(text),
            Self::Exact(p) => (text == p.as_slice(), vec![head(p)]),
            Self::Prefix(p) => (text.starts_with(p), vec![head(p)]),
            Self::Suffix(p) => (
                text.ends_with(p),
                vec![(text.len().saturating_sub(p.len()), whole.1)],
            ),
            Self::InversePrefix(p) => (!text.starts_with(p), vec![whole]),
            Self::InverseSuffix(p) => (!text.ends_with(p), vec![whole]),
            Self::InverseExact(p) => (find_from(text, p, 0).is_none(), vec![whole]),
            Self::Include(p) => {
                let mut indices = Vec::new();
                let mut from = 0;
                while let Some(index) = find_from(text, p, from) {
                    from = index + p.len();
                    indices.push((index, from - 1));
                }
                (!indices.is_empty(), indices)
            }
        };

        if is_match {
            MatchResult {
                is_match,
                score: 0.0,
                indices,
            }
        } else {
            MatchResult::miss()
        }
    }
}

/// Parsed extended query.
pub(crate) struct ExtendedQuery {
    groups: Vec<Vec<TokenMatcher>>,
}

impl ExtendedQuery {
    pub(crate) fn parse(query: &str, options: SearchOptions) -> Self {
        let lowered: String = lower_chars(query).into_iter().collect();
        let groups = lowered
            .split('|')
            .map(|group| {
                split_tokens(group.trim())
                    .into_iter()
                    .filter_map(classify)
                    .map(|(kind, op)| TokenMatcher::new(kind, op, options))
                    .collect::<Vec<_>>()
            })
            .filter(|group| !group.is_empty())
            .collect();
        Self { groups }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Match against lowercased `text`. The first group whose tokens all
    /// match wins; its score is the mean of the token scores.
    pub(crate) fn search_in(&self, text: &[char]) -> MatchResult {
        'groups: for group in &self.groups {
            let mut indices = Vec::new();
            let mut total_score = 0.0;

            for matcher in group {
                let result = matcher.search(text);
                if !result.is_match {
                    continue 'groups;
                }
                total_score += result.score;
                if matcher.is_multi() {
                    indices.extend(result.indices);
                } else if let Some(&range) = result.indices.first() {
                    indices.push(range);
                }
            }

            #[allow(clippy::cast_precision_loss)]
            let score = total_score / group.len() as f64;
            return MatchResult {
                is_match: true,
                score,
                indices,
            };
        }

        MatchResult::miss()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn search(query: &str, text: &str) -> MatchResult {
        ExtendedQuery::parse(query, SearchOptions::default()).search_in(&lower_chars(text))
    }

    #[test]
    fn test_split_tokens_respects_quotes() {
        assert_eq!(split_tokens("a  b"), vec!["a", "b"]);
        assert_eq!(
            split_tokens(r#"="getting started" ^guide"#),
            vec![r#"="getting started""#, "^guide"]
        );
        assert_eq!(split_tokens("  "), Vec::<&str>::new());
    }

    #[test]
    fn test_classify_forms() {
        assert_eq!(classify("=pages"), Some((TokenKind::Exact, "pages")));
        assert_eq!(classify("'pages"), Some((TokenKind::Include, "pages")));
        assert_eq!(classify("^pa"), Some((TokenKind::Prefix, "pa")));
        assert_eq!(classify("!^pa"), Some((TokenKind::InversePrefix, "pa")));
        assert_eq!(classify("!es$"), Some((TokenKind::InverseSuffix, "es")));
        assert_eq!(classify("es$"), Some((TokenKind::Suffix, "es")));
        assert_eq!(classify("!pages"), Some((TokenKind::InverseExact, "pages")));
        assert_eq!(classify("pages"), Some((TokenKind::Fuzzy, "pages")));
        assert_eq!(classify(r#"="a b""#), Some((TokenKind::Exact, "a b")));
        assert_eq!(classify(r#""a b""#), Some((TokenKind::Fuzzy, "a b")));
    }

    #[test]
    fn test_classify_quoted_form_beats_bare_form() {
        assert_eq!(classify(r#"^"pa""#), Some((TokenKind::Prefix, "pa")));
        assert_eq!(classify(r#""^pa""#), Some((TokenKind::Fuzzy, "^pa")));
        assert_eq!(classify(r#"!"es"$"#), Some((TokenKind::InverseSuffix, "es")));
    }

    #[test]
    fn test_classify_empty_operand_falls_through() {
        assert_eq!(classify("="), Some((TokenKind::Fuzzy, "=")));
    }

    #[test]
    fn test_exact_requires_whole_value() {
        assert!(search("=pages", "Pages").is_match);
        assert!(!search("=pages", "Pages and more").is_match);
    }

    #[test]
    fn test_include_records_every_occurrence() {
        let result = search("'ab", "ab cab");

        assert!(result.is_match);
        assert!(result.score.abs() < f64::EPSILON);
        assert_eq!(result.indices, vec![(0, 1), (4, 5)]);
    }

    #[test]
    fn test_prefix_and_suffix() {
        let prefix = search("^get", "Getting Started");
        assert!(prefix.is_match);
        assert_eq!(prefix.indices, vec![(0, 2)]);

        let suffix = search("ted$", "Getting Started");
        assert!(suffix.is_match);
        assert_eq!(suffix.indices, vec![(12, 14)]);

        assert!(!search("^started", "Getting Started").is_match);
    }

    #[test]
    fn test_inverse_forms_cover_whole_value() {
        let result = search("!^zh", "guides");
        assert!(result.is_match);
        assert_eq!(result.indices, vec![(0, 5)]);

        assert!(!search("!guide", "guides").is_match);
        assert!(search("!draft", "guides").is_match);
        assert!(!search("!des$", "guides").is_match);
    }

    #[test]
    fn test_group_requires_all_tokens() {
        assert!(search("^get started$", "Getting Started").is_match);
        assert!(!search("^get =pages", "Getting Started").is_match);
    }

    #[test]
    fn test_or_groups_first_match_wins() {
        let result = search("=nothing | ^get", "Getting Started");

        assert!(result.is_match);
        assert_eq!(result.indices, vec![(0, 2)]);
    }

    #[test]
    fn test_fuzzy_token_tolerates_typo() {
        let result = search("serch", "Search Configuration");

        assert!(result.is_match);
        assert!(result.score > 0.0 && result.score < 0.5);
    }

    #[test]
    fn test_blank_query_is_empty() {
        assert!(ExtendedQuery::parse(" | ", SearchOptions::default()).is_empty());
        assert!(!search("", "anything").is_match);
    }
}
