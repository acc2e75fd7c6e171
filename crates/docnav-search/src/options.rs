//! Matcher options.

use docnav_config::SearchConfig;

/// Tuning of the fuzzy matcher and snippet builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOptions {
    /// Fuzziness cut-off: 0.0 requires a perfect match, 1.0 matches anything.
    pub threshold: f64,
    /// Expected match position in a field.
    pub location: usize,
    /// How far from `location` a match may drift before it scores as a miss.
    pub distance: usize,
    /// Shortest matched run reported in match indices.
    pub min_match_char_length: usize,
    /// Keep scanning after a perfect match has been found.
    pub find_all_matches: bool,
    /// Characters of context shown on each side of a snippet highlight.
    pub context_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            location: 0,
            distance: 100,
            min_match_char_length: 2,
            find_all_matches: true,
            context_length: 40,
        }
    }
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            threshold: config.threshold,
            location: config.location,
            distance: config.distance,
            min_match_char_length: config.min_match_char_length,
            find_all_matches: true,
            context_length: config.context_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_defaults() {
        let from_config = SearchOptions::from(&SearchConfig::default());
        assert_eq!(from_config, SearchOptions::default());
    }
}
