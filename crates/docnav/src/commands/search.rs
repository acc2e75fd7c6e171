//! `docnav search` command implementation.

use clap::Args;
use docnav_search::{SearchHit, SearchIndex, SearchOptions, Snippet};
use docnav_site::Feature;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Query in extended search syntax (e.g., "serch", "'exact ^prefix").
    query: String,

    /// Maximum number of results.
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,

    #[command(flatten)]
    site: SiteArgs,
}

impl SearchArgs {
    /// Execute the search command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let opened = self.site.open()?;
        opened.require(Feature::Search)?;
        let entries = opened.site.filtered(&opened.locale)?;
        let index = SearchIndex::new(entries, SearchOptions::from(&opened.config.search));
        let hits = index.hits(&self.query, Some(self.limit));

        if self.site.json {
            let json = serde_json::json!({ "query": self.query, "results": hits });
            output.line(&serde_json::to_string_pretty(&json)?);
            return Ok(());
        }

        if hits.is_empty() {
            output.warning(&format!("No results for \"{}\"", self.query));
            return Ok(());
        }
        for hit in &hits {
            output.line(&format!(
                "{} {}",
                output.title(&hit.title),
                output.dim(&format!("{} ({})", hit.href, format_score(hit)))
            ));
            if let Some(snippet) = &hit.snippet {
                output.line(&format!("  {}", highlight(snippet, &output)));
            }
        }
        Ok(())
    }
}

fn format_score(hit: &SearchHit) -> String {
    format!("{:.3}", hit.score)
}

/// Snippet on one line with the matched text styled.
fn highlight(snippet: &Snippet, output: &Output) -> String {
    format!(
        "{}{}{}{}{}",
        snippet.prefix,
        single_line(&snippet.before),
        output.matched(&single_line(&snippet.highlight)),
        single_line(&snippet.after),
        snippet.suffix
    )
}

fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_score_rounds() {
        let hit = SearchHit {
            title: "Pages".to_owned(),
            slug: "guides/pages".to_owned(),
            href: "/guides/pages".to_owned(),
            score: 0.123_456,
            ref_index: 0,
            snippet: None,
        };

        assert_eq!(format_score(&hit), "0.123");
    }

    #[test]
    fn test_highlight_stays_on_one_line() {
        console::set_colors_enabled(false);
        let body = "# Options\n\nThreshold\r\nand distance";
        let snippet = Snippet::around(body, (11, 19), 40).unwrap();

        let text = highlight(&snippet, &Output::new());

        assert_eq!(text, "# Options  Threshold and distance");
        assert_eq!(snippet.after, "\r\nand distance");
    }

    #[test]
    fn test_highlight_keeps_snippet_text() {
        console::set_colors_enabled(false);
        let snippet = Snippet::around("fuzzy threshold value", (6, 14), 40).unwrap();

        let text = highlight(&snippet, &Output::new());

        assert_eq!(text, snippet.excerpt());
    }
}
