//! `docnav breadcrumbs` command implementation.

use clap::Args;
use docnav_site::{BreadcrumbEntry, Feature};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the breadcrumbs command.
#[derive(Args, Debug)]
pub(crate) struct BreadcrumbsArgs {
    /// Page path, with or without a locale prefix (e.g., "zh/guides/pages").
    path: String,

    #[command(flatten)]
    site: SiteArgs,
}

impl BreadcrumbsArgs {
    /// Execute the breadcrumbs command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let opened = self.site.open()?;
        opened.require(Feature::Breadcrumbs)?;
        let items = opened.site.breadcrumbs(&self.path, &opened.locale)?;

        if self.site.json {
            let json = serde_json::json!({ "items": items });
            output.line(&serde_json::to_string_pretty(&json)?);
        } else {
            output.line(&render_trail(&items));
        }
        Ok(())
    }
}

fn render_trail(items: &[BreadcrumbEntry]) -> String {
    items
        .iter()
        .map(|entry| format!("{} ({})", entry.title, entry.link))
        .collect::<Vec<_>>()
        .join(" > ")
}
