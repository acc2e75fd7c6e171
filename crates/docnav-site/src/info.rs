//! Site identity and the page features it shows.

use std::fmt;

use docnav_config::{DisplayConfig, SiteConfig};
use serde::Serialize;

/// Page feature that the display settings can switch off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    SideNavigation,
    Breadcrumbs,
    TableOfContents,
    Search,
    Datetime,
    /// Time of day next to the date.
    Time,
}

impl Feature {
    /// Every feature, in display order.
    pub const ALL: [Feature; 6] = [
        Feature::SideNavigation,
        Feature::Breadcrumbs,
        Feature::TableOfContents,
        Feature::Search,
        Feature::Datetime,
        Feature::Time,
    ];

    fn hidden(self, display: &DisplayConfig) -> bool {
        match self {
            Feature::SideNavigation => display.hide_side_navigations,
            Feature::Breadcrumbs => display.hide_breadcrumbs,
            Feature::TableOfContents => display.hide_table_of_contents,
            Feature::Search => display.hide_search,
            Feature::Datetime => display.hide_datetime,
            Feature::Time => display.hide_time,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Feature::SideNavigation => "side navigation",
            Feature::Breadcrumbs => "breadcrumbs",
            Feature::TableOfContents => "table of contents",
            Feature::Search => "search",
            Feature::Datetime => "datetime",
            Feature::Time => "time",
        })
    }
}

/// Public identity of a site with its display settings applied.
///
/// The author and repository link are left out when the display settings
/// hide them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    pub title: String,
    pub website: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Enabled features.
    pub features: Vec<Feature>,
}

impl SiteInfo {
    #[must_use]
    pub fn from_config(site: &SiteConfig, display: &DisplayConfig) -> Self {
        let author = Some(site.author.clone()).filter(|a| !display.hide_author && !a.is_empty());
        let repo = site.repo.clone().filter(|_| !display.hide_repo_button);
        Self {
            title: site.title.clone(),
            website: site.website.clone(),
            description: site.description.clone(),
            author,
            repo,
            features: Feature::ALL
                .into_iter()
                .filter(|f| !f.hidden(display))
                .collect(),
        }
    }

    /// Whether `feature` is shown.
    #[must_use]
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default(), &DisplayConfig::default())
    }
}
