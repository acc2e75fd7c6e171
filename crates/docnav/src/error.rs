//! CLI error types.

use docnav_config::ConfigError;
use docnav_i18n::I18nError;
use docnav_site::{Feature, SiteError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Locale(#[from] I18nError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Server(String),

    #[error("The {0} feature is hidden by the display settings")]
    Disabled(Feature),
}
