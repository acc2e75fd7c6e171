//! CLI command implementations.

pub(crate) mod breadcrumbs;
pub(crate) mod menu;
pub(crate) mod search;
pub(crate) mod serve;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_content::{ContentStore, FsContentStore};
use docnav_i18n::LocaleRegistry;
use docnav_site::{Feature, Site, SiteOptions};

use crate::error::CliError;

pub(crate) use breadcrumbs::BreadcrumbsArgs;
pub(crate) use menu::MenuArgs;
pub(crate) use search::SearchArgs;
pub(crate) use serve::ServeArgs;

/// Arguments shared by the commands that read the site.
#[derive(Args, Debug)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Content collection name (overrides config).
    #[arg(long)]
    collection: Option<String>,

    /// Locale to use (default: the configured default locale).
    #[arg(short, long, env = "DOCNAV_LOCALE")]
    pub locale: Option<String>,

    /// Print JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,
}

/// A site opened from configuration, with the locale a command works in.
pub(crate) struct OpenSite {
    pub config: Config,
    pub site: Site,
    pub locale: String,
}

impl OpenSite {
    /// Fail when the display settings hide `feature`.
    pub(crate) fn require(&self, feature: Feature) -> Result<(), CliError> {
        if self.site.is_enabled(feature) {
            Ok(())
        } else {
            Err(CliError::Disabled(feature))
        }
    }
}

impl SiteArgs {
    /// Load configuration and open the site over the filesystem store.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or locale declarations are invalid.
    pub(crate) fn open(&self) -> Result<OpenSite, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            collection: self.collection.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        config.validate()?;

        let registry = Arc::new(LocaleRegistry::from_config(&config.i18n.locales)?);
        let locale = match &self.locale {
            Some(locale) => {
                registry.resolve(locale)?;
                locale.clone()
            }
            None => registry.default_locale().to_owned(),
        };

        let store: Arc<dyn ContentStore> =
            Arc::new(FsContentStore::new(config.docs_resolved.source_dir.clone()));
        let site = Site::new(store, registry, SiteOptions::from_config(&config));
        tracing::debug!(locale = %locale, "Opened site");

        Ok(OpenSite {
            config,
            site,
            locale,
        })
    }
}
