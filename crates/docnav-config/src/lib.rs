//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `site.website`
//! - `site.repo`

mod expand;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override content collection name.
    pub collection: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteConfig,
    /// Content location (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Side navigation ordering and header menu.
    pub navigation: NavigationConfig,
    /// Global page display toggles.
    pub display: DisplayConfig,
    /// Search matcher tuning.
    pub search: SearchConfig,
    /// Locale declarations.
    pub i18n: I18nConfig,
    /// Server configuration.
    pub server: ServerConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Public site URL.
    pub website: String,
    /// Author shown on pages.
    pub author: String,
    /// Short site description.
    pub description: String,
    /// Source repository link.
    pub repo: Option<String>,
    /// Content collection holding the documentation entries.
    pub collection: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            website: String::new(),
            author: String::new(),
            description: String::new(),
            repo: None,
            collection: "docs".to_owned(),
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory containing content collections.
    pub source_dir: PathBuf,
}

/// Navigation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Curated ordering of top-level folders and files.
    ///
    /// Entries are locale-stripped ids. Anything not listed sorts after the
    /// listed ids in encounter order.
    pub order: Vec<String>,
    /// Header menu items.
    pub menu_items: Vec<MenuItemConfig>,
}

/// Header menu item as declared in config.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MenuItemConfig {
    /// Translation key for the item title.
    pub title_key: String,
    /// Link target for the default locale.
    pub href: String,
}

/// Global page display toggles.
#[derive(Debug, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayConfig {
    pub hide_table_of_contents: bool,
    pub hide_breadcrumbs: bool,
    pub hide_side_navigations: bool,
    pub hide_datetime: bool,
    pub hide_time: bool,
    pub hide_search: bool,
    pub hide_repo_button: bool,
    pub hide_author: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hide_table_of_contents: false,
            hide_breadcrumbs: false,
            hide_side_navigations: false,
            hide_datetime: false,
            hide_time: true,
            hide_search: false,
            hide_repo_button: false,
            hide_author: true,
        }
    }
}

/// Search matcher tuning.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fuzziness cut-off: 0.0 requires a perfect match, 1.0 matches anything.
    pub threshold: f64,
    /// Expected match position in a field.
    pub location: usize,
    /// How far from `location` a match may drift before it scores as a miss.
    pub distance: usize,
    /// Shortest matched run reported in match indices.
    pub min_match_char_length: usize,
    /// Characters of context shown on each side of a snippet highlight.
    pub context_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            location: 0,
            distance: 100,
            min_match_char_length: 2,
            context_length: 40,
        }
    }
}

/// Locale declarations.
///
/// An empty list means the built-in locale set is used.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Declared locales, in declaration order.
    pub locales: Vec<LocaleConfig>,
}

/// Single locale declaration.
#[derive(Clone, Debug, Deserialize)]
pub struct LocaleConfig {
    /// Locale key (lowercase, used as the URL prefix).
    pub key: String,
    /// Display name.
    pub name: String,
    /// BCP-47 language tag.
    pub lang_tag: String,
    /// Text direction: `ltr`, `rtl` or `auto`.
    #[serde(default = "default_direction")]
    pub direction: String,
    /// Google Fonts family name.
    #[serde(default)]
    pub google_font_name: String,
    /// Whether this is the default locale.
    #[serde(default)]
    pub default: bool,
    /// Message overrides layered over the built-in table.
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

fn default_direction() -> String {
    "ltr".to_owned()
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`DOCS_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(collection) = &settings.collection {
            self.site.collection.clone_from(collection);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            navigation: NavigationConfig::default(),
            display: DisplayConfig::default(),
            search: SearchConfig::default(),
            i18n: I18nConfig::default(),
            server: ServerConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("src/content"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file. Locale declarations are
    /// checked further when the locale registry is built from them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_search()?;
        require_non_empty(&self.site.collection, "site.collection")?;
        for (i, item) in self.navigation.menu_items.iter().enumerate() {
            require_non_empty(&item.title_key, &format!("navigation.menu_items[{i}].title_key"))?;
            if !item.href.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "navigation.menu_items[{i}].href must start with /"
                )));
            }
        }
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate search configuration.
    fn validate_search(&self) -> Result<(), ConfigError> {
        let threshold = self.search.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Validation(format!(
                "search.threshold must be between 0.0 and 1.0, got {threshold}"
            )));
        }
        if self.search.min_match_char_length == 0 {
            return Err(ConfigError::Validation(
                "search.min_match_char_length must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.site.website = expand::expand_env(&self.site.website, "site.website")?;
        if let Some(ref repo) = self.site.repo {
            self.site.repo = Some(expand::expand_env(repo, "site.repo")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("src/content")),
        };
    }
}
