//! `docnav serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        config.validate()?;

        let server_config = server_config_from_config(&config);

        output.info(&output.title(&format!("docnav v{version}")));
        output.info(&format!(
            "Source: {}",
            server_config.source_dir.display()
        ));
        if server_config.locales.is_empty() {
            output.warning("No locales configured, using the built-in set");
        }
        output.info(&format!(
            "Listening on {}",
            output.dim(&format!(
                "http://{}:{}",
                server_config.host, server_config.port
            ))
        ));

        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    }
}
