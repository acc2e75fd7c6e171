//! docnav CLI - documentation navigation.
//!
//! Provides commands for:
//! - `serve`: Start the navigation API server
//! - `menu`: Print the side navigation tree of a locale
//! - `breadcrumbs`: Print the breadcrumb trail of a page
//! - `search`: Fuzzy-search the pages of a locale

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BreadcrumbsArgs, MenuArgs, SearchArgs, ServeArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// docnav - Documentation navigation.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    /// Enable info-level logging (otherwise `RUST_LOG` applies).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the navigation API server.
    Serve(ServeArgs),
    /// Print the side navigation tree.
    Menu(MenuArgs),
    /// Print the breadcrumb trail of a page.
    Breadcrumbs(BreadcrumbsArgs),
    /// Search pages.
    Search(SearchArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute(VERSION))
        }
        Commands::Menu(args) => args.execute(),
        Commands::Breadcrumbs(args) => args.execute(),
        Commands::Search(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
