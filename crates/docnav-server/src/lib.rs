//! HTTP API for docnav.
//!
//! This crate serves the navigation data of a documentation site as JSON:
//! - `GET /api/site` - site identity and enabled features
//! - `GET /api/locales` - declared locales, the default and language tags
//! - `GET /api/navigation?locale=xx` - side navigation tree and header links
//! - `GET /api/breadcrumbs/{path}` - breadcrumb trail of a page
//! - `GET /api/search?q=...&locale=xx&limit=n` - fuzzy search hits
//! - `GET /api/toc/{path}` - title, timestamp and table of contents of a page
//!
//! An undeclared locale is answered with `400 {"error", "locale"}`. Endpoints
//! whose feature is hidden by the `[display]` settings answer
//! `404 {"error", "feature"}`.
//!
//! # Quick Start
//!
//! ```ignore
//! use docnav_config::Config;
//! use docnav_server::{run_server, server_config_from_config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load(None, None).unwrap();
//!     run_server(server_config_from_config(&config)).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (docnav-server)
//!                        │
//!                        ├─► menu / breadcrumbs / toc ──► Site (docnav-site)
//!                        │                                  │
//!                        │                                  └─► ContentStore
//!                        │
//!                        └─► search ──► SearchIndex per locale (docnav-search)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use docnav_config::{Config, LocaleConfig};
use docnav_content::{ContentStore, FsContentStore};
use docnav_i18n::LocaleRegistry;
use docnav_search::SearchOptions;
use docnav_site::{Site, SiteOptions};
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content source directory.
    pub source_dir: PathBuf,
    /// Collection, ordering and header links.
    pub site: SiteOptions,
    /// Declared locales; empty means the built-in set.
    pub locales: Vec<LocaleConfig>,
    /// Matcher options.
    pub search: SearchOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            source_dir: PathBuf::from("src/content"),
            site: SiteOptions {
                collection: "docs".to_owned(),
                ..SiteOptions::default()
            },
            locales: Vec::new(),
            search: SearchOptions::default(),
        }
    }
}

/// Create server configuration from the application config.
#[must_use]
pub fn server_config_from_config(config: &Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        site: SiteOptions::from_config(config),
        locales: config.i18n.locales.clone(),
        search: SearchOptions::from(&config.search),
    }
}

/// Build the API router over `site`.
#[must_use]
pub fn build_router(site: Arc<Site>, search: SearchOptions) -> Router {
    app::create_router(Arc::new(AppState::new(site, search)))
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the locales are invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store: Arc<dyn ContentStore> = Arc::new(FsContentStore::new(config.source_dir.clone()));
    let registry = Arc::new(LocaleRegistry::from_config(&config.locales)?);
    let site = Arc::new(Site::new(store, registry, config.site));

    let app = build_router(site, config.search);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        source_dir = %config.source_dir.display(),
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use docnav_config::{DisplayConfig, SiteConfig};
    use docnav_content::{ContentEntry, FrontMatter, MockContentStore};
    use docnav_site::SiteInfo;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        app_with(SiteInfo::default())
    }

    fn app_with(info: SiteInfo) -> Router {
        let store = MockContentStore::new()
            .with_page("docs", "en/getting-started", "Getting Started")
            .with_page("docs", "en/guides/pages", "Pages")
            .with_entry(
                "docs",
                ContentEntry::new(
                    "en/guides/search",
                    FrontMatter::titled("Search Configuration"),
                    "## Options\n\nThreshold and distance.\n\n### Threshold\n",
                ),
            )
            .with_page("docs", "zh/guides/pages", "页面");
        let options = SiteOptions {
            collection: "docs".to_owned(),
            order: vec!["getting-started".to_owned(), "guides".to_owned()],
            menu_items: Vec::new(),
            info,
        };
        let site = Site::new(
            Arc::new(store),
            Arc::new(LocaleRegistry::builtin()),
            options,
        );
        build_router(Arc::new(site), SearchOptions::default())
    }

    async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_locales() {
        let (status, json) = call(app(), "/api/locales").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["defaultLocale"], "en");
        assert_eq!(json["locales"][0]["key"], "zh");
        assert_eq!(json["locales"][1]["langTag"], "en-US");
        assert_eq!(json["locales"][1]["direction"], "ltr");
        assert_eq!(json["langTags"]["en"], "en-US");
    }

    #[tokio::test]
    async fn test_site_info() {
        let site = SiteConfig {
            title: "FuniqLab".to_owned(),
            repo: Some("https://github.com/funiq/docs".to_owned()),
            ..SiteConfig::default()
        };
        let app = app_with(SiteInfo::from_config(&site, &DisplayConfig::default()));

        let (status, json) = call(app, "/api/site").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "FuniqLab");
        assert_eq!(json["repo"], "https://github.com/funiq/docs");
        assert_eq!(json["features"][3], "search");
    }

    #[tokio::test]
    async fn test_hidden_features_are_not_served() {
        let display = DisplayConfig {
            hide_search: true,
            hide_breadcrumbs: true,
            hide_table_of_contents: true,
            hide_side_navigations: true,
            ..DisplayConfig::default()
        };
        let info = SiteInfo::from_config(&SiteConfig::default(), &display);

        for (uri, feature) in [
            ("/api/search?q=serch", "search"),
            ("/api/breadcrumbs/guides/pages", "breadcrumbs"),
            ("/api/toc/guides/search", "tableOfContents"),
            ("/api/navigation", "sideNavigation"),
        ] {
            let (status, json) = call(app_with(info.clone()), uri).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(json["feature"], feature);
        }

        let (status, _) = call(app_with(info), "/api/locales").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_navigation_defaults_to_default_locale() {
        let (status, json) = call(app(), "/api/navigation").await;

        assert_eq!(status, StatusCode::OK);
        let items = json["items"].as_array().unwrap();
        assert_eq!(items[0]["id"], "getting-started");
        assert_eq!(items[1]["id"], "guides");
        assert_eq!(items[1]["children"][0]["slug"], "guides/pages");
    }

    #[tokio::test]
    async fn test_navigation_for_other_locale() {
        let (status, json) = call(app(), "/api/navigation?locale=zh").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"][0]["children"][0]["slug"], "zh/guides/pages");
    }

    #[tokio::test]
    async fn test_unsupported_locale_is_bad_request() {
        let (status, json) = call(app(), "/api/navigation?locale=fr").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["locale"], "fr");
        assert_eq!(json["error"], "Unsupported locale");
    }

    #[tokio::test]
    async fn test_breadcrumbs_take_locale_from_path() {
        let (status, json) = call(app(), "/api/breadcrumbs/en/guides/pages").await;

        assert_eq!(status, StatusCode::OK);
        let links: Vec<&str> = json["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["link"].as_str().unwrap())
            .collect();
        assert_eq!(links, vec!["/guides", "/guides/pages"]);
    }

    #[tokio::test]
    async fn test_search_finds_typo() {
        let (status, json) = call(app(), "/api/search?q=serch&limit=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["query"], "serch");
        assert_eq!(json["results"][0]["title"], "Search Configuration");
        assert_eq!(json["results"][0]["href"], "/guides/search");
    }

    #[tokio::test]
    async fn test_empty_search_has_no_results() {
        let (status, json) = call(app(), "/api/search?q=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["results"], Value::Array(Vec::new()));

        let (status, _) = call(app(), "/api/search?q=&locale=fr").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_toc_and_missing_page() {
        let (status, json) = call(app(), "/api/toc/guides/search").await;

        assert_eq!(status, StatusCode::OK);
        let texts: Vec<&str> = json["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["Options", "Threshold"]);
        assert_eq!(json["items"][0]["slug"], "options");
        assert_eq!(json["title"], "Search Configuration");

        let (status, json) = call(app(), "/api/toc/guides/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["path"], "guides/missing");
    }

    #[test]
    fn test_security_headers_are_set() {
        let request = Request::get("/api/locales").body(Body::empty()).unwrap();

        let response = tokio_test::block_on(app().oneshot(request)).unwrap();

        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
    }

    #[test]
    fn test_server_config_from_config() {
        let config = Config::default();

        let server = server_config_from_config(&config);

        assert_eq!(server.host, config.server.host);
        assert_eq!(server.port, config.server.port);
        assert_eq!(server.search, SearchOptions::default());
    }
}
