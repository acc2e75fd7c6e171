//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/site", get(handlers::site::get_site))
        .route("/api/locales", get(handlers::locales::get_locales))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route(
            "/api/breadcrumbs/{*path}",
            get(handlers::breadcrumbs::get_breadcrumbs),
        )
        .route("/api/search", get(handlers::search::get_search))
        .route("/api/toc/{*path}", get(handlers::toc::get_toc))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
