//! Site identity API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use docnav_site::SiteInfo;

use crate::state::AppState;

/// Handle GET /api/site.
pub(crate) async fn get_site(State(state): State<Arc<AppState>>) -> Json<SiteInfo> {
    Json(state.site.info().clone())
}
