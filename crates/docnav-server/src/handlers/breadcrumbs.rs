//! Breadcrumbs API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use docnav_site::{BreadcrumbEntry, Feature};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::LocaleQuery;
use crate::state::AppState;

/// Response for GET /api/breadcrumbs/{path}.
#[derive(Serialize)]
pub(crate) struct BreadcrumbsResponse {
    items: Vec<BreadcrumbEntry>,
}

/// Handle GET /api/breadcrumbs/{path}.
///
/// Without `?locale`, a leading locale segment of the path selects it.
pub(crate) async fn get_breadcrumbs(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<BreadcrumbsResponse>, ServerError> {
    state.require(Feature::Breadcrumbs)?;
    let locale = state.request_locale(query.locale.as_deref(), Some(&path));
    let items = state.site.breadcrumbs(&path, &locale)?;
    Ok(Json(BreadcrumbsResponse { items }))
}
