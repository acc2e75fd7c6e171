//! Table of contents API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use docnav_site::{Feature, PageOutline};

use crate::error::ServerError;
use crate::handlers::LocaleQuery;
use crate::state::AppState;

/// Handle GET /api/toc/{path}.
///
/// Responds with the page title, its display timestamp and the heading
/// hierarchy.
pub(crate) async fn get_toc(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<PageOutline>, ServerError> {
    state.require(Feature::TableOfContents)?;
    let locale = state.request_locale(query.locale.as_deref(), Some(&path));
    let outline = state
        .site
        .outline(&path, &locale)?
        .ok_or(ServerError::PageNotFound(path))?;
    Ok(Json(outline))
}
