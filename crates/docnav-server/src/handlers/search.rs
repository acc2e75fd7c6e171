//! Search API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use docnav_search::SearchHit;
use docnav_site::Feature;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Upper bound on `limit`.
const MAX_LIMIT: usize = 100;

/// Query parameters of GET /api/search.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchParams {
    /// Query text; empty yields no results.
    #[serde(default)]
    q: String,
    locale: Option<String>,
    limit: Option<usize>,
}

/// Response for GET /api/search.
#[derive(Serialize)]
pub(crate) struct SearchResponse {
    query: String,
    results: Vec<SearchHit>,
}

/// Handle GET /api/search.
pub(crate) async fn get_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ServerError> {
    state.require(Feature::Search)?;
    let locale = state.request_locale(params.locale.as_deref(), None);
    let limit = params.limit.map(|l| l.min(MAX_LIMIT));

    let results = if params.q.trim().is_empty() {
        // Still reject an unknown locale.
        state.site.registry().resolve(&locale)?;
        Vec::new()
    } else {
        state.search_index(&locale)?.hits(&params.q, limit)
    };

    Ok(Json(SearchResponse {
        query: params.q,
        results,
    }))
}
