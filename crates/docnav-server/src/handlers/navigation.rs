//! Navigation API endpoint.
//!
//! Returns the side navigation tree and header links of a locale.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use docnav_site::{Feature, MenuLink, MenuNode};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::LocaleQuery;
use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Navigation tree items.
    items: Vec<MenuNode>,
    /// Header menu links.
    links: Vec<MenuLink>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<NavigationResponse>, ServerError> {
    state.require(Feature::SideNavigation)?;
    let locale = state.request_locale(query.locale.as_deref(), None);
    let items = state.site.menu(&locale)?;
    let links = state.site.links(&locale)?;
    Ok(Json(NavigationResponse { items, links }))
}
