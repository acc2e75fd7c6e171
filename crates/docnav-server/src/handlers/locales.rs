//! Locales API endpoint.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use docnav_i18n::LocaleProfile;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/locales.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LocalesResponse {
    /// Default locale key.
    default_locale: String,
    /// Declared locales, in declaration order.
    locales: Vec<LocaleInfo>,
    /// Locale key to BCP-47 tag, for `hreflang` alternates.
    lang_tags: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct LocaleInfo {
    key: String,
    #[serde(flatten)]
    profile: LocaleProfile,
}

/// Handle GET /api/locales.
pub(crate) async fn get_locales(State(state): State<Arc<AppState>>) -> Json<LocalesResponse> {
    let registry = state.site.registry();
    let locales = registry
        .list_supported()
        .iter()
        .filter_map(|key| {
            let profile = registry.resolve(key).ok()?.clone();
            Some(LocaleInfo {
                key: key.clone(),
                profile,
            })
        })
        .collect();

    Json(LocalesResponse {
        default_locale: registry.default_locale().to_owned(),
        locales,
        lang_tags: registry
            .lang_tags()
            .into_iter()
            .map(|(key, tag)| (key.to_owned(), tag.to_owned()))
            .collect(),
    })
}
