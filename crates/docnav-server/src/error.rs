//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docnav_content::StoreError;
use docnav_i18n::I18nError;
use docnav_site::{Feature, SiteError};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Requested locale is not declared.
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// No page at the given path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// The display settings switch this endpoint off.
    #[error("Feature disabled: {0}")]
    FeatureDisabled(Feature),

    /// Content could not be loaded.
    #[error("Failed to load content: {0}")]
    Store(#[from] StoreError),

    /// Locale configuration is unusable.
    #[error(transparent)]
    Locale(I18nError),
}

impl From<I18nError> for ServerError {
    fn from(err: I18nError) -> Self {
        match err {
            I18nError::UnsupportedLocale(locale) => Self::UnsupportedLocale(locale),
            other => Self::Locale(other),
        }
    }
}

impl From<SiteError> for ServerError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::Locale(e) => e.into(),
            SiteError::Store(e) => Self::Store(e),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::UnsupportedLocale(locale) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Unsupported locale", "locale": locale}),
            ),
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::FeatureDisabled(feature) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Feature disabled", "feature": feature}),
            ),
            Self::Store(e) => {
                tracing::error!(error = %e, "Content store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
            Self::Locale(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
