//! Site error type.

use docnav_content::StoreError;
use docnav_i18n::I18nError;

/// Error returned by [`Site`](crate::Site) queries.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Locale resolution failed.
    #[error(transparent)]
    Locale(#[from] I18nError),
    /// Content could not be loaded.
    #[error("Failed to load content: {0}")]
    Store(#[from] StoreError),
}
