//! Locale error types.

/// Error returned by locale resolution and registry construction.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    /// Locale key is not among the declared locales.
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
    /// Locale declaration is malformed.
    #[error("Invalid locale '{key}': {reason}")]
    InvalidLocale {
        /// Offending locale key.
        key: String,
        /// What is wrong with it.
        reason: String,
    },
    /// No locale was declared at all.
    #[error("At least one locale must be declared")]
    NoLocales,
}
