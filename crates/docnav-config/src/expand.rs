//! `${VAR}` expansion for string settings.
//!
//! Only the braced forms are recognised:
//! - `${VAR}` resolves to the value of VAR and fails when it is unset
//! - `${VAR:-fallback}` resolves to VAR, or `fallback` when it is unset
//!
//! A bare `$VAR` is left alone so URLs containing `$` survive unchanged.

use crate::ConfigError;

/// Variable that could not be resolved.
struct UnsetVar {
    name: String,
}

/// Expand environment references in `value`.
///
/// `field` is the dotted config path reported in errors (e.g. `server.host`).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| -> Result<Option<String>, UnsetVar> {
        std::env::var(name).map(Some).map_err(|_| UnsetVar {
            name: name.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCNAV_EXPAND_SET", "docs.example.com");
        }
        let result = expand_env("https://${DOCNAV_EXPAND_SET}", "site.website").unwrap();
        assert_eq!(result, "https://docs.example.com");
        unsafe {
            std::env::remove_var("DOCNAV_EXPAND_SET");
        }
    }

    #[test]
    fn test_expand_fallback_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_EXPAND_UNSET");
        }
        let result = expand_env("${DOCNAV_EXPAND_UNSET:-127.0.0.1}", "server.host").unwrap();
        assert_eq!(result, "127.0.0.1");
    }

    #[test]
    fn test_expand_unset_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_EXPAND_MISSING");
        }
        let err = expand_env("${DOCNAV_EXPAND_MISSING}", "server.host").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("DOCNAV_EXPAND_MISSING"));
        assert!(msg.contains("server.host"));
    }

    #[test]
    fn test_bare_dollar_left_alone() {
        let result = expand_env("https://example.com/$path", "site.website").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }
}
