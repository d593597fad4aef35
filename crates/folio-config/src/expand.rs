//! `${VAR}` expansion for path-valued settings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Bare `$VAR` is left alone. `field` names the setting in error messages.
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
        message: format!("${{{0}}} not set", e.cause.name),
    })
}

/// Variable referenced without a default and missing from the environment.
struct UnsetVar {
    name: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expand_whole_path() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_EXPAND_WHOLE", "/srv/notes");
        }
        let result = expand_env("${FOLIO_EXPAND_WHOLE}", "content.root").unwrap();
        assert_eq!(result, "/srv/notes");
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_WHOLE");
        }
    }

    #[test]
    fn test_expand_path_prefix() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_EXPAND_HOME", "/home/site");
        }
        let result = expand_env("${FOLIO_EXPAND_HOME}/content/posts", "content.root").unwrap();
        assert_eq!(result, "/home/site/content/posts");
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_HOME");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_UNSET");
        }
        let result = expand_env("${FOLIO_EXPAND_UNSET:-pages}", "content.root").unwrap();
        assert_eq!(result, "pages");
    }

    #[test]
    fn test_expand_unset_without_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_MISSING");
        }
        let err = expand_env("${FOLIO_EXPAND_MISSING}/x", "content.root").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Environment variable error in content.root: ${FOLIO_EXPAND_MISSING} not set"
        );
    }

    #[test]
    fn test_plain_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("content", "content.root").unwrap(), "content");
        assert_eq!(expand_env("$HOME/content", "content.root").unwrap(), "$HOME/content");
    }
}
