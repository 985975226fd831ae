//! Error types for loading dictionaries and options.
//!
//! Generating a stylesheet never fails. Only the loading boundary, where
//! tokens and options arrive as JSON or YAML text, can reject its input.

use thiserror::Error;

/// Errors that can occur while loading tokens or options.
#[derive(Debug, Error)]
pub enum ThemeVarsError {
    /// Malformed JSON input.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML input.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A token path or reference could not be parsed.
    #[error("invalid token path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, ThemeVarsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_display() {
        let err = ThemeVarsError::InvalidPath {
            path: "color..base".to_string(),
            reason: "empty segment",
        };
        assert_eq!(
            err.to_string(),
            "invalid token path 'color..base': empty segment"
        );
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: ThemeVarsError = json_err.into();
        assert!(matches!(err, ThemeVarsError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
