//! UI-layer errors

use vanguard_theme::ThemeError;

/// Errors raised by showcase state, components, and configuration
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// Theme lookup or validation failed
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// A view name that is not part of the showcase
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// A component id that is not in the library catalog
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// A component parameter outside its accepted range
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Parameter name
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// A configured custom theme could not be built or registered
    #[error("Invalid custom theme '{key}'")]
    CustomTheme {
        /// Key the theme was declared under
        key: String,
        /// Underlying theme error
        source: ThemeError,
    },

    /// Malformed configuration document
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_errors_pass_through() {
        let err: UiError = ThemeError::NotFound("vaporwave".to_string()).into();
        assert_eq!(err.to_string(), "Theme not found: vaporwave");
        assert!(matches!(err, UiError::Theme(ThemeError::NotFound(_))));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = UiError::InvalidValue {
            field: "ratio",
            reason: "must be positive, got 0".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for ratio: must be positive, got 0");
    }

    #[test]
    fn test_custom_theme_error_keeps_source() {
        use std::error::Error as _;

        let err = UiError::CustomTheme {
            key: "hollow".to_string(),
            source: ThemeError::EmptyField {
                theme: "Minimalism".to_string(),
                field: "cardStyle",
            },
        };
        assert_eq!(err.to_string(), "Invalid custom theme 'hollow'");
        let source = err.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Theme 'Minimalism' has an empty 'cardStyle' field")
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: UiError = parse.into();
        assert!(err.to_string().starts_with("Invalid configuration:"));
    }
}
