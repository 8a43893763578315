//! Errors raised while building, validating, or resolving themes

/// Theme-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// No theme is registered under the requested key
    #[error("Theme not found: {0}")]
    NotFound(String),

    /// A mode string other than `light` or `dark`
    #[error("Unknown mode: {0}")]
    InvalidMode(String),

    /// A bundle field holds no style directives
    #[error("Theme '{theme}' has an empty '{field}' field")]
    EmptyField {
        /// Display name of the offending bundle
        theme: String,
        /// Schema field that was empty
        field: &'static str,
    },

    /// A theme key was registered twice
    #[error("Theme already registered: {0}")]
    DuplicateTheme(String),

    /// A theme key that cannot be registered
    #[error("Invalid theme key: {0:?}")]
    InvalidKey(String),

    /// A canonical theme is missing its base or dark-variant bundle
    #[error("Canonical theme '{key}' is missing its {mapping} bundle")]
    MissingCanonical {
        /// Canonical identifier
        key: &'static str,
        /// Which mapping lacks the entry ("base" or "dark-variant")
        mapping: &'static str,
    },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
