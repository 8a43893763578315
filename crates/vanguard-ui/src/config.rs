//! Showcase configuration
//!
//! A JSON document choosing the initial selection and declaring custom
//! themes derived from registered ones:
//!
//! ```json
//! {
//!   "theme": "paper",
//!   "mode": "light",
//!   "view": "library",
//!   "customThemes": [
//!     {
//!       "key": "paper",
//!       "extends": "minimalism",
//!       "overrides": { "name": "Paper", "background": "bg-[#F5F0E6]" }
//!     }
//!   ]
//! }
//! ```
//!
//! A custom theme inherits its parent's polarity and finish. It only gets a
//! dark variant when `darkOverrides` is given; otherwise the opposite mode
//! falls back to its base bundle. A custom theme that cannot be built fails
//! the whole registry.

use serde::{Deserialize, Serialize};
use vanguard_theme::{ControlFinish, Mode, ThemeEntry, ThemeError, ThemeOverrides, ThemeRegistry};

use crate::error::{Result, UiError};
use crate::navigation::{Selection, View, DEFAULT_THEME};

/// A theme derived from a registered one by field overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTheme {
    /// Registry key for the new theme
    pub key: String,
    /// Key of the theme to derive from
    pub extends: String,
    /// Finish override; the parent's finish otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<ControlFinish>,
    /// Overrides applied to the parent's base bundle
    #[serde(default)]
    pub overrides: ThemeOverrides,
    /// Overrides applied to the parent's dark variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_overrides: Option<ThemeOverrides>,
}

impl CustomTheme {
    /// Build the registry entry against `registry`
    fn entry(&self, registry: &ThemeRegistry) -> vanguard_theme::Result<ThemeEntry> {
        let parent = registry
            .entry(&self.extends)
            .ok_or_else(|| ThemeError::NotFound(self.extends.clone()))?;

        let base = self.overrides.apply(&parent.base)?;
        let mut entry = ThemeEntry::new(base)
            .with_polarity(parent.polarity)
            .with_finish(self.finish.unwrap_or(parent.finish));

        if let Some(dark_overrides) = &self.dark_overrides {
            let source = parent.dark.as_ref().unwrap_or(&parent.base);
            entry = entry.with_dark(dark_overrides.apply(source)?);
        }
        Ok(entry)
    }
}

/// Startup configuration; every field is optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowcaseConfig {
    /// Initial theme key
    pub theme: String,
    /// Initial mode
    pub mode: Mode,
    /// Initial view
    pub view: View,
    /// Extra themes to register
    pub custom_themes: Vec<CustomTheme>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            mode: Mode::default(),
            view: View::default(),
            custom_themes: Vec::new(),
        }
    }
}

impl ShowcaseConfig {
    /// Parse a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The builtin registry plus every custom theme.
    ///
    /// Custom themes are registered in order, so one may extend another
    /// declared before it. The first entry that fails stops the build.
    pub fn build_registry(&self) -> Result<ThemeRegistry> {
        let mut registry = ThemeRegistry::builtin();

        for custom in &self.custom_themes {
            custom
                .entry(&registry)
                .and_then(|entry| registry.register(custom.key.clone(), entry))
                .map_err(|source| {
                    tracing::error!(
                        key = %custom.key,
                        extends = %custom.extends,
                        error = %source,
                        "Invalid custom theme"
                    );
                    UiError::CustomTheme {
                        key: custom.key.clone(),
                        source,
                    }
                })?;
        }

        tracing::info!(themes = registry.len(), "Theme registry built from config");
        Ok(registry)
    }

    /// Selection the showcase starts with
    pub fn initial_selection(&self) -> Selection {
        Selection {
            theme: self.theme.clone(),
            mode: self.mode,
            view: self.view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanguard_theme::{BundleSource, ThemeResolver};

    const PAPER: &str = r#"{
        "theme": "paper",
        "view": "library",
        "customThemes": [
            {
                "key": "paper",
                "extends": "minimalism",
                "overrides": { "name": "Paper", "background": "bg-[#F5F0E6]" }
            }
        ]
    }"#;

    // ==========================================================================
    // Parsing Tests
    // ==========================================================================

    #[test]
    fn test_empty_config_defaults() {
        let config = ShowcaseConfig::from_json("{}").unwrap();
        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.initial_selection(), Selection::default());
    }

    #[test]
    fn test_parse_custom_theme() {
        let config = ShowcaseConfig::from_json(PAPER).unwrap();
        assert_eq!(config.theme, "paper");
        assert_eq!(config.view, View::Library);
        assert_eq!(config.mode, Mode::Light);
        assert_eq!(config.custom_themes.len(), 1);
        assert_eq!(config.custom_themes[0].overrides.name.as_deref(), Some("Paper"));
    }

    #[test]
    fn test_malformed_config() {
        let err = ShowcaseConfig::from_json(r#"{"mode": "dusk"}"#).unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }

    // ==========================================================================
    // Registry Tests
    // ==========================================================================

    #[test]
    fn test_build_registry_registers_custom() {
        let registry = ShowcaseConfig::from_json(PAPER).unwrap().build_registry().unwrap();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.keys().last(), Some("paper"));

        let light = registry.resolve("paper", Mode::Light).unwrap();
        assert_eq!(light.bundle.name, "Paper");
        assert_eq!(light.bundle.background, "bg-[#F5F0E6]");
        assert_eq!(light.bundle.id, None);
        assert_eq!(light.theme_id(), None);
    }

    #[test]
    fn test_custom_without_dark_falls_back() {
        let registry = ShowcaseConfig::from_json(PAPER).unwrap().build_registry().unwrap();
        let dark = registry.resolve("paper", Mode::Dark).unwrap();
        assert_eq!(dark.source, BundleSource::BaseFallback);
        assert!(dark.is_fallback());
        assert_eq!(dark.bundle.name, "Paper");
    }

    #[test]
    fn test_custom_with_dark_overrides() {
        let config = ShowcaseConfig::from_json(
            r#"{
                "customThemes": [{
                    "key": "ink",
                    "extends": "neoBrutalism",
                    "overrides": { "name": "Ink" },
                    "darkOverrides": { "name": "Ink Dark" }
                }]
            }"#,
        )
        .unwrap();
        let registry = config.build_registry().unwrap();

        let dark = registry.resolve("ink", Mode::Dark).unwrap();
        assert_eq!(dark.source, BundleSource::DarkVariant);
        assert_eq!(dark.bundle.name, "Ink Dark");
        assert_eq!(dark.finish, ControlFinish::Brutalist);
    }

    #[test]
    fn test_custom_inherits_dark_first_polarity() {
        let config = ShowcaseConfig::from_json(
            r#"{
                "customThemes": [{
                    "key": "abyss",
                    "extends": "liquidGlass",
                    "overrides": { "name": "Abyss Frosted" },
                    "darkOverrides": { "name": "Abyss" }
                }]
            }"#,
        )
        .unwrap();
        let registry = config.build_registry().unwrap();

        assert_eq!(registry.resolve("abyss", Mode::Light).unwrap().bundle.name, "Abyss");
        assert_eq!(registry.resolve("abyss", Mode::Dark).unwrap().bundle.name, "Abyss Frosted");
    }

    #[test]
    fn test_custom_theme_keeps_finish_override() {
        let config = ShowcaseConfig::from_json(
            r#"{ "customThemes": [{ "key": "soft", "extends": "claymorphism", "finish": "standard" }] }"#,
        )
        .unwrap();
        let registry = config.build_registry().unwrap();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.entry("soft").unwrap().finish, ControlFinish::Standard);
    }

    #[test]
    fn test_blank_override_fails_build() {
        let config = ShowcaseConfig::from_json(
            r#"{ "customThemes": [{ "key": "hollow", "extends": "minimalism", "overrides": { "cardStyle": " " } }] }"#,
        )
        .unwrap();

        let err = config.build_registry().unwrap_err();
        match err {
            UiError::CustomTheme { key, source } => {
                assert_eq!(key, "hollow");
                assert!(matches!(source, ThemeError::EmptyField { field: "cardStyle", .. }));
            }
            other => panic!("expected custom theme error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_parent_fails_build() {
        let config = ShowcaseConfig::from_json(
            r#"{ "customThemes": [{ "key": "orphan", "extends": "vaporwave" }] }"#,
        )
        .unwrap();

        let err = config.build_registry().unwrap_err();
        assert!(matches!(
            err,
            UiError::CustomTheme { ref key, source: ThemeError::NotFound(ref parent) }
                if key == "orphan" && parent == "vaporwave"
        ));
    }

    #[test]
    fn test_duplicate_key_fails_build() {
        let config = ShowcaseConfig::from_json(
            r#"{ "customThemes": [{ "key": "minimalism", "extends": "claymorphism" }] }"#,
        )
        .unwrap();

        let err = config.build_registry().unwrap_err();
        assert!(matches!(
            err,
            UiError::CustomTheme { source: ThemeError::DuplicateTheme(_), .. }
        ));
    }

    #[test]
    fn test_custom_may_extend_custom() {
        let config = ShowcaseConfig::from_json(
            r#"{
                "customThemes": [
                    { "key": "paper", "extends": "minimalism", "overrides": { "name": "Paper" } },
                    { "key": "vellum", "extends": "paper", "overrides": { "name": "Vellum" } }
                ]
            }"#,
        )
        .unwrap();
        let registry = config.build_registry().unwrap();

        let vellum = registry.resolve("vellum", Mode::Light).unwrap();
        assert_eq!(vellum.bundle.name, "Vellum");
        assert_eq!(vellum.bundle.background, "bg-[#FAF9F6]");
    }
}
