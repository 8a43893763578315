//! Theme registry and resolver
//!
//! The registry maps a theme key to a [`ThemeEntry`] holding that theme's base
//! bundle and (normally) its dark-variant bundle. Resolution turns a key plus a
//! [`Mode`] into a [`ResolvedTheme`]:
//!
//! | polarity      | light mode              | dark mode                     |
//! |---------------|-------------------------|-------------------------------|
//! | `LightFirst`  | base                    | dark variant, else base (warn)|
//! | `DarkFirst`   | dark variant, else base | base                          |
//!
//! The builtin registry is process-wide and immutable. Custom registries
//! start from [`ThemeRegistry::builtin`] and add entries with
//! [`ThemeRegistry::register`] before being handed to consumers.
//!
//! # Usage
//!
//! ```rust
//! use vanguard_theme::{resolve, Mode};
//!
//! let theme = resolve("minimalism", Mode::Light).unwrap();
//! assert_eq!(theme.bundle.name, "Minimalism");
//! ```

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use serde::Serialize;

use crate::builtin;
use crate::error::{Result, ThemeError};
use crate::ids::{ControlFinish, Mode, Polarity, ThemeId};
use crate::schema::TokenBundle;

// =============================================================================
// Theme Entry
// =============================================================================

/// Everything registered under one theme key
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeEntry {
    /// Base bundle
    pub base: Arc<TokenBundle>,
    /// Opposite-polarity bundle, if one exists
    pub dark: Option<Arc<TokenBundle>>,
    /// Which polarity the base bundle has
    pub polarity: Polarity,
    /// Rendering family for finish-dependent widgets
    pub finish: ControlFinish,
}

impl ThemeEntry {
    /// Create a light-first entry with only a base bundle
    pub fn new(base: TokenBundle) -> Self {
        Self {
            base: Arc::new(base),
            dark: None,
            polarity: Polarity::LightFirst,
            finish: ControlFinish::Standard,
        }
    }

    /// The builtin entry for a canonical aesthetic
    pub fn builtin(id: ThemeId) -> Self {
        Self {
            base: Arc::new(builtin::base_bundle(id)),
            dark: Some(Arc::new(builtin::dark_bundle(id))),
            polarity: id.polarity(),
            finish: id.finish(),
        }
    }

    /// Set the dark-variant bundle
    pub fn with_dark(mut self, dark: TokenBundle) -> Self {
        self.dark = Some(Arc::new(dark));
        self
    }

    /// Set the polarity
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Set the control finish
    pub fn with_finish(mut self, finish: ControlFinish) -> Self {
        self.finish = finish;
        self
    }

    /// Validate every bundle in the entry
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if let Some(dark) = &self.dark {
            dark.validate()?;
        }
        Ok(())
    }
}

// =============================================================================
// Resolution Result
// =============================================================================

/// Which registry slot a resolved bundle came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BundleSource {
    /// The entry's base bundle, requested directly
    Base,
    /// The entry's dark-variant bundle
    DarkVariant,
    /// The base bundle, served because no dark variant is registered
    BaseFallback,
}

/// A bundle resolved for a key and mode, ready to hand to consumers
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    /// The key that was resolved
    pub key: String,
    /// The requested mode
    pub mode: Mode,
    /// The bundle to apply
    pub bundle: Arc<TokenBundle>,
    /// Rendering family for finish-dependent widgets
    pub finish: ControlFinish,
    /// Which slot the bundle came from
    pub source: BundleSource,
}

impl ResolvedTheme {
    /// Whether the base bundle stood in for a missing dark variant
    pub fn is_fallback(&self) -> bool {
        self.source == BundleSource::BaseFallback
    }

    /// The canonical identifier, when the key names a builtin aesthetic
    pub fn theme_id(&self) -> Option<ThemeId> {
        self.key.parse().ok()
    }
}

// =============================================================================
// Resolver Trait
// =============================================================================

/// Turns a theme key and mode into a concrete bundle
pub trait ThemeResolver {
    /// Resolve `key` for `mode`. Unknown keys are an error, never a default.
    fn resolve(&self, key: &str, mode: Mode) -> Result<ResolvedTheme>;
}

impl<T: ThemeResolver + ?Sized> ThemeResolver for &T {
    fn resolve(&self, key: &str, mode: Mode) -> Result<ResolvedTheme> {
        (**self).resolve(key, mode)
    }
}

impl<T: ThemeResolver + ?Sized> ThemeResolver for Arc<T> {
    fn resolve(&self, key: &str, mode: Mode) -> Result<ResolvedTheme> {
        (**self).resolve(key, mode)
    }
}

// =============================================================================
// Registry
// =============================================================================

static GLOBAL: LazyLock<ThemeRegistry> = LazyLock::new(ThemeRegistry::builtin);

/// Theme key to entry mapping, iterated in registration order
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    order: Vec<String>,
    entries: HashMap<String, ThemeEntry>,
}

impl ThemeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The six canonical aesthetics, each with base and dark bundles
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for id in ThemeId::ALL {
            registry.order.push(id.as_str().to_string());
            registry
                .entries
                .insert(id.as_str().to_string(), ThemeEntry::builtin(id));
        }

        let validated = registry.validate();
        debug_assert!(validated.is_ok(), "builtin theme table is malformed: {validated:?}");
        match validated {
            Ok(()) => tracing::info!(themes = registry.len(), "Builtin theme registry ready"),
            Err(e) => tracing::error!(error = %e, "Builtin theme registry failed validation"),
        }
        registry
    }

    /// The process-wide builtin registry
    pub fn global() -> &'static ThemeRegistry {
        &GLOBAL
    }

    /// Add a custom theme. Its bundles are validated before insertion.
    pub fn register(&mut self, key: impl Into<String>, entry: ThemeEntry) -> Result<()> {
        let key = key.into();
        if key.trim().is_empty() || key.chars().any(char::is_whitespace) {
            return Err(ThemeError::InvalidKey(key));
        }
        if self.entries.contains_key(&key) {
            return Err(ThemeError::DuplicateTheme(key));
        }
        entry.validate()?;

        tracing::info!(key = %key, name = %entry.base.name, "Registered theme");
        self.order.push(key.clone());
        self.entries.insert(key, entry);
        Ok(())
    }

    /// Check every bundle and that each canonical aesthetic is complete
    pub fn validate(&self) -> Result<()> {
        for id in ThemeId::ALL {
            let entry = self.entries.get(id.as_str()).ok_or(ThemeError::MissingCanonical {
                key: id.as_str(),
                mapping: "base",
            })?;
            if entry.dark.is_none() {
                return Err(ThemeError::MissingCanonical {
                    key: id.as_str(),
                    mapping: "dark-variant",
                });
            }
        }
        for key in &self.order {
            if let Some(entry) = self.entries.get(key) {
                entry.validate()?;
            }
        }
        Ok(())
    }

    /// Registered keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Look up an entry
    pub fn entry(&self, key: &str) -> Option<&ThemeEntry> {
        self.entries.get(key)
    }

    /// The base bundle for a key
    pub fn base(&self, key: &str) -> Option<&Arc<TokenBundle>> {
        self.entries.get(key).map(|entry| &entry.base)
    }

    /// The dark-variant bundle for a key, if registered
    pub fn dark_variant(&self, key: &str) -> Option<&Arc<TokenBundle>> {
        self.entries.get(key).and_then(|entry| entry.dark.as_ref())
    }

    /// Check if a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of registered themes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ThemeResolver for ThemeRegistry {
    fn resolve(&self, key: &str, mode: Mode) -> Result<ResolvedTheme> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| ThemeError::NotFound(key.to_string()))?;

        let wants_variant = mode == entry.polarity.variant_mode();

        let (bundle, source) = match (wants_variant, &entry.dark) {
            (false, _) => (Arc::clone(&entry.base), BundleSource::Base),
            (true, Some(dark)) => (Arc::clone(dark), BundleSource::DarkVariant),
            (true, None) => {
                tracing::warn!(
                    key,
                    mode = %mode,
                    polarity = %entry.polarity,
                    "No {}-mode bundle registered for {} theme, falling back to base",
                    mode,
                    entry.polarity
                );
                (Arc::clone(&entry.base), BundleSource::BaseFallback)
            }
        };

        tracing::debug!(key, mode = %mode, bundle = %bundle.name, ?source, "Resolved theme");

        Ok(ResolvedTheme {
            key: key.to_string(),
            mode,
            bundle,
            finish: entry.finish,
            source,
        })
    }
}

/// Resolve against the process-wide builtin registry
pub fn resolve(key: &str, mode: Mode) -> Result<ResolvedTheme> {
    ThemeRegistry::global().resolve(key, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_bundle(name: &str) -> TokenBundle {
        let mut bundle = builtin::base_bundle(ThemeId::Minimalism);
        bundle.name = name.to_string();
        bundle
    }

    // ==========================================================================
    // Registry Construction Tests
    // ==========================================================================

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = ThemeRegistry::builtin();
        assert!(registry.validate().is_ok());
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_keys_keep_canonical_order() {
        let registry = ThemeRegistry::builtin();
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(
            keys,
            vec![
                "minimalism",
                "neoBrutalism",
                "glassmorphism",
                "skeuomorphism",
                "claymorphism",
                "liquidGlass"
            ]
        );
    }

    #[test]
    fn test_empty_registry_misses_canonical() {
        let registry = ThemeRegistry::new();
        assert_eq!(
            registry.validate(),
            Err(ThemeError::MissingCanonical {
                key: "minimalism",
                mapping: "base"
            })
        );
    }

    #[test]
    fn test_missing_dark_variant_fails_validation() {
        let mut registry = ThemeRegistry::new();
        for id in ThemeId::ALL {
            let entry = if id == ThemeId::Claymorphism {
                ThemeEntry::new(builtin::base_bundle(id))
            } else {
                ThemeEntry::builtin(id)
            };
            registry.register(id.as_str(), entry).unwrap();
        }

        assert_eq!(
            registry.validate(),
            Err(ThemeError::MissingCanonical {
                key: "claymorphism",
                mapping: "dark-variant"
            })
        );
    }

    #[test]
    fn test_register_custom_theme() {
        let mut registry = ThemeRegistry::builtin();
        registry
            .register("sunset", ThemeEntry::new(custom_bundle("Sunset")))
            .unwrap();

        assert!(registry.contains("sunset"));
        assert_eq!(registry.keys().last(), Some("sunset"));
        assert!(registry.dark_variant("sunset").is_none());
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_register_rejects_duplicates_and_bad_keys() {
        let mut registry = ThemeRegistry::builtin();

        let dup = registry.register("minimalism", ThemeEntry::new(custom_bundle("Again")));
        assert_eq!(dup, Err(ThemeError::DuplicateTheme("minimalism".to_string())));

        let empty = registry.register("", ThemeEntry::new(custom_bundle("Blank")));
        assert_eq!(empty, Err(ThemeError::InvalidKey(String::new())));

        let spaced = registry.register("my theme", ThemeEntry::new(custom_bundle("Spaced")));
        assert!(matches!(spaced, Err(ThemeError::InvalidKey(_))));
    }

    #[test]
    fn test_register_rejects_incomplete_bundle() {
        let mut registry = ThemeRegistry::builtin();
        let mut bundle = custom_bundle("Broken");
        bundle.card_style.clear();

        let result = registry.register("broken", ThemeEntry::new(bundle));
        assert!(matches!(
            result,
            Err(ThemeError::EmptyField { field: "cardStyle", .. })
        ));
        assert!(!registry.contains("broken"));
    }

    // ==========================================================================
    // Resolution Tests
    // ==========================================================================

    #[test]
    fn test_light_first_resolution() {
        let registry = ThemeRegistry::builtin();

        let light = registry.resolve("glassmorphism", Mode::Light).unwrap();
        assert_eq!(light.source, BundleSource::Base);
        assert_eq!(light.bundle.name, "Glassmorphism");

        let dark = registry.resolve("glassmorphism", Mode::Dark).unwrap();
        assert_eq!(dark.source, BundleSource::DarkVariant);
        assert_eq!(dark.bundle.name, "Glassmorphism Dark");
    }

    #[test]
    fn test_dark_first_resolution_inverts() {
        let registry = ThemeRegistry::builtin();

        let light = registry.resolve("liquidGlass", Mode::Light).unwrap();
        assert_eq!(light.source, BundleSource::DarkVariant);
        assert_eq!(light.bundle.name, "Liquid Glass");

        let dark = registry.resolve("liquidGlass", Mode::Dark).unwrap();
        assert_eq!(dark.source, BundleSource::Base);
        assert_eq!(dark.bundle.name, "Liquid Glass Frosted");
    }

    #[test]
    fn test_missing_dark_variant_falls_back() {
        let mut registry = ThemeRegistry::builtin();
        registry
            .register("sunset", ThemeEntry::new(custom_bundle("Sunset")))
            .unwrap();

        let resolved = registry.resolve("sunset", Mode::Dark).unwrap();
        assert!(resolved.is_fallback());
        assert_eq!(resolved.bundle.name, "Sunset");

        let light = registry.resolve("sunset", Mode::Light).unwrap();
        assert!(!light.is_fallback());
    }

    #[test]
    fn test_dark_first_without_variant_falls_back_in_light() {
        let mut registry = ThemeRegistry::builtin();
        registry
            .register(
                "aqua",
                ThemeEntry::new(custom_bundle("Aqua")).with_polarity(Polarity::DarkFirst),
            )
            .unwrap();

        let light = registry.resolve("aqua", Mode::Light).unwrap();
        assert_eq!(light.source, BundleSource::BaseFallback);
        assert_eq!(light.bundle.name, "Aqua");

        let dark = registry.resolve("aqua", Mode::Dark).unwrap();
        assert_eq!(dark.source, BundleSource::Base);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(
            registry.resolve("doesNotExist", Mode::Light),
            Err(ThemeError::NotFound("doesNotExist".to_string()))
        );
        assert!(registry.resolve("Minimalism", Mode::Light).is_err());
    }

    #[test]
    fn test_resolution_carries_finish() {
        let registry = ThemeRegistry::builtin();
        for id in ThemeId::ALL {
            let resolved = registry.resolve(id.as_str(), Mode::Dark).unwrap();
            assert_eq!(resolved.finish, id.finish());
            assert_eq!(resolved.theme_id(), Some(id));
        }
    }

    #[test]
    fn test_resolution_shares_bundles() {
        let registry = ThemeRegistry::builtin();
        let first = registry.resolve("skeuomorphism", Mode::Light).unwrap();
        let second = registry.resolve("skeuomorphism", Mode::Light).unwrap();

        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first.bundle, &second.bundle));
    }

    #[test]
    fn test_global_resolve() {
        let resolved = resolve("neoBrutalism", Mode::Dark).unwrap();
        assert_eq!(resolved.bundle.name, "Neo-Brutalism Dark");
        assert!(std::ptr::eq(ThemeRegistry::global(), ThemeRegistry::global()));
    }

    #[test]
    fn test_resolver_through_arc() {
        let registry: Arc<ThemeRegistry> = Arc::new(ThemeRegistry::builtin());
        let resolved = registry.resolve("claymorphism", Mode::Light).unwrap();
        assert_eq!(resolved.bundle.name, "Claymorphism");
    }
}
