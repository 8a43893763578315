//! Theme Resolution Integration Tests
//!
//! End-to-end checks of the builtin registry and resolver as seen by callers
//! of the `vanguard` crate.

use vanguard::vanguard_theme::builtin::{base_bundle, dark_bundle};
use vanguard::vanguard_theme::{
    resolve, BundleSource, ControlFinish, Mode, ThemeError, ThemeId, ThemeRegistry, ThemeResolver,
};

const MODES: [Mode; 2] = [Mode::Light, Mode::Dark];

/// Every canonical theme resolves to a complete bundle in both modes
#[test]
fn test_every_theme_resolves_complete_bundle() {
    for id in ThemeId::ALL {
        for mode in MODES {
            let theme = resolve(id.as_str(), mode).unwrap();
            for (field, value) in theme.bundle.fields() {
                assert!(
                    !value.trim().is_empty(),
                    "{id} {mode}: field {field} is empty"
                );
            }
            assert!(theme.bundle.validate().is_ok());
            assert!(!theme.is_fallback());
        }
    }
}

/// Light-first themes: light is the base mapping, dark is the dark variant
#[test]
fn test_light_first_mapping_exact() {
    for id in ThemeId::ALL.into_iter().filter(|id| *id != ThemeId::LiquidGlass) {
        let light = resolve(id.as_str(), Mode::Light).unwrap();
        assert_eq!(*light.bundle, base_bundle(id));
        assert_eq!(light.source, BundleSource::Base);

        let dark = resolve(id.as_str(), Mode::Dark).unwrap();
        assert_eq!(*dark.bundle, dark_bundle(id));
        assert_eq!(dark.source, BundleSource::DarkVariant);
    }
}

/// The dark-first aesthetic swaps its mappings
#[test]
fn test_liquid_glass_inversion() {
    let light = resolve("liquidGlass", Mode::Light).unwrap();
    assert_eq!(light.bundle.name, "Liquid Glass");
    assert_eq!(*light.bundle, dark_bundle(ThemeId::LiquidGlass));
    assert_eq!(light.source, BundleSource::DarkVariant);

    let dark = resolve("liquidGlass", Mode::Dark).unwrap();
    assert_eq!(dark.bundle.name, "Liquid Glass Frosted");
    assert_eq!(*dark.bundle, base_bundle(ThemeId::LiquidGlass));
    assert_eq!(dark.source, BundleSource::Base);

    assert_eq!(light.bundle.id, Some(ThemeId::LiquidGlass));
    assert_eq!(light.finish, ControlFinish::LiquidGlass);
}

/// Unknown keys are errors, never a default theme
#[test]
fn test_unknown_theme_is_error() {
    for mode in MODES {
        let err = resolve("doesNotExist", mode).unwrap_err();
        assert_eq!(err, ThemeError::NotFound("doesNotExist".to_string()));
    }
    // Keys are case-sensitive
    assert!(resolve("NeoBrutalism", Mode::Light).is_err());
}

/// Resolving twice gives the same bundle
#[test]
fn test_resolution_idempotent() {
    for id in ThemeId::ALL {
        for mode in MODES {
            let first = resolve(id.as_str(), mode).unwrap();
            let second = resolve(id.as_str(), mode).unwrap();
            assert_eq!(first, second);
        }
    }
}

/// Spot checks on known bundles
#[test]
fn test_known_bundles() {
    let minimal = resolve("minimalism", Mode::Light).unwrap();
    assert_eq!(minimal.bundle.name, "Minimalism");
    assert!(minimal.bundle.background.contains("bg-[#FAF9F6]"));
    assert!(minimal.bundle.text_style.contains("text-gray-900"));

    let brutal = resolve("neoBrutalism", Mode::Dark).unwrap();
    assert_eq!(brutal.bundle.name, "Neo-Brutalism Dark");
    assert_eq!(brutal.finish, ControlFinish::Brutalist);
}

/// A private registry resolves the same as the global one
#[test]
fn test_private_registry_matches_global() {
    let registry = ThemeRegistry::builtin();
    assert!(registry.validate().is_ok());
    assert_eq!(registry.keys().count(), 6);

    for id in ThemeId::ALL {
        for mode in MODES {
            assert_eq!(
                registry.resolve(id.as_str(), mode).unwrap(),
                resolve(id.as_str(), mode).unwrap()
            );
        }
    }
}
