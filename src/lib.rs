//! Vanguard: a themeable component showcase
//!
//! This crate wires the theme registry and the component library together
//! for the command-line entry point and integration tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

pub use vanguard_theme;
pub use vanguard_ui;

use vanguard_theme::ThemeRegistry;
use vanguard_ui::{ShowcaseConfig, ShowcaseSnapshot, ShowcaseState};

/// Showcase state backed by a registry it owns
pub type App = ShowcaseState<Arc<ThemeRegistry>>;

/// Read and parse a JSON configuration file
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<ShowcaseConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = ShowcaseConfig::from_json(&raw)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        custom_themes = config.custom_themes.len(),
        "Loaded config"
    );
    Ok(config)
}

/// Build the registry described by `config` and start a showcase on it
pub fn start(config: &ShowcaseConfig) -> anyhow::Result<App> {
    let registry = Arc::new(
        config
            .build_registry()
            .context("Failed to build theme registry from config")?,
    );
    let selection = config.initial_selection();
    let theme = selection.theme.clone();

    ShowcaseState::with_selection(registry, selection)
        .with_context(|| format!("Failed to start showcase with theme '{theme}'"))
}

/// Snapshot of `showcase` against its own registry
pub fn snapshot(showcase: &App) -> ShowcaseSnapshot {
    ShowcaseSnapshot::capture(showcase, showcase.resolver())
}
