//! Vanguard command-line entry point
//!
//! Builds the showcase from an optional config file, applies any selection
//! flags, and prints the resulting page snapshot as JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vanguard::vanguard_theme::Mode;
use vanguard::vanguard_ui::{ShowcaseConfig, View};

#[derive(Parser)]
#[command(name = "vanguard")]
#[command(about = "Render a Vanguard showcase page as JSON")]
struct Cli {
    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme key to select
    #[arg(long)]
    theme: Option<String>,

    /// Light or dark
    #[arg(long)]
    mode: Option<Mode>,

    /// Page to show
    #[arg(long)]
    view: Option<View>,

    /// Library component to show
    #[arg(long)]
    component: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => vanguard::load_config(path)?,
        None => ShowcaseConfig::default(),
    };
    let mut showcase = vanguard::start(&config)?;

    if let Some(theme) = &cli.theme {
        showcase.select_theme(theme)?;
    }
    if let Some(mode) = cli.mode {
        showcase.set_mode(mode)?;
    }
    if let Some(component) = &cli.component {
        showcase.select_component(component)?;
        showcase.navigate(View::Library);
    }
    if let Some(view) = cli.view {
        showcase.navigate(view);
    }

    let snapshot = vanguard::snapshot(&showcase);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{json}");
    Ok(())
}
