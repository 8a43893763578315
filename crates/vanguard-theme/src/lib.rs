//! Vanguard theme tokens
//!
//! Six design aesthetics, each expressed as a pair of [`TokenBundle`]s (base and
//! dark variant), kept in a [`ThemeRegistry`] and turned into concrete bundles
//! by a [`ThemeResolver`].
//!
//! Resolution happens once per selection change; the resulting
//! [`ResolvedTheme`] is passed down to components as a plain value.
//!
//! ```rust
//! use vanguard_theme::{Mode, ThemeRegistry, ThemeResolver};
//!
//! let registry = ThemeRegistry::builtin();
//! let theme = registry.resolve("liquidGlass", Mode::Light).unwrap();
//! assert_eq!(theme.bundle.name, "Liquid Glass");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod builtin;
pub mod error;
pub mod ids;
pub mod registry;
pub mod schema;

pub use builder::{ThemeOverrides, TokenBundleBuilder};
pub use error::{Result, ThemeError};
pub use ids::{ControlFinish, Mode, Polarity, ThemeId};
pub use registry::{resolve, BundleSource, ResolvedTheme, ThemeEntry, ThemeRegistry, ThemeResolver};
pub use schema::{primary_directive, BundleLoadError, Style, TokenBundle};
