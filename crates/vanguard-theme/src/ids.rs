//! Theme identifiers, light/dark mode, and per-aesthetic control finishes

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

// =============================================================================
// Theme Identifier
// =============================================================================

/// The six canonical design aesthetics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ThemeId {
    /// Clean lines, whitespace, flat colours
    #[default]
    Minimalism,
    /// Hard shadows, thick borders, clashing colours
    NeoBrutalism,
    /// Frosted translucent panes over vivid gradients
    Glassmorphism,
    /// Physical depth, soft extruded shadows
    Skeuomorphism,
    /// Inflated matte shapes with inner shadows
    Claymorphism,
    /// Deep refractive glass on dark backgrounds
    LiquidGlass,
}

impl ThemeId {
    /// Every canonical identifier, in showcase order
    pub const ALL: [ThemeId; 6] = [
        ThemeId::Minimalism,
        ThemeId::NeoBrutalism,
        ThemeId::Glassmorphism,
        ThemeId::Skeuomorphism,
        ThemeId::Claymorphism,
        ThemeId::LiquidGlass,
    ];

    /// The exact, case-sensitive identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Minimalism => "minimalism",
            ThemeId::NeoBrutalism => "neoBrutalism",
            ThemeId::Glassmorphism => "glassmorphism",
            ThemeId::Skeuomorphism => "skeuomorphism",
            ThemeId::Claymorphism => "claymorphism",
            ThemeId::LiquidGlass => "liquidGlass",
        }
    }

    /// How tactile widgets should render under this aesthetic.
    ///
    /// This is the only place an aesthetic is mapped to widget behaviour;
    /// widgets match on [`ControlFinish`] instead of comparing identifiers.
    pub fn finish(&self) -> ControlFinish {
        match self {
            ThemeId::Minimalism | ThemeId::Glassmorphism => ControlFinish::Standard,
            ThemeId::NeoBrutalism => ControlFinish::Brutalist,
            ThemeId::Skeuomorphism => ControlFinish::Tactile,
            ThemeId::Claymorphism => ControlFinish::Clay,
            ThemeId::LiquidGlass => ControlFinish::LiquidGlass,
        }
    }

    /// Which polarity the theme's base bundle has
    pub fn polarity(&self) -> Polarity {
        match self {
            ThemeId::LiquidGlass => Polarity::DarkFirst,
            _ => Polarity::LightFirst,
        }
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ThemeError::NotFound(s.to_string()))
    }
}

// =============================================================================
// Mode
// =============================================================================

/// Light or dark polarity, requested independently of the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Light polarity
    #[default]
    Light,
    /// Dark polarity
    Dark,
}

impl Mode {
    /// The opposite mode
    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    /// Check if this is dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, Mode::Dark)
    }

    /// Get the mode name
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            _ => Err(ThemeError::InvalidMode(s.to_string())),
        }
    }
}

// =============================================================================
// Polarity & Finish
// =============================================================================

/// Visual polarity of a theme's base bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    /// Base bundle is the light look; the dark variant serves dark mode
    #[default]
    LightFirst,
    /// The aesthetic is dark by nature: light mode serves the dark-variant
    /// bundle (the original look) and dark mode serves the base bundle
    DarkFirst,
}

impl Polarity {
    /// The mode served by the dark-variant mapping
    pub fn variant_mode(&self) -> Mode {
        match self {
            Polarity::LightFirst => Mode::Dark,
            Polarity::DarkFirst => Mode::Light,
        }
    }

    /// Get the polarity name
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::LightFirst => "lightFirst",
            Polarity::DarkFirst => "darkFirst",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering family for widgets that fork by aesthetic rather than token value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ControlFinish {
    /// Plain controls coloured by the bundle
    #[default]
    Standard,
    /// Square corners, black outlines, hard offset shadows
    Brutalist,
    /// Extruded neumorphic hardware
    Tactile,
    /// Soft inflated shapes with inner shadows
    Clay,
    /// Translucent glass with glowing indicators
    LiquidGlass,
}
