//! Token bundle schema
//!
//! A [`TokenBundle`] is one theme in one polarity: a fixed record of style
//! descriptors. Each descriptor is a space-separated list of atomic style
//! directives (colour, blur, shadow, radius, border, transition) that
//! consumers merge into their own markup.
//!
//! All descriptor fields are required. Deserializing a bundle with a missing
//! field fails, and [`TokenBundle::validate`] rejects blank fields, so a
//! malformed bundle is caught when the registry is built rather than at render
//! time.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::ids::ThemeId;

/// A style descriptor: space-separated atomic style directives
pub type Style = String;

/// The complete set of style descriptors for one theme in one polarity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBundle {
    /// Display name
    pub name: String,
    /// Page background
    pub background: Style,
    /// Primary text
    pub text_style: Style,
    /// Secondary/muted text
    pub muted_text_style: Style,
    /// Accent surfaces (icons, highlighted chips, knobs)
    pub accent_style: Style,
    /// Card surfaces
    pub card_style: Style,
    /// Floating surfaces (menus, popovers)
    pub popover_style: Style,
    /// Primary action button
    pub primary_button_style: Style,
    /// Secondary action button
    pub secondary_button_style: Style,
    /// Text inputs
    pub input_style: Style,
    /// Badges and chips
    pub badge_style: Style,
    /// Divider lines
    pub separator_style: Style,
    /// Selected tab
    pub active_tab_style: Style,
    /// Unselected tab
    pub inactive_tab_style: Style,
    /// Page footer
    pub footer_style: Style,
    /// One-line description of the aesthetic
    pub description: String,
    /// Stable identifier, set only where a lookup needs it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ThemeId>,
}

impl TokenBundle {
    /// Names of every required field, in schema order
    pub const FIELD_NAMES: [&'static str; 16] = [
        "name",
        "background",
        "textStyle",
        "mutedTextStyle",
        "accentStyle",
        "cardStyle",
        "popoverStyle",
        "primaryButtonStyle",
        "secondaryButtonStyle",
        "inputStyle",
        "badgeStyle",
        "separatorStyle",
        "activeTabStyle",
        "inactiveTabStyle",
        "footerStyle",
        "description",
    ];

    /// Every required field paired with its schema name
    pub fn fields(&self) -> [(&'static str, &str); 16] {
        [
            ("name", &self.name),
            ("background", &self.background),
            ("textStyle", &self.text_style),
            ("mutedTextStyle", &self.muted_text_style),
            ("accentStyle", &self.accent_style),
            ("cardStyle", &self.card_style),
            ("popoverStyle", &self.popover_style),
            ("primaryButtonStyle", &self.primary_button_style),
            ("secondaryButtonStyle", &self.secondary_button_style),
            ("inputStyle", &self.input_style),
            ("badgeStyle", &self.badge_style),
            ("separatorStyle", &self.separator_style),
            ("activeTabStyle", &self.active_tab_style),
            ("inactiveTabStyle", &self.inactive_tab_style),
            ("footerStyle", &self.footer_style),
            ("description", &self.description),
        ]
    }

    /// Check that every required field is non-empty
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.fields() {
            if value.trim().is_empty() {
                return Err(ThemeError::EmptyField {
                    theme: self.display_name().to_string(),
                    field,
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a bundle from JSON
    pub fn from_json(json: &str) -> std::result::Result<Self, BundleLoadError> {
        let bundle: TokenBundle = serde_json::from_str(json)?;
        bundle.validate()?;
        Ok(bundle)
    }

    fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "<unnamed>"
        } else {
            &self.name
        }
    }
}

/// Failure to load a bundle from serialized form
#[derive(Debug, thiserror::Error)]
pub enum BundleLoadError {
    /// Malformed JSON or a missing required field
    #[error("Malformed bundle: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed but failed schema validation
    #[error(transparent)]
    Invalid(#[from] ThemeError),
}

/// The first directive of a style descriptor.
///
/// Accent descriptors lead with their fill colour, so this yields a fill that
/// slider ranges and progress bars can reuse.
pub fn primary_directive(style: &str) -> &str {
    style.split_whitespace().next().unwrap_or("")
}

/// Iterate the atomic directives of a style descriptor
pub fn directives(style: &str) -> impl Iterator<Item = &str> {
    style.split_whitespace()
}
