//! Custom theme construction
//!
//! Custom themes are derived from an existing bundle by overriding individual
//! fields. The result is validated against the full schema, so an override
//! that blanks a required field is rejected instead of producing a partial
//! bundle.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::TokenBundle;

/// Builds a [`TokenBundle`] field by field, starting from an existing bundle
#[derive(Debug, Clone)]
pub struct TokenBundleBuilder {
    bundle: TokenBundle,
}

macro_rules! setters {
    ($($(#[$doc:meta])* $setter:ident => $field:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $setter(mut self, value: impl Into<String>) -> Self {
                self.bundle.$field = value.into();
                self
            }
        )*
    };
}

impl TokenBundleBuilder {
    /// Start from a copy of `bundle`
    pub fn from_bundle(bundle: &TokenBundle) -> Self {
        Self {
            bundle: bundle.clone(),
        }
    }

    setters! {
        /// Set the display name
        with_name => name;
        /// Set the page background
        with_background => background;
        /// Set the primary text style
        with_text_style => text_style;
        /// Set the muted text style
        with_muted_text_style => muted_text_style;
        /// Set the accent style
        with_accent_style => accent_style;
        /// Set the card style
        with_card_style => card_style;
        /// Set the popover style
        with_popover_style => popover_style;
        /// Set the primary button style
        with_primary_button_style => primary_button_style;
        /// Set the secondary button style
        with_secondary_button_style => secondary_button_style;
        /// Set the input style
        with_input_style => input_style;
        /// Set the badge style
        with_badge_style => badge_style;
        /// Set the separator style
        with_separator_style => separator_style;
        /// Set the active tab style
        with_active_tab_style => active_tab_style;
        /// Set the inactive tab style
        with_inactive_tab_style => inactive_tab_style;
        /// Set the footer style
        with_footer_style => footer_style;
        /// Set the description
        with_description => description;
    }

    /// Clear the stable id. Derived themes are not the aesthetic they extend.
    pub fn without_id(mut self) -> Self {
        self.bundle.id = None;
        self
    }

    /// Validate and return the finished bundle
    pub fn build(self) -> Result<TokenBundle> {
        self.bundle.validate()?;
        Ok(self.bundle)
    }
}

/// Field overrides for a custom theme, as read from configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOverrides {
    /// Display name
    pub name: Option<String>,
    /// Page background
    pub background: Option<String>,
    /// Primary text
    pub text_style: Option<String>,
    /// Muted text
    pub muted_text_style: Option<String>,
    /// Accent surfaces
    pub accent_style: Option<String>,
    /// Card surfaces
    pub card_style: Option<String>,
    /// Floating surfaces
    pub popover_style: Option<String>,
    /// Primary button
    pub primary_button_style: Option<String>,
    /// Secondary button
    pub secondary_button_style: Option<String>,
    /// Text inputs
    pub input_style: Option<String>,
    /// Badges
    pub badge_style: Option<String>,
    /// Dividers
    pub separator_style: Option<String>,
    /// Selected tab
    pub active_tab_style: Option<String>,
    /// Unselected tab
    pub inactive_tab_style: Option<String>,
    /// Footer
    pub footer_style: Option<String>,
    /// Description
    pub description: Option<String>,
}

impl ThemeOverrides {
    /// Check if no field is overridden
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the overrides on top of `base` and validate the result
    pub fn apply(&self, base: &TokenBundle) -> Result<TokenBundle> {
        let overrides = self;
        let mut builder = TokenBundleBuilder::from_bundle(base).without_id();

        macro_rules! apply {
            ($($field:ident => $setter:ident),* $(,)?) => {
                $(
                    if let Some(value) = &overrides.$field {
                        builder = builder.$setter(value.as_str());
                    }
                )*
            };
        }

        apply! {
            name => with_name,
            background => with_background,
            text_style => with_text_style,
            muted_text_style => with_muted_text_style,
            accent_style => with_accent_style,
            card_style => with_card_style,
            popover_style => with_popover_style,
            primary_button_style => with_primary_button_style,
            secondary_button_style => with_secondary_button_style,
            input_style => with_input_style,
            badge_style => with_badge_style,
            separator_style => with_separator_style,
            active_tab_style => with_active_tab_style,
            inactive_tab_style => with_inactive_tab_style,
            footer_style => with_footer_style,
            description => with_description,
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::base_bundle;
    use crate::error::ThemeError;
    use crate::ids::ThemeId;

    #[test]
    fn test_builder_overrides_fields() {
        let base = base_bundle(ThemeId::Minimalism);
        let bundle = TokenBundleBuilder::from_bundle(&base)
            .with_name("Paper")
            .with_background("bg-[#F5F0E6]")
            .build()
            .unwrap();

        assert_eq!(bundle.name, "Paper");
        assert_eq!(bundle.background, "bg-[#F5F0E6]");
        assert_eq!(bundle.card_style, base.card_style);
    }

    #[test]
    fn test_builder_rejects_blank_field() {
        let base = base_bundle(ThemeId::NeoBrutalism);
        let result = TokenBundleBuilder::from_bundle(&base)
            .with_name("Hollow")
            .with_input_style("  ")
            .build();

        assert_eq!(
            result,
            Err(ThemeError::EmptyField {
                theme: "Hollow".to_string(),
                field: "inputStyle",
            })
        );
    }

    #[test]
    fn test_overrides_apply_and_drop_id() {
        let base = base_bundle(ThemeId::LiquidGlass);
        let overrides = ThemeOverrides {
            name: Some("Aqua".to_string()),
            accent_style: Some("bg-cyan-400 text-white".to_string()),
            ..Default::default()
        };

        let bundle = overrides.apply(&base).unwrap();
        assert_eq!(bundle.name, "Aqua");
        assert_eq!(bundle.accent_style, "bg-cyan-400 text-white");
        assert_eq!(bundle.footer_style, base.footer_style);
        assert_eq!(bundle.id, None);
    }

    #[test]
    fn test_empty_overrides_clone_base() {
        let base = base_bundle(ThemeId::Claymorphism);
        let overrides = ThemeOverrides::default();

        assert!(overrides.is_empty());
        assert_eq!(overrides.apply(&base).unwrap(), base);
    }

    #[test]
    fn test_overrides_deserialize_camel_case() {
        let overrides: ThemeOverrides =
            serde_json::from_str(r#"{"name": "Mint", "primaryButtonStyle": "bg-emerald-400"}"#)
                .unwrap();

        assert_eq!(overrides.name.as_deref(), Some("Mint"));
        assert_eq!(overrides.primary_button_style.as_deref(), Some("bg-emerald-400"));
        assert!(overrides.card_style.is_none());
    }

    #[test]
    fn test_overrides_reject_blanking() {
        let base = base_bundle(ThemeId::Skeuomorphism);
        let overrides = ThemeOverrides {
            footer_style: Some(String::new()),
            ..Default::default()
        };

        assert!(matches!(
            overrides.apply(&base),
            Err(ThemeError::EmptyField { field: "footerStyle", .. })
        ));
    }
}
