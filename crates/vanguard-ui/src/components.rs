//! General and layout components
//!
//! Every component here is a plain props struct. Calling `computed_styles`
//! with the active [`TokenBundle`] yields the merged class string for each
//! visual slot. Components read the bundle and never mutate it.

use serde::{Deserialize, Serialize};
use vanguard_theme::{ControlFinish, TokenBundle};

use crate::classes::{merge_classes, ClassList};
use crate::error::{Result, UiError};

// =============================================================================
// Button Component
// =============================================================================

const BUTTON_BASE: &str = "inline-flex items-center justify-center font-medium transition-all active:scale-95 disabled:opacity-50 disabled:cursor-not-allowed";

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// The bundle's primary button
    #[default]
    Primary,
    /// The bundle's secondary button
    Secondary,
    /// Secondary button with a transparent fill
    Outline,
    /// Text-only button
    Ghost,
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Compact
    Sm,
    /// Standard
    #[default]
    Md,
    /// Large call to action
    Lg,
    /// Square icon button
    Icon,
}

impl ButtonSize {
    /// Sizing classes
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-1.5 text-xs",
            ButtonSize::Md => "px-5 py-2 sm:py-3 text-sm",
            ButtonSize::Lg => "px-8 py-3 sm:py-4 text-base",
            ButtonSize::Icon => "w-10 h-10 flex items-center justify-center p-0",
        }
    }
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Visible label
    pub label: String,
    /// Style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Size
    #[serde(default)]
    pub size: ButtonSize,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Extra classes merged last
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Button {
    /// Create a primary, medium button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            class_name: None,
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Append extra classes
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Classes contributed by the variant alone
    pub fn variant_classes(variant: ButtonVariant, theme: &TokenBundle) -> String {
        match variant {
            ButtonVariant::Primary => theme.primary_button_style.clone(),
            ButtonVariant::Secondary => theme.secondary_button_style.clone(),
            ButtonVariant::Outline => merge_classes(&[
                &theme.secondary_button_style,
                "bg-transparent border-current opacity-70 hover:opacity-100",
            ]),
            ButtonVariant::Ghost => merge_classes(&[
                "bg-transparent hover:bg-black/5 dark:hover:bg-white/5",
                &theme.text_style,
                "opacity-60 hover:opacity-100 border-none shadow-none",
            ]),
        }
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> ButtonStyles {
        let root = ClassList::new()
            .push(BUTTON_BASE)
            .push(Self::variant_classes(self.variant, theme))
            .push(self.size.classes())
            .push_opt(self.class_name.as_deref())
            .build();

        ButtonStyles { root }
    }
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStyles {
    /// Button element
    pub root: String,
}

// =============================================================================
// Badge Component
// =============================================================================

/// Badge variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// The bundle's badge style
    #[default]
    Default,
    /// Transparent badge with a current-colour border
    Outline,
    /// The bundle's accent
    Accent,
}

/// Badge component properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge text
    pub text: String,
    /// Variant
    #[serde(default)]
    pub variant: BadgeVariant,
}

impl Badge {
    /// Create a default badge
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::default(),
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> BadgeStyles {
        let variant = match self.variant {
            BadgeVariant::Default => theme.badge_style.clone(),
            BadgeVariant::Outline => {
                merge_classes(&[&theme.badge_style, "bg-transparent border-current opacity-70"])
            }
            BadgeVariant::Accent => theme.accent_style.clone(),
        };

        BadgeStyles {
            root: merge_classes(&[
                "inline-flex items-center font-bold px-2.5 py-0.5 text-[10px] sm:text-xs transition-colors",
                &variant,
            ]),
        }
    }
}

/// Computed badge styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeStyles {
    /// Badge element
    pub root: String,
}

// =============================================================================
// Card Component
// =============================================================================

/// Card with optional header text and footer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Header title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Header description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether a footer row is rendered
    #[serde(default)]
    pub has_footer: bool,
    /// Extra classes merged into the card root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Card {
    /// Create an empty card
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the header description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Render a footer row
    pub fn with_footer(mut self) -> Self {
        self.has_footer = true;
        self
    }

    /// Append extra classes to the root
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> CardStyles {
        CardStyles {
            root: ClassList::new()
                .push("bg-white border rounded-lg overflow-hidden")
                .push(&theme.card_style)
                .push_opt(self.class_name.as_deref())
                .build(),
            header: "p-6 pb-3".to_string(),
            title: merge_classes(&["text-lg font-bold", &theme.text_style]),
            description: merge_classes(&["text-sm opacity-60", &theme.text_style]),
            content: "p-6 pt-0".to_string(),
            footer: self
                .has_footer
                .then(|| "p-6 pt-0 flex items-center".to_string()),
        }
    }
}

/// Computed card styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStyles {
    /// Card container
    pub root: String,
    /// Header block
    pub header: String,
    /// Header title
    pub title: String,
    /// Header description
    pub description: String,
    /// Body block
    pub content: String,
    /// Footer row, when rendered
    pub footer: Option<String>,
}

// =============================================================================
// Input Component
// =============================================================================

/// Single-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    /// Current value
    #[serde(default)]
    pub value: String,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Extra classes merged last
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Input {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Append extra classes
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> InputStyles {
        InputStyles {
            root: ClassList::new()
                .push("w-full px-4 py-2 text-sm outline-none transition-all placeholder:opacity-50")
                .push(&theme.input_style)
                .push_opt(self.class_name.as_deref())
                .build(),
        }
    }
}

/// Computed input styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStyles {
    /// Input element
    pub root: String,
}

// =============================================================================
// Separator Component
// =============================================================================

/// Separator direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Full-width rule
    #[default]
    Horizontal,
    /// Full-height rule
    Vertical,
}

/// Thin divider line in the current text colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separator {
    /// Direction
    #[serde(default)]
    pub orientation: Orientation,
}

impl Separator {
    /// Horizontal separator
    pub fn horizontal() -> Self {
        Self {
            orientation: Orientation::Horizontal,
        }
    }

    /// Vertical separator
    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
        }
    }

    /// Compute styles. Brutalist finishes draw a heavier, opaque rule.
    pub fn computed_styles(&self, theme: &TokenBundle, finish: ControlFinish) -> SeparatorStyles {
        let brutalist = finish == ControlFinish::Brutalist;
        let shape = match (self.orientation, brutalist) {
            (Orientation::Horizontal, false) => "h-[1px] w-full",
            (Orientation::Vertical, false) => "h-full w-[1px]",
            (Orientation::Horizontal, true) => "h-[2px] w-full",
            (Orientation::Vertical, true) => "h-full w-[2px] opacity-100",
        };

        SeparatorStyles {
            root: merge_classes(&[&theme.text_style, "shrink-0 bg-current opacity-10", shape]),
        }
    }
}

/// Computed separator styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparatorStyles {
    /// Rule element
    pub root: String,
}

// =============================================================================
// Tabs Component
// =============================================================================

/// A single tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabItem {
    /// Stable id
    pub id: String,
    /// Visible label
    pub label: String,
}

/// Tab strip with one active tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tabs {
    /// Tabs in display order
    pub items: Vec<TabItem>,
    /// Id of the active tab
    pub active: String,
}

impl Tabs {
    /// Create tabs from `(id, label)` pairs, activating the first
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let items: Vec<TabItem> = items
            .into_iter()
            .map(|(id, label)| TabItem {
                id: id.into(),
                label: label.into(),
            })
            .collect();
        let active = items.first().map(|t| t.id.clone()).unwrap_or_default();
        Self { items, active }
    }

    /// Activate a tab by id. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: &str) -> bool {
        if self.items.iter().any(|t| t.id == id) {
            self.active = id.to_string();
            true
        } else {
            false
        }
    }

    /// Whether `id` is the active tab
    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> TabsStyles {
        let active = merge_classes(&[
            "px-4 py-2 text-sm font-medium transition-all -mb-px",
            &theme.active_tab_style,
            "hover:opacity-100",
        ]);
        let inactive = merge_classes(&[
            "px-4 py-2 text-sm font-medium transition-all -mb-px",
            &theme.inactive_tab_style,
            "bg-transparent border-transparent",
            "hover:opacity-100",
        ]);

        TabsStyles {
            list: merge_classes(&["flex space-x-1 border-b", &theme.separator_style]),
            tabs: self
                .items
                .iter()
                .map(|tab| {
                    let is_active = self.is_active(&tab.id);
                    TabStyle {
                        id: tab.id.clone(),
                        active: is_active,
                        classes: if is_active { active.clone() } else { inactive.clone() },
                    }
                })
                .collect(),
        }
    }
}

/// Styles for one tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStyle {
    /// Tab id
    pub id: String,
    /// Whether the tab is active
    pub active: bool,
    /// Tab classes
    pub classes: String,
}

/// Computed tab strip styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabsStyles {
    /// Strip container
    pub list: String,
    /// Per-tab classes in display order
    pub tabs: Vec<TabStyle>,
}

// =============================================================================
// Aspect Ratio
// =============================================================================

/// Box that keeps a width:height ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectRatio {
    ratio: f64,
}

impl AspectRatio {
    /// Create a box with the given width / height ratio
    pub fn new(ratio: f64) -> Result<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(UiError::InvalidValue {
                field: "ratio",
                reason: format!("must be a positive number, got {ratio}"),
            });
        }
        Ok(Self { ratio })
    }

    /// The width / height ratio
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Bottom padding that produces the ratio, as a percentage of width
    pub fn padding_bottom_percent(&self) -> f64 {
        100.0 / self.ratio
    }

    /// Compute styles
    pub fn computed_styles(&self, theme: &TokenBundle) -> AspectRatioStyles {
        AspectRatioStyles {
            root: "relative w-full".to_string(),
            inner: merge_classes(&["absolute inset-0 overflow-hidden", &theme.card_style]),
            padding_bottom: format!("{}%", self.padding_bottom_percent()),
        }
    }
}

/// Computed aspect-ratio styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatioStyles {
    /// Outer box
    pub root: String,
    /// Content layer
    pub inner: String,
    /// Inline `padding-bottom` value
    pub padding_bottom: String,
}

// =============================================================================
// Resizable
// =============================================================================

/// Dashed container with a drag handle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resizable;

impl Resizable {
    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> ResizableStyles {
        ResizableStyles {
            root: merge_classes(&[
                "relative group border border-dashed border-current opacity-40 hover:opacity-100 transition-opacity p-4",
                &theme.text_style,
            ]),
            handle: "absolute bottom-1 right-1 cursor-se-resize opacity-40 group-hover:opacity-100".to_string(),
        }
    }
}

/// Computed resizable styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizableStyles {
    /// Container
    pub root: String,
    /// Corner handle
    pub handle: String,
}

// =============================================================================
// Scroll Area
// =============================================================================

/// Scrollable region using the custom scrollbar utility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollArea {
    /// Extra classes such as a fixed height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl ScrollArea {
    /// Create a scroll area
    pub fn new() -> Self {
        Self::default()
    }

    /// Append extra classes
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Compute styles
    pub fn computed_styles(&self, theme: &TokenBundle) -> ScrollAreaStyles {
        ScrollAreaStyles {
            root: ClassList::new()
                .push("overflow-auto custom-scrollbar")
                .push_opt(self.class_name.as_deref())
                .build(),
            item: merge_classes(&["text-sm py-2 border-b border-current/10", &theme.text_style]),
        }
    }
}

/// Computed scroll area styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollAreaStyles {
    /// Scroll container
    pub root: String,
    /// Row inside the container
    pub item: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanguard_theme::builtin::{base_bundle, dark_bundle};
    use vanguard_theme::ThemeId;

    // ==========================================================================
    // Button Tests
    // ==========================================================================

    #[test]
    fn test_button_new() {
        let button = Button::new("Click me");
        assert_eq!(button.label, "Click me");
        assert_eq!(button.variant, ButtonVariant::Primary);
        assert_eq!(button.size, ButtonSize::Md);
        assert!(!button.disabled);
    }

    #[test]
    fn test_button_builder() {
        let button = Button::new("Submit")
            .with_variant(ButtonVariant::Outline)
            .with_size(ButtonSize::Sm)
            .disabled(true);

        assert_eq!(button.variant, ButtonVariant::Outline);
        assert_eq!(button.size, ButtonSize::Sm);
        assert!(button.disabled);
    }

    #[test]
    fn test_button_primary_uses_bundle() {
        let theme = base_bundle(ThemeId::Minimalism);
        let styles = Button::new("Go").computed_styles(&theme);

        assert!(styles.root.contains("bg-black"));
        assert!(styles.root.contains("text-white"));
        assert!(styles.root.contains("inline-flex"));
        assert!(styles.root.contains("px-5"));
    }

    #[test]
    fn test_button_outline_is_transparent() {
        let theme = base_bundle(ThemeId::Minimalism);
        let styles = Button::new("Go")
            .with_variant(ButtonVariant::Outline)
            .computed_styles(&theme);

        assert!(styles.root.contains("bg-transparent"));
        assert!(!styles.root.contains("bg-[#FFFCF8]"));
    }

    #[test]
    fn test_button_ghost_drops_shadow() {
        let theme = base_bundle(ThemeId::NeoBrutalism);
        let styles = Button::new("Go")
            .with_variant(ButtonVariant::Ghost)
            .computed_styles(&theme);

        assert!(styles.root.contains("shadow-none"));
        assert!(styles.root.contains("border-none"));
    }

    #[test]
    fn test_button_extra_class_wins() {
        let theme = base_bundle(ThemeId::Minimalism);
        let styles = Button::new("Go")
            .with_class("bg-red-500")
            .computed_styles(&theme);

        assert!(styles.root.contains("bg-red-500"));
        assert!(!styles.root.contains("bg-black"));
    }

    #[test]
    fn test_button_icon_size() {
        let theme = base_bundle(ThemeId::Claymorphism);
        let styles = Button::new("+")
            .with_size(ButtonSize::Icon)
            .computed_styles(&theme);

        assert!(styles.root.contains("w-10"));
        assert!(styles.root.contains("h-10"));
    }

    #[test]
    fn test_button_serialization() {
        let button = Button::new("Go").with_variant(ButtonVariant::Ghost);
        let json = serde_json::to_string(&button).unwrap();
        assert!(json.contains("\"variant\":\"ghost\""));

        let parsed: Button = serde_json::from_str(r#"{"label":"Go"}"#).unwrap();
        assert_eq!(parsed.variant, ButtonVariant::Primary);
    }

    // ==========================================================================
    // Badge / Card / Input Tests
    // ==========================================================================

    #[test]
    fn test_badge_variants() {
        let theme = base_bundle(ThemeId::Minimalism);

        let default = Badge::new("New").computed_styles(&theme);
        assert!(default.root.contains("bg-gray-100"));

        let outline = Badge::new("New")
            .with_variant(BadgeVariant::Outline)
            .computed_styles(&theme);
        assert!(outline.root.contains("bg-transparent"));

        let accent = Badge::new("New")
            .with_variant(BadgeVariant::Accent)
            .computed_styles(&theme);
        assert!(accent.root.contains("bg-black"));
    }

    #[test]
    fn test_card_takes_bundle_surface() {
        let theme = dark_bundle(ThemeId::Minimalism);
        let styles = Card::new().with_title("Settings").computed_styles(&theme);

        assert!(styles.root.contains("bg-[#1A1A1A]"));
        assert!(!styles.root.contains("bg-white"));
        assert!(styles.title.contains("text-gray-100"));
        assert_eq!(styles.footer, None);
    }

    #[test]
    fn test_card_footer() {
        let theme = base_bundle(ThemeId::Glassmorphism);
        let styles = Card::new().with_footer().computed_styles(&theme);
        assert_eq!(styles.footer.as_deref(), Some("p-6 pt-0 flex items-center"));
    }

    #[test]
    fn test_input_uses_input_style() {
        let theme = base_bundle(ThemeId::Minimalism);
        let styles = Input::new().with_placeholder("Email").computed_styles(&theme);

        assert!(styles.root.contains("w-full"));
        assert!(styles.root.contains("focus:ring-black"));
    }

    // ==========================================================================
    // Separator Tests
    // ==========================================================================

    #[test]
    fn test_separator_standard() {
        let theme = base_bundle(ThemeId::Minimalism);
        let styles = Separator::horizontal().computed_styles(&theme, ControlFinish::Standard);
        assert!(styles.root.contains("h-[1px]"));
        assert!(styles.root.contains("opacity-10"));
    }

    #[test]
    fn test_separator_brutalist_is_heavier() {
        let theme = base_bundle(ThemeId::NeoBrutalism);

        let horizontal = Separator::horizontal().computed_styles(&theme, ControlFinish::Brutalist);
        assert!(horizontal.root.contains("h-[2px]"));

        let vertical = Separator::vertical().computed_styles(&theme, ControlFinish::Brutalist);
        assert!(vertical.root.contains("w-[2px]"));
        assert!(vertical.root.contains("opacity-100"));
        assert!(!vertical.root.contains("opacity-10 "));
    }

    // ==========================================================================
    // Tabs Tests
    // ==========================================================================

    #[test]
    fn test_tabs_select() {
        let mut tabs = Tabs::new([("account", "Account"), ("password", "Password")]);
        assert!(tabs.is_active("account"));

        assert!(tabs.select("password"));
        assert!(tabs.is_active("password"));

        assert!(!tabs.select("billing"));
        assert!(tabs.is_active("password"));
    }

    #[test]
    fn test_tabs_styles() {
        let theme = base_bundle(ThemeId::Minimalism);
        let tabs = Tabs::new([("account", "Account"), ("password", "Password")]);
        let styles = tabs.computed_styles(&theme);

        assert!(styles.list.contains("bg-gray-200"));
        assert!(styles.tabs[0].active);
        assert!(styles.tabs[0].classes.contains("border-black"));
        assert!(!styles.tabs[1].active);
        assert!(styles.tabs[1].classes.contains("border-transparent"));
        assert!(styles.tabs[1].classes.contains("text-gray-500"));
    }

    #[test]
    fn test_tabs_empty() {
        let tabs = Tabs::new(Vec::<(String, String)>::new());
        assert_eq!(tabs.active, "");
        assert!(tabs.computed_styles(&base_bundle(ThemeId::Minimalism)).tabs.is_empty());
    }

    // ==========================================================================
    // Layout Tests
    // ==========================================================================

    #[test]
    fn test_aspect_ratio_padding() {
        let ratio = AspectRatio::new(16.0 / 9.0).unwrap();
        assert!((ratio.padding_bottom_percent() - 56.25).abs() < 1e-9);

        let square = AspectRatio::new(1.0).unwrap();
        let styles = square.computed_styles(&base_bundle(ThemeId::Minimalism));
        assert_eq!(styles.padding_bottom, "100%");
    }

    #[test]
    fn test_aspect_ratio_rejects_non_positive() {
        assert!(matches!(
            AspectRatio::new(0.0),
            Err(UiError::InvalidValue { field: "ratio", .. })
        ));
        assert!(AspectRatio::new(-1.5).is_err());
        assert!(AspectRatio::new(f64::NAN).is_err());
        assert!(AspectRatio::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_resizable_and_scroll_area() {
        let theme = base_bundle(ThemeId::Skeuomorphism);

        let resizable = Resizable.computed_styles(&theme);
        assert!(resizable.root.contains("border-dashed"));

        let scroll = ScrollArea::new().with_class("h-72").computed_styles(&theme);
        assert_eq!(scroll.root, "overflow-auto custom-scrollbar h-72");
    }
}
