//! Showcase navigation and selection state
//!
//! [`ShowcaseState`] owns the top-level selection (theme key, mode, view),
//! the theme resolved for that selection, and the interactive state of the
//! component library. Every selection change that affects theming resolves
//! exactly once and swaps the resolved theme as a whole value; components
//! receive it by reference and never resolve on their own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vanguard_theme::{ControlFinish, Mode, ResolvedTheme, ThemeRegistry, ThemeResolver, TokenBundle};

use crate::catalog::{self, DEFAULT_COMPONENT};
use crate::components::Tabs;
use crate::error::{Result, UiError};
use crate::feedback::{AlertDialog, CommandPalette, Dialog, Drawer, Toast, ToastQueue};
use crate::forms::{aesthetic_options, Checkbox, Combobox, InputOtp, RadioGroup, Select, Slider, Switch};
use crate::tactile::{Fader, TactileToggle};

// =============================================================================
// Views
// =============================================================================

/// Top-level pages of the showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Aesthetic picker
    #[default]
    Landing,
    /// Design philosophy notes
    Context,
    /// Component library
    Library,
    /// Usage documentation
    Documentation,
    /// Framework integration guide
    Integration,
}

impl View {
    /// Every view, in footer order
    pub const ALL: [View; 5] = [
        View::Landing,
        View::Context,
        View::Library,
        View::Documentation,
        View::Integration,
    ];

    /// Views linked from the header
    pub const HEADER: [View; 3] = [View::Landing, View::Context, View::Library];

    /// Route name
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Context => "context",
            View::Library => "library",
            View::Documentation => "documentation",
            View::Integration => "integration",
        }
    }

    /// Header link text
    pub fn label(&self) -> &'static str {
        match self {
            View::Landing => "Home",
            View::Context => "Philosophy",
            View::Library => "Library",
            View::Documentation => "Documentation",
            View::Integration => "Integration",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| UiError::UnknownView(s.to_string()))
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Theme key used before the user picks one
pub const DEFAULT_THEME: &str = "minimalism";

/// What the user has chosen at the top level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selection {
    /// Registry key of the active theme
    pub theme: String,
    /// Requested polarity
    pub mode: Mode,
    /// Current page
    pub view: View,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            mode: Mode::default(),
            view: View::default(),
        }
    }
}

// =============================================================================
// Library State
// =============================================================================

/// Interactive state of the component library demos
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryState {
    /// Component currently shown
    pub active_component: String,
    /// Sidebar filter text
    pub sidebar_search: String,
    /// Switch demo
    pub switch: Switch,
    /// Checkbox demo
    pub checkbox: Checkbox,
    /// Slider demo
    pub slider: Slider,
    /// Tabs demo
    pub tabs: Tabs,
    /// Select demo
    pub select: Select,
    /// Radio group demo
    pub radio: RadioGroup,
    /// Fader demo
    pub fader: Fader,
    /// Latching toggle demo
    pub toggle: TactileToggle,
    /// One-time password demo
    pub otp: InputOtp,
    /// Combobox demo
    pub combobox: Combobox,
    /// Command palette demo
    pub command: CommandPalette,
    /// Dialog demo
    pub dialog: Dialog,
    /// Alert dialog demo
    pub alert_dialog: AlertDialog,
    /// Drawer demo
    pub drawer: Drawer,
    /// Toasts raised from the toast demo
    pub toasts: ToastQueue,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self {
            active_component: DEFAULT_COMPONENT.to_string(),
            sidebar_search: String::new(),
            switch: Switch::new(true),
            checkbox: Checkbox::new()
                .checked(true)
                .with_label("Enable aesthetic shifting"),
            slider: Slider::new(40.0),
            tabs: Tabs::new([
                ("account", "Account"),
                ("password", "Password"),
                ("settings", "Settings"),
            ]),
            select: Select {
                options: aesthetic_options(),
                value: "vanguard".to_string(),
            },
            radio: RadioGroup {
                options: aesthetic_options(),
                value: "vanguard".to_string(),
            },
            fader: Fader::new("LEVEL", 70.0),
            toggle: TactileToggle::new("POWER"),
            otp: InputOtp::default(),
            combobox: Combobox::new(aesthetic_options()),
            command: CommandPalette::default(),
            dialog: Dialog::new("Aesthetic Override").with_description(
                "This modal inherits the active token ecosystem. Notice the backdrop and framing.",
            ),
            alert_dialog: AlertDialog::new(
                "Are you absolutely sure?",
                "This action cannot be undone. This will permanently delete your project and remove your data from our servers.",
            ),
            drawer: Drawer::new("Mobile Experience"),
            toasts: ToastQueue::new(),
        }
    }
}

impl LibraryState {
    /// Sidebar categories narrowed by the current search
    pub fn sidebar(&self) -> Vec<catalog::CategoryMatch> {
        catalog::search(&self.sidebar_search)
    }

    /// Raise the demo toast, returning its id
    pub fn trigger_toast(&mut self) -> String {
        let toast = Toast::theme_applied();
        let id = toast.id.clone();
        self.toasts.push(toast);
        id
    }
}

// =============================================================================
// Showcase State
// =============================================================================

/// Top-level state: selection, resolved theme, and library demos
#[derive(Debug)]
pub struct ShowcaseState<R: ThemeResolver = &'static ThemeRegistry> {
    resolver: R,
    selection: Selection,
    theme: ResolvedTheme,
    library: LibraryState,
}

impl ShowcaseState<&'static ThemeRegistry> {
    /// Default selection against the builtin registry
    pub fn builtin() -> Result<Self> {
        Self::new(ThemeRegistry::global())
    }
}

impl<R: ThemeResolver> ShowcaseState<R> {
    /// Start from the default selection
    pub fn new(resolver: R) -> Result<Self> {
        Self::with_selection(resolver, Selection::default())
    }

    /// Start from `selection`. The theme is resolved once up front.
    pub fn with_selection(resolver: R, selection: Selection) -> Result<Self> {
        let theme = resolver.resolve(&selection.theme, selection.mode)?;
        Ok(Self {
            resolver,
            selection,
            theme,
            library: LibraryState::default(),
        })
    }

    /// Current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Theme resolved for the current selection
    pub fn theme(&self) -> &ResolvedTheme {
        &self.theme
    }

    /// Shortcut to the resolved bundle
    pub fn bundle(&self) -> &TokenBundle {
        &self.theme.bundle
    }

    /// Finish for tactile widgets under the current theme
    pub fn finish(&self) -> ControlFinish {
        self.theme.finish
    }

    /// Current page
    pub fn view(&self) -> View {
        self.selection.view
    }

    /// Requested polarity
    pub fn mode(&self) -> Mode {
        self.selection.mode
    }

    /// Library demo state
    pub fn library(&self) -> &LibraryState {
        &self.library
    }

    /// Mutable library demo state
    pub fn library_mut(&mut self) -> &mut LibraryState {
        &mut self.library
    }

    /// The resolver this state was built with
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Pick a theme and open the library.
    ///
    /// On error the previous selection and theme are kept.
    pub fn select_theme(&mut self, key: &str) -> Result<&ResolvedTheme> {
        let theme = self.resolver.resolve(key, self.selection.mode)?;
        tracing::info!(key, bundle = %theme.bundle.name, "Theme selected");

        self.theme = theme;
        self.selection.theme = key.to_string();
        self.selection.view = View::Library;
        Ok(&self.theme)
    }

    /// Request a polarity. Re-resolves only when the mode changes.
    pub fn set_mode(&mut self, mode: Mode) -> Result<&ResolvedTheme> {
        if mode != self.selection.mode {
            self.theme = self.resolver.resolve(&self.selection.theme, mode)?;
            self.selection.mode = mode;
        }
        Ok(&self.theme)
    }

    /// Flip between light and dark
    pub fn toggle_mode(&mut self) -> Result<&ResolvedTheme> {
        self.set_mode(self.selection.mode.toggled())
    }

    /// Change page. Theming is unaffected.
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = %self.selection.view, to = %view, "Navigate");
        self.selection.view = view;
    }

    /// Show a library component. Ids outside the catalog are rejected.
    pub fn select_component(&mut self, id: &str) -> Result<()> {
        if !catalog::contains(id) {
            return Err(UiError::UnknownComponent(id.to_string()));
        }
        self.library.active_component = id.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use vanguard_theme::{ThemeError, ThemeId};

    mock! {
        Resolver {}

        impl ThemeResolver for Resolver {
            fn resolve(&self, key: &str, mode: Mode) -> vanguard_theme::Result<ResolvedTheme>;
        }
    }

    fn passthrough(key: &str, mode: Mode) -> vanguard_theme::Result<ResolvedTheme> {
        ThemeRegistry::global().resolve(key, mode)
    }

    // ==========================================================================
    // View Tests
    // ==========================================================================

    #[test]
    fn test_view_parse() {
        assert_eq!("library".parse::<View>().unwrap(), View::Library);
        assert_eq!(View::default(), View::Landing);
        assert!(matches!(
            "settings".parse::<View>(),
            Err(UiError::UnknownView(v)) if v == "settings"
        ));
    }

    #[test]
    fn test_view_serde() {
        assert_eq!(serde_json::to_string(&View::Documentation).unwrap(), "\"documentation\"");
        let view: View = serde_json::from_str("\"context\"").unwrap();
        assert_eq!(view, View::Context);
    }

    #[test]
    fn test_selection_defaults() {
        let selection: Selection = serde_json::from_str("{}").unwrap();
        assert_eq!(selection, Selection::default());
        assert_eq!(selection.theme, "minimalism");
        assert_eq!(selection.mode, Mode::Light);
        assert_eq!(selection.view, View::Landing);
    }

    // ==========================================================================
    // Selection Tests
    // ==========================================================================

    #[test]
    fn test_builtin_starts_on_minimalism() {
        let state = ShowcaseState::builtin().unwrap();
        assert_eq!(state.bundle().name, "Minimalism");
        assert_eq!(state.view(), View::Landing);
        assert_eq!(state.theme().theme_id(), Some(ThemeId::Minimalism));
    }

    #[test]
    fn test_select_theme_resolves_once() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .withf(|key, _| key.to_string() == "minimalism")
            .times(1)
            .returning(passthrough);
        resolver
            .expect_resolve()
            .withf(|key, mode| key.to_string() == "glassmorphism" && *mode == Mode::Light)
            .times(1)
            .returning(passthrough);

        let mut state = ShowcaseState::new(resolver).unwrap();
        let before = state.theme().bundle.clone();

        let theme = state.select_theme("glassmorphism").unwrap();
        assert_eq!(theme.bundle.name, "Glassmorphism");
        assert_ne!(theme.bundle.card_style, before.card_style);
        assert_eq!(state.view(), View::Library);
        assert_eq!(state.selection().theme, "glassmorphism");
    }

    #[test]
    fn test_select_unknown_theme_keeps_state() {
        let mut state = ShowcaseState::builtin().unwrap();
        state.navigate(View::Context);

        let err = state.select_theme("vaporwave").unwrap_err();
        assert!(matches!(err, UiError::Theme(ThemeError::NotFound(_))));
        assert_eq!(state.selection().theme, "minimalism");
        assert_eq!(state.view(), View::Context);
        assert_eq!(state.bundle().name, "Minimalism");
    }

    #[test]
    fn test_toggle_mode_resolves_once() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .withf(|_, mode| *mode == Mode::Light)
            .times(1)
            .returning(passthrough);
        resolver
            .expect_resolve()
            .withf(|_, mode| *mode == Mode::Dark)
            .times(1)
            .returning(passthrough);

        let mut state = ShowcaseState::new(resolver).unwrap();
        let theme = state.toggle_mode().unwrap();
        assert_eq!(theme.bundle.name, "Minimalism Dark");
        assert_eq!(state.mode(), Mode::Dark);
    }

    #[test]
    fn test_set_same_mode_skips_resolution() {
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().times(1).returning(passthrough);

        let mut state = ShowcaseState::new(resolver).unwrap();
        state.set_mode(Mode::Light).unwrap();
        assert_eq!(state.mode(), Mode::Light);
    }

    #[test]
    fn test_navigate_does_not_resolve() {
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().times(1).returning(passthrough);

        let mut state = ShowcaseState::new(resolver).unwrap();
        for view in View::ALL {
            state.navigate(view);
            assert_eq!(state.view(), view);
        }
    }

    #[test]
    fn test_liquid_glass_finish_follows_selection() {
        let mut state = ShowcaseState::builtin().unwrap();
        assert_eq!(state.finish(), ControlFinish::Standard);
        state.select_theme("liquidGlass").unwrap();
        assert_eq!(state.finish(), ControlFinish::LiquidGlass);
    }

    // ==========================================================================
    // Library Tests
    // ==========================================================================

    #[test]
    fn test_library_defaults() {
        let library = LibraryState::default();
        assert_eq!(library.active_component, "button");
        assert!(library.switch.checked);
        assert!(library.checkbox.checked);
        assert_eq!(library.slider.value(), 40);
        assert!(library.tabs.is_active("account"));
        assert_eq!(library.select.value, "vanguard");
        assert_eq!(library.radio.value, "vanguard");
        assert_eq!(library.fader.value(), 70);
        assert!(!library.toggle.active);
        assert!(library.otp.value().is_empty());
        assert!(library.combobox.value.is_empty());
        assert!(library.toasts.is_empty());
    }

    #[test]
    fn test_select_component() {
        let mut state = ShowcaseState::builtin().unwrap();
        state.select_component("knobs").unwrap();
        assert_eq!(state.library().active_component, "knobs");

        let err = state.select_component("hologram").unwrap_err();
        assert!(matches!(err, UiError::UnknownComponent(id) if id == "hologram"));
        assert_eq!(state.library().active_component, "knobs");
    }

    #[test]
    fn test_sidebar_follows_search() {
        let mut state = ShowcaseState::builtin().unwrap();
        state.library_mut().sidebar_search = "knob".to_string();
        let sidebar = state.library().sidebar();
        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar[0].name, "Tactile Lab");
    }

    #[test]
    fn test_trigger_toast() {
        let mut library = LibraryState::default();
        let id = library.trigger_toast();
        assert_eq!(library.toasts.len(), 1);
        assert_eq!(library.toasts.visible()[0].title, "Reality Shifting Success");
        assert!(library.toasts.dismiss(&id).is_some());
    }
}
