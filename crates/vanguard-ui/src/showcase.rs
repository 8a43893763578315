//! Showcase chrome: demo panels, landing preview cards, and the app frame
//!
//! Everything here reads the resolved theme and returns class strings; the
//! only state is the per-panel code toggle and copy flag.

use serde::Serialize;
use vanguard_theme::{
    BundleSource, ControlFinish, Mode, ResolvedTheme, ThemeId, ThemeRegistry, ThemeResolver,
    TokenBundle,
};

use crate::catalog::{self, DesignContext, ShowcaseInfo, UNDER_CONSTRUCTION};
use crate::classes::{merge_classes, ClassList};
use crate::navigation::{ShowcaseState, View};

// =============================================================================
// Showcase Panel
// =============================================================================

/// A titled demo panel with an optional code listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Showcase {
    /// Heading
    pub title: String,
    /// Blurb under the heading
    pub description: String,
    /// Usage snippet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Whether the code listing is expanded
    pub show_code: bool,
    /// Whether the snippet was just copied
    pub copied: bool,
}

impl Showcase {
    /// Panel without code
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            code: None,
            show_code: false,
            copied: false,
        }
    }

    /// Panel for a catalogued component, or the construction placeholder
    pub fn for_component(id: &str) -> Self {
        match catalog::showcase_info(id) {
            Some(info) => Self::from(info),
            None => Self::new(
                UNDER_CONSTRUCTION,
                format!(
                    "We're currently crafting the \"{}\" component for this specific aesthetic reality.",
                    catalog::label_for(id)
                ),
            ),
        }
    }

    /// Attach a usage snippet
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Whether the panel has a snippet to show
    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }

    /// Expand or collapse the listing. Panels without code stay collapsed.
    pub fn toggle_code(&mut self) -> bool {
        self.show_code = self.has_code() && !self.show_code;
        self.show_code
    }

    /// Mark the snippet as copied and return it for the clipboard
    pub fn copy_code(&mut self) -> Option<&str> {
        let code = self.code.as_deref()?;
        self.copied = true;
        Some(code)
    }

    /// Clear the copied indicator
    pub fn reset_copied(&mut self) {
        self.copied = false;
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> ShowcaseStyles {
        let has_code = self.has_code();
        let control = merge_classes(&[
            "p-2 rounded-lg border transition-all",
            &theme.secondary_button_style,
        ]);

        ShowcaseStyles {
            root: "space-y-6 animate-in fade-in duration-500 mb-20".to_string(),
            title: merge_classes(&["text-3xl font-bold", &theme.text_style]),
            description: merge_classes(&["text-lg opacity-70 max-w-2xl", &theme.text_style]),
            code_toggle: has_code.then(|| {
                ClassList::new()
                    .push(&control)
                    .push_if(self.show_code, &theme.accent_style)
                    .build()
            }),
            copy_button: has_code.then(|| control.clone()),
            copied_icon: self.copied.then(|| "text-emerald-500".to_string()),
            preview: merge_classes(&[
                "p-8 md:p-12 border rounded-xl flex items-center justify-center min-h-[300px] overflow-hidden relative",
                &theme.card_style,
            ]),
            code_panel: (has_code && self.show_code).then(|| {
                merge_classes(&[
                    "p-6 rounded-xl border font-mono text-sm overflow-x-auto relative",
                    &theme.card_style,
                    "bg-black/5",
                ])
            }),
            code_text: theme.text_style.clone(),
        }
    }
}

impl From<ShowcaseInfo> for Showcase {
    fn from(info: ShowcaseInfo) -> Self {
        let showcase = Self::new(info.title, info.description);
        match info.usage {
            Some(usage) => showcase.with_code(usage),
            None => showcase,
        }
    }
}

/// Computed showcase panel styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseStyles {
    /// Panel wrapper
    pub root: String,
    /// Heading
    pub title: String,
    /// Blurb
    pub description: String,
    /// Code toggle button, when there is code
    pub code_toggle: Option<String>,
    /// Copy button, when there is code
    pub copy_button: Option<String>,
    /// Check icon after a copy
    pub copied_icon: Option<String>,
    /// Live preview area
    pub preview: String,
    /// Expanded code listing
    pub code_panel: Option<String>,
    /// Code text
    pub code_text: String,
}

// =============================================================================
// Preview Card
// =============================================================================

/// Landing-page card previewing one aesthetic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewCard {
    /// Registry key selected when the card is clicked
    pub key: String,
    /// Display name
    pub name: String,
    /// Theme blurb
    pub description: String,
    /// Computed styles
    pub styles: PreviewCardStyles,
}

impl PreviewCard {
    /// Card for `bundle` under `finish`
    pub fn new(key: impl Into<String>, bundle: &TokenBundle, finish: ControlFinish) -> Self {
        Self {
            key: key.into(),
            name: bundle.name.clone(),
            description: bundle.description.clone(),
            styles: PreviewCardStyles::new(bundle, finish),
        }
    }

    /// One card per registered theme, from its base bundle, in registry order
    pub fn gallery(registry: &ThemeRegistry) -> Vec<PreviewCard> {
        registry
            .keys()
            .filter_map(|key| {
                let entry = registry.entry(key)?;
                Some(PreviewCard::new(key, &entry.base, entry.finish))
            })
            .collect()
    }
}

/// Computed preview card styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewCardStyles {
    /// Clickable frame
    pub frame: String,
    /// Themed inner surface
    pub surface: String,
    /// Theme name
    pub title: String,
    /// Arrow chip
    pub arrow: String,
    /// Mock card
    pub mock_card: String,
    /// Mock avatar dot
    pub mock_avatar: String,
    /// Mock text lines
    pub mock_line: String,
    /// Mock primary action
    pub action: String,
    /// Mock secondary action
    pub cancel: String,
    /// Mock input
    pub input: String,
    /// Theme blurb
    pub description: String,
}

impl PreviewCardStyles {
    fn new(theme: &TokenBundle, finish: ControlFinish) -> Self {
        let frame_border = match finish {
            ControlFinish::Brutalist => "border-2 border-black shadow-[4px_4px_0px_0px_rgba(0,0,0,1)]",
            _ => "border border-gray-200/50 shadow-lg",
        };

        Self {
            frame: merge_classes(&[
                "relative group cursor-pointer overflow-hidden rounded-xl transition-all duration-500 hover:shadow-2xl hover:scale-[1.02]",
                frame_border,
            ]),
            surface: merge_classes(&["h-80 p-6 flex flex-col gap-4", &theme.background]),
            title: merge_classes(&["text-2xl font-black", &theme.text_style]),
            arrow: merge_classes(&["p-2 rounded-full", &theme.secondary_button_style]),
            mock_card: merge_classes(&["p-4", &theme.card_style, "flex items-center gap-3"]),
            mock_avatar: merge_classes(&["w-8 h-8 rounded-full", &theme.accent_style]),
            mock_line: merge_classes(&["h-2 rounded-full opacity-30 bg-current", &theme.text_style]),
            action: merge_classes(&[
                "px-4 py-2 text-xs flex items-center justify-center",
                &theme.primary_button_style,
            ]),
            cancel: merge_classes(&[
                "px-4 py-2 text-xs flex items-center justify-center",
                &theme.secondary_button_style,
            ]),
            input: merge_classes(&["w-full h-10", &theme.input_style, "flex items-center px-3 opacity-80"]),
            description: merge_classes(&["text-sm opacity-60", &theme.text_style, "line-clamp-2"]),
        }
    }
}

// =============================================================================
// App Chrome
// =============================================================================

/// A header or footer navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLinkStyle {
    /// Target view
    pub view: View,
    /// Link text
    pub label: &'static str,
    /// Whether the link points at the current view
    pub active: bool,
    /// Classes
    pub classes: String,
}

/// Frame around every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeStyles {
    /// App root
    pub root: String,
    /// Sticky header bar
    pub header: String,
    /// Wordmark
    pub brand: String,
    /// Header links
    pub nav: Vec<NavLinkStyle>,
    /// Back-to-landing pill, library view only
    pub change_aesthetic: Option<String>,
    /// Footer, hidden in the library view
    pub footer: Option<String>,
    /// Footer links
    pub footer_links: Vec<NavLinkStyle>,
    /// Glow layers behind the page, liquid-glass finish only
    pub ambient: Vec<String>,
}

impl ChromeStyles {
    /// Chrome for `view` under `theme`
    pub fn new(theme: &ResolvedTheme, view: View) -> Self {
        let bundle = &theme.bundle;
        let in_library = view == View::Library;

        let nav = View::HEADER
            .into_iter()
            .map(|target| {
                let active = target == view;
                NavLinkStyle {
                    view: target,
                    label: target.label(),
                    active,
                    classes: ClassList::new()
                        .push("text-sm font-medium transition-opacity hover:opacity-100")
                        .push(if active { "opacity-100 font-bold" } else { "opacity-60" })
                        .push(&bundle.text_style)
                        .build(),
                }
            })
            .collect();

        let footer_links = if in_library {
            Vec::new()
        } else {
            View::ALL
                .into_iter()
                .map(|target| NavLinkStyle {
                    view: target,
                    label: footer_label(target),
                    active: target == view,
                    classes: "hover:opacity-100 transition-opacity".to_string(),
                })
                .collect()
        };

        let ambient = match theme.finish {
            ControlFinish::LiquidGlass => vec![
                "absolute top-1/4 left-1/4 w-96 h-96 bg-blue-500/20 rounded-full blur-[128px] animate-pulse".to_string(),
                "absolute bottom-1/4 right-1/4 w-96 h-96 bg-cyan-500/20 rounded-full blur-[128px] animate-pulse delay-1000".to_string(),
            ],
            _ => Vec::new(),
        };

        Self {
            root: ClassList::new()
                .push(if in_library { "h-screen overflow-hidden" } else { "min-h-screen" })
                .push("transition-colors duration-500")
                .push(&bundle.background)
                .push("font-sans flex flex-col overflow-x-hidden")
                .build(),
            header: "h-16 border-b border-gray-200/20 flex items-center px-6 justify-between shrink-0 backdrop-blur-sm z-50 sticky top-0"
                .to_string(),
            brand: merge_classes(&[
                "text-xl font-black tracking-tight flex items-center gap-2 cursor-pointer",
                &bundle.text_style,
            ]),
            nav,
            change_aesthetic: in_library.then(|| {
                merge_classes(&[
                    "text-xs font-bold px-4 py-2 rounded-full border border-current flex items-center gap-2 hover:opacity-80 transition-opacity",
                    &bundle.text_style,
                ])
            }),
            footer: (!in_library)
                .then(|| merge_classes(&["py-20 px-6 border-t border-gray-200/10", &bundle.footer_style])),
            footer_links,
            ambient,
        }
    }
}

fn footer_label(view: View) -> &'static str {
    match view {
        View::Library => "Component Lab",
        View::Landing => "Aesthetics",
        other => other.label(),
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// What the current page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum PageSnapshot {
    /// Theme gallery
    Landing {
        /// One card per registered theme
        cards: Vec<PreviewCard>,
    },
    /// Design philosophy for every canonical aesthetic
    Context {
        /// Notes in showcase order
        aesthetics: Vec<DesignContext>,
    },
    /// Component library
    Library {
        /// Active component id
        component: String,
        /// Its demo panel
        showcase: Showcase,
        /// Panel styles under the current theme
        styles: ShowcaseStyles,
    },
    /// Usage documentation
    Documentation,
    /// Framework integration guide
    Integration,
}

/// Serialisable summary of the current showcase page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseSnapshot {
    /// Selected theme key
    pub theme: String,
    /// Display name of the resolved bundle
    pub bundle: String,
    /// Requested mode
    pub mode: Mode,
    /// Tactile finish
    pub finish: ControlFinish,
    /// Which registry slot served the bundle
    pub source: BundleSource,
    /// Frame styles
    pub chrome: ChromeStyles,
    /// Page contents
    pub page: PageSnapshot,
}

impl ShowcaseSnapshot {
    /// Capture `state`; `registry` supplies the landing gallery
    pub fn capture<R: ThemeResolver>(state: &ShowcaseState<R>, registry: &ThemeRegistry) -> Self {
        let theme = state.theme();
        let view = state.view();

        let page = match view {
            View::Landing => PageSnapshot::Landing {
                cards: PreviewCard::gallery(registry),
            },
            View::Context => PageSnapshot::Context {
                aesthetics: ThemeId::ALL
                    .into_iter()
                    .map(|id| *catalog::design_context(id))
                    .collect(),
            },
            View::Library => {
                let component = state.library().active_component.clone();
                let showcase = Showcase::for_component(&component);
                let styles = showcase.computed_styles(&theme.bundle);
                PageSnapshot::Library {
                    component,
                    showcase,
                    styles,
                }
            }
            View::Documentation => PageSnapshot::Documentation,
            View::Integration => PageSnapshot::Integration,
        };

        Self {
            theme: theme.key.clone(),
            bundle: theme.bundle.name.clone(),
            mode: theme.mode,
            finish: theme.finish,
            source: theme.source,
            chrome: ChromeStyles::new(theme, view),
            page,
        }
    }
}
