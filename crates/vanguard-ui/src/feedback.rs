//! Feedback and overlay components
//!
//! Alerts, modal surfaces (dialog, alert dialog, drawer), toasts, tooltips,
//! the floating menu family, collapsibles, and the command palette. Every
//! floating surface takes the bundle's card style so overlays match the
//! page they sit on.

use serde::{Deserialize, Serialize};
use vanguard_theme::{ControlFinish, TokenBundle};

use crate::classes::{merge_classes, ClassList};
use crate::components::{Button, ButtonVariant};

/// Default toast lifetime in milliseconds
pub const DEFAULT_TOAST_DURATION: u64 = 4000;

const MENU_ITEM: &str = "relative flex cursor-default select-none items-center rounded-sm px-2 py-1.5 text-sm font-medium outline-none hover:bg-black/5 dark:hover:bg-white/5";

/// Adds `open`/`close`/`toggle` to props structs with an `is_open` flag
macro_rules! disclosure {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                /// Show the surface
                pub fn open(&mut self) {
                    self.is_open = true;
                }

                /// Hide the surface
                pub fn close(&mut self) {
                    self.is_open = false;
                }

                /// Flip visibility, returning the new state
                pub fn toggle(&mut self) -> bool {
                    self.is_open = !self.is_open;
                    self.is_open
                }
            }
        )*
    };
}

disclosure!(Dialog, AlertDialog, Drawer, OverlayMenu, Collapsible);

// =============================================================================
// Alert
// =============================================================================

/// Alert tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    /// Neutral callout
    #[default]
    Default,
    /// Informational
    Info,
    /// Completed action
    Success,
    /// Needs attention
    Warning,
    /// Failure or destructive action
    Destructive,
}

impl AlertVariant {
    /// Icon name for the variant
    pub fn icon(&self) -> &'static str {
        match self {
            AlertVariant::Default | AlertVariant::Info => "info",
            AlertVariant::Success => "check-circle-2",
            AlertVariant::Warning => "alert-triangle",
            AlertVariant::Destructive => "alert-circle",
        }
    }
}

/// Inline callout with icon, title and description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Tone
    #[serde(default)]
    pub variant: AlertVariant,
    /// Heading
    pub title: String,
    /// Body text
    pub description: String,
}

impl Alert {
    /// Create a default alert
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: AlertVariant::default(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Set the tone
    pub fn with_variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> AlertStyles {
        let destructive = self.variant == AlertVariant::Destructive;
        AlertStyles {
            root: ClassList::new()
                .push("relative w-full rounded-2xl p-4 flex gap-3 border")
                .push(&theme.card_style)
                .push_if(destructive, "border-red-500/50 bg-red-500/10 text-red-600")
                .build(),
            icon: self.variant.icon(),
            title: merge_classes(&["font-black leading-none tracking-tight", &theme.text_style]),
            description: merge_classes(&["text-sm opacity-60 font-medium", &theme.text_style]),
        }
    }
}

/// Computed alert styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertStyles {
    /// Callout box
    pub root: String,
    /// Icon name
    pub icon: &'static str,
    /// Heading
    pub title: String,
    /// Body text
    pub description: String,
}

// =============================================================================
// Dialog
// =============================================================================

/// Centred modal dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    /// Heading
    pub title: String,
    /// Supporting text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the dialog is shown
    #[serde(default)]
    pub is_open: bool,
}

impl Dialog {
    /// Create a closed dialog
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_open: false,
        }
    }

    /// Set the supporting text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Compute styles. Brutalist finishes get a thick frame and hard shadow.
    pub fn computed_styles(&self, theme: &TokenBundle, finish: ControlFinish) -> DialogStyles {
        DialogStyles {
            overlay: "fixed inset-0 z-50 flex items-center justify-center p-4".to_string(),
            backdrop: "absolute inset-0 bg-black/40 backdrop-blur-sm".to_string(),
            panel: ClassList::new()
                .push("relative w-full max-w-lg rounded-3xl overflow-hidden shadow-2xl animate-in zoom-in-95 duration-300")
                .push(&theme.card_style)
                .push_if(
                    finish == ControlFinish::Brutalist,
                    "border-4 border-black shadow-[8px_8px_0px_0px_rgba(0,0,0,1)] rounded-none",
                )
                .build(),
            title: merge_classes(&["text-2xl font-black tracking-tight", &theme.text_style]),
            description: merge_classes(&["text-sm opacity-60 mt-2", &theme.text_style]),
            body: "p-8".to_string(),
            footer: "px-8 pb-8 flex justify-end gap-3".to_string(),
        }
    }
}

/// Computed dialog styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogStyles {
    /// Full-screen layer
    pub overlay: String,
    /// Dimmed backdrop
    pub backdrop: String,
    /// Dialog box
    pub panel: String,
    /// Heading
    pub title: String,
    /// Supporting text
    pub description: String,
    /// Content block
    pub body: String,
    /// Action row
    pub footer: String,
}

// =============================================================================
// Alert Dialog
// =============================================================================

/// Modal confirmation with an action and a cancel button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDialog {
    /// Heading
    pub title: String,
    /// Consequence description
    pub description: String,
    /// Confirm button label
    pub action_label: String,
    /// Cancel button label
    pub cancel_label: String,
    /// Whether the dialog is shown
    #[serde(default)]
    pub is_open: bool,
}

impl AlertDialog {
    /// Create a closed confirmation with Continue / Cancel buttons
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            action_label: "Continue".to_string(),
            cancel_label: "Cancel".to_string(),
            is_open: false,
        }
    }

    /// Set the confirm button label
    pub fn with_action_label(mut self, label: impl Into<String>) -> Self {
        self.action_label = label.into();
        self
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> AlertDialogStyles {
        let button = "px-4 py-2 rounded-xl font-bold text-sm transition-all";
        AlertDialogStyles {
            overlay: "fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/40 backdrop-blur-sm"
                .to_string(),
            panel: merge_classes(&["relative w-full max-w-md rounded-2xl p-6 shadow-2xl", &theme.card_style]),
            title: merge_classes(&["text-lg font-black", &theme.text_style]),
            description: merge_classes(&["text-sm opacity-60 mt-2", &theme.text_style]),
            action: merge_classes(&[button, &theme.primary_button_style]),
            cancel: merge_classes(&[
                button,
                "border border-current opacity-40 hover:opacity-100",
                &theme.text_style,
            ]),
        }
    }
}

/// Computed alert dialog styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDialogStyles {
    /// Full-screen layer with backdrop
    pub overlay: String,
    /// Dialog box
    pub panel: String,
    /// Heading
    pub title: String,
    /// Consequence description
    pub description: String,
    /// Confirm button
    pub action: String,
    /// Cancel button
    pub cancel: String,
}

// =============================================================================
// Drawer
// =============================================================================

/// Bottom sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawer {
    /// Heading
    pub title: String,
    /// Whether the drawer is shown
    #[serde(default)]
    pub is_open: bool,
}

impl Drawer {
    /// Create a closed drawer
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_open: false,
        }
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> DrawerStyles {
        DrawerStyles {
            overlay: "fixed inset-0 z-50 flex items-end justify-center bg-black/40 backdrop-blur-sm"
                .to_string(),
            panel: merge_classes(&[
                "relative w-full max-w-lg rounded-t-3xl p-8 shadow-2xl animate-in slide-in-from-bottom-full duration-500",
                &theme.card_style,
            ]),
            handle: "mx-auto mb-6 h-1.5 w-12 rounded-full bg-current opacity-20".to_string(),
            title: merge_classes(&["text-xl font-black", &theme.text_style]),
        }
    }
}

/// Computed drawer styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerStyles {
    /// Full-screen layer with backdrop
    pub overlay: String,
    /// Sheet
    pub panel: String,
    /// Grab handle
    pub handle: String,
    /// Heading
    pub title: String,
}

// =============================================================================
// Toast
// =============================================================================

/// Transient notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Unique identifier
    pub id: String,
    /// Heading
    pub title: String,
    /// Body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lifetime in milliseconds (None for persistent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    /// Creation time in milliseconds since the Unix epoch
    pub created_at: u64,
}

impl Toast {
    /// Create a toast with the default lifetime
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            duration: Some(DEFAULT_TOAST_DURATION),
            created_at: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64,
        }
    }

    /// The toast raised after switching aesthetics
    pub fn theme_applied() -> Self {
        Self::new("Reality Shifting Success")
            .with_description("The new aesthetic tokens have been applied to your workspace.")
    }

    /// Set the body text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the lifetime
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keep the toast until dismissed
    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }

    /// Whether the toast has outlived its duration at `current_time`
    pub fn is_expired(&self, current_time: u64) -> bool {
        self.duration
            .is_some_and(|duration| current_time >= self.created_at.saturating_add(duration))
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> ToastStyles {
        ToastStyles {
            root: merge_classes(&[
                "fixed bottom-6 right-6 z-[100] w-full max-w-sm p-5 rounded-2xl shadow-2xl flex items-start gap-4 animate-in slide-in-from-right duration-300",
                &theme.card_style,
            ]),
            icon: merge_classes(&["p-2 rounded-xl", &theme.accent_style]),
            title: merge_classes(&["font-black text-sm", &theme.text_style]),
            description: merge_classes(&["text-xs opacity-60 mt-1 font-medium", &theme.text_style]),
            close: "opacity-40 hover:opacity-100 transition-opacity".to_string(),
        }
    }
}

/// Computed toast styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastStyles {
    /// Toast card
    pub root: String,
    /// Icon chip
    pub icon: String,
    /// Heading
    pub title: String,
    /// Body text
    pub description: String,
    /// Close button
    pub close: String,
}

/// Ordered toasts with a bounded visible set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastQueue {
    /// Active toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Maximum number of visible toasts
    pub max_visible: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self {
            toasts: Vec::new(),
            max_visible: 3,
        }
    }
}

impl ToastQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Set max visible toasts
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max;
        self
    }

    /// Add a toast
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Remove a toast by ID
    pub fn dismiss(&mut self, id: &str) -> Option<Toast> {
        let pos = self.toasts.iter().position(|t| t.id == id)?;
        Some(self.toasts.remove(pos))
    }

    /// Clear all toasts
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// The newest `max_visible` toasts
    pub fn visible(&self) -> &[Toast] {
        let len = self.toasts.len();
        &self.toasts[len.saturating_sub(self.max_visible)..]
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Get number of toasts
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Drop expired toasts and return them
    pub fn process_auto_dismiss(&mut self, current_time: u64) -> Vec<Toast> {
        let (expired, alive): (Vec<Toast>, Vec<Toast>) = std::mem::take(&mut self.toasts)
            .into_iter()
            .partition(|toast| toast.is_expired(current_time));
        self.toasts = alive;

        if !expired.is_empty() {
            tracing::debug!(count = expired.len(), "Auto-dismissed toasts");
        }
        expired
    }
}

// =============================================================================
// Tooltip
// =============================================================================

/// Hover label above its trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    /// Tooltip text
    pub content: String,
}

impl Tooltip {
    /// Create a tooltip
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> TooltipStyles {
        TooltipStyles {
            root: "relative group inline-block".to_string(),
            content: merge_classes(&[
                "absolute bottom-full left-1/2 -translate-x-1/2 mb-3 px-3 py-1.5 rounded-lg text-xs font-bold opacity-0 group-hover:opacity-100 transition-all pointer-events-none whitespace-nowrap z-50 shadow-xl",
                &theme.card_style,
            ]),
        }
    }
}

/// Computed tooltip styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipStyles {
    /// Hover group around the trigger
    pub root: String,
    /// Floating label
    pub content: String,
}

// =============================================================================
// Overlay Menus
// =============================================================================

/// Floating surface family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayKind {
    /// Action list under a button
    #[default]
    Dropdown,
    /// Rich content under a button
    Popover,
    /// Preview shown on hover
    HoverCard,
    /// Action list at the pointer
    ContextMenu,
}

impl OverlayKind {
    fn content_classes(&self) -> &'static str {
        match self {
            OverlayKind::Dropdown => "absolute top-full left-0 mt-2 w-56 p-1",
            OverlayKind::Popover => "absolute top-full left-0 mt-2 w-72 p-4",
            OverlayKind::HoverCard => "absolute top-full left-1/2 -translate-x-1/2 mt-2 w-80 p-4",
            OverlayKind::ContextMenu => "absolute left-1/2 top-1/2 w-64 p-1",
        }
    }
}

/// Dropdown, popover, hover card, or context menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayMenu {
    /// Surface family
    pub kind: OverlayKind,
    /// Menu entries; empty for content surfaces
    #[serde(default)]
    pub items: Vec<String>,
    /// Whether the surface is shown
    #[serde(default)]
    pub is_open: bool,
}

impl OverlayMenu {
    /// Create a closed surface
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            is_open: false,
        }
    }

    /// Set the menu entries
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> OverlayMenuStyles {
        let trigger = match self.kind {
            OverlayKind::ContextMenu => merge_classes(&[
                "flex h-36 w-full items-center justify-center rounded-xl border border-dashed border-current opacity-40 text-sm font-bold",
                &theme.text_style,
            ]),
            OverlayKind::HoverCard => merge_classes(&[
                "text-sm font-bold underline underline-offset-4 cursor-pointer",
                &theme.text_style,
            ]),
            OverlayKind::Dropdown | OverlayKind::Popover => {
                Button::new("")
                    .with_variant(ButtonVariant::Outline)
                    .computed_styles(theme)
                    .root
            }
        };

        OverlayMenuStyles {
            root: "relative inline-block".to_string(),
            trigger,
            content: self.is_open.then(|| {
                merge_classes(&[
                    "z-50 rounded-xl shadow-xl animate-in fade-in-0 zoom-in-95",
                    self.kind.content_classes(),
                    &theme.card_style,
                ])
            }),
            item: merge_classes(&[MENU_ITEM, &theme.text_style]),
            separator: "-mx-1 my-1 h-px bg-current opacity-10".to_string(),
        }
    }
}

/// Computed overlay styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayMenuStyles {
    /// Positioning wrapper
    pub root: String,
    /// Trigger element
    pub trigger: String,
    /// Floating surface, only while open
    pub content: Option<String>,
    /// Menu entry
    pub item: String,
    /// Divider between entry groups
    pub separator: String,
}

// =============================================================================
// Collapsible
// =============================================================================

/// Panel that expands and collapses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collapsible {
    /// Trigger text
    pub title: String,
    /// Whether the panel is expanded
    #[serde(default)]
    pub is_open: bool,
}

impl Collapsible {
    /// Create a collapsed panel
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_open: false,
        }
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> CollapsibleStyles {
        CollapsibleStyles {
            root: "w-full space-y-2".to_string(),
            trigger: merge_classes(&[
                "flex w-full items-center justify-between rounded-xl border px-4 py-3 text-sm font-bold",
                &theme.card_style,
                &theme.text_style,
            ]),
            chevron: if self.is_open {
                "transition-transform rotate-180".to_string()
            } else {
                "transition-transform".to_string()
            },
            content: self.is_open.then(|| {
                merge_classes(&[
                    "rounded-xl border px-4 py-3 text-sm animate-in slide-in-from-top-2",
                    &theme.card_style,
                    &theme.text_style,
                ])
            }),
        }
    }
}

/// Computed collapsible styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapsibleStyles {
    /// Wrapper
    pub root: String,
    /// Header row
    pub trigger: String,
    /// Chevron, rotated when open
    pub chevron: String,
    /// Panel body, only while open
    pub content: Option<String>,
}

// =============================================================================
// Command Palette
// =============================================================================

/// A titled group of commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroup {
    /// Group title
    pub heading: String,
    /// Command labels
    pub items: Vec<String>,
}

impl CommandGroup {
    /// Create a group
    pub fn new<I, S>(heading: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            heading: heading.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Searchable command list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandPalette {
    /// All commands
    pub groups: Vec<CommandGroup>,
    /// Current search text
    #[serde(default)]
    pub query: String,
}

impl Default for CommandPalette {
    fn default() -> Self {
        Self {
            groups: vec![
                CommandGroup::new("Suggestions", ["Calendar", "Search Emoji", "Launch App"]),
                CommandGroup::new("Settings", ["Profile", "Settings"]),
            ],
            query: String::new(),
        }
    }
}

impl CommandPalette {
    /// Palette over `groups`
    pub fn new(groups: Vec<CommandGroup>) -> Self {
        Self {
            groups,
            query: String::new(),
        }
    }

    /// Update the search text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Groups with the commands matching the query, case-insensitively.
    /// Groups left without commands are dropped.
    pub fn filtered(&self) -> Vec<CommandGroup> {
        let needle = self.query.trim().to_lowercase();
        self.groups
            .iter()
            .filter_map(|group| {
                let items: Vec<String> = group
                    .items
                    .iter()
                    .filter(|item| item.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
                (!items.is_empty()).then(|| CommandGroup {
                    heading: group.heading.clone(),
                    items,
                })
            })
            .collect()
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> CommandPaletteStyles {
        CommandPaletteStyles {
            root: merge_classes(&[
                "flex h-full w-full flex-col overflow-hidden rounded-md border shadow-md",
                &theme.card_style,
            ]),
            input: merge_classes(&[
                "flex h-11 w-full bg-transparent py-3 text-sm outline-none placeholder:opacity-50",
                &theme.text_style,
            ]),
            heading: "px-2 py-1.5 text-xs font-black uppercase tracking-widest opacity-40".to_string(),
            item: merge_classes(&[MENU_ITEM, "cursor-pointer", &theme.text_style]),
            empty: "py-6 text-center text-sm opacity-50".to_string(),
        }
    }
}

/// Computed command palette styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandPaletteStyles {
    /// Palette box
    pub root: String,
    /// Search field
    pub input: String,
    /// Group title
    pub heading: String,
    /// Command row
    pub item: String,
    /// "No results" message
    pub empty: String,
}
