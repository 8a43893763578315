//! Themeable component library for the Vanguard showcase
//!
//! Every component takes a resolved [`TokenBundle`](vanguard_theme::TokenBundle)
//! (and, for tactile widgets, a [`ControlFinish`](vanguard_theme::ControlFinish))
//! and returns the class strings for its parts. Components hold only local
//! UI state such as open/closed or a slider value; they never resolve or
//! mutate themes.
//!
//! # Modules
//!
//! - [`classes`] - Utility-class merging
//! - [`components`] - Buttons, badges, cards, tabs, and layout primitives
//! - [`forms`] - Form controls
//! - [`display`] - Data display widgets
//! - [`feedback`] - Alerts, overlays, toasts, and menus
//! - [`menus`] - Navigation widgets
//! - [`tactile`] - Knobs, faders, and theme toggles
//! - [`catalog`] - Library index and design notes
//! - [`navigation`] - Selection state
//! - [`showcase`] - Page chrome and snapshots
//! - [`config`] - Startup configuration
//!
//! # Example
//!
//! ```rust
//! use vanguard_ui::{Button, ButtonVariant, ShowcaseState};
//!
//! let mut state = ShowcaseState::builtin().unwrap();
//! state.select_theme("neoBrutalism").unwrap();
//!
//! let styles = Button::new("Deploy")
//!     .with_variant(ButtonVariant::Primary)
//!     .computed_styles(state.bundle());
//! assert!(styles.root.contains("border-black"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod classes;
pub mod components;
pub mod config;
pub mod display;
pub mod error;
pub mod feedback;
pub mod forms;
pub mod menus;
pub mod navigation;
pub mod showcase;
pub mod tactile;

// Re-export commonly used types
pub use classes::{merge_classes, ClassList};
pub use config::{CustomTheme, ShowcaseConfig};
pub use error::{Result, UiError};
pub use navigation::{LibraryState, Selection, ShowcaseState, View};
pub use showcase::{ChromeStyles, PageSnapshot, PreviewCard, Showcase, ShowcaseSnapshot};

pub use components::{
    AspectRatio, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, Input,
    Orientation, Resizable, ScrollArea, Separator, Tabs,
};

pub use forms::{
    Checkbox, Combobox, InputOtp, Label, RadioGroup, Select, SelectOption, Slider, Switch,
    Textarea,
};

pub use display::{Avatar, BarChart, Calendar, Progress, Skeleton, Table};

pub use feedback::{
    Alert, AlertDialog, AlertVariant, Collapsible, CommandPalette, Dialog, Drawer, OverlayKind,
    OverlayMenu, Toast, ToastQueue, Tooltip,
};

pub use menus::{Breadcrumb, Menubar, NavigationMenu, Pagination};

pub use tactile::{Fader, TactileKnob, TactileToggle, ThemeToggle, ThemeToggleStyle};
