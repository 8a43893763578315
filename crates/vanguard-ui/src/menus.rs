//! Navigation widgets: breadcrumb, pagination, menubar, navigation menu

use serde::{Deserialize, Serialize};
use vanguard_theme::{ControlFinish, TokenBundle};

use crate::classes::{merge_classes, ClassList};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::error::{Result, UiError};

// =============================================================================
// Breadcrumb
// =============================================================================

/// Path to the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Crumbs from root to current page
    pub items: Vec<String>,
}

impl Breadcrumb {
    /// Create a breadcrumb trail
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Compute styles. Only the last crumb is fully opaque.
    pub fn computed_styles(&self, theme: &TokenBundle) -> BreadcrumbStyles {
        let last = self.items.len().saturating_sub(1);
        BreadcrumbStyles {
            root: merge_classes(&["flex items-center gap-2 text-sm font-bold", &theme.text_style]),
            crumbs: (0..self.items.len())
                .map(|i| {
                    if i == last {
                        "opacity-100".to_string()
                    } else {
                        "opacity-40 hover:opacity-100 transition-opacity cursor-pointer".to_string()
                    }
                })
                .collect(),
            separator: "opacity-20".to_string(),
        }
    }
}

/// Computed breadcrumb styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbStyles {
    /// Trail container
    pub root: String,
    /// Per-crumb classes
    pub crumbs: Vec<String>,
    /// Chevron between crumbs
    pub separator: String,
}

// =============================================================================
// Pagination
// =============================================================================

/// Pages shown around the current one
const PAGE_WINDOW: u32 = 3;

/// An entry in the page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageSlot {
    /// A page link
    Page(u32),
    /// Skipped pages
    Ellipsis,
}

/// Page navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    current: u32,
    total: u32,
}

impl Pagination {
    /// Navigator at `current` (1-based) of `total` pages
    pub fn new(current: u32, total: u32) -> Result<Self> {
        if total == 0 {
            return Err(UiError::InvalidValue {
                field: "total",
                reason: "must have at least one page".to_string(),
            });
        }
        if current == 0 || current > total {
            return Err(UiError::InvalidValue {
                field: "page",
                reason: format!("{current} is outside 1..={total}"),
            });
        }
        Ok(Self { current, total })
    }

    /// Current page
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Page count
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Jump to a page
    pub fn go_to(&mut self, page: u32) -> Result<()> {
        *self = Self::new(page, self.total)?;
        Ok(())
    }

    /// Advance one page, returning whether it moved
    pub fn next(&mut self) -> bool {
        if self.current < self.total {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page, returning whether it moved
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// The page strip: a window around the current page, with the first and
    /// last pages kept reachable across ellipses
    pub fn pages(&self) -> Vec<PageSlot> {
        let window = PAGE_WINDOW.min(self.total);
        let start = self
            .current
            .saturating_sub(1)
            .clamp(1, self.total - window + 1);
        let end = start + window - 1;

        let mut slots = Vec::new();
        if start > 1 {
            slots.push(PageSlot::Page(1));
            if start > 2 {
                slots.push(PageSlot::Ellipsis);
            }
        }
        slots.extend((start..=end).map(PageSlot::Page));
        if end < self.total {
            if end < self.total - 1 {
                slots.push(PageSlot::Ellipsis);
            }
            slots.push(PageSlot::Page(self.total));
        }
        slots
    }

    /// Compute styles. Pages render as buttons; the current one is primary.
    pub fn computed_styles(&self, theme: &TokenBundle) -> PaginationStyles {
        let page = |variant| {
            Button::new("")
                .with_variant(variant)
                .with_size(ButtonSize::Icon)
                .with_class("h-8 w-8")
                .computed_styles(theme)
                .root
        };

        PaginationStyles {
            root: "flex items-center gap-1".to_string(),
            arrow: page(ButtonVariant::Outline),
            page: page(ButtonVariant::Ghost),
            current_page: page(ButtonVariant::Primary),
            ellipsis: merge_classes(&["px-2 opacity-40", &theme.text_style]),
        }
    }
}

/// Computed pagination styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationStyles {
    /// Strip container
    pub root: String,
    /// Previous / next buttons
    pub arrow: String,
    /// Other page buttons
    pub page: String,
    /// Current page button
    pub current_page: String,
    /// Ellipsis marker
    pub ellipsis: String,
}

// =============================================================================
// Menubar
// =============================================================================

/// A top-level menu with its entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    /// Trigger label
    pub label: String,
    /// Entries
    pub items: Vec<String>,
}

impl Menu {
    /// Create a menu
    pub fn new<I, S>(label: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Desktop-style menu bar with at most one open menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menubar {
    /// Menus left to right
    pub menus: Vec<Menu>,
    /// Index of the open menu
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<usize>,
}

impl Default for Menubar {
    fn default() -> Self {
        Self::new(vec![
            Menu::new("File", ["New Tab", "New Window", "Share", "Print"]),
            Menu::new("Edit", ["Undo", "Redo", "Cut", "Copy", "Paste"]),
            Menu::new("View", ["Reload", "Toggle Fullscreen", "Hide Sidebar"]),
        ])
    }
}

impl Menubar {
    /// Menubar with every menu closed
    pub fn new(menus: Vec<Menu>) -> Self {
        Self { menus, open: None }
    }

    /// Open the menu at `index`, or close it if it is already open.
    /// Out-of-range indices close everything.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) || index >= self.menus.len() {
            None
        } else {
            Some(index)
        };
    }

    /// Close any open menu
    pub fn close(&mut self) {
        self.open = None;
    }

    /// The open menu
    pub fn open_menu(&self) -> Option<&Menu> {
        self.open.and_then(|i| self.menus.get(i))
    }

    /// Compute styles. Brutalist finishes get a black frame.
    pub fn computed_styles(&self, theme: &TokenBundle, finish: ControlFinish) -> MenubarStyles {
        MenubarStyles {
            root: ClassList::new()
                .push("flex h-10 items-center space-x-1 rounded-md border bg-black/5 dark:bg-white/5 p-1")
                .push(if finish == ControlFinish::Brutalist {
                    "border-black"
                } else {
                    "border-gray-200/20"
                })
                .build(),
            trigger: merge_classes(&[
                "flex cursor-default select-none items-center rounded-sm px-3 py-1.5 text-sm font-bold outline-none hover:bg-black/5 dark:hover:bg-white/5",
                &theme.text_style,
            ]),
            content: self.open.map(|_| {
                merge_classes(&[
                    "absolute top-full left-0 mt-2 z-50 min-w-[12rem] p-1 rounded-xl shadow-xl",
                    &theme.card_style,
                ])
            }),
            item: merge_classes(&[
                "relative flex cursor-default select-none items-center rounded-sm px-2 py-1.5 text-sm font-medium outline-none hover:bg-black/5 dark:hover:bg-white/5",
                &theme.text_style,
            ]),
        }
    }
}

/// Computed menubar styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenubarStyles {
    /// Bar
    pub root: String,
    /// Menu trigger
    pub trigger: String,
    /// Open menu surface
    pub content: Option<String>,
    /// Menu entry
    pub item: String,
}

// =============================================================================
// Navigation Menu
// =============================================================================

/// A link inside a navigation menu panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link title
    pub title: String,
    /// One-line summary
    pub description: String,
}

/// A top-level navigation entry with its panel of links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Trigger label
    pub label: String,
    /// Panel links
    pub links: Vec<NavLink>,
}

/// Site navigation with hover panels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationMenu {
    /// Sections left to right
    pub sections: Vec<NavSection>,
    /// Index of the section whose panel is shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<usize>,
}

impl NavigationMenu {
    /// Menu with every panel closed
    pub fn new(sections: Vec<NavSection>) -> Self {
        Self {
            sections,
            active: None,
        }
    }

    /// Show the panel for `index`; out-of-range indices hide all panels
    pub fn activate(&mut self, index: usize) {
        self.active = (index < self.sections.len()).then_some(index);
    }

    /// Hide all panels
    pub fn deactivate(&mut self) {
        self.active = None;
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> NavigationMenuStyles {
        NavigationMenuStyles {
            root: "relative flex items-center gap-1".to_string(),
            trigger: merge_classes(&[
                "group inline-flex h-10 w-max items-center justify-center rounded-md px-4 py-2 text-sm font-bold transition-colors hover:bg-black/5 dark:hover:bg-white/5",
                &theme.text_style,
            ]),
            content: self.active.map(|_| {
                merge_classes(&[
                    "absolute top-full left-0 mt-2 z-50 w-[400px] p-4 grid gap-3 rounded-xl shadow-xl",
                    &theme.card_style,
                ])
            }),
            link_title: merge_classes(&["text-sm font-bold leading-none", &theme.text_style]),
            link_description: merge_classes(&["text-xs opacity-60 leading-snug mt-1", &theme.text_style]),
        }
    }
}

/// Computed navigation menu styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationMenuStyles {
    /// Menu row
    pub root: String,
    /// Section trigger
    pub trigger: String,
    /// Active panel
    pub content: Option<String>,
    /// Link title
    pub link_title: String,
    /// Link summary
    pub link_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanguard_theme::builtin::base_bundle;
    use vanguard_theme::ThemeId;

    // ==========================================================================
    // Breadcrumb Tests
    // ==========================================================================

    #[test]
    fn test_breadcrumb_last_emphasised() {
        let theme = base_bundle(ThemeId::Minimalism);
        let styles = Breadcrumb::new(["Home", "Components", "Breadcrumb"]).computed_styles(&theme);

        assert_eq!(styles.crumbs.len(), 3);
        assert_eq!(styles.crumbs[2], "opacity-100");
        assert!(styles.crumbs[0].starts_with("opacity-40"));
        assert!(styles.crumbs[1].starts_with("opacity-40"));
    }

    #[test]
    fn test_breadcrumb_empty() {
        let theme = base_bundle(ThemeId::Minimalism);
        assert!(Breadcrumb::new(Vec::<String>::new())
            .computed_styles(&theme)
            .crumbs
            .is_empty());
    }

    // ==========================================================================
    // Pagination Tests
    // ==========================================================================

    #[test]
    fn test_pagination_first_page() {
        let pagination = Pagination::new(1, 10).unwrap();
        assert_eq!(
            pagination.pages(),
            vec![
                PageSlot::Page(1),
                PageSlot::Page(2),
                PageSlot::Page(3),
                PageSlot::Ellipsis,
                PageSlot::Page(10),
            ]
        );
    }

    #[test]
    fn test_pagination_middle_page() {
        let pagination = Pagination::new(5, 10).unwrap();
        assert_eq!(
            pagination.pages(),
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis,
                PageSlot::Page(4),
                PageSlot::Page(5),
                PageSlot::Page(6),
                PageSlot::Ellipsis,
                PageSlot::Page(10),
            ]
        );
    }

    #[test]
    fn test_pagination_last_page() {
        let pagination = Pagination::new(10, 10).unwrap();
        assert_eq!(
            pagination.pages(),
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis,
                PageSlot::Page(8),
                PageSlot::Page(9),
                PageSlot::Page(10),
            ]
        );
    }

    #[test]
    fn test_pagination_few_pages() {
        assert_eq!(Pagination::new(1, 1).unwrap().pages(), vec![PageSlot::Page(1)]);
        assert_eq!(
            Pagination::new(2, 4).unwrap().pages(),
            vec![PageSlot::Page(1), PageSlot::Page(2), PageSlot::Page(3), PageSlot::Page(4)]
        );
    }

    #[test]
    fn test_pagination_bounds() {
        assert!(Pagination::new(0, 10).is_err());
        assert!(Pagination::new(11, 10).is_err());
        assert!(Pagination::new(1, 0).is_err());

        let mut pagination = Pagination::new(1, 2).unwrap();
        assert!(!pagination.prev());
        assert!(pagination.next());
        assert!(!pagination.next());
        assert_eq!(pagination.current(), 2);

        assert!(pagination.go_to(3).is_err());
        assert_eq!(pagination.current(), 2);
    }

    #[test]
    fn test_pagination_styles() {
        let theme = base_bundle(ThemeId::Minimalism);
        let styles = Pagination::new(1, 10).unwrap().computed_styles(&theme);

        assert!(styles.current_page.contains("bg-black"));
        assert!(styles.page.contains("bg-transparent"));
        assert!(styles.arrow.contains("h-8"));
        assert!(!styles.arrow.contains("h-10"));
    }

    // ==========================================================================
    // Menubar / Navigation Menu Tests
    // ==========================================================================

    #[test]
    fn test_menubar_toggle() {
        let mut menubar = Menubar::default();
        menubar.toggle(1);
        assert_eq!(menubar.open_menu().map(|m| m.label.as_str()), Some("Edit"));

        menubar.toggle(0);
        assert_eq!(menubar.open, Some(0));

        menubar.toggle(0);
        assert_eq!(menubar.open, None);

        menubar.toggle(9);
        assert_eq!(menubar.open, None);
    }

    #[test]
    fn test_menubar_border_by_finish() {
        let theme = base_bundle(ThemeId::NeoBrutalism);
        let brutal = Menubar::default().computed_styles(&theme, ControlFinish::Brutalist);
        assert!(brutal.root.contains("border-black"));
        assert!(brutal.content.is_none());

        let mut open = Menubar::default();
        open.toggle(0);
        let soft = open.computed_styles(&base_bundle(ThemeId::Minimalism), ControlFinish::Standard);
        assert!(soft.root.contains("border-gray-200/20"));
        assert!(soft.content.unwrap().contains("min-w-[12rem]"));
    }

    #[test]
    fn test_navigation_menu_activate() {
        let mut menu = NavigationMenu::new(vec![NavSection {
            label: "Getting started".to_string(),
            links: vec![NavLink {
                title: "Introduction".to_string(),
                description: "Re-usable components built with tokens.".to_string(),
            }],
        }]);
        let theme = base_bundle(ThemeId::Minimalism);

        assert!(menu.computed_styles(&theme).content.is_none());
        menu.activate(0);
        assert!(menu.computed_styles(&theme).content.unwrap().contains("w-[400px]"));
        menu.activate(3);
        assert_eq!(menu.active, None);
    }
}
