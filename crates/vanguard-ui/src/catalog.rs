//! Component library catalog and aesthetic background notes
//!
//! The catalog is static data: seven categories of `(id, label)` entries
//! that drive the library sidebar, plus the showcase title and blurb for
//! each implemented component. Ids with no showcase render an
//! "Under Construction" placeholder.

use serde::Serialize;
use vanguard_theme::ThemeId;

/// Component shown when the library first opens
pub const DEFAULT_COMPONENT: &str = "button";

/// Heading shown for catalog entries without a showcase
pub const UNDER_CONSTRUCTION: &str = "Under Construction";

// =============================================================================
// Library Structure
// =============================================================================

/// A component entry in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    /// Stable id
    pub id: &'static str,
    /// Sidebar label
    pub label: &'static str,
}

/// A sidebar section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Section title
    pub name: &'static str,
    /// Section icon name
    pub icon: &'static str,
    /// Entries in display order
    pub items: &'static [CatalogItem],
}

const fn item(id: &'static str, label: &'static str) -> CatalogItem {
    CatalogItem { id, label }
}

/// The full library, in sidebar order
pub static LIBRARY: [Category; 7] = [
    Category {
        name: "General",
        icon: "layout-grid",
        items: &[item("button", "Button"), item("badge", "Badge"), item("icons", "Icons")],
    },
    Category {
        name: "Tactile Lab",
        icon: "zap",
        items: &[item("knobs", "Tactile Knobs"), item("faders", "Faders & Toggles")],
    },
    Category {
        name: "Layout",
        icon: "panel-left",
        items: &[
            item("aspect-ratio", "Aspect Ratio"),
            item("card", "Card"),
            item("separator", "Separator"),
            item("resizable", "Resizable"),
            item("scroll-area", "Scroll Area"),
        ],
    },
    Category {
        name: "Navigation",
        icon: "menu",
        items: &[
            item("breadcrumb", "Breadcrumb"),
            item("menubar", "Menubar"),
            item("nav-menu", "Navigation Menu"),
            item("pagination", "Pagination"),
            item("tabs", "Tabs"),
        ],
    },
    Category {
        name: "Form Elements",
        icon: "type",
        items: &[
            item("checkbox", "Checkbox"),
            item("input", "Input"),
            item("input-otp", "Input OTP"),
            item("radio-group", "Radio Group"),
            item("select", "Select"),
            item("slider", "Slider"),
            item("switch", "Switch"),
            item("textarea", "Textarea"),
            item("combobox", "Combobox"),
            item("date-picker", "Date Picker"),
        ],
    },
    Category {
        name: "Data Display",
        icon: "bar-chart-3",
        items: &[
            item("avatar", "Avatar"),
            item("progress", "Progress"),
            item("skeleton", "Skeleton"),
            item("table", "Table"),
            item("chart", "Chart"),
            item("calendar", "Calendar"),
        ],
    },
    Category {
        name: "Feedback",
        icon: "message-square",
        items: &[
            item("alert", "Alert"),
            item("alert-dialog", "Alert Dialog"),
            item("dialog", "Dialog"),
            item("drawer", "Drawer"),
            item("dropdown-menu", "Dropdown Menu"),
            item("hover-card", "Hover Card"),
            item("popover", "Popover"),
            item("sonner", "Sonner"),
            item("toast", "Toast"),
            item("tooltip", "Tooltip"),
            item("collapsible", "Collapsible"),
            item("command", "Command"),
            item("context-menu", "Context Menu"),
        ],
    },
];

/// A category narrowed by a sidebar search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMatch {
    /// Section title
    pub name: &'static str,
    /// Section icon name
    pub icon: &'static str,
    /// Entries whose label matched
    pub items: Vec<CatalogItem>,
}

/// Filter the library by label, case-insensitively. Categories with no
/// matching entry are dropped; an empty query keeps everything.
pub fn search(query: &str) -> Vec<CategoryMatch> {
    let needle = query.trim().to_lowercase();
    LIBRARY
        .iter()
        .filter_map(|category| {
            let items: Vec<CatalogItem> = category
                .items
                .iter()
                .filter(|item| item.label.to_lowercase().contains(&needle))
                .copied()
                .collect();
            (!items.is_empty()).then_some(CategoryMatch {
                name: category.name,
                icon: category.icon,
                items,
            })
        })
        .collect()
}

/// Every catalog entry, in sidebar order
pub fn items() -> impl Iterator<Item = &'static CatalogItem> {
    LIBRARY.iter().flat_map(|category| category.items.iter())
}

/// Look up an entry by id
pub fn find(id: &str) -> Option<&'static CatalogItem> {
    items().find(|item| item.id == id)
}

/// Whether `id` names a catalog entry
pub fn contains(id: &str) -> bool {
    find(id).is_some()
}

/// Sidebar label for `id`, or the id itself when it is not catalogued
pub fn label_for(id: &str) -> &str {
    find(id).map_or(id, |item| item.label)
}

// =============================================================================
// Showcase Text
// =============================================================================

/// Heading, blurb and usage snippet for a component showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowcaseInfo {
    /// Heading
    pub title: &'static str,
    /// One-sentence description
    pub description: &'static str,
    /// Usage snippet for the code panel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<&'static str>,
}

const fn info(title: &'static str, description: &'static str) -> ShowcaseInfo {
    ShowcaseInfo {
        title,
        description,
        usage: None,
    }
}

const fn info_with_usage(
    title: &'static str,
    description: &'static str,
    usage: &'static str,
) -> ShowcaseInfo {
    ShowcaseInfo {
        title,
        description,
        usage: Some(usage),
    }
}

/// Showcase text for a component, `None` for entries still under construction
pub fn showcase_info(id: &str) -> Option<ShowcaseInfo> {
    let info = match id {
        "button" => info_with_usage(
            "Button",
            "Displays a button or a component that looks like a button.",
            "Button::new(\"Click me\").with_variant(ButtonVariant::Primary).computed_styles(&theme)",
        ),
        "badge" => info_with_usage(
            "Badge",
            "Displays a badge or a component that looks like a badge.",
            "Badge::new(\"New\").with_variant(BadgeVariant::Accent).computed_styles(&theme)",
        ),
        "icons" => info("Icons", "Curated Lucide icons optimized for our aesthetics."),
        "knobs" => info_with_usage(
            "Tactile Knobs",
            "Specialized control inputs (Best in Skeuomorphism & Liquid Glass).",
            "TactileKnob::new(\"Level\").with_value(74.0).computed_styles(&theme, finish)",
        ),
        "faders" => info(
            "Faders & Toggles",
            "Tactile faders and toggle buttons for precise control.",
        ),
        "aspect-ratio" => info("Aspect Ratio", "Displays content within a desired ratio."),
        "card" => info_with_usage(
            "Card",
            "A container that groups related content and actions.",
            "Card::new().with_title(\"Create project\").with_footer().computed_styles(&theme)",
        ),
        "separator" => info("Separator", "Visually or semantically separates content."),
        "resizable" => info(
            "Resizable",
            "A container that allows users to adjust its dimensions.",
        ),
        "scroll-area" => info("Scroll Area", "A wrapper to apply the custom scrollbar utility."),
        "breadcrumb" => info("Breadcrumb", "Displays the path to the current resource."),
        "menubar" => info(
            "Menubar",
            "A visually persistent menu common in desktop applications.",
        ),
        "nav-menu" => info(
            "Navigation Menu",
            "A collection of links for navigating websites and apps.",
        ),
        "pagination" => info("Pagination", "Displays navigation controls for paged content."),
        "tabs" => info_with_usage(
            "Tabs",
            "A set of layered sections of content, known as tab panels, that are displayed one at a time.",
            "Tabs::new([(\"account\", \"Account\"), (\"password\", \"Password\")]).computed_styles(&theme)",
        ),
        "checkbox" | "switch" => info(
            if id == "switch" { "Switch" } else { "Checkbox" },
            "A control that allows the user to toggle between checked and unchecked states.",
        ),
        "input" => info_with_usage(
            "Input",
            "Displays a form input field or a component that looks like an input field.",
            "Input::new().with_placeholder(\"Email\").computed_styles(&theme)",
        ),
        "input-otp" => info(
            "Input OTP",
            "Accessible inputs for one-time passwords and verification codes.",
        ),
        "radio-group" => info(
            "Radio Group",
            "A set of checkable buttons, known as radio buttons, where no more than one button can be checked at a time.",
        ),
        "select" => info(
            "Select",
            "Displays a list of options for the user to pick from, triggered by a button.",
        ),
        "slider" => info_with_usage(
            "Slider",
            "An input where the user selects a value from a given range.",
            "Slider::new(40.0).computed_styles(&theme, finish)",
        ),
        "textarea" => info("Textarea", "A multi-line text input field."),
        "combobox" => info(
            "Combobox",
            "Autocomplete input and search with a list of options.",
        ),
        "avatar" => info(
            "Avatar",
            "An image element with a fallback for representing the user.",
        ),
        "progress" => info(
            "Progress",
            "Displays an indicator showing the completion progress of a task.",
        ),
        "skeleton" => info("Skeleton", "Use to show a placeholder while content is loading."),
        "table" => info(
            "Table",
            "A responsive table component for displaying tabular data.",
        ),
        "chart" => info(
            "Charts",
            "Visual representation of data (Simplified Placeholder).",
        ),
        "calendar" => info(
            "Calendar",
            "A date picker component that allows users to select a date.",
        ),
        "alert" => info_with_usage(
            "Alert",
            "Displays a callout for user attention.",
            "Alert::new(\"Heads up!\", \"You can add components to your app.\").computed_styles(&theme)",
        ),
        "alert-dialog" => info(
            "Alert Dialog",
            "A modal dialog that interrupts the user with important content and expects a response.",
        ),
        "dialog" => info(
            "Dialog",
            "A window overlaid on either the primary window or another dialog window.",
        ),
        "drawer" => info("Drawer", "A panel that slides out from the bottom of the screen."),
        "dropdown-menu" => info(
            "Dropdown Menu",
            "Displays a menu of actions or options, triggered by a button.",
        ),
        "hover-card" => info(
            "Hover Card",
            "For sighted users to preview content available behind a link.",
        ),
        "popover" => info(
            "Popover",
            "Displays rich content in a portal, triggered by a button.",
        ),
        "toast" => info_with_usage(
            "Toast",
            "A succinct message that is displayed after an action.",
            "queue.push(Toast::new(\"Success\").with_description(\"Action completed\"))",
        ),
        "tooltip" => info(
            "Tooltip",
            "A popup that displays information related to an element when the element receives keyboard focus or the mouse hovers over it.",
        ),
        "collapsible" => info(
            "Collapsible",
            "An interactive component which expands/collapses a panel.",
        ),
        "command" => info("Command", "Fast, composable command menu with built-in filtering."),
        "context-menu" => info("Context Menu", "Displays a menu located at right click position."),
        _ => return None,
    };
    Some(info)
}

/// Icon names shown in the icon gallery
pub const ICON_SET: [&str; 18] = [
    "zap",
    "layout-grid",
    "palette",
    "arrow-right",
    "terminal",
    "boxes",
    "book-open",
    "search",
    "menu",
    "shield",
    "flame",
    "heart",
    "globe",
    "cpu",
    "layers",
    "maximize",
    "star",
    "moon",
];

// =============================================================================
// Design Context
// =============================================================================

/// Background notes on an aesthetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignContext {
    /// Display title
    pub title: &'static str,
    /// Where the style comes from
    pub origin: &'static str,
    /// Defining principles
    pub principles: [&'static str; 4],
    /// Typical applications
    pub best_for: &'static str,
}

const MINIMALISM: DesignContext = DesignContext {
    title: "Minimalism",
    origin: "Rooted in Swiss Style and Bauhaus.",
    principles: [
        "Content-first: Removal of all non-essential elements.",
        "Negative space: Heavy use of whitespace to create hierarchy.",
        "Strict grids: Layouts are governed by rigid mathematical alignment.",
        "Scalable typography: Type size is the primary method of emphasis.",
    ],
    best_for: "Complex SaaS dashboards, documentation sites, and data-heavy applications where clarity is paramount.",
};

const NEO_BRUTALISM: DesignContext = DesignContext {
    title: "Neo-Brutalism",
    origin: "Evolution of brutalist architecture applied to web design.",
    principles: [
        "Raw aesthetic: Intentionally unrefined and anti-mainstream.",
        "High contrast: Pure black borders and saturated clashing colors.",
        "Default typography: Usage of system fonts or Courier/Times New Roman.",
        "Hard shadows: No blurring; shadows are distinct geometrical shapes.",
    ],
    best_for: "Personal brands, creative agencies, music portfolios, and Gen Z targeted marketing campaigns.",
};

const GLASSMORPHISM: DesignContext = DesignContext {
    title: "Glassmorphism",
    origin: "Popularized by Apple's iOS 7 and later macOS Big Sur.",
    principles: [
        "Translucency: Elements look like frosted glass panes.",
        "Vivid backgrounds: Colorful blobs or gradients to show through the blur.",
        "Light borders: 1px semi-transparent white borders to mimic glass edges.",
        "Hierarchy through depth: Floating layers create a sense of Z-index.",
    ],
    best_for: "Operating system interfaces, floating modals, media player overlays, and mobile app landing pages.",
};

const SKEUOMORPHISM: DesignContext = DesignContext {
    title: "Skeuomorphism (Modern)",
    origin: "A resurgence of early iOS design, now refined with modern CSS.",
    principles: [
        "Tactile realism: Buttons and toggles look physically pushable.",
        "Subtle gradients: Mimicking how light curves around surfaces.",
        "Soft shadows: Multiple shadow layers to create convincing depth.",
        "Metaphor: Using real-world counterparts (knobs, switches) for controls.",
    ],
    best_for: "Audio production software, smart home controls, calculator apps, and tactile utility tools.",
};

const CLAYMORPHISM: DesignContext = DesignContext {
    title: "Claymorphism",
    origin: "A trend emerging from the NFT and Web3 space.",
    principles: [
        "Inflated shapes: Elements look like 3D clay or soft plastic.",
        "Inner shadows: Used to create volume rather than drop shadows.",
        "Roundness: High border-radius values for a friendly appearance.",
        "Matte finish: Surfaces are non-glossy and pastel-colored.",
    ],
    best_for: "EdTech platforms, health and mindfulness apps, and friendly onboarding flows.",
};

const LIQUID_GLASS: DesignContext = DesignContext {
    title: "Liquid Glass",
    origin: "An ultra-modern evolution of glassmorphism and holographic design.",
    principles: [
        "High refraction: Strong blurs that distort background shapes significantly.",
        "Organic forms: Fluid blobs and mesh gradients instead of rigid geometry.",
        "Dark mode dominance: Works best on deep, rich backgrounds.",
        "Specular highlights: Imitating how light catches the edge of machined glass.",
    ],
    best_for: "Web3/Crypto dashboards, AI tools, futuristic tech landing pages, and premium dark-mode apps.",
};

/// Background notes for a canonical aesthetic
pub fn design_context(id: ThemeId) -> &'static DesignContext {
    match id {
        ThemeId::Minimalism => &MINIMALISM,
        ThemeId::NeoBrutalism => &NEO_BRUTALISM,
        ThemeId::Glassmorphism => &GLASSMORPHISM,
        ThemeId::Skeuomorphism => &SKEUOMORPHISM,
        ThemeId::Claymorphism => &CLAYMORPHISM,
        ThemeId::LiquidGlass => &LIQUID_GLASS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==========================================================================
    // Structure Tests
    // ==========================================================================

    #[test]
    fn test_library_shape() {
        let names: Vec<_> = LIBRARY.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "General",
                "Tactile Lab",
                "Layout",
                "Navigation",
                "Form Elements",
                "Data Display",
                "Feedback"
            ]
        );
        assert_eq!(items().count(), 44);
    }

    #[test]
    fn test_ids_unique() {
        let mut seen = HashSet::new();
        for item in items() {
            assert!(seen.insert(item.id), "duplicate id {}", item.id);
        }
    }

    #[test]
    fn test_default_component_is_catalogued() {
        assert!(contains(DEFAULT_COMPONENT));
    }

    // ==========================================================================
    // Search Tests
    // ==========================================================================

    #[test]
    fn test_search_empty_keeps_all() {
        let results = search("");
        assert_eq!(results.len(), 7);
        assert_eq!(results.iter().map(|c| c.items.len()).sum::<usize>(), 44);
    }

    #[test]
    fn test_search_case_insensitive() {
        let results = search("DIALOG");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Feedback");
        let ids: Vec<_> = results[0].items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["alert-dialog", "dialog"]);
    }

    #[test]
    fn test_search_drops_empty_categories() {
        let results = search("menu");
        let names: Vec<_> = results.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Navigation", "Feedback"]);
        assert!(search("nonexistent").is_empty());
    }

    // ==========================================================================
    // Lookup Tests
    // ==========================================================================

    #[test]
    fn test_label_for() {
        assert_eq!(label_for("nav-menu"), "Navigation Menu");
        assert_eq!(label_for("faders"), "Faders & Toggles");
        assert_eq!(label_for("hologram"), "hologram");
    }

    #[test]
    fn test_showcase_info() {
        let button = showcase_info("button").unwrap();
        assert_eq!(button.title, "Button");
        assert!(button.usage.is_some());

        assert_eq!(showcase_info("chart").unwrap().title, "Charts");
        assert_eq!(showcase_info("switch").unwrap().title, "Switch");
        assert_eq!(showcase_info("checkbox").unwrap().title, "Checkbox");
    }

    #[test]
    fn test_under_construction_entries() {
        let missing: Vec<_> = items()
            .filter(|item| showcase_info(item.id).is_none())
            .map(|item| item.id)
            .collect();
        assert_eq!(missing, vec!["date-picker", "sonner"]);
    }

    // ==========================================================================
    // Design Context Tests
    // ==========================================================================

    #[test]
    fn test_design_context_for_every_theme() {
        for id in ThemeId::ALL {
            let context = design_context(id);
            assert!(!context.title.is_empty());
            assert!(context.principles.iter().all(|p| !p.is_empty()));
        }
        assert_eq!(design_context(ThemeId::Skeuomorphism).title, "Skeuomorphism (Modern)");
    }

    #[test]
    fn test_design_context_serializes_camel_case() {
        let json = serde_json::to_value(design_context(ThemeId::Minimalism)).unwrap();
        assert!(json.get("bestFor").is_some());
        assert_eq!(json["principles"].as_array().unwrap().len(), 4);
    }
}
