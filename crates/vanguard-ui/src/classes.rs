//! Utility-class merging
//!
//! Components build their class strings from a component default, a bundle
//! field, and caller extras. Later classes win over earlier classes that set
//! the same property under the same variant prefix, so a bundle's
//! `rounded-none` cleanly replaces a component's `rounded-lg` while
//! `hover:rounded-lg` would survive.
//!
//! ```rust
//! use vanguard_ui::classes::merge_classes;
//!
//! let merged = merge_classes(&["px-4 py-2 bg-white rounded-lg", "bg-[#FFE66D] rounded-none p-2"]);
//! assert_eq!(merged, "bg-[#FFE66D] rounded-none p-2");
//! ```
//!
//! Classes that belong to no known group are never dropped, apart from exact
//! duplicates.

use std::collections::HashSet;

// =============================================================================
// Public API
// =============================================================================

/// Merge class strings left to right, resolving conflicts in favour of later
/// classes
pub fn merge_classes(inputs: &[&str]) -> String {
    let tokens: Vec<&str> = inputs.iter().flat_map(|s| s.split_whitespace()).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut claimed: HashSet<(String, &'static str)> = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());

    for &token in tokens.iter().rev() {
        if !seen.insert(token) {
            continue;
        }

        let (variant, base) = split_variant(token);
        if let Some(group) = class_group(base) {
            if claimed.contains(&(variant.clone(), group)) {
                continue;
            }
            for &conflict in conflicting_groups(group) {
                claimed.insert((variant.clone(), conflict));
            }
            claimed.insert((variant, group));
        }
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// Builder for conditional class composition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    parts: Vec<String>,
}

impl ClassList {
    /// Create an empty class list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append classes
    pub fn push(mut self, classes: impl AsRef<str>) -> Self {
        let classes = classes.as_ref();
        if !classes.trim().is_empty() {
            self.parts.push(classes.to_string());
        }
        self
    }

    /// Append classes when `condition` holds
    pub fn push_if(self, condition: bool, classes: impl AsRef<str>) -> Self {
        if condition {
            self.push(classes)
        } else {
            self
        }
    }

    /// Append classes when present
    pub fn push_opt(self, classes: Option<&str>) -> Self {
        match classes {
            Some(classes) => self.push(classes),
            None => self,
        }
    }

    /// Merge everything pushed so far
    pub fn build(&self) -> String {
        let parts: Vec<&str> = self.parts.iter().map(String::as_str).collect();
        merge_classes(&parts)
    }
}

// =============================================================================
// Token Parsing
// =============================================================================

/// Split `hover:focus:!bg-black` into a normalized variant key and the base
/// class. Variant order does not matter; `!` marks a separate layer.
fn split_variant(token: &str) -> (String, &str) {
    let mut depth = 0i32;
    let mut boundaries = Vec::new();
    for (idx, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth -= 1,
            ':' if depth == 0 => boundaries.push(idx),
            _ => {}
        }
    }

    let (mut variants, base) = match boundaries.last() {
        Some(&last) => {
            let mut variants = Vec::with_capacity(boundaries.len());
            let mut start = 0;
            for &end in &boundaries {
                variants.push(&token[start..end]);
                start = end + 1;
            }
            (variants, &token[last + 1..])
        }
        None => (Vec::new(), token),
    };

    let (base, important) = match base.strip_prefix('!').or_else(|| base.strip_suffix('!')) {
        Some(stripped) => (stripped, true),
        None => (base, false),
    };

    variants.sort_unstable();
    let mut key = variants.join(":");
    if important {
        key.push('!');
    }
    (key, base)
}

/// Strip a trailing `/opacity` modifier that sits outside brackets
fn strip_opacity(value: &str) -> &str {
    let mut depth = 0i32;
    for (idx, ch) in value.char_indices().rev() {
        match ch {
            ']' => depth += 1,
            '[' => depth -= 1,
            '/' if depth == 0 => return &value[..idx],
            _ => {}
        }
    }
    value
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

const NAMED_COLORS: &[&str] = &["white", "black", "transparent", "current", "inherit"];

fn is_color(value: &str) -> bool {
    let value = strip_opacity(value);
    if is_arbitrary(value) {
        let inner = &value[1..value.len() - 1];
        let inner = inner.strip_prefix("color:").unwrap_or(inner);
        return inner.starts_with('#')
            || inner.starts_with("rgb")
            || inner.starts_with("hsl")
            || inner.starts_with("oklch");
    }
    if NAMED_COLORS.contains(&value) {
        return true;
    }
    match value.rsplit_once('-') {
        Some((hue, shade)) => {
            PALETTE.contains(&hue) && !shade.is_empty() && shade.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Widths such as `2`, `px`, or `[3px]`
fn is_width(value: &str) -> bool {
    value == "px"
        || (!value.is_empty() && value.chars().all(|c| c.is_ascii_digit()))
        || (is_arbitrary(value) && !is_color(value))
}

// =============================================================================
// Class Groups
// =============================================================================

const SIDES: &[&str] = &["x", "y", "s", "e", "t", "r", "b", "l"];

fn class_group(class: &str) -> Option<&'static str> {
    let class = class.strip_prefix('-').unwrap_or(class);

    if let Some(group) = keyword_group(class) {
        return Some(group);
    }
    if let Some(value) = class.strip_prefix("bg-") {
        return Some(background_group(value));
    }
    if let Some(value) = class.strip_prefix("text-") {
        return Some(text_group(value));
    }
    if let Some(value) = class.strip_prefix("font-") {
        return Some(font_group(value));
    }
    if let Some(value) = class.strip_prefix("border-") {
        return Some(border_group(value));
    }
    if let Some(value) = class.strip_prefix("rounded-") {
        return Some(rounded_group(value));
    }
    if let Some(value) = class.strip_prefix("shadow-") {
        return Some(if is_color(value) { "shadow-color" } else { "shadow" });
    }
    if let Some(value) = class.strip_prefix("ring-offset-") {
        return Some(if is_color(value) { "ring-offset-color" } else { "ring-offset-w" });
    }
    if let Some(value) = class.strip_prefix("ring-") {
        return Some(if is_color(value) { "ring-color" } else { "ring-w" });
    }
    if let Some(value) = class.strip_prefix("outline-") {
        return Some(outline_group(value));
    }
    if let Some(value) = class.strip_prefix("flex-") {
        return Some(match value {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        });
    }
    if let Some(value) = class.strip_prefix("placeholder-") {
        return is_color(value).then_some("placeholder-color");
    }

    for &(prefix, group) in COMPOUND_PREFIXES {
        if class.starts_with(prefix) {
            return Some(group);
        }
    }

    let (head, _) = class.split_once('-')?;
    simple_group(head)
}

fn keyword_group(class: &str) -> Option<&'static str> {
    let group = match class {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid"
        | "hidden" | "contents" | "table" | "flow-root" | "list-item" => "display",
        "static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
        "visible" | "invisible" | "collapse" => "visibility",
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
        "italic" | "not-italic" => "font-style",
        "underline" | "overline" | "line-through" | "no-underline" => "text-decoration",
        "antialiased" | "subpixel-antialiased" => "font-smoothing",
        "truncate" => "text-overflow",
        "border" => "border-w",
        "rounded" => "rounded",
        "shadow" => "shadow",
        "ring" | "ring-inset" => "ring-w",
        "outline" => "outline-style",
        "transition" => "transition",
        "blur" => "blur",
        "backdrop-blur" => "backdrop-blur",
        "grow" => "grow",
        "shrink" => "shrink",
        "isolate" | "isolation-auto" => "isolation",
        _ => return None,
    };
    Some(group)
}

fn background_group(value: &str) -> &'static str {
    match value {
        "none" => "bg-image",
        "fixed" | "local" | "scroll" => "bg-attachment",
        "auto" | "cover" | "contain" => "bg-size",
        "repeat" | "no-repeat" => "bg-repeat",
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => "bg-position",
        _ if value.starts_with("gradient-")
            || value.starts_with("[url(")
            || value.starts_with("[linear-gradient")
            || value.starts_with("[radial-gradient") =>
        {
            "bg-image"
        }
        _ if value.starts_with("repeat-") => "bg-repeat",
        _ if value.starts_with("clip-") => "bg-clip",
        _ if value.starts_with("origin-") => "bg-origin",
        _ if value.starts_with("opacity-") => "bg-opacity",
        _ if value.starts_with("blend-") => "bg-blend",
        _ => "bg-color",
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

fn text_group(value: &str) -> &'static str {
    if FONT_SIZES.contains(&strip_opacity(value)) {
        return "font-size";
    }
    match value {
        "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
        "ellipsis" | "clip" => "text-overflow",
        "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
        _ if is_arbitrary(value) && !is_color(value) => "font-size",
        _ => "text-color",
    }
}

const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];

fn font_group(value: &str) -> &'static str {
    let numeric = is_arbitrary(value) && value[1..value.len() - 1].chars().all(|c| c.is_ascii_digit());
    if FONT_WEIGHTS.contains(&value) || numeric {
        "font-weight"
    } else {
        "font-family"
    }
}

fn border_group(value: &str) -> &'static str {
    let (head, rest) = match value.split_once('-') {
        Some((head, rest)) => (head, Some(rest)),
        None => (value, None),
    };
    if let Some(side) = SIDES.iter().find(|side| **side == head) {
        return match rest {
            None => border_width_side(side),
            Some(rest) if is_width(rest) => border_width_side(side),
            Some(_) => border_color_side(side),
        };
    }

    match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => "border-style",
        "collapse" | "separate" => "border-collapse",
        _ if is_width(value) => "border-w",
        _ => "border-color",
    }
}

fn border_width_side(side: &str) -> &'static str {
    match side {
        "x" => "border-w-x",
        "y" => "border-w-y",
        "s" => "border-w-s",
        "e" => "border-w-e",
        "t" => "border-w-t",
        "r" => "border-w-r",
        "b" => "border-w-b",
        _ => "border-w-l",
    }
}

fn border_color_side(side: &str) -> &'static str {
    match side {
        "x" => "border-color-x",
        "y" => "border-color-y",
        "s" => "border-color-s",
        "e" => "border-color-e",
        "t" => "border-color-t",
        "r" => "border-color-r",
        "b" => "border-color-b",
        _ => "border-color-l",
    }
}

fn rounded_group(value: &str) -> &'static str {
    let head = value.split('-').next().unwrap_or(value);
    match head {
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "s" => "rounded-s",
        "e" => "rounded-e",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        "ss" => "rounded-ss",
        "se" => "rounded-se",
        "es" => "rounded-es",
        "ee" => "rounded-ee",
        _ => "rounded",
    }
}

fn outline_group(value: &str) -> &'static str {
    match value {
        "none" | "dashed" | "dotted" | "double" => "outline-style",
        _ if value.starts_with("offset-") => "outline-offset",
        _ if is_width(value) => "outline-w",
        _ => "outline-color",
    }
}

/// Prefixes whose group name itself contains a dash
const COMPOUND_PREFIXES: &[(&str, &str)] = &[
    ("min-w-", "min-w"),
    ("min-h-", "min-h"),
    ("max-w-", "max-w"),
    ("max-h-", "max-h"),
    ("translate-x-", "translate-x"),
    ("translate-y-", "translate-y"),
    ("scale-x-", "scale-x"),
    ("scale-y-", "scale-y"),
    ("skew-x-", "skew-x"),
    ("skew-y-", "skew-y"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("inset-x-", "inset-x"),
    ("inset-y-", "inset-y"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("pointer-events-", "pointer-events"),
    ("backdrop-blur-", "backdrop-blur"),
    ("line-clamp-", "line-clamp"),
    ("grid-cols-", "grid-cols"),
    ("grid-rows-", "grid-rows"),
    ("col-span-", "col-span"),
    ("row-span-", "row-span"),
    ("underline-offset-", "underline-offset"),
    ("whitespace-", "whitespace"),
];

fn simple_group(head: &str) -> Option<&'static str> {
    let group = match head {
        "p" => "p",
        "px" => "px",
        "py" => "py",
        "pt" => "pt",
        "pr" => "pr",
        "pb" => "pb",
        "pl" => "pl",
        "ps" => "ps",
        "pe" => "pe",
        "m" => "m",
        "mx" => "mx",
        "my" => "my",
        "mt" => "mt",
        "mr" => "mr",
        "mb" => "mb",
        "ml" => "ml",
        "ms" => "ms",
        "me" => "me",
        "w" => "w",
        "h" => "h",
        "size" => "size",
        "z" => "z",
        "top" => "top",
        "right" => "right",
        "bottom" => "bottom",
        "left" => "left",
        "inset" => "inset",
        "gap" => "gap",
        "opacity" => "opacity",
        "transition" => "transition",
        "duration" => "duration",
        "ease" => "ease",
        "delay" => "delay",
        "animate" => "animate",
        "tracking" => "tracking",
        "leading" => "leading",
        "cursor" => "cursor",
        "select" => "select",
        "touch" => "touch",
        "items" => "align-items",
        "justify" => "justify-content",
        "self" => "align-self",
        "content" => "align-content",
        "order" => "order",
        "basis" => "basis",
        "grow" => "grow",
        "shrink" => "shrink",
        "overflow" => "overflow",
        "from" => "gradient-from",
        "via" => "gradient-via",
        "to" => "gradient-to",
        "scale" => "scale",
        "rotate" => "rotate",
        "origin" => "transform-origin",
        "blur" => "blur",
        "brightness" => "brightness",
        "contrast" => "contrast",
        "saturate" => "saturate",
        "object" => "object",
        "aspect" => "aspect",
        "fill" => "fill",
        "stroke" => "stroke",
        "columns" => "columns",
        "list" => "list",
        "decoration" => "decoration",
        "caret" => "caret",
        "accent" => "accent",
        "appearance" => "appearance",
        "resize" => "resize",
        "break" => "break",
        _ => return None,
    };
    Some(group)
}

/// Groups that a class of `group` also overrides
fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "scale" => &["scale-x", "scale-y"],
        "rounded" => &[
            "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-s", "rounded-e",
            "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl", "rounded-ss", "rounded-se",
            "rounded-es", "rounded-ee",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "border-w" => &[
            "border-w-x", "border-w-y", "border-w-s", "border-w-e", "border-w-t", "border-w-r",
            "border-w-b", "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x", "border-color-y", "border-color-s", "border-color-e",
            "border-color-t", "border-color-r", "border-color-b", "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Conflict Resolution Tests
    // ==========================================================================

    #[test]
    fn test_later_colour_wins() {
        assert_eq!(merge_classes(&["bg-white", "bg-[#FFFCF8]"]), "bg-[#FFFCF8]");
        assert_eq!(merge_classes(&["text-gray-900 text-white/70"]), "text-white/70");
    }

    #[test]
    fn test_card_defaults_yield_to_bundle() {
        let merged = merge_classes(&[
            "bg-white border rounded-lg overflow-hidden",
            "bg-[#4ECDC4] border-2 border-black shadow-[8px_8px_0px_0px_rgba(0,0,0,1)] rounded-none",
        ]);
        assert_eq!(
            merged,
            "overflow-hidden bg-[#4ECDC4] border-2 border-black shadow-[8px_8px_0px_0px_rgba(0,0,0,1)] rounded-none"
        );
    }

    #[test]
    fn test_background_colour_and_image_coexist() {
        let merged = merge_classes(&["bg-blue-500 bg-gradient-to-b from-blue-400 to-blue-600"]);
        assert_eq!(merged, "bg-blue-500 bg-gradient-to-b from-blue-400 to-blue-600");
    }

    #[test]
    fn test_text_size_colour_alignment_are_distinct() {
        let merged = merge_classes(&["text-sm text-white text-center", "text-[10px] text-black"]);
        assert_eq!(merged, "text-center text-[10px] text-black");
    }

    #[test]
    fn test_font_weight_and_family() {
        let merged = merge_classes(&["font-mono font-bold", "font-medium"]);
        assert_eq!(merged, "font-mono font-medium");
    }

    #[test]
    fn test_padding_axis_refinement() {
        assert_eq!(merge_classes(&["px-4 py-2", "p-0"]), "p-0");
        assert_eq!(merge_classes(&["p-0", "px-4"]), "p-0 px-4");
        assert_eq!(merge_classes(&["pt-2 pb-2", "py-3"]), "py-3");
        assert_eq!(merge_classes(&["p-6 pb-3"]), "p-6 pb-3");
    }

    #[test]
    fn test_border_width_sides_and_colour() {
        assert_eq!(merge_classes(&["border-t-2", "border"]), "border");
        assert_eq!(merge_classes(&["border", "border-t-2"]), "border border-t-2");
        assert_eq!(
            merge_classes(&["border-gray-200", "border-white/[0.08]"]),
            "border-white/[0.08]"
        );
        assert_eq!(merge_classes(&["border-2 border-none"]), "border-2 border-none");
    }

    #[test]
    fn test_rounded_corners() {
        assert_eq!(merge_classes(&["rounded-tl-lg", "rounded-full"]), "rounded-full");
        assert_eq!(merge_classes(&["rounded-[2rem]", "rounded-none"]), "rounded-none");
        assert_eq!(merge_classes(&["rounded-xl", "rounded-t-none"]), "rounded-xl rounded-t-none");
    }

    #[test]
    fn test_shadow_arbitrary_and_colour() {
        let merged = merge_classes(&["shadow-sm", "shadow-[0_0_10px_white]"]);
        assert_eq!(merged, "shadow-[0_0_10px_white]");

        let merged = merge_classes(&["shadow-lg shadow-black/20"]);
        assert_eq!(merged, "shadow-lg shadow-black/20");
    }

    #[test]
    fn test_sizing() {
        assert_eq!(merge_classes(&["h-6 w-11", "h-7 w-12"]), "h-7 w-12");
        assert_eq!(merge_classes(&["h-[1px] w-full", "h-[2px]"]), "w-full h-[2px]");
        assert_eq!(merge_classes(&["w-4 h-4", "size-6"]), "size-6");
    }

    #[test]
    fn test_transforms_and_transitions() {
        assert_eq!(merge_classes(&["translate-x-5", "translate-x-0.5"]), "translate-x-0.5");
        assert_eq!(merge_classes(&["transition-all", "transition-colors"]), "transition-colors");
        assert_eq!(merge_classes(&["-mb-px", "mb-2"]), "mb-2");
    }

    // ==========================================================================
    // Variant Tests
    // ==========================================================================

    #[test]
    fn test_variants_are_separate_layers() {
        let merged = merge_classes(&["bg-black hover:bg-gray-800", "bg-white"]);
        assert_eq!(merged, "hover:bg-gray-800 bg-white");

        let merged = merge_classes(&["hover:opacity-60", "hover:opacity-100"]);
        assert_eq!(merged, "hover:opacity-100");
    }

    #[test]
    fn test_variant_order_is_normalized() {
        let merged = merge_classes(&["hover:focus:bg-black", "focus:hover:bg-white"]);
        assert_eq!(merged, "focus:hover:bg-white");
    }

    #[test]
    fn test_important_is_its_own_layer() {
        let merged = merge_classes(&["!bg-black", "bg-white"]);
        assert_eq!(merged, "!bg-black bg-white");
    }

    #[test]
    fn test_arbitrary_variant_with_colon() {
        let merged = merge_classes(&["[&:hover]:bg-black", "[&:hover]:bg-white"]);
        assert_eq!(merged, "[&:hover]:bg-white");
    }

    // ==========================================================================
    // Passthrough Tests
    // ==========================================================================

    #[test]
    fn test_unknown_classes_kept_and_deduplicated() {
        let merged = merge_classes(&["custom-scrollbar group", "group custom-scrollbar peer"]);
        assert_eq!(merged, "group custom-scrollbar peer");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(merge_classes(&[]), "");
        assert_eq!(merge_classes(&["", "   ", "flex"]), "flex");
    }

    #[test]
    fn test_class_list_builder() {
        let classes = ClassList::new()
            .push("px-3 py-1.5 text-xs")
            .push_if(false, "text-lg")
            .push_if(true, "px-8")
            .push_opt(None)
            .push_opt(Some("font-bold"))
            .build();

        assert_eq!(classes, "py-1.5 text-xs px-8 font-bold");
    }

    #[test]
    fn test_colour_detection() {
        assert!(is_color("white/20"));
        assert!(is_color("[#0f172a]/80"));
        assert!(is_color("white/[0.03]"));
        assert!(is_color("cyan-500"));
        assert!(!is_color("2xl"));
        assert!(!is_color("[40px]"));
        assert!(!is_color("gradient-to-br"));
    }
}
