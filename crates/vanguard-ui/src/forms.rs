//! Form controls
//!
//! Local control state (checked flags, slider values, OTP digits) lives on
//! the props struct. None of it is coupled to the theme; styles are computed
//! from whatever bundle is active when rendering.

use serde::{Deserialize, Serialize};
use vanguard_theme::{primary_directive, ControlFinish, TokenBundle};

use crate::classes::{merge_classes, ClassList};
use crate::error::{Result, UiError};

const FOCUS_RING: &str = "focus:ring-2 focus:ring-indigo-500/20";

/// A `(value, label)` choice shared by select-like controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Submitted value
    pub value: String,
    /// Visible label
    pub label: String,
}

impl SelectOption {
    /// Create an option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The aesthetic picker options used across the form demos
pub fn aesthetic_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("vanguard", "Vanguard"),
        SelectOption::new("neo", "Neo-Brutalism"),
        SelectOption::new("liquid", "Liquid Glass"),
        SelectOption::new("glass", "Glassmorphism"),
    ]
}

fn find_label<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.as_str())
}

fn require_option(options: &[SelectOption], value: &str, field: &'static str) -> Result<()> {
    if options.iter().any(|o| o.value == value) {
        Ok(())
    } else {
        Err(UiError::InvalidValue {
            field,
            reason: format!("no option with value '{value}'"),
        })
    }
}

// =============================================================================
// Label
// =============================================================================

/// Form field label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label text
    pub text: String,
}

impl Label {
    /// Create a label
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Classes for the label element
    pub fn computed_styles(&self, theme: &TokenBundle) -> String {
        merge_classes(&[
            "text-sm font-bold leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70",
            &theme.text_style,
        ])
    }
}

// =============================================================================
// Checkbox
// =============================================================================

/// Checkbox with an optional inline label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkbox {
    /// Whether the box is checked
    #[serde(default)]
    pub checked: bool,
    /// Inline label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Checkbox {
    /// Create an unchecked checkbox
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the inline label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Flip the checked state, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> CheckboxStyles {
        let fill = if self.checked {
            theme.primary_button_style.as_str()
        } else {
            "bg-transparent"
        };

        CheckboxStyles {
            root: "flex items-center gap-3 cursor-pointer group".to_string(),
            control: ClassList::new()
                .push("h-5 w-5 rounded-md border flex items-center justify-center transition-all")
                .push(&theme.input_style)
                .push(fill)
                .push("group-hover:scale-105 active:scale-95")
                .build(),
            indicator_visible: self.checked,
            label: self.label.as_ref().map(|_| {
                merge_classes(&[
                    "text-sm font-bold opacity-70 group-hover:opacity-100 transition-opacity",
                    &theme.text_style,
                ])
            }),
        }
    }
}

/// Computed checkbox styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxStyles {
    /// Clickable row
    pub root: String,
    /// The box itself
    pub control: String,
    /// Whether the check mark is drawn
    pub indicator_visible: bool,
    /// Inline label, when present
    pub label: Option<String>,
}

// =============================================================================
// Radio Group
// =============================================================================

/// Single choice among options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioGroup {
    /// Choices in display order
    pub options: Vec<SelectOption>,
    /// Selected value
    pub value: String,
}

impl RadioGroup {
    /// Create a group with `value` selected
    pub fn new(options: Vec<SelectOption>, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        require_option(&options, &value, "radio")?;
        Ok(Self { options, value })
    }

    /// Select another option
    pub fn select(&mut self, value: &str) -> Result<()> {
        require_option(&self.options, value, "radio")?;
        self.value = value.to_string();
        Ok(())
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> RadioGroupStyles {
        let items = self
            .options
            .iter()
            .map(|option| {
                let checked = option.value == self.value;
                RadioItemStyles {
                    value: option.value.clone(),
                    checked,
                    control: ClassList::new()
                        .push("aspect-square h-5 w-5 rounded-full border flex items-center justify-center cursor-pointer transition-all")
                        .push(&theme.input_style)
                        .push(if checked {
                            "border-indigo-500"
                        } else {
                            "border-current opacity-40 hover:opacity-100"
                        })
                        .build(),
                    dot: checked.then(|| "h-2.5 w-2.5 rounded-full bg-indigo-500".to_string()),
                    label: Label::new(option.label.clone()).computed_styles(theme),
                }
            })
            .collect();

        RadioGroupStyles {
            root: "grid gap-3".to_string(),
            items,
        }
    }
}

/// Styles for one radio option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioItemStyles {
    /// Option value
    pub value: String,
    /// Whether this option is selected
    pub checked: bool,
    /// The ring
    pub control: String,
    /// Inner dot, only for the selected option
    pub dot: Option<String>,
    /// Option label
    pub label: String,
}

/// Computed radio group styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioGroupStyles {
    /// Group container
    pub root: String,
    /// Per-option styles
    pub items: Vec<RadioItemStyles>,
}

// =============================================================================
// Select
// =============================================================================

/// Native-style dropdown select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Select {
    /// Choices in display order
    pub options: Vec<SelectOption>,
    /// Selected value
    pub value: String,
}

impl Select {
    /// Create a select with `value` selected
    pub fn new(options: Vec<SelectOption>, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        require_option(&options, &value, "select")?;
        Ok(Self { options, value })
    }

    /// Change the selected value
    pub fn set_value(&mut self, value: &str) -> Result<()> {
        require_option(&self.options, value, "select")?;
        self.value = value.to_string();
        Ok(())
    }

    /// Label of the selected option
    pub fn selected_label(&self) -> Option<&str> {
        find_label(&self.options, &self.value)
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> SelectStyles {
        SelectStyles {
            root: "relative w-full".to_string(),
            control: merge_classes(&[
                "w-full appearance-none px-4 py-2.5 rounded-xl border outline-none font-bold text-sm transition-all",
                &theme.input_style,
                &theme.text_style,
                FOCUS_RING,
            ]),
            chevron: "absolute right-3 top-1/2 -translate-y-1/2 pointer-events-none opacity-40".to_string(),
        }
    }
}

/// Computed select styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectStyles {
    /// Wrapper
    pub root: String,
    /// The select element
    pub control: String,
    /// Chevron icon
    pub chevron: String,
}

// =============================================================================
// Textarea
// =============================================================================

/// Multi-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Textarea {
    /// Current value
    #[serde(default)]
    pub value: String,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Textarea {
    /// Create an empty textarea
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Classes for the textarea element
    pub fn computed_styles(&self, theme: &TokenBundle) -> String {
        merge_classes(&[
            "w-full px-4 py-3 rounded-xl border outline-none font-medium text-sm transition-all min-h-[100px]",
            &theme.input_style,
            &theme.text_style,
            FOCUS_RING,
        ])
    }
}

// =============================================================================
// Input OTP
// =============================================================================

/// Default number of OTP slots
pub const DEFAULT_OTP_LENGTH: usize = 6;

/// One-time code input split into digit slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputOtp {
    value: String,
    max_length: usize,
}

impl Default for InputOtp {
    fn default() -> Self {
        Self::new(DEFAULT_OTP_LENGTH)
    }
}

impl InputOtp {
    /// Create an empty input with `max_length` slots
    pub fn new(max_length: usize) -> Self {
        Self {
            value: String::new(),
            max_length,
        }
    }

    /// Digits entered so far
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of slots
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Replace the value with typed or pasted text.
    ///
    /// The text is cut to the slot count first; the result is accepted only
    /// if every remaining character is an ASCII digit. Returns whether the
    /// value changed.
    pub fn input(&mut self, raw: &str) -> bool {
        let truncated: String = raw.chars().take(self.max_length).collect();
        if !truncated.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        let changed = truncated != self.value;
        self.value = truncated;
        changed
    }

    /// Whether every slot is filled
    pub fn is_complete(&self) -> bool {
        self.value.len() == self.max_length
    }

    /// Slot that shows the caret, if any slot is still empty
    pub fn caret_slot(&self) -> Option<usize> {
        (self.value.len() < self.max_length).then_some(self.value.len())
    }

    /// Digit in each slot
    pub fn slots(&self) -> Vec<Option<char>> {
        let mut digits = self.value.chars();
        (0..self.max_length).map(|_| digits.next()).collect()
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> InputOtpStyles {
        let base = "w-10 h-12 rounded-lg border flex items-center justify-center text-lg font-black transition-all";
        let slots = self
            .slots()
            .into_iter()
            .map(|digit| {
                let state = if digit.is_some() {
                    "border-indigo-500 shadow-[0_0_10px_rgba(99,102,241,0.2)]"
                } else {
                    "border-current opacity-20"
                };
                merge_classes(&[base, state, &theme.text_style])
            })
            .collect();

        InputOtpStyles {
            root: "flex gap-2".to_string(),
            slots,
            caret: "w-px h-6 bg-indigo-500 animate-pulse".to_string(),
        }
    }
}

/// Computed OTP styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputOtpStyles {
    /// Slot row
    pub root: String,
    /// Per-slot classes
    pub slots: Vec<String>,
    /// Blinking caret
    pub caret: String,
}

// =============================================================================
// Combobox
// =============================================================================

/// Placeholder shown when nothing is chosen
pub const COMBOBOX_PLACEHOLDER: &str = "Select an aesthetic...";

/// Searchable single-choice picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combobox {
    /// Choices in display order
    pub options: Vec<SelectOption>,
    /// Selected value, empty when nothing is chosen
    #[serde(default)]
    pub value: String,
    /// Text shown when nothing is chosen
    pub placeholder: String,
    /// Whether the option list is open
    #[serde(default)]
    pub is_open: bool,
}

impl Combobox {
    /// Create a closed combobox with nothing selected
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            value: String::new(),
            placeholder: COMBOBOX_PLACEHOLDER.to_string(),
            is_open: false,
        }
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Open or close the option list
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Pick an option and close the list
    pub fn select(&mut self, value: &str) -> Result<()> {
        require_option(&self.options, value, "combobox")?;
        self.value = value.to_string();
        self.is_open = false;
        Ok(())
    }

    /// Label of the selected option
    pub fn selected_label(&self) -> Option<&str> {
        find_label(&self.options, &self.value)
    }

    /// Text shown on the trigger
    pub fn display_text(&self) -> &str {
        self.selected_label().unwrap_or(&self.placeholder)
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> ComboboxStyles {
        ComboboxStyles {
            trigger: merge_classes(&[
                "w-full px-4 py-2.5 rounded-xl border flex items-center justify-between cursor-pointer font-bold text-sm transition-all",
                &theme.input_style,
                &theme.text_style,
            ]),
            text: if self.selected_label().is_some() {
                String::new()
            } else {
                "opacity-40".to_string()
            },
            content: self.is_open.then(|| {
                merge_classes(&[
                    "absolute top-full left-0 w-full mt-2 p-1 z-50",
                    &theme.card_style,
                ])
            }),
            item: merge_classes(&[
                "px-3 py-2 text-sm font-bold rounded-lg cursor-pointer hover:bg-black/5 dark:hover:bg-white/5",
                &theme.text_style,
            ]),
        }
    }
}

/// Computed combobox styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboboxStyles {
    /// Trigger button
    pub trigger: String,
    /// Trigger text; dimmed while showing the placeholder
    pub text: String,
    /// Option list, only while open
    pub content: Option<String>,
    /// Option row
    pub item: String,
}

// =============================================================================
// Switch
// =============================================================================

/// On/off switch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Switch {
    /// Whether the switch is on
    #[serde(default)]
    pub checked: bool,
}

impl Switch {
    /// Create a switch
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }

    /// Flip the switch, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }

    /// Compute styles. Track and thumb depend on the control finish.
    pub fn computed_styles(&self, finish: ControlFinish) -> SwitchStyles {
        let track = ClassList::new()
            .push("relative inline-flex h-6 w-11 shrink-0 cursor-pointer items-center rounded-full transition-colors focus-visible:outline-none")
            .push(if self.checked { "bg-indigo-600" } else { "bg-gray-200" })
            .push(match finish {
                ControlFinish::Brutalist => {
                    "border-2 border-black rounded-none h-7 w-12 shadow-[2px_2px_0px_0px_rgba(0,0,0,1)]"
                }
                ControlFinish::LiquidGlass => "bg-white/5 border border-white/10 backdrop-blur-md",
                ControlFinish::Clay => "shadow-[inset_2px_2px_4px_rgba(0,0,0,0.1)] border-none",
                ControlFinish::Standard | ControlFinish::Tactile => "",
            })
            .build();

        let thumb = ClassList::new()
            .push("pointer-events-none block h-5 w-5 rounded-full transition-transform")
            .push(if self.checked { "translate-x-5" } else { "translate-x-0.5" })
            .push(match finish {
                ControlFinish::Brutalist => "border-2 border-black rounded-none bg-white h-5 w-5",
                _ => "bg-white shadow-sm",
            })
            .push_if(
                finish == ControlFinish::LiquidGlass,
                if self.checked {
                    "bg-cyan-400 shadow-[0_0_10px_rgba(34,211,238,0.8)]"
                } else {
                    "bg-white/20"
                },
            )
            .push_if(
                finish == ControlFinish::Clay,
                "shadow-[2px_2px_4px_rgba(0,0,0,0.2)]",
            )
            .build();

        SwitchStyles { track, thumb }
    }
}

/// Computed switch styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchStyles {
    /// Track
    pub track: String,
    /// Sliding thumb
    pub thumb: String,
}

// =============================================================================
// Slider
// =============================================================================

/// Horizontal 0 to 100 slider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Slider {
    value: u8,
}

impl Slider {
    /// Create a slider, clamping `value` into 0..=100
    pub fn new(value: f64) -> Self {
        let mut slider = Self::default();
        slider.set_value(value);
        slider
    }

    /// Current value
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Set the value, clamped into 0..=100 and rounded
    pub fn set_value(&mut self, value: f64) {
        self.value = if value.is_nan() {
            0
        } else {
            value.clamp(0.0, 100.0).round() as u8
        };
    }

    /// Compute styles. The range fill takes the accent's leading directive.
    pub fn computed_styles(&self, theme: &TokenBundle, finish: ControlFinish) -> SliderStyles {
        let track = ClassList::new()
            .push("relative h-1.5 w-full grow overflow-hidden rounded-full bg-gray-200")
            .push(match finish {
                ControlFinish::Brutalist => "border-2 border-black rounded-none h-3 bg-white",
                ControlFinish::LiquidGlass => "bg-white/5 border border-white/10 backdrop-blur-md",
                ControlFinish::Clay => "shadow-[inset_2px_2px_4px_rgba(0,0,0,0.1)]",
                ControlFinish::Standard | ControlFinish::Tactile => "",
            })
            .build();

        let range = ClassList::new()
            .push("absolute h-full")
            .push(primary_directive(&theme.accent_style))
            .push_if(finish == ControlFinish::Brutalist, "bg-yellow-400")
            .push_if(
                finish == ControlFinish::LiquidGlass,
                "bg-cyan-500 shadow-[0_0_15px_rgba(6,182,212,0.5)]",
            )
            .build();

        let thumb = ClassList::new()
            .push("pointer-events-none absolute h-5 w-5 rounded-full border border-gray-200 bg-white shadow-sm transition-colors")
            .push(match finish {
                ControlFinish::Brutalist => {
                    "border-2 border-black rounded-none bg-[#FF6B6B] shadow-[2px_2px_0px_0px_rgba(0,0,0,1)] h-6 w-6"
                }
                ControlFinish::LiquidGlass => "bg-white/90 shadow-[0_0_10px_white] border-none",
                ControlFinish::Clay => "shadow-[2px_2px_4px_rgba(0,0,0,0.2)] border-none",
                ControlFinish::Standard | ControlFinish::Tactile => "",
            })
            .build();

        SliderStyles {
            root: "relative flex w-full touch-none select-none items-center py-4".to_string(),
            track,
            range,
            range_width: format!("{}%", self.value),
            thumb,
            thumb_left: format!("calc({}% - 10px)", self.value),
        }
    }
}

/// Computed slider styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderStyles {
    /// Wrapper
    pub root: String,
    /// Track
    pub track: String,
    /// Filled part of the track
    pub range: String,
    /// Inline width of the fill
    pub range_width: String,
    /// Thumb
    pub thumb: String,
    /// Inline left offset of the thumb
    pub thumb_left: String,
}
