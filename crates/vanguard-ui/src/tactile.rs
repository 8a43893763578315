//! Tactile lab controls and the theme toggle
//!
//! Knobs, faders and toggle buttons look very different per control finish:
//! the tactile finish renders soft extruded plastic, liquid glass renders
//! frosted glass with a glow, brutalist renders hard black frames. Values are
//! plain percentages independent of the finish.

use serde::{Deserialize, Serialize};
use vanguard_theme::{ControlFinish, Mode, TokenBundle};

use crate::classes::{merge_classes, ClassList};
use crate::error::{Result, UiError};

/// Total knob sweep in degrees
const KNOB_SWEEP: f64 = 270.0;

fn clamp_percent(value: f64) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.clamp(0.0, 100.0).round() as u8
    }
}

// =============================================================================
// Tactile Knob
// =============================================================================

/// Rotary control over 0 to 100
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TactileKnob {
    label: String,
    value: u8,
}

impl TactileKnob {
    /// Knob at the midpoint
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: 50,
        }
    }

    /// Set the value, clamped into 0..=100
    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    /// Set the value, clamped into 0..=100
    pub fn set_value(&mut self, value: f64) {
        self.value = clamp_percent(value);
    }

    /// Caption
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current value
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Indicator angle: -135 degrees at 0, +135 degrees at 100
    pub fn rotation_degrees(&self) -> f64 {
        f64::from(self.value) / 100.0 * KNOB_SWEEP - KNOB_SWEEP / 2.0
    }

    /// Compute styles for the finish
    pub fn computed_styles(&self, theme: &TokenBundle, finish: ControlFinish) -> KnobStyles {
        let label = merge_classes(&[
            "text-[10px] uppercase font-bold tracking-widest opacity-50",
            &theme.text_style,
        ]);
        let rotation = format!("rotate({}deg)", self.rotation_degrees());

        match finish {
            ControlFinish::LiquidGlass => KnobStyles {
                root: "flex flex-col items-center gap-3".to_string(),
                body: "relative w-16 h-16 rounded-full bg-white/[0.03] backdrop-blur-md border border-white/[0.05] shadow-2xl flex items-center justify-center".to_string(),
                cap: None,
                indicator: Some(
                    "absolute top-2 w-1 h-3 rounded-full bg-indigo-400 shadow-[0_0_8px_rgba(129,140,248,0.8)]"
                        .to_string(),
                ),
                rotation,
                label,
                value_text: format!("{}%", self.value),
            },
            ControlFinish::Tactile => KnobStyles {
                root: "flex flex-col items-center gap-3".to_string(),
                body: "relative w-16 h-16 rounded-full bg-[#eceef1] shadow-[6px_6px_12px_#d1d9e6,-6px_-6px_12px_#ffffff] flex items-center justify-center".to_string(),
                cap: Some(
                    "w-12 h-12 rounded-full bg-gradient-to-br from-[#fdfdfd] to-[#e2e4e9] shadow-[inset_1px_1px_2px_#ffffff]"
                        .to_string(),
                ),
                indicator: Some("absolute top-2 w-1 h-3 rounded-full bg-gray-400".to_string()),
                rotation,
                label,
                value_text: self.value.to_string(),
            },
            ControlFinish::Standard | ControlFinish::Brutalist | ControlFinish::Clay => KnobStyles {
                root: "flex flex-col items-center gap-2".to_string(),
                body: merge_classes(&[
                    "w-12 h-12 rounded-full flex items-center justify-center font-bold text-xs",
                    &theme.accent_style,
                ]),
                cap: None,
                indicator: None,
                rotation,
                label,
                value_text: self.value.to_string(),
            },
        }
    }
}

/// Computed knob styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnobStyles {
    /// Knob with caption
    pub root: String,
    /// Dial
    pub body: String,
    /// Raised cap, for finishes that draw one
    pub cap: Option<String>,
    /// Position mark, for finishes that draw one
    pub indicator: Option<String>,
    /// Inline transform of the position mark
    pub rotation: String,
    /// Caption
    pub label: String,
    /// Value readout
    pub value_text: String,
}

// =============================================================================
// Fader
// =============================================================================

/// Vertical slider over 0 to 100
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fader {
    label: String,
    value: u8,
}

impl Fader {
    /// Fader at `value`, clamped into 0..=100
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: clamp_percent(value),
        }
    }

    /// Caption
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current value
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Set the value from a pointer position. `offset_y` is measured from the
    /// top of a track `height` tall; the top maps to 100, the bottom to 0.
    pub fn set_from_pointer(&mut self, offset_y: f64, height: f64) -> Result<u8> {
        if !height.is_finite() || height <= 0.0 {
            return Err(UiError::InvalidValue {
                field: "height",
                reason: format!("track height must be positive, got {height}"),
            });
        }
        self.value = clamp_percent(100.0 - offset_y / height * 100.0);
        Ok(self.value)
    }

    /// Compute styles for the finish
    pub fn computed_styles(&self, theme: &TokenBundle, finish: ControlFinish) -> FaderStyles {
        let track = ClassList::new()
            .push("relative h-40 w-8 rounded-xl bg-black/5 dark:bg-white/5 border border-current opacity-20 flex items-center justify-center p-1")
            .push(match finish {
                ControlFinish::Tactile => {
                    "bg-[#eceef1] shadow-[inset_2px_2px_5px_#d1d9e6,inset_-2px_-2px_5px_#ffffff] border-none"
                }
                ControlFinish::LiquidGlass => "bg-white/[0.03] backdrop-blur-md border-white/[0.05]",
                _ => "",
            })
            .build();

        let handle = ClassList::new()
            .push("absolute w-full h-8 rounded-lg cursor-ns-resize shadow-lg transition-all")
            .push(match finish {
                ControlFinish::Tactile => {
                    "bg-gradient-to-b from-[#fdfdfd] to-[#e2e4e9] shadow-[2px_2px_5px_#d1d9e6,-2px_-2px_5px_#ffffff]"
                }
                _ => "bg-indigo-500",
            })
            .push_if(
                finish == ControlFinish::Brutalist,
                "bg-black border-2 border-black rounded-none",
            )
            .build();

        FaderStyles {
            root: "flex flex-col items-center gap-3".to_string(),
            track,
            handle,
            // The handle is a fifth of the track, so it travels 80% of it.
            handle_bottom: format!("{}%", f64::from(self.value) * 4.0 / 5.0),
            label: merge_classes(&[
                "text-[10px] uppercase font-bold tracking-widest opacity-50",
                &theme.text_style,
            ]),
        }
    }
}

/// Computed fader styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaderStyles {
    /// Fader with caption
    pub root: String,
    /// Track
    pub track: String,
    /// Handle
    pub handle: String,
    /// Inline bottom offset of the handle
    pub handle_bottom: String,
    /// Caption
    pub label: String,
}

// =============================================================================
// Tactile Toggle
// =============================================================================

/// Round latching push button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TactileToggle {
    /// Caption
    pub label: String,
    /// Whether the button is latched
    #[serde(default)]
    pub active: bool,
}

impl TactileToggle {
    /// Unlatched button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
        }
    }

    /// Flip the latch, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// Classes for the button under the finish
    pub fn computed_styles(&self, finish: ControlFinish) -> String {
        let state = match (finish, self.active) {
            (ControlFinish::Tactile, true) => {
                "bg-[#eceef1] shadow-[inset_4px_4px_8px_#d1d9e6,inset_-4px_-4px_8px_#ffffff]"
            }
            (ControlFinish::Tactile, false) => {
                "bg-[#eceef1] shadow-[6px_6px_12px_#d1d9e6,-6px_-6px_12px_#ffffff]"
            }
            (ControlFinish::Brutalist, true) => "bg-black text-white rounded-none border-2 border-black",
            (ControlFinish::Brutalist, false) => "bg-white border-2 border-black rounded-none",
            (_, true) => "bg-indigo-500 text-white",
            (_, false) => "bg-black/5 dark:bg-white/5 border border-current opacity-30",
        };
        merge_classes(&[
            "w-12 h-12 rounded-full transition-all flex items-center justify-center",
            state,
        ])
    }
}

// =============================================================================
// Theme Toggle
// =============================================================================

/// Icon designs for the light/dark toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeToggleStyle {
    /// Classic yin-yang
    YinYang,
    /// Sun morphing into a moon
    #[default]
    SunMoon,
    /// Sun with orbiting circles
    SunCircles,
    /// Light bulb
    Lightbulb,
    /// Eclipse
    Eclipse,
    /// Yin-yang with counter-rotating halves
    YinYang2,
}

impl ThemeToggleStyle {
    /// Every style, in showcase order
    pub const ALL: [ThemeToggleStyle; 6] = [
        ThemeToggleStyle::YinYang,
        ThemeToggleStyle::SunMoon,
        ThemeToggleStyle::SunCircles,
        ThemeToggleStyle::Lightbulb,
        ThemeToggleStyle::Eclipse,
        ThemeToggleStyle::YinYang2,
    ];
}

/// Button that flips between light and dark mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeToggle {
    /// Icon design
    #[serde(default)]
    pub style: ThemeToggleStyle,
}

impl ThemeToggle {
    /// Toggle with the given icon design
    pub fn new(style: ThemeToggleStyle) -> Self {
        Self { style }
    }

    /// Accessible label, describing what a press will do in `mode`
    pub fn aria_label(&self, mode: Mode) -> &'static str {
        match (self.style, mode) {
            (ThemeToggleStyle::YinYang2, _) => "Toggle theme",
            (_, Mode::Dark) => "Switch to light mode",
            (_, Mode::Light) => "Switch to dark mode",
        }
    }

    /// Classes for the button in `mode`
    pub fn computed_styles(&self, mode: Mode) -> String {
        let dark = mode.is_dark();
        match self.style {
            ThemeToggleStyle::YinYang => merge_classes(&[
                "rounded-full transition-all duration-300 active:scale-95",
                if dark {
                    "bg-slate-950 text-white"
                } else {
                    "bg-[#FAF9F6] text-slate-950 border border-gray-200"
                },
            ]),
            ThemeToggleStyle::YinYang2 => ClassList::new()
                .push("rounded-full bg-slate-950 text-white transition-all duration-300 active:scale-95")
                .push_if(dark, "bg-white text-slate-950")
                .build(),
            ThemeToggleStyle::SunMoon
            | ThemeToggleStyle::SunCircles
            | ThemeToggleStyle::Lightbulb
            | ThemeToggleStyle::Eclipse => merge_classes(&[
                "rounded-full transition-all duration-300 active:scale-95 border shadow-sm",
                if dark {
                    "bg-slate-950 text-white border-slate-700"
                } else {
                    "bg-[#FFFCF8] text-slate-950 border-slate-200"
                },
            ]),
        }
    }
}
