//! Builtin token bundles for the six canonical aesthetics
//!
//! Each aesthetic ships two bundles: a base bundle and a dark-variant bundle.
//! For five aesthetics the base bundle is the light look. Liquid Glass is dark
//! by nature, so its base bundle is the frosted light look and its dark-variant
//! bundle carries the original deep-glass look (see [`Polarity::DarkFirst`]).

use crate::ids::{Polarity, ThemeId};
use crate::schema::TokenBundle;

/// Compile-time bundle table, converted into an owned [`TokenBundle`]
struct StaticBundle {
    name: &'static str,
    background: &'static str,
    text: &'static str,
    muted_text: &'static str,
    accent: &'static str,
    card: &'static str,
    popover: &'static str,
    primary_button: &'static str,
    secondary_button: &'static str,
    input: &'static str,
    badge: &'static str,
    separator: &'static str,
    active_tab: &'static str,
    inactive_tab: &'static str,
    footer: &'static str,
    description: &'static str,
}

impl StaticBundle {
    fn into_bundle(self, id: Option<ThemeId>) -> TokenBundle {
        TokenBundle {
            name: self.name.to_string(),
            background: self.background.to_string(),
            text_style: self.text.to_string(),
            muted_text_style: self.muted_text.to_string(),
            accent_style: self.accent.to_string(),
            card_style: self.card.to_string(),
            popover_style: self.popover.to_string(),
            primary_button_style: self.primary_button.to_string(),
            secondary_button_style: self.secondary_button.to_string(),
            input_style: self.input.to_string(),
            badge_style: self.badge.to_string(),
            separator_style: self.separator.to_string(),
            active_tab_style: self.active_tab.to_string(),
            inactive_tab_style: self.inactive_tab.to_string(),
            footer_style: self.footer.to_string(),
            description: self.description.to_string(),
            id,
        }
    }
}

/// The base bundle for a canonical aesthetic
pub fn base_bundle(id: ThemeId) -> TokenBundle {
    let table = match id {
        ThemeId::Minimalism => MINIMALISM,
        ThemeId::NeoBrutalism => NEO_BRUTALISM,
        ThemeId::Glassmorphism => GLASSMORPHISM,
        ThemeId::Skeuomorphism => SKEUOMORPHISM,
        ThemeId::Claymorphism => CLAYMORPHISM,
        ThemeId::LiquidGlass => LIQUID_GLASS_FROSTED,
    };
    table.into_bundle(stable_id(id))
}

/// The dark-variant bundle for a canonical aesthetic
pub fn dark_bundle(id: ThemeId) -> TokenBundle {
    let table = match id {
        ThemeId::Minimalism => MINIMALISM_DARK,
        ThemeId::NeoBrutalism => NEO_BRUTALISM_DARK,
        ThemeId::Glassmorphism => GLASSMORPHISM_DARK,
        ThemeId::Skeuomorphism => SKEUOMORPHISM_DARK,
        ThemeId::Claymorphism => CLAYMORPHISM_DARK,
        ThemeId::LiquidGlass => LIQUID_GLASS,
    };
    table.into_bundle(stable_id(id))
}

/// Only the dark-first aesthetic carries its id on the bundle
fn stable_id(id: ThemeId) -> Option<ThemeId> {
    match id.polarity() {
        Polarity::DarkFirst => Some(id),
        Polarity::LightFirst => None,
    }
}

// =============================================================================
// Minimalism
// =============================================================================

const MINIMALISM: StaticBundle = StaticBundle {
    name: "Minimalism",
    background: "bg-[#FAF9F6]",
    text: "text-gray-900",
    muted_text: "text-gray-500",
    accent: "bg-black text-white hover:bg-gray-800",
    card: "bg-[#FFFCF8] border border-gray-200 shadow-sm rounded-lg",
    popover: "bg-[#FFFCF8] border border-gray-200 shadow-lg rounded-lg",
    primary_button: "bg-black text-white rounded-md hover:bg-gray-800 transition-colors shadow-none active:scale-95",
    secondary_button: "bg-[#FFFCF8] border border-gray-200 text-gray-900 rounded-md hover:bg-[#FAF9F6] transition-colors",
    input: "bg-[#FFFCF8] border border-gray-200 rounded-md focus:ring-1 focus:ring-black focus:border-black transition-all",
    badge: "bg-gray-100 text-gray-800 rounded-full px-2.5 py-0.5 text-xs font-medium border border-gray-200",
    separator: "bg-gray-200",
    active_tab: "border-b-2 border-black text-black",
    inactive_tab: "text-gray-500 hover:text-gray-800",
    footer: "bg-[#FFFCF8] border-t border-gray-200 text-gray-600",
    description: "Focus on essential elements, clean lines, ample whitespace, and flat colors.",
};

const MINIMALISM_DARK: StaticBundle = StaticBundle {
    name: "Minimalism Dark",
    background: "bg-[#111111]",
    text: "text-gray-100",
    muted_text: "text-gray-400",
    accent: "bg-white text-black hover:bg-gray-200",
    card: "bg-[#1A1A1A] border border-gray-800 shadow-sm rounded-lg",
    popover: "bg-[#1A1A1A] border border-gray-800 shadow-lg rounded-lg",
    primary_button: "bg-white text-black rounded-md hover:bg-gray-200 transition-colors shadow-none active:scale-95",
    secondary_button: "bg-[#1A1A1A] border border-gray-800 text-gray-100 rounded-md hover:bg-[#222222] transition-colors",
    input: "bg-[#1A1A1A] border border-gray-800 text-gray-100 rounded-md focus:ring-1 focus:ring-white focus:border-white transition-all",
    badge: "bg-gray-800 text-gray-200 rounded-full px-2.5 py-0.5 text-xs font-medium border border-gray-700",
    separator: "bg-gray-800",
    active_tab: "border-b-2 border-white text-white",
    inactive_tab: "text-gray-500 hover:text-gray-200",
    footer: "bg-[#1A1A1A] border-t border-gray-800 text-gray-400",
    description: "Focus on essential elements, clean lines, ample whitespace, and flat colors, inverted for low light.",
};

// =============================================================================
// Neo-Brutalism
// =============================================================================

const NEO_BRUTALISM: StaticBundle = StaticBundle {
    name: "Neo-Brutalism",
    background: "bg-[#FFFDF5]",
    text: "text-black font-mono",
    muted_text: "text-gray-600 font-mono",
    accent: "bg-[#FF6B6B] text-black border-2 border-black shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] hover:shadow-[2px_2px_0px_0px_rgba(0,0,0,1)] hover:translate-x-[2px] hover:translate-y-[2px]",
    card: "bg-[#4ECDC4] border-2 border-black shadow-[8px_8px_0px_0px_rgba(0,0,0,1)] rounded-none",
    popover: "bg-[#FFF8F0] border-2 border-black shadow-[8px_8px_0px_0px_rgba(0,0,0,1)] rounded-none",
    primary_button: "bg-[#FFE66D] text-black font-bold border-2 border-black shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] hover:shadow-[2px_2px_0px_0px_rgba(0,0,0,1)] hover:translate-x-[2px] hover:translate-y-[2px] active:shadow-none active:translate-x-[4px] active:translate-y-[4px] transition-all rounded-none",
    secondary_button: "bg-[#FFF8F0] text-black font-bold border-2 border-black shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] hover:shadow-[2px_2px_0px_0px_rgba(0,0,0,1)] hover:translate-x-[2px] hover:translate-y-[2px] rounded-none",
    input: "bg-[#FFF8F0] border-2 border-black p-2 shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] focus:shadow-[2px_2px_0px_0px_rgba(0,0,0,1)] focus:translate-x-[2px] focus:translate-y-[2px] focus:outline-none transition-all rounded-none font-bold",
    badge: "bg-[#FF6B6B] text-black border-2 border-black px-2 py-0.5 text-xs font-bold rounded-none",
    separator: "bg-black",
    active_tab: "bg-[#FFE66D] border-2 border-black text-black shadow-[2px_2px_0px_0px_rgba(0,0,0,1)]",
    inactive_tab: "bg-[#FFF8F0] border-2 border-black text-gray-500 hover:bg-[#FFEFD5]",
    footer: "bg-[#A7F3D0] border-t-2 border-black text-black font-mono",
    description: "High contrast, bold borders, vivid colors, raw aesthetic, hard shadows.",
};

const NEO_BRUTALISM_DARK: StaticBundle = StaticBundle {
    name: "Neo-Brutalism Dark",
    background: "bg-[#1C1C1C]",
    text: "text-white font-mono",
    muted_text: "text-gray-400 font-mono",
    accent: "bg-[#FF6B6B] text-black border-2 border-white shadow-[4px_4px_0px_0px_rgba(255,255,255,1)] hover:shadow-[2px_2px_0px_0px_rgba(255,255,255,1)] hover:translate-x-[2px] hover:translate-y-[2px]",
    card: "bg-[#2A9D8F] border-2 border-white shadow-[8px_8px_0px_0px_rgba(255,255,255,1)] rounded-none",
    popover: "bg-[#2B2B2B] border-2 border-white shadow-[8px_8px_0px_0px_rgba(255,255,255,1)] rounded-none",
    primary_button: "bg-[#FFE66D] text-black font-bold border-2 border-white shadow-[4px_4px_0px_0px_rgba(255,255,255,1)] hover:shadow-[2px_2px_0px_0px_rgba(255,255,255,1)] hover:translate-x-[2px] hover:translate-y-[2px] active:shadow-none active:translate-x-[4px] active:translate-y-[4px] transition-all rounded-none",
    secondary_button: "bg-[#2B2B2B] text-white font-bold border-2 border-white shadow-[4px_4px_0px_0px_rgba(255,255,255,1)] hover:shadow-[2px_2px_0px_0px_rgba(255,255,255,1)] hover:translate-x-[2px] hover:translate-y-[2px] rounded-none",
    input: "bg-[#2B2B2B] text-white border-2 border-white p-2 shadow-[4px_4px_0px_0px_rgba(255,255,255,1)] focus:shadow-[2px_2px_0px_0px_rgba(255,255,255,1)] focus:translate-x-[2px] focus:translate-y-[2px] focus:outline-none transition-all rounded-none font-bold",
    badge: "bg-[#FF6B6B] text-black border-2 border-white px-2 py-0.5 text-xs font-bold rounded-none",
    separator: "bg-white",
    active_tab: "bg-[#FFE66D] border-2 border-white text-black shadow-[2px_2px_0px_0px_rgba(255,255,255,1)]",
    inactive_tab: "bg-[#2B2B2B] border-2 border-white text-gray-400 hover:bg-[#3A3A3A]",
    footer: "bg-[#065F46] border-t-2 border-white text-white font-mono",
    description: "High contrast, bold borders, vivid colors, raw aesthetic, hard shadows on a night canvas.",
};

// =============================================================================
// Glassmorphism
// =============================================================================

const GLASSMORPHISM: StaticBundle = StaticBundle {
    name: "Glassmorphism",
    background: "bg-gradient-to-br from-indigo-500 via-purple-500 to-pink-500",
    text: "text-white",
    muted_text: "text-white/70",
    accent: "bg-white/20 backdrop-blur-md border border-white/30 text-white hover:bg-white/30",
    card: "bg-white/10 backdrop-blur-xl border border-white/20 shadow-xl rounded-2xl",
    popover: "bg-white/10 backdrop-blur-xl border border-white/20 shadow-2xl rounded-2xl",
    primary_button: "bg-white/20 backdrop-blur-lg border border-white/30 text-white rounded-xl hover:bg-white/30 transition-all shadow-lg hover:shadow-xl",
    secondary_button: "bg-black/20 backdrop-blur-lg border border-white/10 text-white rounded-xl hover:bg-black/30",
    input: "bg-black/10 backdrop-blur-md border border-white/10 rounded-xl text-white placeholder-white/50 focus:bg-black/20 focus:border-white/30 focus:outline-none transition-all",
    badge: "bg-white/10 backdrop-blur-md border border-white/20 text-white px-2 py-0.5 text-xs rounded-lg shadow-sm",
    separator: "bg-white/20",
    active_tab: "bg-white/20 text-white shadow-inner",
    inactive_tab: "text-white/70 hover:text-white hover:bg-white/10",
    footer: "bg-black/20 backdrop-blur-lg border-t border-white/10 text-white/80",
    description: "Translucency, blur effects, multi-layered approach, vivid backgrounds.",
};

const GLASSMORPHISM_DARK: StaticBundle = StaticBundle {
    name: "Glassmorphism Dark",
    background: "bg-gradient-to-br from-slate-900 via-indigo-950 to-purple-950",
    text: "text-white",
    muted_text: "text-white/60",
    accent: "bg-white/10 backdrop-blur-md border border-white/20 text-white hover:bg-white/20",
    card: "bg-white/5 backdrop-blur-xl border border-white/10 shadow-xl rounded-2xl",
    popover: "bg-slate-900/60 backdrop-blur-xl border border-white/10 shadow-2xl rounded-2xl",
    primary_button: "bg-white/10 backdrop-blur-lg border border-white/20 text-white rounded-xl hover:bg-white/20 transition-all shadow-lg hover:shadow-xl",
    secondary_button: "bg-black/40 backdrop-blur-lg border border-white/10 text-white rounded-xl hover:bg-black/50",
    input: "bg-black/30 backdrop-blur-md border border-white/10 rounded-xl text-white placeholder-white/40 focus:bg-black/40 focus:border-white/20 focus:outline-none transition-all",
    badge: "bg-white/5 backdrop-blur-md border border-white/10 text-white px-2 py-0.5 text-xs rounded-lg shadow-sm",
    separator: "bg-white/10",
    active_tab: "bg-white/10 text-white shadow-inner",
    inactive_tab: "text-white/50 hover:text-white hover:bg-white/5",
    footer: "bg-black/40 backdrop-blur-lg border-t border-white/5 text-white/70",
    description: "Translucency, blur effects, multi-layered approach, deep twilight backgrounds.",
};

// =============================================================================
// Skeuomorphism
// =============================================================================

const SKEUOMORPHISM: StaticBundle = StaticBundle {
    name: "Skeuomorphism",
    background: "bg-[#eceef1]",
    text: "text-slate-700",
    muted_text: "text-slate-500",
    accent: "bg-blue-500 text-white shadow-[inset_0_1px_0_rgba(255,255,255,0.4),0_2px_4px_rgba(0,0,0,0.2)] bg-gradient-to-b from-blue-400 to-blue-600",
    card: "bg-[#eceef1] border border-white/40 shadow-[8px_8px_16px_#d1d9e6,-8px_-8px_16px_#ffffff] rounded-[2rem]",
    popover: "bg-[#e0e5ec] rounded-xl shadow-[9px_9px_16px_rgb(163,177,198,0.6),-9px_-9px_16px_rgba(255,255,255,0.5)] border border-white/20",
    primary_button: "bg-[#eceef1] border border-white/50 shadow-[4px_4px_8px_#d1d9e6,-4px_-4px_8px_#ffffff] active:shadow-[inset_4px_4px_8px_#d1d9e6,inset_-4px_-4px_8px_#ffffff] text-slate-600 font-bold transition-all rounded-xl",
    secondary_button: "bg-gray-200 text-gray-600 rounded-lg shadow-[3px_3px_6px_0_rgba(163,177,198,0.5),-3px_-3px_6px_0_rgba(255,255,255,0.6)]",
    input: "bg-[#eceef1] border border-white/20 shadow-[inset_4px_4px_8px_#d1d9e6,inset_-4px_-4px_8px_#ffffff] rounded-2xl px-4 py-2 outline-none text-slate-700",
    badge: "bg-[#eceef1] shadow-[2px_2px_4px_#d1d9e6,-2px_-2px_4px_#ffffff] text-slate-500 text-[10px] font-black px-2 py-1 rounded-lg",
    separator: "bg-gray-300 shadow-[inset_1px_1px_2px_#b8b9be,inset_-1px_-1px_2px_#ffffff]",
    active_tab: "text-indigo-600 shadow-[inset_3px_3px_6px_rgba(0,0,0,0.1)] rounded-lg bg-[#e2e4e9]",
    inactive_tab: "text-gray-500 hover:text-gray-700",
    footer: "bg-[#e0e5ec] border-t border-white/50 text-gray-600 shadow-[inset_0_10px_20px_#b8b9be]",
    description: "Mimics real-world objects, depth, shadows, highlights, tactile feel.",
};

const SKEUOMORPHISM_DARK: StaticBundle = StaticBundle {
    name: "Skeuomorphism Dark",
    background: "bg-[#2b2e33]",
    text: "text-slate-200",
    muted_text: "text-slate-400",
    accent: "bg-blue-500 text-white shadow-[inset_0_1px_0_rgba(255,255,255,0.2),0_2px_4px_rgba(0,0,0,0.5)] bg-gradient-to-b from-blue-500 to-blue-700",
    card: "bg-[#2b2e33] border border-white/5 shadow-[8px_8px_16px_#1f2125,-8px_-8px_16px_#373b41] rounded-[2rem]",
    popover: "bg-[#30343a] rounded-xl shadow-[9px_9px_16px_rgba(0,0,0,0.5),-9px_-9px_16px_rgba(255,255,255,0.05)] border border-white/5",
    primary_button: "bg-[#2b2e33] border border-white/10 shadow-[4px_4px_8px_#1f2125,-4px_-4px_8px_#373b41] active:shadow-[inset_4px_4px_8px_#1f2125,inset_-4px_-4px_8px_#373b41] text-slate-200 font-bold transition-all rounded-xl",
    secondary_button: "bg-[#34383e] text-slate-300 rounded-lg shadow-[3px_3px_6px_0_rgba(0,0,0,0.4),-3px_-3px_6px_0_rgba(255,255,255,0.05)]",
    input: "bg-[#2b2e33] border border-white/5 shadow-[inset_4px_4px_8px_#1f2125,inset_-4px_-4px_8px_#373b41] rounded-2xl px-4 py-2 outline-none text-slate-200",
    badge: "bg-[#2b2e33] shadow-[2px_2px_4px_#1f2125,-2px_-2px_4px_#373b41] text-slate-400 text-[10px] font-black px-2 py-1 rounded-lg",
    separator: "bg-[#1f2125] shadow-[inset_1px_1px_2px_#141518,inset_-1px_-1px_2px_#3d4147]",
    active_tab: "text-indigo-300 shadow-[inset_3px_3px_6px_rgba(0,0,0,0.4)] rounded-lg bg-[#25282c]",
    inactive_tab: "text-slate-500 hover:text-slate-300",
    footer: "bg-[#25282c] border-t border-white/5 text-slate-400 shadow-[inset_0_10px_20px_#1a1c1f]",
    description: "Mimics real-world objects, depth, shadows, highlights, tactile feel, machined in graphite.",
};

// =============================================================================
// Claymorphism
// =============================================================================

const CLAYMORPHISM: StaticBundle = StaticBundle {
    name: "Claymorphism",
    background: "bg-[#f0f4f8]",
    text: "text-slate-700 font-nunito",
    muted_text: "text-slate-500 font-nunito",
    accent: "bg-[#6C5DD3] text-white rounded-2xl shadow-[inset_-4px_-4px_8px_rgba(0,0,0,0.2),inset_4px_4px_8px_rgba(255,255,255,0.2),8px_8px_16px_rgba(108,93,211,0.3)] hover:scale-105 transition-transform",
    card: "bg-[#FFFCF8] rounded-3xl p-6 shadow-[10px_10px_20px_rgba(174,174,192,0.4),-10px_-10px_20px_#FFFFFF] border-none",
    popover: "bg-[#FFFCF8] rounded-3xl p-6 shadow-[20px_20px_40px_rgba(174,174,192,0.4),-20px_-20px_40px_#FFFFFF] border-none",
    primary_button: "bg-[#FF754C] text-white font-bold rounded-2xl py-3 px-6 shadow-[inset_-4px_-4px_4px_rgba(189,59,29,0.3),inset_4px_4px_4px_rgba(255,255,255,0.3),8px_8px_16px_rgba(255,117,76,0.3)] hover:scale-105 active:scale-95 transition-all",
    secondary_button: "bg-[#E4E9F2] text-slate-600 font-bold rounded-2xl py-3 px-6 shadow-[inset_-4px_-4px_8px_rgba(0,0,0,0.05),inset_4px_4px_8px_rgba(255,255,255,1),6px_6px_12px_rgba(174,174,192,0.4)]",
    input: "bg-[#E4E9F2] rounded-2xl border-none p-4 shadow-[inset_6px_6px_12px_rgba(174,174,192,0.3),inset_-6px_-6px_12px_#FFFFFF] focus:outline-none focus:ring-2 focus:ring-[#6C5DD3]/20",
    badge: "bg-[#8bb4f7] text-white rounded-xl px-3 py-1 text-xs font-bold shadow-[inset_-2px_-2px_4px_rgba(0,0,0,0.1),inset_2px_2px_4px_rgba(255,255,255,0.3)]",
    separator: "bg-slate-200",
    active_tab: "bg-[#6C5DD3] text-white rounded-xl shadow-[inset_-2px_-2px_4px_rgba(0,0,0,0.2),inset_2px_2px_4px_rgba(255,255,255,0.2)]",
    inactive_tab: "text-slate-400 hover:bg-white/50 rounded-xl",
    footer: "bg-white/50 border-t border-white shadow-inner text-slate-600",
    description: "Fluffy 3D shapes, inflated look, soft shadows, rounded corners, matte finish.",
};

const CLAYMORPHISM_DARK: StaticBundle = StaticBundle {
    name: "Claymorphism Dark",
    background: "bg-[#1e1b2e]",
    text: "text-slate-100 font-nunito",
    muted_text: "text-slate-400 font-nunito",
    accent: "bg-[#7B6CF0] text-white rounded-2xl shadow-[inset_-4px_-4px_8px_rgba(0,0,0,0.3),inset_4px_4px_8px_rgba(255,255,255,0.15),8px_8px_16px_rgba(0,0,0,0.4)] hover:scale-105 transition-transform",
    card: "bg-[#2a2640] rounded-3xl p-6 shadow-[10px_10px_20px_rgba(0,0,0,0.4),-10px_-10px_20px_rgba(255,255,255,0.03)] border-none",
    popover: "bg-[#2a2640] rounded-3xl p-6 shadow-[20px_20px_40px_rgba(0,0,0,0.5),-20px_-20px_40px_rgba(255,255,255,0.03)] border-none",
    primary_button: "bg-[#FF754C] text-white font-bold rounded-2xl py-3 px-6 shadow-[inset_-4px_-4px_4px_rgba(120,30,10,0.4),inset_4px_4px_4px_rgba(255,255,255,0.2),8px_8px_16px_rgba(0,0,0,0.4)] hover:scale-105 active:scale-95 transition-all",
    secondary_button: "bg-[#35304f] text-slate-200 font-bold rounded-2xl py-3 px-6 shadow-[inset_-4px_-4px_8px_rgba(0,0,0,0.2),inset_4px_4px_8px_rgba(255,255,255,0.05),6px_6px_12px_rgba(0,0,0,0.4)]",
    input: "bg-[#35304f] text-slate-100 rounded-2xl border-none p-4 shadow-[inset_6px_6px_12px_rgba(0,0,0,0.35),inset_-6px_-6px_12px_rgba(255,255,255,0.04)] focus:outline-none focus:ring-2 focus:ring-[#7B6CF0]/30",
    badge: "bg-[#5b7fd6] text-white rounded-xl px-3 py-1 text-xs font-bold shadow-[inset_-2px_-2px_4px_rgba(0,0,0,0.2),inset_2px_2px_4px_rgba(255,255,255,0.2)]",
    separator: "bg-slate-700",
    active_tab: "bg-[#7B6CF0] text-white rounded-xl shadow-[inset_-2px_-2px_4px_rgba(0,0,0,0.3),inset_2px_2px_4px_rgba(255,255,255,0.15)]",
    inactive_tab: "text-slate-500 hover:bg-white/5 rounded-xl",
    footer: "bg-black/20 border-t border-white/5 shadow-inner text-slate-400",
    description: "Fluffy 3D shapes, inflated look, soft shadows, rounded corners, matte finish after dark.",
};

// =============================================================================
// Liquid Glass
// =============================================================================

/// Base entry: the frosted, visually light rendition
const LIQUID_GLASS_FROSTED: StaticBundle = StaticBundle {
    name: "Liquid Glass Frosted",
    background: "bg-gradient-to-br from-sky-100 via-indigo-50 to-rose-100 relative overflow-hidden",
    text: "text-slate-800 antialiased font-medium tracking-wide",
    muted_text: "text-slate-500",
    accent: "bg-gradient-to-br from-cyan-400/90 to-blue-500/90 backdrop-blur-md border-t border-l border-white/60 border-b border-black/10 shadow-[0_0_20px_rgba(8,145,178,0.25)] text-white hover:brightness-110 active:scale-95 transition-all duration-300",
    card: "bg-white/40 backdrop-blur-[40px] border border-white/60 shadow-[0_20px_50px_rgba(15,23,42,0.12),inset_0_0_20px_rgba(255,255,255,0.4)] rounded-[2.5rem] relative after:absolute after:inset-0 after:rounded-[2.5rem] after:pointer-events-none after:shadow-[inset_0_1px_1px_rgba(255,255,255,0.8)]",
    popover: "bg-white/70 backdrop-blur-2xl border border-white/60 shadow-[0_20px_50px_rgba(15,23,42,0.15)] rounded-3xl",
    primary_button: "bg-gradient-to-tr from-indigo-400/80 via-purple-400/80 to-pink-400/80 text-white font-bold rounded-full shadow-[0_10px_30px_rgba(139,92,246,0.25)] hover:shadow-[0_15px_40px_rgba(139,92,246,0.4)] transition-all hover:-translate-y-0.5 active:translate-y-0 border border-white/40",
    secondary_button: "bg-white/40 backdrop-blur-sm border border-white/60 text-slate-700 hover:text-slate-900 hover:bg-white/60 rounded-2xl",
    input: "bg-white/50 border border-white/70 rounded-full px-5 py-2 text-slate-800 placeholder-slate-400 focus:bg-white/70 outline-none transition-all shadow-inner",
    badge: "bg-white/50 backdrop-blur-md border border-white/70 text-indigo-600 text-[9px] font-black px-3 py-1 rounded-full tracking-widest uppercase",
    separator: "bg-slate-900/10",
    active_tab: "text-cyan-700 border-b-2 border-cyan-500 bg-white/40",
    inactive_tab: "text-slate-500 hover:text-slate-800 hover:bg-white/30",
    footer: "bg-white/40 backdrop-blur-xl border-t border-white/60 text-slate-600",
    description: "Liquid Glass in daylight: frosted white layers, high backdrop-blur, and soft refractive edges.",
};

/// Dark-variant entry: the original deep-glass rendition
const LIQUID_GLASS: StaticBundle = StaticBundle {
    name: "Liquid Glass",
    background: "bg-slate-950 relative overflow-hidden",
    text: "text-white antialiased font-medium tracking-wide",
    muted_text: "text-white/50",
    accent: "bg-gradient-to-br from-cyan-500/90 to-blue-600/90 backdrop-blur-md border-t border-l border-white/30 border-b border-black/20 shadow-[0_0_20px_rgba(8,145,178,0.4)] text-white hover:brightness-110 active:scale-95 transition-all duration-300",
    card: "bg-white/[0.03] backdrop-blur-[40px] border border-white/[0.08] shadow-[0_20px_50px_rgba(0,0,0,0.5),inset_0_0_20px_rgba(255,255,255,0.02)] rounded-[2.5rem] relative after:absolute after:inset-0 after:rounded-[2.5rem] after:pointer-events-none after:shadow-[inset_0_1px_1px_rgba(255,255,255,0.1)]",
    popover: "bg-[#0f172a]/80 backdrop-blur-2xl border border-white/10 shadow-[0_20px_50px_rgba(0,0,0,0.5)] rounded-3xl",
    primary_button: "bg-gradient-to-tr from-indigo-500/80 via-purple-500/80 to-pink-500/80 text-white font-bold rounded-full shadow-[0_10px_30px_rgba(139,92,246,0.3)] hover:shadow-[0_15px_40px_rgba(139,92,246,0.5)] transition-all hover:-translate-y-0.5 active:translate-y-0 border border-white/20",
    secondary_button: "bg-black/20 backdrop-blur-sm border border-white/5 text-white/70 hover:text-white hover:bg-black/30 rounded-2xl",
    input: "bg-white/[0.02] border border-white/[0.05] rounded-full px-5 py-2 text-white placeholder-white/20 focus:bg-white/[0.05] outline-none transition-all shadow-inner",
    badge: "bg-white/[0.05] backdrop-blur-md border border-white/10 text-indigo-200 text-[9px] font-black px-3 py-1 rounded-full tracking-widest uppercase",
    separator: "bg-white/10",
    active_tab: "text-cyan-300 border-b-2 border-cyan-400 bg-white/5",
    inactive_tab: "text-white/40 hover:text-white/80 hover:bg-white/5",
    footer: "bg-black/20 backdrop-blur-xl border-t border-white/10 text-white/60",
    description: "Inspired by MacOS Big Sur and Windows 11 Acrylic. Uses high backdrop-blur, semi-transparent white layers, and subtle border gradients.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_bundle_is_complete() {
        for id in ThemeId::ALL {
            base_bundle(id).validate().unwrap();
            dark_bundle(id).validate().unwrap();
        }
    }

    #[test]
    fn test_base_and_dark_differ() {
        for id in ThemeId::ALL {
            assert_ne!(base_bundle(id), dark_bundle(id), "{id}");
            assert_ne!(base_bundle(id).name, dark_bundle(id).name, "{id}");
        }
    }

    #[test]
    fn test_dark_variant_names() {
        assert_eq!(dark_bundle(ThemeId::Minimalism).name, "Minimalism Dark");
        assert_eq!(dark_bundle(ThemeId::NeoBrutalism).name, "Neo-Brutalism Dark");
        assert_eq!(dark_bundle(ThemeId::Glassmorphism).name, "Glassmorphism Dark");
        assert_eq!(dark_bundle(ThemeId::Skeuomorphism).name, "Skeuomorphism Dark");
        assert_eq!(dark_bundle(ThemeId::Claymorphism).name, "Claymorphism Dark");
    }

    #[test]
    fn test_liquid_glass_entries() {
        let base = base_bundle(ThemeId::LiquidGlass);
        let dark = dark_bundle(ThemeId::LiquidGlass);

        assert_eq!(base.name, "Liquid Glass Frosted");
        assert_eq!(dark.name, "Liquid Glass");
        assert!(dark.background.contains("bg-slate-950"));
        assert_eq!(base.id, Some(ThemeId::LiquidGlass));
        assert_eq!(dark.id, Some(ThemeId::LiquidGlass));
    }

    #[test]
    fn test_light_first_bundles_carry_no_id() {
        assert_eq!(base_bundle(ThemeId::Minimalism).id, None);
        assert_eq!(dark_bundle(ThemeId::Claymorphism).id, None);
    }
}
