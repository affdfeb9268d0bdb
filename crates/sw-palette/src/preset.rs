//! Named preset base colors — ready-to-use starting points.
//!
//! Each preset is a specific base triple that produces a distinctive,
//! coherent scheme. The mode is still the caller's choice.

use crate::palette::{Mode, Palette};

/// A named base color for palette generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Preset {
    /// Generate the palette for this preset in the given mode.
    #[must_use]
    pub fn generate(self, mode: Mode) -> Palette {
        Palette::generate(self.hue, self.saturation, self.lightness, mode)
    }
}

const PRESETS: [Preset; 6] = [
    Preset { name: "violet", hue: 262.0, saturation: 83.0, lightness: 58.0 },
    Preset { name: "emerald", hue: 160.0, saturation: 84.0, lightness: 39.0 },
    Preset { name: "sky", hue: 199.0, saturation: 89.0, lightness: 48.0 },
    Preset { name: "rose", hue: 350.0, saturation: 89.0, lightness: 60.0 },
    Preset { name: "amber", hue: 38.0, saturation: 92.0, lightness: 50.0 },
    Preset { name: "slate", hue: 215.0, saturation: 16.0, lightness: 47.0 },
];

/// Look up a preset by name (case-insensitive).
///
/// `"default"` aliases the violet preset. Returns `None` if the name is
/// not recognized.
#[must_use]
pub fn preset(name: &str) -> Option<Preset> {
    let lower = name.to_lowercase();
    let lower = if lower == "default" { "violet" } else { &lower };
    PRESETS.iter().find(|p| p.name == lower).copied()
}

/// All available preset names.
#[must_use]
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
