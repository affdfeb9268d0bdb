//! Palette derivation — the bridge from a base color to concrete swatches.
//!
//! Takes a base hue/saturation/lightness and a mode flag and derives the
//! full 10-swatch palette by applying a fixed offset/clamp rule per role.
//! Every swatch is computed independently from the clamped base triple,
//! never from another derived swatch.

use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};
use sw_color::Hsl;

use crate::role::Role;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Light or dark scheme.
///
/// The mode constrains the base lightness before derivation so the scheme
/// stays usable: dark schemes cap the base at 60%, light schemes floor it
/// at 40%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Constrain a base lightness value for this mode.
    #[must_use]
    pub fn clamp_lightness(self, l: f32) -> f32 {
        match self {
            Self::Dark => l.min(60.0),
            Self::Light => l.max(40.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Swatch
// ---------------------------------------------------------------------------

/// One named color within a palette.
///
/// The hex string is computed from `color` at construction, so the
/// `hsl(...)` representation and the hex can never drift apart. The three
/// fixed semantic roles are the one exception: their hex values are the
/// canonical constants the scheme was designed around, carried verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    /// Which role this swatch fills.
    pub role: Role,
    /// The color triple. Out-of-clamp components (e.g. a derived
    /// lightness above 100) are kept as-is — both representations below
    /// are computed from these exact numbers.
    pub color: Hsl,
    /// 6-digit `#rrggbb` value.
    pub hex: String,
}

impl Swatch {
    /// A swatch whose hex is the exact conversion of its color.
    fn derived(role: Role, color: Hsl) -> Self {
        let hex = color.to_hex();
        Self { role, color, hex }
    }

    /// A fixed semantic swatch with a canonical hex constant.
    fn fixed(role: Role, color: Hsl, hex: &'static str) -> Self {
        Self {
            role,
            color,
            hex: hex.to_owned(),
        }
    }

    /// Display name of the swatch's role.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.role.name()
    }

    /// Human-readable description of the role.
    #[must_use]
    pub const fn usage(&self) -> &'static str {
        self.role.usage()
    }

    /// The `hsl(h, s%, l%)` string for this swatch.
    #[must_use]
    pub fn hsl(&self) -> String {
        self.color.to_css()
    }
}

impl Serialize for Swatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Swatch", 4)?;
        s.serialize_field("name", self.name())?;
        s.serialize_field("usage", self.usage())?;
        s.serialize_field("hsl", &self.hsl())?;
        s.serialize_field("hex", &self.hex)?;
        s.end()
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Fixed semantic triples — input-independent.
const SUCCESS: Hsl = Hsl::new(142.0, 76.0, 36.0);
const WARNING: Hsl = Hsl::new(38.0, 92.0, 50.0);
const DESTRUCTIVE: Hsl = Hsl::new(0.0, 84.0, 60.0);

/// Canonical hex constants for the semantic swatches.
const SUCCESS_HEX: &str = "#16a34a";
const WARNING_HEX: &str = "#f59e0b";
const DESTRUCTIVE_HEX: &str = "#ef4444";

/// A complete derived palette: exactly one swatch per [`Role`], in
/// [`Role::ALL`] order.
///
/// Computed fresh on every call to [`generate`](Self::generate) — never
/// mutated in place, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    swatches: [Swatch; 10],
}

impl Palette {
    /// Derive a palette from a base color and mode.
    ///
    /// The base triple is first brought into range (hue wrapped into
    /// [0, 360), saturation and lightness clamped into [0, 100]), then
    /// the mode lightness constraint is applied. Each swatch is computed
    /// independently from that prepared triple:
    ///
    /// | Role               | hue        | saturation      | lightness          |
    /// |--------------------|------------|-----------------|--------------------|
    /// | Primary            | h          | s               | l                  |
    /// | Primary Foreground | h          | s               | l > 50 ? 10 : 98   |
    /// | Secondary          | h+30 mod   | max(s-20, 10)   | l+10               |
    /// | Accent             | h+180 mod  | s               | l                  |
    /// | Muted              | h          | max(s-40, 5)    | l > 50 ? 96 : 15   |
    /// | Background         | h          | max(s-50, 5)    | l > 50 ? 100 : 5   |
    /// | Foreground         | h          | max(s-45, 5)    | l > 50 ? 5 : 98    |
    ///
    /// plus the three fixed semantic swatches. The secondary lightness is
    /// deliberately not re-clamped: derivation is total, and the swatch's
    /// display string and hex both see the same out-of-clamp number.
    #[must_use]
    pub fn generate(base_hue: f32, saturation: f32, lightness: f32, mode: Mode) -> Self {
        let base = Hsl::new(base_hue, saturation, lightness).clamped();
        let h = base.h;
        let s = base.s;
        let l = mode.clamp_lightness(base.l);

        let swatches = [
            Swatch::derived(Role::Primary, Hsl::new(h, s, l)),
            Swatch::derived(
                Role::PrimaryForeground,
                Hsl::new(h, s, if l > 50.0 { 10.0 } else { 98.0 }),
            ),
            Swatch::derived(
                Role::Secondary,
                Hsl::new((h + 30.0) % 360.0, (s - 20.0).max(10.0), l + 10.0),
            ),
            Swatch::derived(Role::Accent, Hsl::new((h + 180.0) % 360.0, s, l)),
            Swatch::derived(
                Role::Muted,
                Hsl::new(h, (s - 40.0).max(5.0), if l > 50.0 { 96.0 } else { 15.0 }),
            ),
            Swatch::derived(
                Role::Background,
                Hsl::new(h, (s - 50.0).max(5.0), if l > 50.0 { 100.0 } else { 5.0 }),
            ),
            Swatch::derived(
                Role::Foreground,
                Hsl::new(h, (s - 45.0).max(5.0), if l > 50.0 { 5.0 } else { 98.0 }),
            ),
            Swatch::fixed(Role::Success, SUCCESS, SUCCESS_HEX),
            Swatch::fixed(Role::Warning, WARNING, WARNING_HEX),
            Swatch::fixed(Role::Destructive, DESTRUCTIVE, DESTRUCTIVE_HEX),
        ];

        Self { swatches }
    }

    /// The swatches in fixed role order.
    #[must_use]
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Look up the swatch for a role.
    #[must_use]
    pub fn get(&self, role: Role) -> &Swatch {
        // Swatches are laid out in Role::ALL order.
        &self.swatches[role as usize]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.swatches.iter()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.swatches.len()))?;
        for swatch in &self.swatches {
            seq.serialize_element(swatch)?;
        }
        seq.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
