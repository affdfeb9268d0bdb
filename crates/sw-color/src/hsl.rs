// SPDX-License-Identifier: MIT
//
// The HSL color model and the hex conversion at the heart of swatchkit.
//
// Single-character variable names (r, g, b, h, s, l, a, k) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]

use std::fmt;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// An HSL color triple.
///
/// - `h`: hue angle in degrees. Conventionally 0–360, but any real value
///   is accepted — the conversion formula wraps it modulo 360.
/// - `s`: saturation as a percentage, conventionally 0–100.
/// - `l`: lightness as a percentage, conventionally 0–100.
///
/// The type deliberately does **not** validate its fields. Every
/// conversion is total over real inputs, and out-of-range saturation or
/// lightness flows through unguarded. Callers that need in-range values
/// clamp explicitly with [`clamped`](Self::clamped). This keeps the
/// formatted `hsl(...)` string and the hex value computed from the same
/// numbers — the two representations can never disagree.
///
/// # Examples
///
/// ```
/// use sw_color::Hsl;
///
/// let violet = Hsl::new(262.0, 83.0, 58.0);
/// assert_eq!(violet.to_hex(), "#7c3bed");
/// assert_eq!(violet.to_css(), "hsl(262, 83%, 58%)");
///
/// // Hue wraps — one full turn is a no-op.
/// assert_eq!(Hsl::new(622.0, 83.0, 58.0).to_hex(), violet.to_hex());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: f32,
    /// Saturation percentage.
    pub s: f32,
    /// Lightness percentage.
    pub l: f32,
}

impl Hsl {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an HSL color from raw components. No normalization.
    #[inline]
    #[must_use]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Create an HSL color from 8-bit sRGB values.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        rgb_to_hsl(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse a hex color string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the leading `#`.
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        let (r, g, b) = parse_hex(s)?;
        Some(Self::from_rgb8(r, g, b))
    }

    // ─── Range handling ──────────────────────────────────────────────────

    /// Return a copy with hue wrapped into [0, 360) and saturation and
    /// lightness clamped into [0, 100].
    ///
    /// This is the caller-side clamp: the conversion functions themselves
    /// never clamp, so both the display string and the hex value see the
    /// same numbers.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
        }
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to 8-bit sRGB channels.
    ///
    /// Implements the standard HSL → RGB formula with channel offsets
    /// 0/8/4 for R/G/B: normalize `l` to [0, 1], compute the chroma
    /// factor `a = s/100 · min(l, 1-l)`, then for each offset `n`:
    ///
    /// ```text
    /// k = (n + h/30) mod 12
    /// channel = l - a · max(min(k-3, 9-k, 1), -1)
    /// ```
    ///
    /// Each channel is rounded to the nearest integer in 0–255.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let l = self.l / 100.0;
        let a = self.s / 100.0 * l.min(1.0 - l);

        let f = |n: f32| -> u8 {
            let k = (n + self.h / 30.0).rem_euclid(12.0);
            let factor = (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            to_u8(a.mul_add(-factor, l))
        };

        (f(0.0), f(8.0), f(4.0))
    }

    /// Convert to a hex string (`#rrggbb`).
    ///
    /// Total over real inputs — out-of-range hue wraps through the modulo
    /// in the formula, and out-of-range saturation/lightness saturates at
    /// the channel boundaries rather than erroring.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Format as a CSS `hsl(...)` functional value.
    ///
    /// Uses the raw component values — the same numbers `to_hex` reads.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ─── Conversion helpers ──────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

/// Convert sRGB (0.0–1.0) components to an HSL triple.
///
/// Hue lands in [0, 360), saturation and lightness in [0, 100].
fn rgb_to_hsl(r: f32, g: f32, b: f32) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d < f32::EPSILON {
        // Achromatic — hue is undefined, default to 0.
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let s = d / (1.0 - 2.0f32.mul_add(l, -1.0).abs());

    let h = if (max - r).abs() < f32::EPSILON {
        (g - b) / d
    } else if (max - g).abs() < f32::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(normalize_hue(h * 60.0), s * 100.0, l * 100.0)
}

// ─── Hex parsing ─────────────────────────────────────────────────────────────

/// Parse a hex color string into RGB bytes.
fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.strip_prefix('#').unwrap_or(s);

    match s.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(s.as_bytes()[0])?;
            let g = parse_hex_digit(s.as_bytes()[1])?;
            let b = parse_hex_digit(s.as_bytes()[2])?;
            Some((r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&s.as_bytes()[0..2])?;
            let g = parse_hex_byte(&s.as_bytes()[2..4])?;
            let b = parse_hex_byte(&s.as_bytes()[4..6])?;
            Some((r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
