//! # sw-color — color math for swatchkit
//!
//! The HSL color model and its conversions. Everything here is a pure
//! function: identical inputs always produce identical outputs, there is
//! no I/O and no shared state, so every operation is safe to call from
//! anywhere without coordination.
//!
//! # Architecture
//!
//! ```text
//! hsl.rs:      Hsl model, HSL → hex/RGB conversion, hex parsing
//! contrast.rs: WCAG 2.1 relative luminance and contrast ratios
//! ```
//!
//! The conversion formula is the standard HSL → RGB channel formula
//! (offsets 0/8/4 for R/G/B). It is total over real inputs: out-of-range
//! hue wraps through the modulo arithmetic embedded in the formula, and
//! out-of-range saturation/lightness flow through unguarded — clamping
//! is the caller's responsibility, so that the formatted `hsl(...)`
//! string and the hex value are always computed from the same numbers.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod contrast;
pub mod hsl;

pub use hsl::Hsl;
