//! # sw-palette — deterministic palette derivation
//!
//! Derives a complete 10-swatch UI palette from a single base color and a
//! light/dark mode flag. One parameter shift produces an entirely new
//! coherent scheme — same roles, same order, new colors.
//!
//! # Architecture
//!
//! ```text
//! base hue + saturation + lightness + mode
//!     │
//!     ▼
//! role.rs:    the ten fixed color roles (names, CSS names, usage text)
//!     │
//!     ▼
//! palette.rs: offset/clamp rules per role → Swatch (hsl + hex)
//!     │
//!     ▼
//! css.rs:     serialize a Palette into a :root variable block
//! ```
//!
//! Derivation is a stateless transform: every call computes the palette
//! fresh from its arguments, nothing is cached or mutated in place, and
//! identical inputs always yield structurally equal output. Callers that
//! own sliders, toggles, or clipboards keep that state on their side and
//! hand plain numbers in.

pub mod css;
pub mod palette;
pub mod preset;
pub mod role;

pub use palette::{Mode, Palette, Swatch};
pub use role::Role;
