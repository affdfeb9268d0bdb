//! WCAG 2.1 contrast measurement.
//!
//! Used by the CLI's contrast report and by palette tests to check that
//! the derived foreground swatches actually read against their
//! backgrounds. Measurement happens in sRGB relative luminance space —
//! the WCAG definition — after converting the HSL triple through the
//! same channel formula the hex output uses.

use crate::hsl::Hsl;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Hsl) -> f64 {
    let (r, g, b) = color.to_rgb8();
    let r_lin = srgb_to_linear(f64::from(r) / 255.0);
    let g_lin = srgb_to_linear(f64::from(g) / 255.0);
    let b_lin = srgb_to_linear(f64::from(b) / 255.0);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Hsl, b: Hsl) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Hsl::new(0.0, 0.0, 0.0));
        assert!(approx_eq(lum, 0.0, 0.001), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Hsl::new(0.0, 0.0, 100.0));
        assert!(approx_eq(lum, 1.0, 0.001), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance(Hsl::new(0.0, 100.0, 50.0));
        // Red contributes 0.2126
        assert!(approx_eq(lum, 0.2126, 0.01), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance(Hsl::new(120.0, 100.0, 50.0));
        // Green contributes 0.7152
        assert!(approx_eq(lum, 0.7152, 0.01), "Green luminance: {lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Hsl::new(0.0, 0.0, 0.0), Hsl::new(0.0, 0.0, 100.0));
        assert!(approx_eq(ratio, 21.0, 0.1), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = Hsl::new(262.0, 83.0, 58.0);
        let ratio = contrast_ratio(c, c);
        assert!(approx_eq(ratio, 1.0, 0.01), "Same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Hsl::new(262.0, 83.0, 58.0);
        let b = Hsl::new(82.0, 40.0, 20.0);
        let ab = contrast_ratio(a, b);
        let ba = contrast_ratio(b, a);
        assert!(approx_eq(ab, ba, 0.001), "Asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn contrast_always_at_least_one() {
        let a = Hsl::new(30.0, 50.0, 48.0);
        let b = Hsl::new(210.0, 50.0, 52.0);
        let ratio = contrast_ratio(a, b);
        assert!(ratio >= 1.0, "Contrast < 1: {ratio}");
    }
}
