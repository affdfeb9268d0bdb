//! Stylesheet serialization — a `Palette` as CSS custom properties.
//!
//! Pure string formatting, kept out of the derivation core: the variable
//! block is built from each swatch's `hsl(...)` string, so the exported
//! stylesheet can never disagree with the palette it came from.

use std::fmt::Write;

use crate::palette::Palette;

/// Render a palette as a `:root` custom-property block.
///
/// One `--name: hsl(...);` declaration per swatch, in palette order:
///
/// ```
/// use sw_palette::{css, Mode, Palette};
///
/// let palette = Palette::generate(262.0, 83.0, 58.0, Mode::Dark);
/// let sheet = css::stylesheet(&palette);
/// assert!(sheet.starts_with(":root {\n"));
/// assert!(sheet.contains("  --primary: hsl(262, 83%, 58%);\n"));
/// ```
#[must_use]
pub fn stylesheet(palette: &Palette) -> String {
    let mut out = String::from(":root {\n");
    for swatch in palette {
        // Infallible: writing to a String cannot fail.
        let _ = writeln!(out, "  --{}: {};", swatch.role.css_name(), swatch.hsl());
    }
    out.push_str("}\n");
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::palette::Mode;

    #[test]
    fn full_block_for_violet_dark() {
        let palette = Palette::generate(262.0, 83.0, 58.0, Mode::Dark);
        let expected = "\
:root {
  --primary: hsl(262, 83%, 58%);
  --primary-foreground: hsl(262, 83%, 10%);
  --secondary: hsl(292, 63%, 68%);
  --accent: hsl(82, 83%, 58%);
  --muted: hsl(262, 43%, 96%);
  --background: hsl(262, 33%, 100%);
  --foreground: hsl(262, 38%, 5%);
  --success: hsl(142, 76%, 36%);
  --warning: hsl(38, 92%, 50%);
  --destructive: hsl(0, 84%, 60%);
}
";
        assert_eq!(stylesheet(&palette), expected);
    }

    #[test]
    fn one_declaration_per_swatch() {
        let palette = Palette::generate(30.0, 40.0, 45.0, Mode::Light);
        let sheet = stylesheet(&palette);
        assert_eq!(sheet.matches(": hsl(").count(), 10);
        assert_eq!(sheet.matches(";\n").count(), 10);
    }

    #[test]
    fn declarations_follow_palette_order() {
        let palette = Palette::generate(30.0, 40.0, 45.0, Mode::Light);
        let sheet = stylesheet(&palette);
        let primary = sheet.find("--primary:").unwrap();
        let accent = sheet.find("--accent:").unwrap();
        let destructive = sheet.find("--destructive:").unwrap();
        assert!(primary < accent && accent < destructive);
    }
}
