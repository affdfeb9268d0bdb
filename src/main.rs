// SPDX-License-Identifier: MIT
//
// swatchkit — a deterministic UI color scheme generator.
//
// This is the main binary that wires together the library crates:
//
//   sw-color   → HSL model, hex conversion, WCAG contrast
//   sw-palette → role-tagged palette derivation, CSS/JSON serialization
//
// One invocation is one generation: resolve the base color, derive the
// palette, render it in the requested format, exit. All state lives in
// the arguments; the core crates hold none.

use std::env;
use std::fmt::Write as _;
use std::process;

use regex::Regex;
use sw_color::Hsl;
use sw_color::contrast::contrast_ratio;
use sw_palette::css;
use sw_palette::preset::{preset, preset_names};
use sw_palette::{Mode, Palette, Role};

/// How to render the generated palette.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Output {
    /// Aligned table of name / hsl / hex / usage (the default).
    Table,
    /// A `:root { --name: hsl(...); }` variable block.
    Css,
    /// JSON array of swatch objects.
    Json,
    /// WCAG contrast ratios for the palette's text pairings.
    Contrast,
}

/// Parsed command line: the base color, mode, and output format.
struct Cli {
    base: Hsl,
    mode: Mode,
    output: Output,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print!("{}", usage());
        return;
    }

    match run(&args) {
        Ok(out) => print!("{out}"),
        Err(msg) => {
            eprintln!("swatchkit: {msg}");
            process::exit(1);
        }
    }
}

/// Parse arguments, generate the palette, and render it.
fn run(args: &[String]) -> Result<String, String> {
    let cli = parse_args(args)?;
    let palette = Palette::generate(cli.base.h, cli.base.s, cli.base.l, cli.mode);

    Ok(match cli.output {
        Output::Table => render_table(&palette),
        Output::Css => css::stylesheet(&palette),
        Output::Json => render_json(&palette)?,
        Output::Contrast => render_contrast(&palette),
    })
}

fn usage() -> String {
    let presets: Vec<&str> = preset_names().collect();
    format!(
        "\
swatchkit — deterministic UI color scheme generator

USAGE:
    swatchkit [BASE] [OPTIONS]

BASE:
    A preset name ({presets}), a hex color like '#7c3bed',
    or an hsl literal like 'hsl(262, 83%, 58%)'.
    Defaults to the violet preset.

OPTIONS:
    --hue <deg>           Override the base hue
    --saturation <pct>    Override the base saturation
    --lightness <pct>     Override the base lightness
    --dark                Dark scheme (default)
    --light               Light scheme
    --css                 Emit a :root CSS variable block
    --json                Emit the palette as JSON
    --contrast            Show WCAG contrast ratios for text pairings
    -h, --help            Show this help
",
        presets = presets.join(", "),
    )
}

/// Parse the argument list into a [`Cli`].
fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut base: Option<Hsl> = None;
    let mut mode = Mode::Dark;
    let mut output = Output::Table;
    let mut hue: Option<f32> = None;
    let mut saturation: Option<f32> = None;
    let mut lightness: Option<f32> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dark" => mode = Mode::Dark,
            "--light" => mode = Mode::Light,
            "--css" => output = Output::Css,
            "--json" => output = Output::Json,
            "--contrast" => output = Output::Contrast,
            "--hue" => hue = Some(parse_number(arg, iter.next())?),
            "--saturation" => saturation = Some(parse_number(arg, iter.next())?),
            "--lightness" => lightness = Some(parse_number(arg, iter.next())?),
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{other}' (try --help)"));
            }
            other => {
                if base.is_some() {
                    return Err(format!("unexpected extra argument '{other}'"));
                }
                base = Some(parse_base(other)?);
            }
        }
    }

    // Component flags override the (possibly defaulted) base color.
    let mut color = base.unwrap_or_else(|| Hsl::new(262.0, 83.0, 58.0));
    if let Some(h) = hue {
        color.h = h;
    }
    if let Some(s) = saturation {
        color.s = s;
    }
    if let Some(l) = lightness {
        color.l = l;
    }

    Ok(Cli { base: color, mode, output })
}

/// Parse a numeric flag value.
fn parse_number(flag: &str, value: Option<&String>) -> Result<f32, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse()
        .map_err(|_| format!("{flag}: '{value}' is not a number"))
}

/// Resolve a base color argument: preset name, `hsl(...)` literal, or hex.
fn parse_base(input: &str) -> Result<Hsl, String> {
    if let Some(p) = preset(input) {
        return Ok(Hsl::new(p.hue, p.saturation, p.lightness));
    }
    if let Some(color) = parse_hsl_literal(input)? {
        return Ok(color);
    }
    if let Some(color) = Hsl::hex(input) {
        return Ok(color);
    }
    Err(format!(
        "unrecognized base color '{input}' (expected a preset name, hex color, or hsl(...) literal)"
    ))
}

/// Parse an `hsl(h, s%, l%)` literal. Returns `Ok(None)` when the input
/// doesn't look like an hsl literal at all, so other forms get a chance.
fn parse_hsl_literal(input: &str) -> Result<Option<Hsl>, String> {
    if !input.trim_start().to_lowercase().starts_with("hsl") {
        return Ok(None);
    }

    let re = Regex::new(
        r"(?i)^\s*hsl\(\s*(-?[0-9]+(?:\.[0-9]+)?)\s*,\s*(-?[0-9]+(?:\.[0-9]+)?)%?\s*,\s*(-?[0-9]+(?:\.[0-9]+)?)%?\s*\)\s*$",
    )
    .map_err(|e| e.to_string())?;

    let caps = re
        .captures(input)
        .ok_or_else(|| format!("malformed hsl literal '{input}'"))?;

    let component = |i: usize| -> Result<f32, String> {
        caps[i]
            .parse()
            .map_err(|_| format!("malformed hsl literal '{input}'"))
    };

    Ok(Some(Hsl::new(component(1)?, component(2)?, component(3)?)))
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Aligned table: name, hsl, hex, usage.
fn render_table(palette: &Palette) -> String {
    let mut out = String::new();
    for swatch in palette {
        let _ = writeln!(
            out,
            "{:<20} {:<24} {:<9} {}",
            swatch.name(),
            swatch.hsl(),
            swatch.hex,
            swatch.usage(),
        );
    }
    out
}

fn render_json(palette: &Palette) -> Result<String, String> {
    serde_json::to_string_pretty(palette)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| e.to_string())
}

/// WCAG contrast ratios for the pairings a UI actually renders.
fn render_contrast(palette: &Palette) -> String {
    let background = palette.get(Role::Background).color;
    let pairs = [
        (Role::PrimaryForeground, palette.get(Role::Primary).color),
        (Role::Foreground, background),
        (Role::Primary, background),
        (Role::Accent, background),
        (Role::Success, background),
        (Role::Warning, background),
        (Role::Destructive, background),
    ];

    let mut out = String::new();
    for (role, bg) in pairs {
        let ratio = contrast_ratio(palette.get(role).color, bg);
        let verdict = if ratio >= 4.5 {
            "AA"
        } else if ratio >= 3.0 {
            "AA-large"
        } else {
            "fail"
        };
        let _ = writeln!(out, "{:<20} {ratio:>5.2}:1  {verdict}", role.name());
    }
    out
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    // ── Base color parsing ──────────────────────────────────────────

    #[test]
    fn base_from_preset_name() {
        let color = parse_base("violet").unwrap();
        assert_eq!(color, Hsl::new(262.0, 83.0, 58.0));
    }

    #[test]
    fn base_from_hsl_literal() {
        let color = parse_base("hsl(262, 83%, 58%)").unwrap();
        assert_eq!(color, Hsl::new(262.0, 83.0, 58.0));
    }

    #[test]
    fn base_from_hsl_literal_without_percent() {
        let color = parse_base("hsl(262, 83, 58)").unwrap();
        assert_eq!(color, Hsl::new(262.0, 83.0, 58.0));
    }

    #[test]
    fn base_from_hex() {
        let color = parse_base("#ff0000").unwrap();
        assert_eq!(color.to_hex(), "#ff0000");
    }

    #[test]
    fn malformed_hsl_literal_is_an_error() {
        assert!(parse_base("hsl(262, 83%)").is_err());
    }

    #[test]
    fn unknown_base_is_an_error() {
        assert!(parse_base("chartreuse-ish").is_err());
    }

    // ── Argument parsing ────────────────────────────────────────────

    #[test]
    fn defaults_to_violet_dark_table() {
        let cli = parse_args(&[]).unwrap();
        assert_eq!(cli.base, Hsl::new(262.0, 83.0, 58.0));
        assert_eq!(cli.mode, Mode::Dark);
        assert!(cli.output == Output::Table);
    }

    #[test]
    fn component_flags_override_base() {
        let cli = parse_args(&args(&["violet", "--hue", "120", "--light"])).unwrap();
        assert_eq!(cli.base, Hsl::new(120.0, 83.0, 58.0));
        assert_eq!(cli.mode, Mode::Light);
    }

    #[test]
    fn missing_flag_value_is_an_error() {
        assert!(parse_args(&args(&["--hue"])).is_err());
        assert!(parse_args(&args(&["--lightness", "abc"])).is_err());
    }

    #[test]
    fn unknown_option_is_an_error() {
        assert!(parse_args(&args(&["--banana"])).is_err());
    }

    #[test]
    fn extra_positional_is_an_error() {
        assert!(parse_args(&args(&["violet", "emerald"])).is_err());
    }

    // ── End-to-end rendering ────────────────────────────────────────

    #[test]
    fn table_lists_all_ten_swatches() {
        let out = run(&[]).unwrap();
        assert_eq!(out.lines().count(), 10);
        assert!(out.contains("Primary"));
        assert!(out.contains("#7c3bed"));
        assert!(out.contains("hsl(262, 83%, 58%)"));
    }

    #[test]
    fn css_output_is_a_root_block() {
        let out = run(&args(&["--css"])).unwrap();
        assert!(out.starts_with(":root {\n"));
        assert!(out.contains("--primary: hsl(262, 83%, 58%);"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn json_output_parses_back() {
        let out = run(&args(&["--json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 10);
        assert_eq!(value[0]["hex"], "#7c3bed");
    }

    #[test]
    fn contrast_report_covers_text_pairings() {
        let out = run(&args(&["--contrast"])).unwrap();
        assert_eq!(out.lines().count(), 7);
        assert!(out.contains("Primary Foreground"));
        assert!(out.contains(":1"));
    }

    #[test]
    fn identical_invocations_are_identical() {
        let a = run(&args(&["emerald", "--light", "--css"])).unwrap();
        let b = run(&args(&["emerald", "--light", "--css"])).unwrap();
        assert_eq!(a, b);
    }
}
