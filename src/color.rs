//! Validated terminal colors.
//!
//! A [`Color`] is always in one of three canonical forms:
//!
//! - `#RRGGBB` uppercase hex (rendered as truecolor `38;2;R;G;B`)
//! - a lowercase ANSI name such as `red` or `bright-blue` (rendered as the
//!   16-color SGR codes 30-37 / 90-97)
//! - a decimal 256-color palette code `0`-`255` (rendered as `38;5;N`)
//!
//! # Example
//!
//! ```rust
//! use spark_gloss::Color;
//!
//! let c = Color::new("#f0a").unwrap();
//! assert_eq!(c.as_str(), "#FF00AA");
//! assert_eq!(c.to_ansi(), "\x1b[38;2;255;0;170m");
//!
//! assert!(Color::new("#GG0000").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::background::BackgroundHint;
use crate::error::{ColorError, ColorResult};

// =============================================================================
// Named colors
// =============================================================================

/// Recognized color names and their foreground SGR codes. Background codes
/// are the foreground code plus 10.
const NAMED_COLORS: &[(&str, u8)] = &[
    ("black", 30),
    ("red", 31),
    ("green", 32),
    ("yellow", 33),
    ("blue", 34),
    ("magenta", 35),
    ("cyan", 36),
    ("white", 37),
    ("bright-black", 90),
    ("bright-red", 91),
    ("bright-green", 92),
    ("bright-yellow", 93),
    ("bright-blue", 94),
    ("bright-magenta", 95),
    ("bright-cyan", 96),
    ("bright-white", 97),
    ("gray", 90),
    ("grey", 90),
];

fn named_code(name: &str) -> Option<u8> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, code)| code)
}

// =============================================================================
// Color
// =============================================================================

/// The canonical form a [`Color`] was normalized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    /// `#RRGGBB`
    Hex,
    /// ANSI color name.
    Named,
    /// 256-color palette code.
    Code,
}

/// Which half of the SGR color space to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Foreground,
    Background,
}

/// A validated terminal color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    value: String,
    kind: ColorKind,
}

impl Color {
    /// Validate and normalize a color specification.
    ///
    /// Hex values must be `#RGB` or `#RRGGBB`; names are matched
    /// case-insensitively; anything else must be an integer in 0-255.
    pub fn new(spec: &str) -> ColorResult<Self> {
        if spec.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(digits) = spec.strip_prefix('#') {
            return normalize_hex(digits)
                .map(|value| Self {
                    value,
                    kind: ColorKind::Hex,
                })
                .ok_or_else(|| ColorError::InvalidHex(spec.to_string()));
        }

        let lower = spec.to_ascii_lowercase();
        if named_code(&lower).is_some() {
            return Ok(Self {
                value: lower,
                kind: ColorKind::Named,
            });
        }

        // Digits only: `u8::from_str` would also take a leading `+`.
        Some(spec)
            .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<u8>().ok())
            .map(|code| Self {
                value: code.to_string(),
                kind: ColorKind::Code,
            })
            .ok_or_else(|| ColorError::InvalidColor(spec.to_string()))
    }

    /// The normalized specification.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Which canonical form this color is in.
    #[inline]
    pub fn kind(&self) -> ColorKind {
        self.kind
    }

    /// Foreground SGR escape sequence, e.g. `"\x1b[31m"`.
    pub fn to_ansi(&self) -> String {
        format!("\x1b[{}m", self.sgr_params(Layer::Foreground))
    }

    /// Background SGR escape sequence, e.g. `"\x1b[41m"`.
    pub fn to_ansi_background(&self) -> String {
        format!("\x1b[{}m", self.sgr_params(Layer::Background))
    }

    /// SGR parameters without the surrounding `ESC [` and `m`.
    fn sgr_params(&self, layer: Layer) -> String {
        let (truecolor, palette, named_offset) = match layer {
            Layer::Foreground => ("38;2", "38;5", 0),
            Layer::Background => ("48;2", "48;5", 10),
        };

        match self.kind {
            ColorKind::Hex => {
                let (r, g, b) = self.rgb();
                format!("{truecolor};{r};{g};{b}")
            }
            ColorKind::Named => {
                // Normalized names always come from the table.
                let code = named_code(&self.value).unwrap_or(39) + named_offset;
                code.to_string()
            }
            ColorKind::Code => format!("{palette};{}", self.value),
        }
    }

    /// RGB channels of a hex color; `(0, 0, 0)` for other kinds.
    pub fn rgb(&self) -> (u8, u8, u8) {
        if self.kind != ColorKind::Hex {
            return (0, 0, 0);
        }
        let channel = |i: usize| u8::from_str_radix(&self.value[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

/// Expand and uppercase hex digits (without `#`); `None` if malformed.
fn normalize_hex(digits: &str) -> Option<String> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let upper = digits.to_ascii_uppercase();
    match upper.len() {
        3 => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for c in upper.chars() {
                out.push(c);
                out.push(c);
            }
            Some(out)
        }
        6 => Some(format!("#{upper}")),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

// =============================================================================
// AdaptiveColor
// =============================================================================

/// A pair of colors picked between by the terminal's background.
///
/// Resolution happens at render time through a [`BackgroundHint`]; dark is
/// the default when the hint gives no light signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdaptiveColor {
    pub light: Color,
    pub dark: Color,
}

impl AdaptiveColor {
    /// Validate both specifications.
    pub fn new(light: &str, dark: &str) -> ColorResult<Self> {
        Ok(Self {
            light: Color::new(light)?,
            dark: Color::new(dark)?,
        })
    }

    /// The color for the background reported by `hint`.
    pub fn to_color(&self, hint: &dyn BackgroundHint) -> &Color {
        if hint.is_light_background() {
            &self.light
        } else {
            &self.dark
        }
    }
}

// =============================================================================
// TerminalColor
// =============================================================================

/// Any color a style can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TerminalColor {
    Fixed(Color),
    Adaptive(AdaptiveColor),
}

impl TerminalColor {
    /// The concrete color to emit.
    pub fn resolve(&self, hint: &dyn BackgroundHint) -> &Color {
        match self {
            Self::Fixed(color) => color,
            Self::Adaptive(adaptive) => adaptive.to_color(hint),
        }
    }
}

impl From<Color> for TerminalColor {
    fn from(color: Color) -> Self {
        Self::Fixed(color)
    }
}

impl From<AdaptiveColor> for TerminalColor {
    fn from(color: AdaptiveColor) -> Self {
        Self::Adaptive(color)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──

    #[test]
    fn empty_is_rejected() {
        assert_eq!(Color::new(""), Err(ColorError::Empty));
    }

    #[test]
    fn hex_is_uppercased_and_expanded() {
        assert_eq!(Color::new("#abc").unwrap().as_str(), "#AABBCC");
        assert_eq!(Color::new("#ff00aa").unwrap().as_str(), "#FF00AA");
        assert_eq!(Color::new("#abc").unwrap().kind(), ColorKind::Hex);
    }

    #[test]
    fn malformed_hex_is_invalid_hex() {
        for bad in ["#GG0000", "#", "#ff", "#ffff", "#fffffff", "#12345g"] {
            assert_eq!(
                Color::new(bad),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        let c = Color::new("Bright-Red").unwrap();
        assert_eq!(c.as_str(), "bright-red");
        assert_eq!(c.kind(), ColorKind::Named);
        assert_eq!(Color::new("GREY").unwrap().as_str(), "grey");
    }

    #[test]
    fn codes_are_canonical_decimal() {
        assert_eq!(Color::new("0").unwrap().as_str(), "0");
        assert_eq!(Color::new("255").unwrap().kind(), ColorKind::Code);
        assert_eq!(Color::new("007").unwrap().as_str(), "7");
    }

    #[test]
    fn out_of_range_or_unknown_is_invalid() {
        for bad in ["256", "-1", "+5", " 5", "purple", "ff0000", "1.5"] {
            assert_eq!(
                Color::new(bad),
                Err(ColorError::InvalidColor(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn parse_and_try_from_agree_with_new() {
        let parsed: Color = "red".parse().unwrap();
        let tried = Color::try_from("red").unwrap();
        assert_eq!(parsed, tried);
    }

    // ── SGR conversion ──

    #[test]
    fn named_sgr_codes() {
        let red = Color::new("red").unwrap();
        assert_eq!(red.to_ansi(), "\x1b[31m");
        assert_eq!(red.to_ansi_background(), "\x1b[41m");

        let bright = Color::new("bright-white").unwrap();
        assert_eq!(bright.to_ansi(), "\x1b[97m");
        assert_eq!(bright.to_ansi_background(), "\x1b[107m");

        assert_eq!(Color::new("gray").unwrap().to_ansi(), "\x1b[90m");
    }

    #[test]
    fn hex_sgr_is_truecolor() {
        let c = Color::new("#FF8000").unwrap();
        assert_eq!(c.rgb(), (255, 128, 0));
        assert_eq!(c.to_ansi(), "\x1b[38;2;255;128;0m");
        assert_eq!(c.to_ansi_background(), "\x1b[48;2;255;128;0m");
    }

    #[test]
    fn code_sgr_is_256_color() {
        let c = Color::new("201").unwrap();
        assert_eq!(c.to_ansi(), "\x1b[38;5;201m");
        assert_eq!(c.to_ansi_background(), "\x1b[48;5;201m");
    }

    // ── adaptive ──

    #[test]
    fn adaptive_defaults_to_dark() {
        let c = AdaptiveColor::new("#000000", "#FFFFFF").unwrap();
        assert_eq!(c.to_color(&false).as_str(), "#FFFFFF");
        assert_eq!(c.to_color(&true).as_str(), "#000000");
    }

    #[test]
    fn adaptive_rejects_either_bad_half() {
        assert!(AdaptiveColor::new("nope", "red").is_err());
        assert!(AdaptiveColor::new("red", "#12").is_err());
    }

    #[test]
    fn terminal_color_resolves_fixed_and_adaptive() {
        let fixed = TerminalColor::from(Color::new("blue").unwrap());
        assert_eq!(fixed.resolve(&true).as_str(), "blue");

        let adaptive = TerminalColor::from(AdaptiveColor::new("1", "2").unwrap());
        assert_eq!(adaptive.resolve(&|| true).as_str(), "1");
        assert_eq!(adaptive.resolve(&|| false).as_str(), "2");
    }
}
