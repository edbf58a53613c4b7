//! Color values and the color-role set every section renders from.

use anyhow::{bail, Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Straight (non-premultiplied) RGBA with alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Source-over composite onto an opaque backdrop.
    pub fn over(self, backdrop: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (fg as f32 * a + bg as f32 * (1.0 - a)).round().clamp(0.0, 255.0) as u8
        };
        Rgba::opaque(
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
        )
    }

    /// Linear interpolation between two opaque colors.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        other.with_alpha(t.clamp(0.0, 1.0)).over(self)
    }

    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba { a, ..self }
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// A color as written in a preset or palette (`#rgb`, `#rrggbb`,
/// `#rrggbbaa`, `rgb(..)` or `rgba(..)`), kept together with its parsed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor {
    raw: String,
    rgba: Rgba,
}

impl ThemeColor {
    pub fn parse(value: &str) -> Result<Self> {
        let raw = value.trim();
        let rgba = if let Some(hex) = raw.strip_prefix('#') {
            parse_hex(hex)?
        } else if let Some(args) = function_args(raw, "rgba") {
            parse_components(args, true)?
        } else if let Some(args) = function_args(raw, "rgb") {
            parse_components(args, false)?
        } else {
            bail!("Invalid color format: {}", raw);
        };

        Ok(Self {
            raw: raw.to_string(),
            rgba,
        })
    }

    /// Build from a literal known to be well-formed.
    pub(crate) fn known(raw: &str, rgba: Rgba) -> Self {
        Self {
            raw: raw.to_string(),
            rgba,
        }
    }

    /// Original textual form.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Hex digits without the leading `#` (empty for functional notation).
    pub fn hex_digits(&self) -> &str {
        self.raw.strip_prefix('#').unwrap_or("")
    }

    pub fn rgba(&self) -> Rgba {
        self.rgba
    }

    pub fn is_opaque(&self) -> bool {
        self.rgba.a >= 1.0
    }

    /// Terminal color, composited over `backdrop` when translucent.
    pub fn over(&self, backdrop: &ThemeColor) -> Color {
        self.rgba.over(backdrop.rgba).to_color()
    }

    /// Terminal color with an extra alpha applied, composited over `backdrop`.
    pub fn faded(&self, alpha: f32, backdrop: &ThemeColor) -> Color {
        let a = self.rgba.a * alpha;
        self.rgba.with_alpha(a).over(backdrop.rgba).to_color()
    }

    /// Terminal color ignoring alpha.
    pub fn to_color(&self) -> Color {
        self.rgba.to_color()
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ThemeColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        color.raw
    }
}

fn function_args<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    let rest = raw.get(..name.len())?;
    if !rest.eq_ignore_ascii_case(name) {
        return None;
    }
    raw[name.len()..]
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Result<Rgba> {
    if !hex.is_ascii() {
        bail!("Invalid hex color: #{}", hex);
    }
    let byte = |s: &str| {
        u8::from_str_radix(s, 16).with_context(|| format!("Invalid hex color: #{}", hex))
    };
    let nibble = |s: &str| byte(s).map(|v| v * 17);

    match hex.len() {
        3 => Ok(Rgba::opaque(
            nibble(&hex[0..1])?,
            nibble(&hex[1..2])?,
            nibble(&hex[2..3])?,
        )),
        6 => Ok(Rgba::opaque(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
        )),
        8 => Ok(Rgba {
            r: byte(&hex[0..2])?,
            g: byte(&hex[2..4])?,
            b: byte(&hex[4..6])?,
            a: byte(&hex[6..8])? as f32 / 255.0,
        }),
        _ => bail!("Invalid hex color length: #{}", hex),
    }
}

fn parse_components(args: &str, with_alpha: bool) -> Result<Rgba> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        bail!("Expected {} color components, got {}", expected, parts.len());
    }

    let channel = |s: &str| {
        s.parse::<u8>()
            .with_context(|| format!("Invalid color channel: {}", s))
    };
    let alpha = if with_alpha {
        let a: f32 = parts[3]
            .parse()
            .with_context(|| format!("Invalid alpha: {}", parts[3]))?;
        if !(0.0..=1.0).contains(&a) {
            bail!("Alpha out of range: {}", a);
        }
        a
    } else {
        1.0
    };

    Ok(Rgba {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a: alpha,
    })
}

/// Complete set of color roles for one mode.
///
/// Every role is required; deserializing a table with a missing role fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorSet {
    pub primary: ThemeColor,
    pub secondary: ThemeColor,
    pub accent: ThemeColor,
    pub highlight: ThemeColor,
    pub muted: ThemeColor,
    /// Page background
    pub background: ThemeColor,
    /// Body text
    pub foreground: ThemeColor,
    /// Card surface, usually translucent over `background`
    pub card: ThemeColor,
    /// Card and section borders
    pub border: ThemeColor,
}

impl ColorSet {
    /// Role names paired with their colors, in declaration order.
    pub fn roles(&self) -> [(&'static str, &ThemeColor); 9] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("highlight", &self.highlight),
            ("muted", &self.muted),
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("card", &self.card),
            ("border", &self.border),
        ]
    }

    /// The five palette roles, in palette order.
    pub fn accents(&self) -> [&ThemeColor; 5] {
        [
            &self.primary,
            &self.secondary,
            &self.accent,
            &self.highlight,
            &self.muted,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(
            ThemeColor::parse("#0077b6").unwrap().rgba(),
            Rgba::opaque(0x00, 0x77, 0xb6)
        );
        assert_eq!(
            ThemeColor::parse("#fff").unwrap().rgba(),
            Rgba::opaque(255, 255, 255)
        );
        let translucent = ThemeColor::parse("#00000080").unwrap();
        assert!(!translucent.is_opaque());
        assert!((translucent.rgba().a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_functional_forms() {
        let card = ThemeColor::parse("rgba(255,255,255,0.02)").unwrap();
        assert_eq!(card.as_str(), "rgba(255,255,255,0.02)");
        assert_eq!(card.hex_digits(), "");
        assert!((card.rgba().a - 0.02).abs() < 1e-6);

        let plain = ThemeColor::parse("rgb(1, 2, 3)").unwrap();
        assert_eq!(plain.rgba(), Rgba::opaque(1, 2, 3));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "0077b6", "#12345", "#gggggg", "rgba(1,2,3)", "rgba(1,2,3,2)", "blue"] {
            assert!(ThemeColor::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_compositing() {
        let bg = ThemeColor::parse("#000000").unwrap();
        let half_white = ThemeColor::parse("rgba(255,255,255,0.5)").unwrap();
        assert_eq!(half_white.over(&bg), Color::Rgb(128, 128, 128));

        let white = ThemeColor::parse("#ffffff").unwrap();
        assert_eq!(white.faded(0.0, &bg), Color::Rgb(0, 0, 0));
        assert_eq!(white.faded(1.0, &bg), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgba::opaque(0, 0, 0);
        let b = Rgba::opaque(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_color_set_requires_every_role() {
        let partial = r##"
            primary = "#0077b6"
            secondary = "#023e8a"
        "##;
        assert!(toml::from_str::<ColorSet>(partial).is_err());
    }
}
