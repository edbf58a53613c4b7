//! Custom palettes imported from Coolors share URLs.
//!
//! Only the five accent roles come from the palette. Background, foreground,
//! card and border stay on fixed per-mode neutrals so an arbitrary palette
//! can never make body text unreadable.

use regex::Regex;
use std::sync::OnceLock;

use crate::colors::{ColorSet, Rgba, ThemeColor};
use crate::Mode;

/// Minimum number of codes a URL must carry to be installed.
pub const MIN_PALETTE_CODES: usize = 5;

static COOLORS_URL: OnceLock<Option<Regex>> = OnceLock::new();

fn coolors_url() -> Option<&'static Regex> {
    COOLORS_URL
        .get_or_init(|| Regex::new(r"(?i)coolors\.co/([a-f0-9-]+)").ok())
        .as_ref()
}

/// Extract hex codes from a Coolors URL, in their original order.
///
/// `https://coolors.co/abcdef-112233` yields `["#abcdef", "#112233"]`.
/// Anything that does not match yields an empty vector.
pub fn parse_palette_url(url: &str) -> Vec<String> {
    let Some(caps) = coolors_url().and_then(|re| re.captures(url)) else {
        return Vec::new();
    };

    caps[1]
        .split('-')
        .filter(|token| !token.is_empty())
        .map(|token| format!("#{}", token))
        .collect()
}

/// Palette-role fallbacks, used for any position the palette does not fill.
fn default_accents() -> [ThemeColor; 5] {
    [
        ThemeColor::known("#0077b6", Rgba::opaque(0x00, 0x77, 0xb6)),
        ThemeColor::known("#023e8a", Rgba::opaque(0x02, 0x3e, 0x8a)),
        ThemeColor::known("#00b4d8", Rgba::opaque(0x00, 0xb4, 0xd8)),
        ThemeColor::known("#48cae4", Rgba::opaque(0x48, 0xca, 0xe4)),
        ThemeColor::known("#90e0ef", Rgba::opaque(0x90, 0xe0, 0xef)),
    ]
}

/// Fixed background, foreground, card and border for a mode.
pub fn neutrals(mode: Mode) -> [ThemeColor; 4] {
    match mode {
        Mode::Dark => [
            ThemeColor::known("#0a0a0a", Rgba::opaque(0x0a, 0x0a, 0x0a)),
            ThemeColor::known("#fafafa", Rgba::opaque(0xfa, 0xfa, 0xfa)),
            ThemeColor::known(
                "rgba(255,255,255,0.02)",
                Rgba::opaque(255, 255, 255).with_alpha(0.02),
            ),
            ThemeColor::known(
                "rgba(255,255,255,0.08)",
                Rgba::opaque(255, 255, 255).with_alpha(0.08),
            ),
        ],
        Mode::Light => [
            ThemeColor::known("#fafafa", Rgba::opaque(0xfa, 0xfa, 0xfa)),
            ThemeColor::known("#0a0a0a", Rgba::opaque(0x0a, 0x0a, 0x0a)),
            ThemeColor::known(
                "rgba(255,255,255,0.6)",
                Rgba::opaque(255, 255, 255).with_alpha(0.6),
            ),
            ThemeColor::known("rgba(0,0,0,0.08)", Rgba::opaque(0, 0, 0).with_alpha(0.08)),
        ],
    }
}

/// Build a complete color set from palette codes.
///
/// The first five codes fill primary, secondary, accent, highlight and muted
/// in that order. Missing or unparsable positions fall back to the default
/// for that role only.
pub fn derive_color_set<S: AsRef<str>>(codes: &[S], is_dark: bool) -> ColorSet {
    let mode = if is_dark { Mode::Dark } else { Mode::Light };
    let defaults = default_accents();
    let pick = |i: usize| {
        codes
            .get(i)
            .and_then(|code| ThemeColor::parse(code.as_ref()).ok())
            .unwrap_or_else(|| defaults[i].clone())
    };
    let [background, foreground, card, border] = neutrals(mode);

    ColorSet {
        primary: pick(0),
        secondary: pick(1),
        accent: pick(2),
        highlight: pick(3),
        muted: pick(4),
        background,
        foreground,
        card,
        border,
    }
}

/// An installed custom palette with both derived modes.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomPalette {
    codes: Vec<String>,
    light: ColorSet,
    dark: ColorSet,
}

impl CustomPalette {
    /// Derive both modes, or `None` when fewer than [`MIN_PALETTE_CODES`] are given.
    pub fn from_codes(codes: Vec<String>) -> Option<Self> {
        if codes.len() < MIN_PALETTE_CODES {
            return None;
        }
        Some(Self {
            light: derive_color_set(&codes, false),
            dark: derive_color_set(&codes, true),
            codes,
        })
    }

    /// Parse a share URL and derive the palette.
    pub fn from_url(url: &str) -> Option<Self> {
        Self::from_codes(parse_palette_url(url))
    }

    /// Codes as extracted from the URL.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn colors(&self, mode: Mode) -> &ColorSet {
        match mode {
            Mode::Dark => &self.dark,
            Mode::Light => &self.light,
        }
    }
}
