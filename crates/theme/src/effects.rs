//! Derived decoration colors used by section chrome.

use ratatui::style::Color;

use crate::{ColorSet, Mode};

/// Endpoints of the primary-to-secondary gradient.
pub fn gradient(colors: &ColorSet) -> (Color, Color) {
    (colors.primary.to_color(), colors.secondary.to_color())
}

/// Color at `t` along the primary-to-secondary gradient.
pub fn gradient_at(colors: &ColorSet, t: f32) -> Color {
    colors
        .primary
        .rgba()
        .lerp(colors.secondary.rgba(), t)
        .to_color()
}

/// Faint section background tint over the page background.
pub fn section_tint(colors: &ColorSet, mode: Mode) -> Color {
    match mode {
        Mode::Dark => colors.secondary.faded(0x15 as f32 / 255.0, &colors.background),
        Mode::Light => colors.muted.faded(0x30 as f32 / 255.0, &colors.background),
    }
}

/// Glow accent used for section headers and focus borders.
pub fn glow_color(colors: &ColorSet, mode: Mode) -> Color {
    match mode {
        Mode::Dark => colors.primary.faded(0x30 as f32 / 255.0, &colors.background),
        Mode::Light => colors.highlight.faded(0x40 as f32 / 255.0, &colors.background),
    }
}
