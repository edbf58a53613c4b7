//! Terminal styles derived from the active theme.

use ratatui::style::{Color, Modifier, Style};

use folio_theme::{effects, ColorSet, Mode, ThemeView};

/// Every style a section draws with, resolved once per frame.
///
/// Translucent roles (`card`, `border`) and faded text are composited over
/// the page background because terminals have no alpha channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Styles {
    pub colors: ColorSet,
    pub mode: Mode,
    /// Page background and body text
    pub page: Style,
    /// Tinted section background
    pub section: Style,
    pub card: Style,
    pub border: Style,
    pub title: Style,
    pub text: Style,
    /// Secondary text (70% foreground)
    pub text_dim: Style,
    /// Captions (60% foreground)
    pub text_muted: Style,
    /// Fine print (30% foreground)
    pub text_faint: Style,
    pub accent: Style,
    pub link: Style,
    pub tag: Style,
    pub focus: Style,
    pub button: Style,
    pub selected: Style,
    pub glow: Color,
}

impl Styles {
    pub fn from_view(view: &ThemeView) -> Self {
        let colors = &view.colors;
        let bg = colors.background.to_color();
        let fg = colors.foreground.to_color();
        let fade = |alpha: f32| colors.foreground.faded(alpha, &colors.background);

        let section_bg = effects::section_tint(colors, view.mode);
        let card_bg = colors.card.over(&colors.background);

        Self {
            page: Style::default().fg(fg).bg(bg),
            section: Style::default().fg(fg).bg(section_bg),
            card: Style::default().fg(fg).bg(card_bg),
            border: Style::default().fg(border_color(colors)),
            title: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            text: Style::default().fg(fg),
            text_dim: Style::default().fg(fade(0.7)),
            text_muted: Style::default().fg(fade(0.6)),
            text_faint: Style::default().fg(fade(0.3)),
            accent: Style::default().fg(colors.accent.to_color()),
            link: Style::default()
                .fg(colors.accent.to_color())
                .add_modifier(Modifier::UNDERLINED),
            tag: Style::default()
                .fg(colors.accent.to_color())
                .bg(colors.accent.faded(0.15, &colors.background)),
            focus: Style::default()
                .fg(colors.highlight.to_color())
                .add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::Rgb(0xff, 0xff, 0xff))
                .bg(colors.primary.to_color())
                .add_modifier(Modifier::BOLD),
            selected: Style::default()
                .fg(bg)
                .bg(colors.primary.to_color())
                .add_modifier(Modifier::BOLD),
            glow: effects::glow_color(colors, view.mode),
            colors: colors.clone(),
            mode: view.mode,
        }
    }

    /// Color at `t` along the primary-to-secondary gradient.
    pub fn gradient_at(&self, t: f32) -> Color {
        effects::gradient_at(&self.colors, t)
    }
}

// Hairline alphas vanish as box-drawing glyphs, so the border role is
// drawn at three times its alpha.
fn border_color(colors: &ColorSet) -> Color {
    let border = colors.border.rgba();
    border
        .with_alpha((border.a * 3.0).min(1.0))
        .over(colors.background.rgba())
        .to_color()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_theme::ThemeRegistry;

    fn view(id: &str, mode: Mode) -> ThemeView {
        let registry = ThemeRegistry::builtin();
        ThemeView {
            colors: registry.get(id).unwrap().colors(mode).clone(),
            mode,
            preset_id: id.to_string(),
        }
    }

    #[test]
    fn test_page_uses_background_and_foreground() {
        let v = view("ocean", Mode::Dark);
        let styles = Styles::from_view(&v);
        assert_eq!(styles.page.bg, Some(v.colors.background.to_color()));
        assert_eq!(styles.page.fg, Some(v.colors.foreground.to_color()));
    }

    #[test]
    fn test_modes_differ() {
        let dark = Styles::from_view(&view("ocean", Mode::Dark));
        let light = Styles::from_view(&view("ocean", Mode::Light));
        assert_ne!(dark.page, light.page);
        assert_ne!(dark.section, light.section);
    }

    #[test]
    fn test_dim_text_is_between_fg_and_bg() {
        let styles = Styles::from_view(&view("ocean", Mode::Dark));
        // ocean dark: #fafafa on #0a0a0a
        let Some(Color::Rgb(r, _, _)) = styles.text_dim.fg else {
            panic!("expected rgb");
        };
        assert!(r > 0x0a && r < 0xfa);
    }
}
