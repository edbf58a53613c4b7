//! Banner, name, rotating role, bio and contact links.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use folio_theme::Mode;

use super::{inner_width, justify, padded, push_wrapped};
use crate::page::{HitTarget, Page, PageContext, PageState, SectionId};
use crate::styles::Styles;
use crate::text;

const SETTINGS_LABEL: &str = " ⚙ Theme ";

pub(crate) fn render(ctx: &PageContext<'_>, state: &PageState, page: &mut Page) {
    let styles = ctx.styles;
    let profile = &ctx.data.profile;
    let width = page.width();
    let inner = inner_width(page);
    let base = styles.card;

    page.begin_section(SectionId::Hero);

    // Banner: gradient strip with the settings and mode buttons on its middle row
    let button_style = styles.page.add_modifier(Modifier::BOLD);
    let toggle = toggle_label(styles.mode);
    let toggle_width = text::width(toggle) as u16;
    let toggle_x = width.saturating_sub(toggle_width + 2);

    let mut buttons = vec![(toggle_x, Span::styled(toggle, button_style))];
    if ctx.show_settings_button {
        buttons.push((2, Span::styled(SETTINGS_LABEL, button_style)));
    }

    page.push(banner_row(styles, width, &[]));
    page.push(banner_row(styles, width, &buttons));
    page.hit(toggle_x, toggle_width, HitTarget::ModeToggle);
    if ctx.show_settings_button {
        page.hit(2, text::width(SETTINGS_LABEL) as u16, HitTarget::Settings);
    }
    page.push(banner_row(styles, width, &[]));

    page.push_blank(base);

    let name = vec![
        Span::styled(profile.name.clone(), styles.title),
        Span::raw("  "),
        Span::styled(format!("@{}", profile.handle), styles.text_faint),
    ];
    let resume = if profile.resume_url.is_empty() {
        Vec::new()
    } else {
        vec![Span::styled("↓ Resume", styles.text_dim)]
    };
    page.push(padded(justify(name, resume, inner), base));

    if !ctx.data.roles.is_empty() {
        let role = &ctx.data.roles[state.role_index % ctx.data.roles.len()];
        page.push(padded(
            vec![Span::styled(role.clone(), styles.text_muted)],
            base,
        ));
    }

    if !profile.bio.is_empty() {
        page.push_blank(base);
        push_wrapped(page, &profile.bio, styles.text_dim, base, 0);
    }

    if !profile.email.is_empty() {
        page.push_blank(base);
        page.push(padded(
            vec![
                Span::styled(" Let's talk ", styles.button),
                Span::raw("  "),
                Span::styled(format!("✉ {}", profile.email), styles.text),
            ],
            base,
        ));
    }

    if !profile.location.is_empty() {
        page.push_blank(base);
        page.push(padded(
            vec![Span::styled(format!("⌖ {}", profile.location), styles.text_muted)],
            base,
        ));
    }

    if !ctx.data.socials.is_empty() {
        page.push_blank(base);
        page.push(padded(
            vec![
                Span::styled("Find me on the ", styles.text_muted),
                Span::styled("internet", styles.text.add_modifier(Modifier::BOLD)),
            ],
            base,
        ));
        for social in &ctx.data.socials {
            let label = format!("{:<10}", social.name);
            let room = inner.saturating_sub(text::width(&label) + 1);
            page.push(padded(
                vec![
                    Span::styled(label, styles.accent),
                    Span::raw(" "),
                    Span::styled(text::truncate(&social.url, room), styles.text_faint),
                ],
                base,
            ));
        }
    }

    page.push_blank(base);
    page.push_blank(styles.page);
}

/// Sun in dark mode (switch to light), moon in light mode.
fn toggle_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Dark => " ☀ ",
        Mode::Light => " ☾ ",
    }
}

/// One row of the gradient banner with `buttons` placed at their columns.
fn banner_row(styles: &Styles, width: u16, buttons: &[(u16, Span<'static>)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(width as usize);
    let mut x = 0;
    while x < width {
        if let Some((_, button)) = buttons.iter().find(|(bx, _)| *bx == x) {
            spans.push(button.clone());
            x += (button.width() as u16).max(1);
            continue;
        }
        let t = if width > 1 {
            x as f32 / (width - 1) as f32
        } else {
            0.0
        };
        spans.push(Span::styled(" ", Style::default().bg(styles.gradient_at(t))));
        x += 1;
    }
    Line::from(spans).style(styles.page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::fixtures;

    #[test]
    fn test_toggle_shows_target_mode() {
        assert_eq!(toggle_label(Mode::Dark), " ☀ ");
        assert_eq!(toggle_label(Mode::Light), " ☾ ");
    }

    #[test]
    fn test_banner_row_fills_width() {
        let styles = fixtures::styles(Mode::Dark);
        let row = banner_row(&styles, 20, &[(15, Span::raw(" ☀ "))]);
        assert_eq!(row.width(), 20);

        let first = row.spans.first().unwrap();
        assert_eq!(first.style.bg, Some(styles.colors.primary.to_color()));
    }

    #[test]
    fn test_toggle_hit_on_banner() {
        let data = fixtures::data();
        let styles = fixtures::styles(Mode::Dark);
        let ctx = PageContext {
            styles: &styles,
            data: &data,
            github_user: None,
            playback: None,
            show_settings_button: false,
        };
        let mut page = Page::new(40);
        render(&ctx, &PageState::default(), &mut page);

        let hit = page
            .hits()
            .iter()
            .find(|h| h.target == HitTarget::ModeToggle)
            .unwrap();
        assert_eq!(hit.row, 1);
        assert_eq!(hit.x, 35);
        assert_eq!(hit.width, 3);
    }

    #[test]
    fn test_role_rotates() {
        let data = fixtures::data();
        let styles = fixtures::styles(Mode::Dark);
        let ctx = PageContext {
            styles: &styles,
            data: &data,
            github_user: None,
            playback: None,
            show_settings_button: false,
        };
        let mut state = PageState::default();
        state.advance_role(data.roles.len());

        let mut page = Page::new(40);
        render(&ctx, &state, &mut page);
        let text: Vec<String> = page
            .lines()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.iter().any(|row| row.contains("Writer")));
    }
}
