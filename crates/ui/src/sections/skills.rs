//! Auto-scrolling skills strip.

use ratatui::{style::Style, text::Span};

use folio_portfolio::Skill;
use folio_theme::ThemeColor;

use super::{header, inner_width, padded, section_end};
use crate::page::{Page, PageContext, PageState, SectionId};
use crate::styles::Styles;

const GAP: &str = "    ";

pub(crate) fn render(ctx: &PageContext<'_>, state: &PageState, page: &mut Page) {
    let skills = &ctx.data.skills;
    if skills.is_empty() {
        return;
    }

    page.begin_section(SectionId::Skills);
    header(page, ctx, state, SectionId::Skills, "Skills");

    let cells = marquee_cells(skills, ctx.styles);
    let spans = window(&cells, state.marquee_offset, inner_width(page))
        .map(|(ch, style)| Span::styled(ch.to_string(), style))
        .collect();
    page.push(padded(spans, ctx.styles.section));

    section_end(page, ctx);
}

/// One loop of the strip: a marker in the skill's brand color, then its name.
fn marquee_cells(skills: &[Skill], styles: &Styles) -> Vec<(char, Style)> {
    let mut cells = Vec::new();
    for skill in skills {
        let marker = ThemeColor::parse(&skill.color)
            .map(|c| Style::default().fg(c.to_color()))
            .unwrap_or(styles.accent);

        cells.push(('◆', marker));
        cells.push((' ', styles.text));
        cells.extend(skill.name.chars().map(|ch| (ch, styles.text)));
        cells.extend(GAP.chars().map(|ch| (ch, styles.text)));
    }
    cells
}

/// `width` cells of the looping strip starting at `offset`.
fn window(
    cells: &[(char, Style)],
    offset: usize,
    width: usize,
) -> impl Iterator<Item = (char, Style)> + '_ {
    let start = if cells.is_empty() {
        0
    } else {
        offset % cells.len()
    };
    cells.iter().cycle().skip(start).take(width).copied()
}
