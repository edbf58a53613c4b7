//! Page sections and the chrome they share.

mod achievements;
mod blog;
mod footer;
mod github;
mod hero;
mod projects;
mod skills;
mod spotify;
mod timeline;

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use folio_config::constants::INITIAL_SHOW_COUNT;

use crate::page::{HitTarget, Page, PageContext, PageState, SectionId};
use crate::text;

/// Left and right padding inside a section.
pub(crate) const PAD: u16 = 2;

pub(crate) fn render_section(
    id: SectionId,
    ctx: &PageContext<'_>,
    state: &PageState,
    page: &mut Page,
) {
    match id {
        SectionId::Hero => hero::render(ctx, state, page),
        SectionId::Skills => skills::render(ctx, state, page),
        SectionId::Github => github::render(ctx, state, page),
        SectionId::Spotify => spotify::render(ctx, state, page),
        SectionId::Experience => timeline::render_experience(ctx, state, page),
        SectionId::Education => timeline::render_education(ctx, state, page),
        SectionId::Projects => projects::render(ctx, state, page),
        SectionId::Blog => blog::render(ctx, state, page),
        SectionId::Achievements => achievements::render(ctx, state, page),
        SectionId::Footer => footer::render(ctx, state, page),
    }
}

pub(crate) fn inner_width(page: &Page) -> usize {
    page.width().saturating_sub(PAD * 2) as usize
}

/// One padded row under `base`.
pub(crate) fn padded(spans: Vec<Span<'static>>, base: Style) -> Line<'static> {
    let mut all = Vec::with_capacity(spans.len() + 1);
    all.push(Span::raw(" ".repeat(PAD as usize)));
    all.extend(spans);
    Line::from(all).style(base)
}

/// `left` followed by `right` flush with column `width`.
///
/// `right` is dropped when both do not fit.
pub(crate) fn justify(
    mut left: Vec<Span<'static>>,
    right: Vec<Span<'static>>,
    width: usize,
) -> Vec<Span<'static>> {
    let left_width: usize = left.iter().map(|s| s.width()).sum();
    let right_width: usize = right.iter().map(|s| s.width()).sum();
    if right.is_empty() || left_width + 1 + right_width > width {
        return left;
    }
    left.push(Span::raw(" ".repeat(width - left_width - right_width)));
    left.extend(right);
    left
}

/// `spans` centered in `width` columns.
pub(crate) fn centered(spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
    let used: usize = spans.iter().map(|s| s.width()).sum();
    let mut out = vec![Span::raw(" ".repeat(width.saturating_sub(used) / 2))];
    out.extend(spans);
    out
}

/// Word-wrapped paragraph, indented by `indent` columns.
pub(crate) fn push_wrapped(
    page: &mut Page,
    content: &str,
    style: Style,
    base: Style,
    indent: usize,
) {
    let width = inner_width(page).saturating_sub(indent);
    for row in text::wrap(content, width) {
        page.push(padded(
            vec![Span::raw(" ".repeat(indent)), Span::styled(row, style)],
            base,
        ));
    }
}

/// Blank row, accent bar with the title, blank row.
pub(crate) fn header(
    page: &mut Page,
    ctx: &PageContext<'_>,
    state: &PageState,
    id: SectionId,
    title: &str,
) {
    let styles = ctx.styles;
    let base = styles.section;
    let focused = state.focus == Some(id);

    let mut spans = vec![
        Span::styled("▍", Style::default().fg(styles.colors.accent.to_color())),
        Span::raw(" "),
        Span::styled(
            title.to_string(),
            if focused { styles.focus } else { styles.title },
        ),
    ];
    if focused {
        spans.push(Span::styled(" ◂", styles.focus));
    }

    page.push_blank(base);
    page.push(padded(spans, base));
    page.push_blank(base);
}

/// "Show N more" / "Show less" row for lists longer than the initial count.
pub(crate) fn show_more_row(
    page: &mut Page,
    ctx: &PageContext<'_>,
    state: &PageState,
    id: SectionId,
    total: usize,
) {
    if total <= INITIAL_SHOW_COUNT {
        return;
    }
    let label = if state.is_showing_all(id) {
        "▴ Show less".to_string()
    } else {
        format!("▾ Show {} more", total - INITIAL_SHOW_COUNT)
    };
    let width = text::width(&label) as u16;

    page.push(padded(
        vec![Span::styled(label, ctx.styles.accent)],
        ctx.styles.section,
    ));
    page.hit(PAD, width, HitTarget::ShowMore(id));
}

/// Closing padding of a section plus the gap before the next one.
pub(crate) fn section_end(page: &mut Page, ctx: &PageContext<'_>) {
    page.push_blank(ctx.styles.section);
    page.push_blank(ctx.styles.page);
}

#[cfg(test)]
pub(crate) mod fixtures {
    use folio_portfolio::PortfolioData;
    use folio_theme::{Mode, ThemeRegistry, ThemeView};

    use crate::styles::Styles;

    pub const DATA: &str = r##"{
        "github": "ada",
        "illustration": true,
        "profile": {
            "name": "Ada Lovelace",
            "handle": "ada",
            "bio": "First programmer. Writes notes longer than the paper they annotate.",
            "location": "London",
            "resumeUrl": "https://example.com/cv.pdf",
            "email": "ada@example.com"
        },
        "roles": ["Analyst", "Writer"],
        "socials": [{ "name": "GitHub", "url": "https://github.com/ada" }],
        "skills": [
            { "name": "Rust", "color": "#dea584" },
            { "name": "Math", "color": "not a color" }
        ],
        "experience": [
            { "company": "C0", "role": "R0", "type": "Full-time", "period": "2020", "location": "L0", "details": ["did zero"] },
            { "company": "C1", "role": "R1", "type": "Contract", "period": "2021", "location": "L1", "details": ["did one"] },
            { "company": "C2", "role": "R2", "period": "2022" },
            { "company": "C3", "role": "R3", "period": "2023" },
            { "company": "C4", "role": "R4", "period": "2024" },
            { "company": "C5", "role": "R5", "period": "2025" }
        ],
        "education": [
            { "institution": "Home", "degree": "Tutoring", "field": "Mathematics", "period": "1830", "grade": "A", "details": ["calculus"] }
        ],
        "projects": [
            { "id": "1", "title": "Notes", "description": "Annotated translation", "tags": ["math"], "demo": "https://example.com/notes" },
            { "id": "2", "title": "Engine", "description": "Analytical engine programs", "tags": ["rust", "engines"], "github": "https://github.com/ada/engine", "featured": true }
        ],
        "blogs": [
            { "slug": "b1", "title": "On Engines", "date": "2025-01-05", "excerpt": "Some thoughts", "tags": ["a", "b", "c", "d"], "readingTime": "3 min read" }
        ],
        "achievements": [
            { "title": "First program", "description": "Bernoulli numbers", "date": "1843" }
        ],
        "quotes": ["That brain of mine is something more than merely mortal."]
    }"##;

    pub fn data() -> PortfolioData {
        PortfolioData::from_json_str(DATA).unwrap()
    }

    pub fn styles(mode: Mode) -> Styles {
        let registry = ThemeRegistry::builtin();
        Styles::from_view(&ThemeView {
            colors: registry.get("ocean").unwrap().colors(mode).clone(),
            mode,
            preset_id: "ocean".into(),
        })
    }
}
