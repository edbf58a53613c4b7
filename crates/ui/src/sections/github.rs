//! GitHub contribution chart link.

use ratatui::text::Span;

use folio_widgets::github;

use super::{header, inner_width, padded, section_end};
use crate::page::{Page, PageContext, PageState, SectionId};
use crate::text;

pub(crate) fn render(ctx: &PageContext<'_>, state: &PageState, page: &mut Page) {
    let Some(user) = ctx.github_user.map(str::trim).filter(|u| !u.is_empty()) else {
        return;
    };
    let styles = ctx.styles;
    let base = styles.section;
    let inner = inner_width(page);

    page.begin_section(SectionId::Github);
    header(page, ctx, state, SectionId::Github, "GitHub");

    page.push(padded(
        vec![
            Span::styled("Contributions", styles.text),
            Span::styled(format!(" @{}", user), styles.text_muted),
        ],
        base,
    ));
    page.push(padded(
        vec![Span::styled(
            text::truncate(&github::chart_url(user, &styles.colors), inner),
            styles.link,
        )],
        base,
    ));
    page.push(padded(
        vec![Span::styled(
            text::truncate(&github::profile_url(user), inner),
            styles.text_faint,
        )],
        base,
    ));

    section_end(page, ctx);
}
