use ratatui::text::Span;

use super::{header, inner_width, justify, padded, push_wrapped, section_end};
use crate::page::{Page, PageContext, PageState, SectionId};
use crate::text;

pub(crate) fn render(ctx: &PageContext<'_>, state: &PageState, page: &mut Page) {
    let achievements = &ctx.data.achievements;
    if achievements.is_empty() {
        return;
    }
    let styles = ctx.styles;
    let base = styles.section;
    let inner = inner_width(page);

    page.begin_section(SectionId::Achievements);
    header(page, ctx, state, SectionId::Achievements, "Achievements");

    for achievement in achievements {
        let date = achievement
            .date
            .as_ref()
            .map(|d| vec![Span::styled(d.clone(), styles.text_dim)])
            .unwrap_or_default();
        page.push(padded(
            justify(
                vec![
                    Span::styled("✦ ", styles.accent),
                    Span::styled(achievement.title.clone(), styles.title),
                ],
                date,
                inner,
            ),
            base,
        ));

        if !achievement.description.is_empty() {
            push_wrapped(page, &achievement.description, styles.text_dim, base, 2);
        }
        if let Some(url) = &achievement.url {
            page.push(padded(
                vec![
                    Span::raw("  "),
                    Span::styled(text::truncate(url, inner.saturating_sub(2)), styles.link),
                ],
                base,
            ));
        }
        page.push_blank(base);
    }

    section_end(page, ctx);
}
