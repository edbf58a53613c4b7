//! Ornament, quote of the session, signature and key hints.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use super::{centered, inner_width, padded};
use crate::page::{Page, PageContext, PageState, SectionId};
use crate::text;

const QUOTE_WIDTH: usize = 60;
const HINTS: &str = "[ ] preset · 1-9 pick · t mode · s settings · c palette · q quit";

pub(crate) fn render(ctx: &PageContext<'_>, state: &PageState, page: &mut Page) {
    let styles = ctx.styles;
    let base = styles.page;
    let inner = inner_width(page);

    page.begin_section(SectionId::Footer);
    page.push_blank(base);

    let rule = Style::default().fg(styles.colors.accent.faded(0.5, &styles.colors.background));
    page.push(padded(
        centered(
            vec![
                Span::styled("────── ", rule),
                Span::styled("◆", styles.accent),
                Span::styled(" ──────", rule),
            ],
            inner,
        ),
        base,
    ));
    page.push_blank(base);

    let quotes = &ctx.data.quotes;
    if !quotes.is_empty() {
        let quote = &quotes[state.quote_index % quotes.len()];
        let quote_style = styles.text_dim.add_modifier(Modifier::ITALIC);
        for row in text::wrap(&format!("“{}”", quote), inner.min(QUOTE_WIDTH)) {
            page.push(padded(centered(vec![Span::styled(row, quote_style)], inner), base));
        }
        page.push_blank(base);
    }

    page.push(padded(
        centered(
            vec![
                Span::styled("crafted with purpose · ", styles.text_faint),
                Span::styled(format!("@{}", ctx.data.profile.handle), styles.accent),
            ],
            inner,
        ),
        base,
    ));
    page.push(padded(
        centered(
            vec![Span::styled(text::truncate(HINTS, inner), styles.text_faint)],
            inner,
        ),
        base,
    ));
    page.push_blank(base);
}
