//! Blog post list.

use ratatui::text::Span;

use folio_config::constants::MAX_BLOG_TAGS;

use super::{header, inner_width, padded, push_wrapped, section_end, show_more_row};
use crate::page::{Page, PageContext, PageState, SectionId};
use crate::text;

pub(crate) fn render(ctx: &PageContext<'_>, state: &PageState, page: &mut Page) {
    let blogs = &ctx.data.blogs;
    if blogs.is_empty() {
        return;
    }
    let styles = ctx.styles;
    let base = styles.section;
    let inner = inner_width(page);

    page.begin_section(SectionId::Blog);
    header(page, ctx, state, SectionId::Blog, "Thoughts & Writing");

    let visible = state.visible_count(SectionId::Blog, blogs.len());
    for post in blogs.iter().take(visible) {
        page.push(padded(
            vec![Span::styled(text::truncate(&post.title, inner), styles.title)],
            base,
        ));

        let mut meta = post.display_date();
        if let Some(reading_time) = &post.reading_time {
            meta = format!("{} · {}", meta, reading_time);
        }
        page.push(padded(vec![Span::styled(meta, styles.text_muted)], base));

        if !post.excerpt.is_empty() {
            push_wrapped(page, &post.excerpt, styles.text_dim, base, 0);
        }

        if !post.tags.is_empty() {
            let tags = post
                .tags
                .iter()
                .take(MAX_BLOG_TAGS)
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ");
            page.push(padded(vec![Span::styled(tags, styles.accent)], base));
        }

        page.push_blank(base);
    }

    show_more_row(page, ctx, state, SectionId::Blog, blogs.len());
    section_end(page, ctx);
}
