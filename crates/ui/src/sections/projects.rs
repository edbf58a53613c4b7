//! Project cards, featured first.

use ratatui::text::Span;

use super::{header, inner_width, padded, push_wrapped, section_end};
use crate::page::{Page, PageContext, PageState, SectionId};
use crate::text;

pub(crate) fn render(ctx: &PageContext<'_>, state: &PageState, page: &mut Page) {
    let projects = ctx.data.projects_featured_first();
    if projects.is_empty() {
        return;
    }
    let styles = ctx.styles;
    let base = styles.section;
    let inner = inner_width(page);

    page.begin_section(SectionId::Projects);
    header(page, ctx, state, SectionId::Projects, "Projects");

    for project in projects {
        let mut title = Vec::new();
        if project.featured {
            title.push(Span::styled("★ ", styles.accent));
        }
        title.push(Span::styled(project.title.clone(), styles.title));
        page.push(padded(title, base));

        if !project.description.is_empty() {
            push_wrapped(page, &project.description, styles.text_dim, base, 2);
        }

        if !project.tags.is_empty() {
            let mut tags = vec![Span::raw("  ")];
            let mut used = 2;
            for tag in &project.tags {
                let chip = format!(" {} ", tag);
                let chip_width = text::width(&chip) + 1;
                if used + chip_width > inner {
                    break;
                }
                used += chip_width;
                tags.push(Span::styled(chip, styles.tag));
                tags.push(Span::raw(" "));
            }
            page.push(padded(tags, base));
        }

        let links = [("code", &project.github), ("demo", &project.demo)];
        for (label, url) in links {
            if let Some(url) = url.as_deref().filter(|u| !u.is_empty()) {
                page.push(padded(
                    vec![
                        Span::raw("  "),
                        Span::styled(format!("{} ↗ ", label), styles.text_muted),
                        Span::styled(text::truncate(url, inner.saturating_sub(9)), styles.link),
                    ],
                    base,
                ));
            }
        }

        page.push_blank(base);
    }

    section_end(page, ctx);
}
