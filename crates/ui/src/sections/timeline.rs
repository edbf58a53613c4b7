//! Experience and education: collapsible entries with a show-more row.

use ratatui::text::Span;

use super::{header, inner_width, justify, padded, push_wrapped, section_end, show_more_row, PAD};
use crate::page::{HitTarget, Page, PageContext, PageState, SectionId};
use crate::text;

/// Display form shared by both lists.
struct Entry<'a> {
    title: &'a str,
    badge: Option<&'a str>,
    subtitle: String,
    period: &'a str,
    location: &'a str,
    note: Option<String>,
    details: &'a [String],
}

pub(crate) fn render_experience(ctx: &PageContext<'_>, state: &PageState, page: &mut Page) {
    let entries: Vec<Entry<'_>> = ctx
        .data
        .experience
        .iter()
        .map(|exp| Entry {
            title: &exp.company,
            badge: Some(exp.kind.as_str()).filter(|k| !k.is_empty()),
            subtitle: exp.role.clone(),
            period: &exp.period,
            location: &exp.location,
            note: None,
            details: &exp.details,
        })
        .collect();

    render_entries(ctx, state, page, SectionId::Experience, "Where I've worked", &entries);
}

pub(crate) fn render_education(ctx: &PageContext<'_>, state: &PageState, page: &mut Page) {
    let entries: Vec<Entry<'_>> = ctx
        .data
        .education
        .iter()
        .map(|edu| Entry {
            title: &edu.institution,
            badge: None,
            subtitle: if edu.field.is_empty() {
                edu.degree.clone()
            } else {
                format!("{} · {}", edu.degree, edu.field)
            },
            period: &edu.period,
            location: &edu.location,
            note: edu.grade.as_ref().map(|g| format!("Grade: {}", g)),
            details: &edu.details,
        })
        .collect();

    render_entries(ctx, state, page, SectionId::Education, "Education", &entries);
}

fn render_entries(
    ctx: &PageContext<'_>,
    state: &PageState,
    page: &mut Page,
    id: SectionId,
    title: &str,
    entries: &[Entry<'_>],
) {
    if entries.is_empty() {
        return;
    }
    let styles = ctx.styles;
    let base = styles.section;
    let inner = inner_width(page);

    page.begin_section(id);
    header(page, ctx, state, id, title);

    let visible = state.visible_count(id, entries.len());
    for (index, entry) in entries.iter().take(visible).enumerate() {
        let open = state.expanded(id) == Some(index);

        let mut head = vec![
            Span::styled(if open { "▾ " } else { "▸ " }, styles.text_faint),
            Span::styled(entry.title.to_string(), styles.title),
        ];
        if let Some(badge) = entry.badge {
            head.push(Span::raw(" "));
            head.push(Span::styled(format!(" {} ", badge), styles.tag));
        }
        page.push(padded(
            justify(
                head,
                vec![Span::styled(entry.period.to_string(), styles.text_dim)],
                inner,
            ),
            base,
        ));
        page.hit(PAD, inner as u16, HitTarget::Expand(id, index));

        let location = if entry.location.is_empty() {
            Vec::new()
        } else {
            vec![Span::styled(entry.location.to_string(), styles.text_faint)]
        };
        page.push(padded(
            justify(
                vec![
                    Span::raw("  "),
                    Span::styled(
                        text::truncate(&entry.subtitle, inner.saturating_sub(2)),
                        styles.text_dim,
                    ),
                ],
                location,
                inner,
            ),
            base,
        ));

        if open {
            if let Some(note) = &entry.note {
                page.push(padded(
                    vec![Span::raw("  "), Span::styled(note.clone(), styles.accent)],
                    base,
                ));
            }
            for detail in entry.details {
                push_wrapped(page, &format!("• {}", detail), styles.text_dim, base, 4);
            }
        }

        page.push_blank(base);
    }

    show_more_row(page, ctx, state, id, entries.len());
    section_end(page, ctx);
}
