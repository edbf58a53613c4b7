//! Spotify now playing / last played card.

use ratatui::{style::Style, text::Span};

use folio_widgets::{best_image, format_time};

use super::{header, inner_width, justify, padded, section_end};
use crate::page::{Page, PageContext, PageState, SectionId};
use crate::text;

pub(crate) fn render(ctx: &PageContext<'_>, state: &PageState, page: &mut Page) {
    let Some(playback) = ctx.playback else {
        return;
    };
    let styles = ctx.styles;
    let base = styles.section;
    let inner = inner_width(page);
    let track = &playback.track;

    page.begin_section(SectionId::Spotify);
    header(page, ctx, state, SectionId::Spotify, "Spotify");

    let status = if playback.is_playing {
        "Now playing on Spotify"
    } else {
        "Last played on Spotify"
    };
    page.push(padded(
        vec![
            Span::styled("♫ ", styles.accent),
            Span::styled(status, styles.text_muted),
        ],
        base,
    ));
    page.push(padded(
        vec![Span::styled(text::truncate(&track.name, inner), styles.title)],
        base,
    ));

    let artists = track.artist_names();
    if !artists.is_empty() {
        page.push(padded(
            vec![Span::styled(text::truncate(&artists, inner), styles.text_dim)],
            base,
        ));
    }
    page.push(padded(
        vec![Span::styled(
            text::truncate(&track.album.name, inner),
            styles.text_muted,
        )],
        base,
    ));

    if let (true, Some(progress)) = (playback.is_playing, playback.progress_ms) {
        let elapsed = format_time(progress);
        let total = format_time(track.duration_ms);
        let bar_width = inner.saturating_sub(elapsed.len() + total.len() + 2);
        let filled = if track.duration_ms == 0 {
            0
        } else {
            ((progress.min(track.duration_ms) as f64 / track.duration_ms as f64)
                * bar_width as f64)
                .round() as usize
        };

        page.push(padded(
            justify(
                vec![
                    Span::styled(elapsed, styles.text_muted),
                    Span::raw(" "),
                    Span::styled(
                        "━".repeat(filled),
                        Style::default().fg(styles.colors.primary.to_color()),
                    ),
                    Span::styled("─".repeat(bar_width - filled), styles.text_faint),
                ],
                vec![Span::styled(total, styles.text_muted)],
                inner,
            ),
            base,
        ));
    }

    if !track.external_urls.spotify.is_empty() {
        page.push(padded(
            vec![Span::styled(
                text::truncate(&track.external_urls.spotify, inner),
                styles.link,
            )],
            base,
        ));
    }
    if let Some(image) = best_image(&track.album.images) {
        page.push(padded(
            vec![Span::styled(
                text::truncate(&format!("cover {}", image.url), inner),
                styles.text_faint,
            )],
            base,
        ));
    }

    section_end(page, ctx);
}
