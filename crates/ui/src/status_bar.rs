use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::Styles;

/// Status bar rendering parameters
pub struct StatusBarParams<'a> {
    pub styles: &'a Styles,
    /// Status message (message, is_error)
    pub status_message: Option<&'a (String, bool)>,
    /// Active preset id
    pub preset_id: &'a str,
    /// Scroll position as a percentage
    pub scroll_percent: u16,
}

/// Status bar at the bottom of screen
pub struct StatusBar;

impl StatusBar {
    pub fn render(buf: &mut Buffer, area: Rect, params: &StatusBarParams<'_>) {
        if area.height == 0 {
            return;
        }
        let styles = params.styles;
        let bar_bg = styles.colors.primary.faded(0.25, &styles.colors.background);
        let base = Style::default().fg(styles.colors.foreground.to_color()).bg(bar_bg);

        // Fill entire line with background color
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), base);

        let spans = Self::status_spans(params, base, area.width);
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }

    fn status_spans<'a>(
        params: &'a StatusBarParams<'a>,
        base: Style,
        total_width: u16,
    ) -> Vec<Span<'a>> {
        let styles = params.styles;

        // Error messages take the whole bar
        if let Some((message, true)) = params.status_message {
            return vec![Span::styled(
                format!(" {} ", message),
                base.fg(styles.colors.accent.to_color())
                    .add_modifier(Modifier::BOLD),
            )];
        }

        let highlight = base.add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::styled(" folio ", highlight),
            Span::styled("· ", base),
            Span::styled(params.preset_id.to_string(), highlight),
            Span::styled(" · ", base),
            Span::styled(styles.mode.as_str().to_string(), highlight),
        ];
        if let Some((message, false)) = params.status_message {
            spans.push(Span::styled(" · ", base));
            spans.push(Span::styled(message.as_str(), base));
        }

        let right = format!(" {:>3}% ", params.scroll_percent);
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let remaining = (total_width as usize).saturating_sub(used + right.width());
        if remaining > 0 {
            spans.push(Span::raw(" ".repeat(remaining)));
            spans.push(Span::styled(right, base));
        }
        spans
    }
}

/// Scroll position of `scroll` in `0..=max_scroll` as a percentage.
pub fn scroll_percent(scroll: usize, max_scroll: usize) -> u16 {
    if max_scroll == 0 {
        100
    } else {
        ((scroll.min(max_scroll) * 100) / max_scroll) as u16
    }
}
