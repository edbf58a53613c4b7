//! Circular reveal compositor.
//!
//! The frame is always drawn in the new mode. While a reveal runs, every
//! cell outside the growing circle is replaced with the matching cell of the
//! last frame drawn before the change, so the new mode spreads out from the
//! click point.

use std::time::Instant;

use ratatui::buffer::Buffer;

use folio_theme::{CellPoint, CircularReveal};

/// An animated mode change in progress.
#[derive(Debug, Clone)]
pub struct RevealState {
    reveal: CircularReveal,
    backdrop: Buffer,
}

impl RevealState {
    /// `backdrop` is the last frame drawn in the previous mode.
    pub fn new(reveal: CircularReveal, backdrop: Buffer) -> Self {
        Self { reveal, backdrop }
    }

    pub fn reveal(&self) -> &CircularReveal {
        &self.reveal
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.reveal.is_finished(now)
    }

    /// Restore old-mode cells outside the circle. Returns how many were kept.
    pub fn composite(&self, buf: &mut Buffer, now: Instant) -> usize {
        let area = buf.area.intersection(self.backdrop.area);
        let mut kept = 0;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if self.reveal.contains(CellPoint::new(x, y), now) {
                    continue;
                }
                if let Some(old) = self.backdrop.cell((x, y)) {
                    buf[(x, y)] = old.clone();
                    kept += 1;
                }
            }
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_theme::Viewport;
    use ratatui::{
        layout::Rect,
        style::{Color, Style},
    };
    use std::time::Duration;

    fn filled(area: Rect, color: Color) -> Buffer {
        let mut buf = Buffer::empty(area);
        buf.set_style(area, Style::default().bg(color));
        buf
    }

    #[test]
    fn test_reveal_grows_from_origin() {
        let area = Rect::new(0, 0, 40, 10);
        let start = Instant::now();
        let reveal = CircularReveal::new(CellPoint::new(39, 0), Viewport::new(40, 10), start);
        let state = RevealState::new(reveal, filled(area, Color::Black));

        // first frame: only the origin is in the new mode
        let mut buf = filled(area, Color::White);
        let kept = state.composite(&mut buf, start);
        assert_eq!(kept, 40 * 10 - 1);
        assert_eq!(buf[(39, 0)].bg, Color::White);
        assert_eq!(buf[(0, 9)].bg, Color::Black);

        // halfway: near cells revealed, far corner not yet
        let mut buf = filled(area, Color::White);
        state.composite(&mut buf, start + Duration::from_millis(250));
        assert_eq!(buf[(38, 1)].bg, Color::White);
        assert_eq!(buf[(0, 9)].bg, Color::Black);

        // done: everything is new
        let end = start + Duration::from_millis(500);
        let mut buf = filled(area, Color::White);
        assert_eq!(state.composite(&mut buf, end), 0);
        assert!(state.is_finished(end));
    }

    #[test]
    fn test_backdrop_smaller_than_frame() {
        let start = Instant::now();
        let reveal = CircularReveal::new(CellPoint::new(0, 0), Viewport::new(20, 5), start);
        let state = RevealState::new(reveal, filled(Rect::new(0, 0, 10, 5), Color::Black));

        let mut buf = filled(Rect::new(0, 0, 20, 5), Color::White);
        state.composite(&mut buf, start);
        assert_eq!(buf[(15, 4)].bg, Color::White);
        assert_eq!(buf[(9, 4)].bg, Color::Black);
    }
}
