//! Mouse event handling: wheel scrolling and clicks on page regions.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use folio_config::constants::WHEEL_SCROLL_LINES;
use folio_theme::CellPoint;
use folio_ui::{HitTarget, ScreenHit};

use super::App;

impl App {
    /// Handle mouse event. Movement alone does not trigger a redraw.
    pub(super) fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_modal() {
            if let MouseEventKind::Down(_) = mouse.kind {
                self.handle_modal_mouse(mouse)?;
                self.state.needs_redraw = true;
            }
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-(WHEEL_SCROLL_LINES as isize)),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_SCROLL_LINES as isize),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(hit) = self.hit_at(mouse.column, mouse.row) {
                    self.activate(hit, CellPoint::new(mouse.column, mouse.row));
                }
            }
            _ => return Ok(()),
        }
        self.state.needs_redraw = true;
        Ok(())
    }

    fn hit_at(&self, column: u16, row: u16) -> Option<ScreenHit> {
        self.state
            .screen_hits
            .iter()
            .find(|hit| hit.contains(column, row))
            .copied()
    }

    /// `at` is the clicked cell; a mode change is revealed from there.
    fn activate(&mut self, hit: ScreenHit, at: CellPoint) {
        match hit.target {
            HitTarget::ModeToggle => self.toggle_mode(Some(at)),
            HitTarget::Settings => self.open_settings(),
            HitTarget::ShowMore(id) => {
                self.state.page.toggle_show_all(id);
            }
            HitTarget::Expand(id, index) => {
                self.state.page.toggle_expanded(id, index);
            }
        }
    }
}
