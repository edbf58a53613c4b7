//! Main keyboard event handling for the application.
//!
//! Dispatches key events to the open modal or to the page.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use folio_logger as logger;

impl App {
    /// Handle keyboard event
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        logger::debug(format!(
            "Key event: code={:?}, modifiers={:?}",
            key.code, key.modifiers
        ));

        // Clear status message on any key press
        if self.state.status_message.is_some() {
            self.state.clear_status();
        }

        if self.state.has_modal() {
            return self.handle_modal_key(key);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.state.should_quit = true;
            }
            return Ok(());
        }

        let page = self.state.terminal.page_height().max(2) as isize;
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('t') => self.toggle_mode(None),
            KeyCode::Char('[') => self.cycle_preset(-1),
            KeyCode::Char(']') => self.cycle_preset(1),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_preset_at(index);
            }
            KeyCode::Char('s') => self.open_settings(),
            KeyCode::Char('c') => self.open_palette_input(None),
            KeyCode::Char('m') => self.show_more_focused(),
            KeyCode::Enter => self.expand_next_focused(),
            KeyCode::Tab => self.focus_next_section(),
            KeyCode::Esc => self.state.page.focus = None,
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(page - 1)),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page - 1),
            KeyCode::Home | KeyCode::Char('g') => self.state.page.scroll = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.state.page.scroll = self.state.layout.max_scroll;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{app, key, terminal};
    use crate::state::ActiveModal;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use folio_theme::{Mode, ThemeRegistry};
    use folio_ui::SectionId;

    use crate::event::Event;

    #[test]
    fn test_quit_keys() {
        let mut plain = app();
        key(&mut plain, KeyCode::Char('q'));
        assert!(plain.state.should_quit);

        let mut ctrl = app();
        ctrl.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();
        assert!(ctrl.state.should_quit);
        assert!(!ctrl.state.has_modal());
    }

    #[test]
    fn test_t_toggles_without_reveal() {
        let mut app = app();
        let mut terminal = terminal();
        app.draw(&mut terminal).unwrap();

        key(&mut app, KeyCode::Char('t'));
        assert_eq!(app.session.mode(), Mode::Light);
        assert!(app.state.reveal.is_none());
        key(&mut app, KeyCode::Char('t'));
        assert_eq!(app.session.mode(), Mode::Dark);
    }

    #[test]
    fn test_preset_keys() {
        let registry = ThemeRegistry::builtin();
        let ids: Vec<&str> = registry.list_preset_ids();
        let mut app = app();

        key(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session.preset_id(), ids[1]);

        key(&mut app, KeyCode::Char('['));
        assert_eq!(app.session.preset_id(), ids[0]);

        key(&mut app, KeyCode::Char('['));
        assert_eq!(app.session.preset_id(), ids[ids.len() - 1]);

        key(&mut app, KeyCode::Char(']'));
        assert_eq!(app.session.preset_id(), ids[0]);

        // out of range leaves the preset alone
        key(&mut app, KeyCode::Char('9'));
        if ids.len() < 9 {
            assert_eq!(app.session.preset_id(), ids[0]);
        }
    }

    #[test]
    fn test_modal_keys_open_overlays() {
        let mut app = app();
        key(&mut app, KeyCode::Char('s'));
        assert!(matches!(
            app.state.active_modal,
            Some(ActiveModal::Settings(_))
        ));

        // keys now go to the modal, where 'q' closes it
        key(&mut app, KeyCode::Char('q'));
        assert!(!app.state.should_quit);
        assert!(!app.state.has_modal());

        key(&mut app, KeyCode::Char('c'));
        assert!(matches!(
            app.state.active_modal,
            Some(ActiveModal::PaletteInput(_))
        ));
    }

    #[test]
    fn test_scroll_keys_are_clamped() {
        let mut app = app();
        let mut terminal = terminal();
        app.draw(&mut terminal).unwrap();
        let max = app.state.layout.max_scroll;

        key(&mut app, KeyCode::Up);
        assert_eq!(app.state.page.scroll, 0);
        key(&mut app, KeyCode::Down);
        assert_eq!(app.state.page.scroll, 1);
        key(&mut app, KeyCode::End);
        assert_eq!(app.state.page.scroll, max);
        key(&mut app, KeyCode::PageDown);
        assert_eq!(app.state.page.scroll, max);
        key(&mut app, KeyCode::Home);
        assert_eq!(app.state.page.scroll, 0);
    }

    #[test]
    fn test_show_more_and_expand_on_focused_section() {
        let mut app = app();
        let mut terminal = terminal();
        app.draw(&mut terminal).unwrap();

        // without focus 'm' only explains itself
        key(&mut app, KeyCode::Char('m'));
        assert!(app.state.status_message.is_some());

        while app.state.page.focus != Some(SectionId::Experience) {
            key(&mut app, KeyCode::Tab);
        }
        key(&mut app, KeyCode::Char('m'));
        assert!(app.state.page.is_showing_all(SectionId::Experience));

        key(&mut app, KeyCode::Enter);
        assert_eq!(app.state.page.expanded(SectionId::Experience), Some(0));
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.state.page.expanded(SectionId::Experience), Some(1));

        key(&mut app, KeyCode::Esc);
        assert_eq!(app.state.page.focus, None);
    }
}
