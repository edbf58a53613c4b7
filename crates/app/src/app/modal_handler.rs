//! Modal window handling for the application.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};

use folio_theme::parse_palette_url;
use folio_ui::{Modal, ModalResult, PaletteInputModal, SettingsAction, SettingsModal};

use super::App;
use crate::state::ActiveModal;

/// A closed modal and what it returned.
enum ModalOutcome {
    Settings(ModalResult<SettingsAction>),
    PaletteInput(ModalResult<String>),
}

impl App {
    pub(super) fn open_settings(&mut self) {
        let modal = SettingsModal::new(self.session.registry(), &self.session.view());
        self.state.active_modal = Some(ActiveModal::Settings(Box::new(modal)));
    }

    /// Open the palette input, prefilled with `text` or the installed palette.
    pub(super) fn open_palette_input(&mut self, text: Option<&str>) {
        let prefill = match text {
            Some(text) => text.to_string(),
            None => self
                .session
                .custom_palette()
                .map(|palette| {
                    let codes: Vec<&str> = palette
                        .codes()
                        .iter()
                        .map(|code| code.trim_start_matches('#'))
                        .collect();
                    format!("https://coolors.co/{}", codes.join("-"))
                })
                .unwrap_or_default(),
        };
        let modal = PaletteInputModal::with_text(prefill);
        self.state.active_modal = Some(ActiveModal::PaletteInput(Box::new(modal)));
    }

    /// Handle keyboard event in modal window
    pub(super) fn handle_modal_key(&mut self, key: KeyEvent) -> Result<()> {
        let outcome = match self.state.active_modal.as_mut() {
            Some(ActiveModal::Settings(modal)) => {
                modal.handle_key(key)?.map(ModalOutcome::Settings)
            }
            Some(ActiveModal::PaletteInput(modal)) => {
                modal.handle_key(key)?.map(ModalOutcome::PaletteInput)
            }
            None => None,
        };
        if let Some(outcome) = outcome {
            self.close_modal(outcome);
        }
        Ok(())
    }

    /// Handle mouse event in modal window
    pub(super) fn handle_modal_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let outcome = match self.state.active_modal.as_mut() {
            Some(ActiveModal::Settings(modal)) => {
                modal.handle_mouse(mouse)?.map(ModalOutcome::Settings)
            }
            Some(ActiveModal::PaletteInput(modal)) => {
                modal.handle_mouse(mouse)?.map(ModalOutcome::PaletteInput)
            }
            None => None,
        };
        if let Some(outcome) = outcome {
            self.close_modal(outcome);
        }
        Ok(())
    }

    /// Pasted text goes to the palette input; a palette URL pasted onto the
    /// page opens it.
    pub(super) fn handle_paste(&mut self, text: &str) {
        match self.state.active_modal.as_mut() {
            Some(ActiveModal::PaletteInput(modal)) => modal.paste(text),
            Some(ActiveModal::Settings(_)) => {}
            None => {
                if !parse_palette_url(text).is_empty() {
                    self.open_palette_input(Some(text.trim()));
                }
            }
        }
    }

    fn close_modal(&mut self, outcome: ModalOutcome) {
        self.state.active_modal = None;

        match outcome {
            ModalOutcome::Settings(ModalResult::Confirmed(action)) => match action {
                // the overlay stays open so the change can be compared
                SettingsAction::SelectPreset(id) => {
                    self.select_preset(&id);
                    self.open_settings();
                }
                SettingsAction::ToggleMode => {
                    self.toggle_mode(None);
                    self.open_settings();
                }
                SettingsAction::EditPalette => self.open_palette_input(None),
            },
            ModalOutcome::PaletteInput(ModalResult::Confirmed(url)) => {
                self.install_palette(&url);
            }
            ModalOutcome::Settings(ModalResult::Cancelled)
            | ModalOutcome::PaletteInput(ModalResult::Cancelled) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{app, key};
    use crate::event::Event;
    use crate::state::ActiveModal;
    use crossterm::event::KeyCode;
    use folio_theme::{Mode, CUSTOM_PRESET_ID};

    const PALETTE: &str = "https://coolors.co/264653-2a9d8f-e9c46a-f4a261-e76f51";

    #[test]
    fn test_palette_flow_installs_custom_palette() {
        let mut app = app();
        key(&mut app, KeyCode::Char('c'));
        app.handle_event(Event::Paste(format!("{}\n", PALETTE)))
            .unwrap();
        key(&mut app, KeyCode::Enter);

        assert!(!app.state.has_modal());
        assert_eq!(app.session.preset_id(), CUSTOM_PRESET_ID);
        assert_eq!(app.session.custom_palette().unwrap().codes().len(), 5);

        // reopening shows the installed palette
        key(&mut app, KeyCode::Char('c'));
        match &app.state.active_modal {
            Some(ActiveModal::PaletteInput(modal)) => assert_eq!(modal.text(), PALETTE),
            other => panic!("unexpected modal: {:?}", other),
        }
    }

    #[test]
    fn test_short_palette_is_rejected() {
        let mut app = app();
        key(&mut app, KeyCode::Char('c'));
        for c in "coolors.co/264653-2a9d8f".chars() {
            key(&mut app, KeyCode::Char(c));
        }
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.session.preset_id(), "ocean");
        assert!(matches!(app.state.status_message, Some((_, true))));
    }

    #[test]
    fn test_paste_on_page_opens_input() {
        let mut app = app();
        app.handle_event(Event::Paste("hello".into())).unwrap();
        assert!(!app.state.has_modal());

        app.handle_event(Event::Paste(PALETTE.into())).unwrap();
        match &app.state.active_modal {
            Some(ActiveModal::PaletteInput(modal)) => assert_eq!(modal.text(), PALETTE),
            other => panic!("unexpected modal: {:?}", other),
        }
    }

    #[test]
    fn test_settings_select_keeps_overlay_open() {
        let mut app = app();
        key(&mut app, KeyCode::Char('s'));
        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Enter);

        let second = app.session.registry().presets()[1].id.clone();
        assert_eq!(app.session.preset_id(), second);
        assert!(matches!(
            app.state.active_modal,
            Some(ActiveModal::Settings(_))
        ));

        key(&mut app, KeyCode::Char('t'));
        assert_eq!(app.session.mode(), Mode::Light);

        key(&mut app, KeyCode::Esc);
        assert!(!app.state.has_modal());
    }

    #[test]
    fn test_settings_palette_item_opens_input() {
        let mut app = app();
        key(&mut app, KeyCode::Char('s'));
        key(&mut app, KeyCode::End);
        key(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.state.active_modal,
            Some(ActiveModal::PaletteInput(_))
        ));
        key(&mut app, KeyCode::Esc);
        assert!(!app.state.has_modal());
        assert_eq!(app.session.preset_id(), "ocean");
    }
}
