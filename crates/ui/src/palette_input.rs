//! Coolors URL input with a live swatch preview.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use folio_theme::{parse_palette_url, ThemeColor, MIN_PALETTE_CODES};

use crate::{calculate_modal_width, centered_rect, text, Modal, ModalResult, Styles, TextInput};

const PROMPT: &str = "Paste a coolors.co palette URL";
const EXAMPLE: &str = "https://coolors.co/264653-2a9d8f-e9c46a-f4a261-e76f51";

/// Text input modal for custom palettes
#[derive(Debug, Default)]
pub struct PaletteInputModal {
    input: TextInput,
}

impl PaletteInputModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            input: TextInput::with_text(text),
        }
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    /// Insert pasted text, dropping line breaks.
    pub fn paste(&mut self, pasted: &str) {
        let cleaned: String = pasted.chars().filter(|c| !c.is_control()).collect();
        self.input.insert_str(&cleaned);
    }

    /// Codes found in the current input.
    pub fn codes(&self) -> Vec<String> {
        parse_palette_url(self.input.text())
    }

    fn preview_line(&self, styles: &Styles) -> Line<'static> {
        let codes = self.codes();
        if codes.is_empty() {
            return Line::from(Span::styled(format!("e.g. {}", EXAMPLE), styles.text_faint));
        }

        let mut spans: Vec<Span<'static>> = codes
            .iter()
            .map(|code| match ThemeColor::parse(code) {
                Ok(color) => Span::styled("███ ", Style::default().fg(color.to_color())),
                Err(_) => Span::styled("??? ", styles.text_faint),
            })
            .collect();

        if codes.len() < MIN_PALETTE_CODES {
            spans.push(Span::styled(
                format!("needs {} colors, found {}", MIN_PALETTE_CODES, codes.len()),
                styles.text_muted,
            ));
        }
        Line::from(spans)
    }
}

impl Modal for PaletteInputModal {
    type Result = String;

    fn render(&mut self, area: Rect, buf: &mut Buffer, styles: &Styles) {
        let content = [
            text::width(PROMPT) as u16,
            text::width(EXAMPLE) as u16 + 5,
            u16::try_from(self.input.text().chars().count())
                .unwrap_or(u16::MAX)
                .saturating_add(2),
        ];
        let width = calculate_modal_width(content.into_iter(), area.width);
        // border + prompt + input(3) + preview + border
        let height = 7.min(area.height);
        let modal_area = centered_rect(width, height, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Span::styled(" Custom palette ", styles.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(styles.colors.primary.to_color()))
            .style(styles.card);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height == 0 {
            return;
        }
        buf.set_line(
            inner.x + 1,
            inner.y,
            &Line::from(Span::styled(PROMPT, styles.text_muted)),
            inner.width.saturating_sub(2),
        );

        let input_line = Line::from(vec![
            Span::styled(self.input.text_before_cursor().to_string(), styles.text),
            Span::styled("█", styles.accent),
            Span::styled(self.input.text_after_cursor().to_string(), styles.text),
        ]);
        let input_area = Rect::new(inner.x, inner.y + 1, inner.width, 3.min(inner.height - 1));
        Paragraph::new(input_line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles.accent),
            )
            .render(input_area, buf);

        if inner.height > 4 {
            buf.set_line(
                inner.x + 1,
                inner.y + 4,
                &self.preview_line(styles),
                inner.width.saturating_sub(2),
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        match key.code {
            KeyCode::Esc => Ok(Some(ModalResult::Cancelled)),
            KeyCode::Enter => Ok(Some(ModalResult::Confirmed(
                self.input.text().trim().to_string(),
            ))),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                Ok(None)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert(c);
                Ok(None)
            }
            KeyCode::Backspace => {
                self.input.backspace();
                Ok(None)
            }
            KeyCode::Delete => {
                self.input.delete();
                Ok(None)
            }
            KeyCode::Left => {
                self.input.move_left();
                Ok(None)
            }
            KeyCode::Right => {
                self.input.move_right();
                Ok(None)
            }
            KeyCode::Home => {
                self.input.move_home();
                Ok(None)
            }
            KeyCode::End => {
                self.input.move_end();
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_theme::{Mode, ThemeRegistry, ThemeView};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn styles() -> Styles {
        let registry = ThemeRegistry::builtin();
        Styles::from_view(&ThemeView {
            colors: registry.default_preset().light.clone(),
            mode: Mode::Light,
            preset_id: "ocean".into(),
        })
    }

    #[test]
    fn test_typing_and_confirm() {
        let mut modal = PaletteInputModal::new();
        for c in "coolors.co/abc".chars() {
            assert!(modal.handle_key(key(KeyCode::Char(c))).unwrap().is_none());
        }
        modal.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(modal.text(), "coolors.co/ab");

        assert_eq!(
            modal.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Confirmed("coolors.co/ab".to_string()))
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut modal = PaletteInputModal::with_text(EXAMPLE);
        assert_eq!(
            modal.handle_key(key(KeyCode::Esc)).unwrap(),
            Some(ModalResult::Cancelled)
        );
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut modal = PaletteInputModal::with_text(EXAMPLE);
        modal
            .handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(modal.text().is_empty());
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut modal = PaletteInputModal::new();
        modal.paste("https://coolors.co/264653-2a9d8f\n");
        assert_eq!(modal.text(), "https://coolors.co/264653-2a9d8f");
        assert_eq!(modal.codes(), vec!["#264653", "#2a9d8f"]);
    }

    #[test]
    fn test_preview_reports_short_palette() {
        let modal = PaletteInputModal::with_text("https://coolors.co/264653-2a9d8f");
        let line = modal.preview_line(&styles());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("needs 5 colors, found 2"));

        let modal = PaletteInputModal::with_text(EXAMPLE);
        let line = modal.preview_line(&styles());
        assert_eq!(line.spans.len(), 5);
    }

    #[test]
    fn test_render_huge_paste() {
        let url = format!("https://coolors.co/{}", "a".repeat(u16::MAX as usize));
        let mut modal = PaletteInputModal::with_text(url);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        modal.render(area, &mut buf, &styles());
        assert_eq!(buf.area, area);
    }

    #[test]
    fn test_render_fits_small_screen() {
        let mut modal = PaletteInputModal::with_text(EXAMPLE);
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        modal.render(area, &mut buf, &styles());
    }
}
