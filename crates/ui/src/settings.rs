//! Theme settings overlay: preset list, mode switch and custom palette entry.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

use folio_theme::{Mode, ThemeRegistry, ThemeView, CUSTOM_PRESET_ID};

use crate::{calculate_modal_width, centered_rect, text, Modal, ModalResult, Styles};

/// What the user picked in the settings overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    SelectPreset(String),
    ToggleMode,
    EditPalette,
}

#[derive(Debug, Clone)]
struct PresetEntry {
    id: String,
    name: String,
    swatches: Vec<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Preset(usize),
    Mode,
    Palette,
}

const HINTS: &str = "↑↓ move · Enter apply · Esc close";

/// Settings overlay window
#[derive(Debug)]
pub struct SettingsModal {
    presets: Vec<PresetEntry>,
    active: String,
    mode: Mode,
    cursor: usize,
    /// Screen rows of the items, filled on render for mouse handling
    item_rows: Vec<(Rect, usize)>,
}

impl SettingsModal {
    /// Snapshot the registry for the current mode; the cursor starts on the
    /// active preset.
    pub fn new(registry: &ThemeRegistry, view: &ThemeView) -> Self {
        let presets: Vec<PresetEntry> = registry
            .presets()
            .iter()
            .map(|preset| PresetEntry {
                id: preset.id.clone(),
                name: preset.name.clone(),
                swatches: preset
                    .colors(view.mode)
                    .accents()
                    .iter()
                    .map(|c| c.to_color())
                    .collect(),
            })
            .collect();
        let cursor = presets
            .iter()
            .position(|p| p.id == view.preset_id)
            .unwrap_or(0);

        Self {
            presets,
            active: view.preset_id.clone(),
            mode: view.mode,
            cursor,
            item_rows: Vec::new(),
        }
    }

    fn items(&self) -> Vec<Item> {
        let mut items: Vec<Item> = (0..self.presets.len()).map(Item::Preset).collect();
        items.push(Item::Mode);
        items.push(Item::Palette);
        items
    }

    fn action(&self, item: Item) -> SettingsAction {
        match item {
            Item::Preset(i) => SettingsAction::SelectPreset(self.presets[i].id.clone()),
            Item::Mode => SettingsAction::ToggleMode,
            Item::Palette => SettingsAction::EditPalette,
        }
    }

    fn confirm(&self, index: usize) -> Option<ModalResult<SettingsAction>> {
        self.items()
            .get(index)
            .map(|item| ModalResult::Confirmed(self.action(*item)))
    }

    fn item_line(&self, item: Item, selected: bool, styles: &Styles) -> Line<'static> {
        let marker = if selected { "▶ " } else { "  " };
        let base = if selected { styles.selected } else { styles.text };

        let mut spans = vec![Span::styled(marker, base)];
        match item {
            Item::Preset(i) => {
                let preset = &self.presets[i];
                let active = if preset.id == self.active { "● " } else { "○ " };
                spans.push(Span::styled(active, base));
                spans.push(Span::styled(format!("{:<12}", preset.name), base));
                for color in &preset.swatches {
                    spans.push(Span::styled("██", Style::default().fg(*color)));
                }
            }
            Item::Mode => {
                let (current, next) = match self.mode {
                    Mode::Dark => ("☾ Dark", "light"),
                    Mode::Light => ("☀ Light", "dark"),
                };
                spans.push(Span::styled(format!("Mode: {}", current), base));
                spans.push(Span::styled(format!("  (switch to {})", next), styles.text_muted));
            }
            Item::Palette => {
                let active = if self.active == CUSTOM_PRESET_ID { "● " } else { "○ " };
                spans.push(Span::styled(active, base));
                spans.push(Span::styled("Custom palette from coolors.co…", base));
            }
        }
        Line::from(spans)
    }

    fn content_width(&self) -> u16 {
        // marker + dot + padded name + five swatches
        let preset_width = 2 + 2 + 12 + 10;
        let mode_width = 2 + text::width("Mode: ☀ Light  (switch to dark)");
        [preset_width, mode_width, text::width(HINTS)]
            .into_iter()
            .max()
            .unwrap_or(0) as u16
    }
}

impl Modal for SettingsModal {
    type Result = SettingsAction;

    fn render(&mut self, area: Rect, buf: &mut Buffer, styles: &Styles) {
        let items = self.items();
        let width = calculate_modal_width(std::iter::once(self.content_width()), area.width);
        // borders + heading + presets + blank + mode + palette + blank + hints
        let height = (items.len() as u16 + 6).min(area.height);
        let modal_area = centered_rect(width, height, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Span::styled(" Theme ", styles.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(styles.colors.primary.to_color()))
            .style(styles.card);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        self.item_rows.clear();
        let mut y = inner.y;
        let put = |buf: &mut Buffer, line: &Line<'_>, y: &mut u16| -> Option<Rect> {
            if *y >= inner.bottom() {
                return None;
            }
            let row = Rect::new(inner.x, *y, inner.width, 1);
            buf.set_line(inner.x + 1, *y, line, inner.width.saturating_sub(2));
            *y += 1;
            Some(row)
        };

        put(
            buf,
            &Line::from(Span::styled(
                "Theme Presets",
                styles.text_muted.add_modifier(Modifier::BOLD),
            )),
            &mut y,
        );
        for (index, item) in items.iter().enumerate() {
            if *item == Item::Mode {
                y += 1;
            }
            let line = self.item_line(*item, index == self.cursor, styles);
            if let Some(row) = put(buf, &line, &mut y) {
                self.item_rows.push((row, index));
            }
        }
        y += 1;
        put(
            buf,
            &Line::from(Span::styled(HINTS, styles.text_faint)),
            &mut y,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        let last = self.items().len().saturating_sub(1);
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') => {
                Ok(Some(ModalResult::Cancelled))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Ok(None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(last);
                Ok(None)
            }
            KeyCode::Home => {
                self.cursor = 0;
                Ok(None)
            }
            KeyCode::End => {
                self.cursor = last;
                Ok(None)
            }
            KeyCode::Char('t') => Ok(Some(ModalResult::Confirmed(SettingsAction::ToggleMode))),
            KeyCode::Enter | KeyCode::Char(' ') => Ok(self.confirm(self.cursor)),
            _ => Ok(None),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Option<ModalResult<Self::Result>>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }

        let clicked = self.item_rows.iter().find(|(row, _)| {
            mouse.row == row.y && mouse.column >= row.x && mouse.column < row.right()
        });
        match clicked {
            Some(&(_, index)) => {
                self.cursor = index;
                Ok(self.confirm(index))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn modal(preset_id: &str) -> SettingsModal {
        let registry = ThemeRegistry::builtin();
        let view = ThemeView {
            colors: registry.default_preset().dark.clone(),
            mode: Mode::Dark,
            preset_id: preset_id.to_string(),
        };
        SettingsModal::new(&registry, &view)
    }

    fn styles() -> Styles {
        let registry = ThemeRegistry::builtin();
        Styles::from_view(&ThemeView {
            colors: registry.default_preset().dark.clone(),
            mode: Mode::Dark,
            preset_id: "ocean".into(),
        })
    }

    #[test]
    fn test_cursor_starts_on_active_preset() {
        let registry = ThemeRegistry::builtin();
        let m = modal("forest");
        assert_eq!(m.cursor, registry.position("forest").unwrap());
    }

    #[test]
    fn test_enter_selects_preset() {
        let mut m = modal("ocean");
        m.handle_key(key(KeyCode::Down)).unwrap();
        let result = m.handle_key(key(KeyCode::Enter)).unwrap();

        let registry = ThemeRegistry::builtin();
        let expected = registry.presets()[1].id.clone();
        assert_eq!(
            result,
            Some(ModalResult::Confirmed(SettingsAction::SelectPreset(expected)))
        );
    }

    #[test]
    fn test_trailing_items() {
        let mut m = modal("ocean");
        m.handle_key(key(KeyCode::End)).unwrap();
        assert_eq!(
            m.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Confirmed(SettingsAction::EditPalette))
        );

        m.handle_key(key(KeyCode::Up)).unwrap();
        assert_eq!(
            m.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Confirmed(SettingsAction::ToggleMode))
        );

        assert_eq!(
            m.handle_key(key(KeyCode::Esc)).unwrap(),
            Some(ModalResult::Cancelled)
        );
    }

    #[test]
    fn test_render_and_click() {
        let mut m = modal("ocean");
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        m.render(area, &mut buf, &styles());

        let items = m.items().len();
        assert_eq!(m.item_rows.len(), items);

        let (row, index) = m.item_rows[2];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: row.x + 1,
            row: row.y,
            modifiers: KeyModifiers::NONE,
        };
        let result = m.handle_mouse(click).unwrap();
        assert_eq!(index, 2);
        assert!(matches!(
            result,
            Some(ModalResult::Confirmed(SettingsAction::SelectPreset(_)))
        ));
    }
}
