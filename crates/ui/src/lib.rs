//! Terminal UI for folio.
//!
//! The page is laid out as styled lines ([`page`]), overlays are modal
//! windows ([`settings`], [`palette_input`]) and mode changes can be drawn
//! with a circular reveal ([`reveal`]).

pub mod page;
pub mod palette_input;
pub mod reveal;
mod sections;
pub mod settings;
pub mod status_bar;
pub mod styles;
pub mod text;

pub use page::{
    build_page, content_width, Hit, HitTarget, Page, PageContext, PageState, ScreenHit, SectionId,
};
pub use palette_input::PaletteInputModal;
pub use settings::{SettingsAction, SettingsModal};
pub use status_bar::{StatusBar, StatusBarParams};
pub use styles::Styles;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

// ===== Modal System =====

/// Modal window result.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalResult<T> {
    /// User confirmed the action with a result.
    Confirmed(T),
    /// User cancelled the action.
    Cancelled,
}

/// Trait for all modal windows.
pub trait Modal {
    /// Modal window result type.
    type Result;

    /// Render the modal window centered in `area`.
    fn render(&mut self, area: Rect, buf: &mut Buffer, styles: &Styles);

    /// Handle keyboard event.
    /// Returns Some(result) if the modal window should close.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>>;

    /// Handle mouse event.
    /// Returns Some(result) if the modal window should close.
    fn handle_mouse(&mut self, _mouse: MouseEvent) -> Result<Option<ModalResult<Self::Result>>> {
        Ok(None)
    }
}

/// Default modal size constants.
pub mod modal_constants {
    /// Minimum modal width.
    pub const MIN_WIDTH: u16 = 40;
    /// Maximum width as percentage of screen.
    pub const MAX_WIDTH_PERCENTAGE: f32 = 0.90;
    /// Padding with single border.
    pub const PADDING_WITH_BORDER: u16 = 6;
}

/// Calculate modal width based on content and screen constraints.
///
/// Takes the widest content, adds border padding, then applies the minimum
/// and the screen-relative maximum.
pub fn calculate_modal_width(content_widths: impl Iterator<Item = u16>, screen_width: u16) -> u16 {
    let content_width = content_widths.max().unwrap_or(0);
    let total_width = content_width + modal_constants::PADDING_WITH_BORDER;
    let max_width = (screen_width as f32 * modal_constants::MAX_WIDTH_PERCENTAGE) as u16;

    total_width
        .max(modal_constants::MIN_WIDTH)
        .min(max_width)
        .min(screen_width)
}

/// Text input handler with cursor management
///
/// Handles character insertion, deletion and cursor navigation. The cursor
/// is tracked in characters (not bytes) so multi-byte input is safe.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    input: String,
    cursor_pos: usize, // Position in characters, not bytes
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let input = text.into();
        let cursor_pos = input.chars().count();
        Self { input, cursor_pos }
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    /// Get the cursor position (in characters)
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    /// Convert cursor position (in characters) to byte index
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at the cursor position
    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.input.insert(byte_idx, c);
        self.cursor_pos += 1;
    }

    /// Insert a whole string (paste) at the cursor position
    pub fn insert_str(&mut self, s: &str) {
        let byte_idx = self.byte_index();
        self.input.insert_str(byte_idx, s);
        self.cursor_pos += s.chars().count();
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let byte_idx = self.byte_index();
            self.input.remove(byte_idx);
            true
        } else {
            false
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete(&mut self) -> bool {
        if self.cursor_pos < self.input.chars().count() {
            let byte_idx = self.byte_index();
            self.input.remove(byte_idx);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor_pos < self.input.chars().count() {
            self.cursor_pos += 1;
            true
        } else {
            false
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Get text before cursor (for rendering)
    pub fn text_before_cursor(&self) -> &str {
        &self.input[..self.byte_index()]
    }

    /// Get text after cursor (for rendering)
    pub fn text_after_cursor(&self) -> &str {
        &self.input[self.byte_index()..]
    }
}

/// Create a centered rectangle with specified width and height within a container
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let horizontal_margin = r.width.saturating_sub(width) / 2;
    let vertical_margin = r.height.saturating_sub(height) / 2;

    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_margin),
            Constraint::Length(height),
            Constraint::Length(vertical_margin),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(horizontal_margin),
            Constraint::Length(width),
            Constraint::Length(horizontal_margin),
        ])
        .split(vertical_layout[1])[1]
}
