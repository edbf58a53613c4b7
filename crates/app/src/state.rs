//! Application state and types.

use std::time::Instant;

use ratatui::buffer::Buffer;

use folio_config::Config;
use folio_portfolio::PortfolioData;
use folio_ui::{reveal::RevealState, PageState, PaletteInputModal, ScreenHit, SectionId, SettingsModal};

/// Active modal window
#[derive(Debug)]
pub enum ActiveModal {
    Settings(Box<SettingsModal>),
    PaletteInput(Box<PaletteInputModal>),
}

/// Terminal dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalState {
    pub width: u16,
    pub height: u16,
}

impl TerminalState {
    /// Rows available to the page; the last row is the status bar.
    pub fn page_height(&self) -> u16 {
        self.height.saturating_sub(1)
    }
}

/// Layout facts of the last drawn page, used between frames.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub max_scroll: usize,
    /// Sections on the page with their first row
    pub anchors: Vec<(SectionId, usize)>,
}

impl PageLayout {
    pub fn row_of(&self, id: SectionId) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, row)| *row)
    }

    /// Sections Tab can move focus to.
    pub fn focusable(&self) -> Vec<SectionId> {
        self.anchors
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| id.is_focusable())
            .collect()
    }
}

/// Global application state
#[derive(Debug)]
pub struct AppState {
    /// Should application quit
    pub should_quit: bool,
    /// Application configuration
    pub config: Config,
    /// Portfolio document
    pub data: PortfolioData,
    /// Scroll, focus and disclosure state of the page
    pub page: PageState,
    /// Terminal state
    pub terminal: TerminalState,
    /// Active modal window
    pub active_modal: Option<ActiveModal>,
    /// Status message (message, is_error)
    pub status_message: Option<(String, bool)>,
    /// Clickable regions of the last frame
    pub screen_hits: Vec<ScreenHit>,
    /// Layout of the last frame
    pub layout: PageLayout,
    /// Last completed frame, the backdrop of the next reveal
    pub last_frame: Option<Buffer>,
    /// Mode change being revealed
    pub reveal: Option<RevealState>,
    /// Flag indicating UI needs to be redrawn
    pub needs_redraw: bool,
    /// Last time the hero role rotated
    pub last_role_rotate: Instant,
}

impl AppState {
    pub fn new(config: Config, data: PortfolioData, quote_index: usize) -> Self {
        Self {
            should_quit: false,
            config,
            data,
            page: PageState::new(quote_index),
            terminal: TerminalState::default(),
            active_modal: None,
            status_message: None,
            screen_hits: Vec::new(),
            layout: PageLayout::default(),
            last_frame: None,
            reveal: None,
            needs_redraw: true, // Initial draw needed
            last_role_rotate: Instant::now(),
        }
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal = TerminalState { width, height };
        // an old frame no longer lines up with the screen
        self.last_frame = None;
        self.reveal = None;
    }

    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    /// Set error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), true));
    }

    /// Set informational message
    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), false));
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// GitHub user for the chart: config wins over the data file.
    pub fn github_user(&self) -> Option<&str> {
        self.config
            .widgets
            .github
            .as_deref()
            .or(Some(self.data.github.as_str()))
            .map(str::trim)
            .filter(|user| !user.is_empty())
    }
}
