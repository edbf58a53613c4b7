//! Main application module.
//!
//! Contains the App struct, the event loop and drawing. Input handlers live
//! in the submodules.

use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use rand::Rng;
use ratatui::{backend::Backend, layout::Rect, Frame, Terminal};

use folio_config::{constants, get_data_dir, Config};
use folio_logger::LogLevel;
use folio_portfolio::PortfolioData;
use folio_storage::{FileStore, KeyValueStore, MemoryStore};
use folio_theme::{
    CellPoint, MotionEnvironment, ThemeRegistry, ThemeSession, TransitionStrategy, Viewport,
    MIN_PALETTE_CODES,
};
use folio_ui::{
    build_page, reveal::RevealState, status_bar::scroll_percent, Modal, PageContext, SectionId,
    StatusBar, StatusBarParams, Styles,
};
use folio_widgets::{NoSource, NowPlayingSource, SnapshotFileSource, SpotifyPoller};

use crate::event::{Event, EventHandler};
use crate::state::{ActiveModal, AppState, PageLayout};

mod key_handler;
mod modal_handler;
mod mouse_handler;

/// Main application
pub struct App {
    state: AppState,
    session: ThemeSession,
    spotify: Option<SpotifyPoller>,
    event_handler: EventHandler,
}

impl App {
    /// Create the application: logger, theme session over the persisted
    /// store, and the Spotify poller.
    ///
    /// The initial preset is `--theme`, else the portfolio `theme`, else the
    /// configured one.
    pub fn new(config: Config, data: PortfolioData, theme_override: Option<&str>) -> Self {
        init_logger(&config);
        folio_logger::info("Application started");

        let registry = match Config::get_themes_dir() {
            Ok(dir) => Arc::new(ThemeRegistry::with_user_presets(&dir)),
            Err(e) => {
                folio_logger::warn(format!("No themes directory: {:#}", e));
                ThemeRegistry::builtin()
            }
        };
        let initial = initial_preset(&config, &data, theme_override);
        let session = ThemeSession::restore(
            registry,
            open_store(),
            config.general.mode_storage_key.clone(),
            &initial,
        );
        let spotify = spotify_poller(&config);

        Self::with_parts(config, data, session, spotify)
    }

    /// Assemble an application from ready parts.
    pub fn with_parts(
        config: Config,
        data: PortfolioData,
        session: ThemeSession,
        spotify: Option<SpotifyPoller>,
    ) -> Self {
        let quote_index = random_index(data.quotes.len());
        Self {
            state: AppState::new(config, data, quote_index),
            session,
            spotify,
            event_handler: EventHandler::new(Duration::from_millis(constants::EVENT_TICK_MS)),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> &ThemeSession {
        &self.session
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        self.state.update_terminal_size(size.width, size.height);

        while !self.state.should_quit {
            let event = self.event_handler.next()?;
            self.handle_event(event)?;

            // Render UI only when needed
            if self.state.needs_redraw {
                self.draw(terminal)?;
            }
        }

        folio_logger::info("Application exiting");
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => {
                self.handle_key_event(key)?;
                self.state.needs_redraw = true;
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse)?,
            Event::Paste(text) => {
                self.handle_paste(&text);
                self.state.needs_redraw = true;
            }
            Event::Resize(width, height) => {
                self.state.update_terminal_size(width, height);
                self.state.needs_redraw = true;
            }
            Event::Tick => self.on_tick(Instant::now()),
        }
        Ok(())
    }

    /// Periodic updates: role rotation, marquee, Spotify, running reveal.
    fn on_tick(&mut self, now: Instant) {
        let roles = self.state.data.roles.len();
        let interval = Duration::from_millis(self.state.config.widgets.role_rotate_interval_ms);
        if roles > 1 && now.saturating_duration_since(self.state.last_role_rotate) >= interval {
            self.state.page.advance_role(roles);
            self.state.last_role_rotate = now;
            self.state.needs_redraw = true;
        }

        if !self.state.data.skills.is_empty() {
            self.state.page.advance_marquee(constants::MARQUEE_STEP);
            self.state.needs_redraw = true;
        }

        if let Some(poller) = &mut self.spotify {
            if poller.poll_if_due(now) {
                self.state.needs_redraw = true;
            }
        }

        if self.state.reveal.is_some() {
            self.state.needs_redraw = true;
        }
    }

    /// Draw one frame and keep it as the backdrop of the next reveal.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let now = Instant::now();
        let completed = terminal.draw(|frame| self.render(frame, now))?;
        self.state.last_frame = Some(completed.buffer.clone());
        self.state.needs_redraw = false;

        if self
            .state
            .reveal
            .as_ref()
            .is_some_and(|reveal| reveal.is_finished(now))
        {
            self.state.reveal = None;
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame<'_>, now: Instant) {
        let area = frame.area();
        let view = self.session.view();
        let styles = Styles::from_view(&view);

        let page_height = area.height.saturating_sub(1);
        let page_area = Rect::new(area.x, area.y, area.width, page_height);
        let status_area = Rect::new(area.x, area.y + page_height, area.width, area.height.min(1));

        let page = {
            let ctx = PageContext {
                styles: &styles,
                data: &self.state.data,
                github_user: self.state.github_user(),
                playback: self.spotify.as_ref().and_then(|poller| poller.state()),
                show_settings_button: self.state.data.illustration,
            };
            build_page(&ctx, &self.state.page, page_area.width)
        };

        let max_scroll = page.max_scroll(page_area.height);
        self.state.page.clamp_scroll(max_scroll);
        self.state.layout = PageLayout {
            max_scroll,
            anchors: page
                .sections()
                .filter_map(|id| page.section_row(id).map(|row| (id, row)))
                .collect(),
        };

        let buf = frame.buffer_mut();
        self.state.screen_hits = page.render(page_area, buf, self.state.page.scroll, styles.page);

        StatusBar::render(
            buf,
            status_area,
            &StatusBarParams {
                styles: &styles,
                status_message: self.state.status_message.as_ref(),
                preset_id: self.session.preset_id(),
                scroll_percent: scroll_percent(self.state.page.scroll, max_scroll),
            },
        );

        match &mut self.state.active_modal {
            Some(ActiveModal::Settings(modal)) => modal.render(page_area, buf, &styles),
            Some(ActiveModal::PaletteInput(modal)) => modal.render(page_area, buf, &styles),
            None => {}
        }

        if let Some(reveal) = &self.state.reveal {
            reveal.composite(buf, now);
        }
    }

    // ===== Theme actions =====

    /// Flip the mode. With an origin the change may be revealed from it.
    ///
    /// A toggle during a running reveal replaces it; the frame on screen
    /// becomes the old layer.
    pub(super) fn toggle_mode(&mut self, origin: Option<CellPoint>) {
        let env = MotionEnvironment::detect(
            Viewport::new(self.state.terminal.width, self.state.terminal.height),
            self.state.config.general.reduced_motion,
            self.state.config.general.force_animations,
        );
        let change = self.session.toggle_mode(origin, &env);

        self.state.reveal = match change.strategy {
            TransitionStrategy::Animated(reveal) => self
                .state
                .last_frame
                .clone()
                .map(|backdrop| RevealState::new(reveal, backdrop)),
            TransitionStrategy::Immediate => None,
        };
        self.state.needs_redraw = true;
    }

    pub(super) fn select_preset(&mut self, id: &str) {
        if self.session.select_preset(id) {
            self.state.needs_redraw = true;
        }
    }

    pub(super) fn select_preset_at(&mut self, index: usize) {
        if self.session.select_preset_at(index) {
            self.state.needs_redraw = true;
        }
    }

    pub(super) fn cycle_preset(&mut self, step: isize) {
        if self.session.cycle_preset(step) {
            self.state.needs_redraw = true;
        }
    }

    pub(super) fn install_palette(&mut self, url: &str) {
        if self.session.install_custom_palette(url) {
            self.state.set_info("Custom palette applied");
        } else {
            self.state.set_error(format!(
                "Not a palette URL with at least {} colors",
                MIN_PALETTE_CODES
            ));
        }
        self.state.needs_redraw = true;
    }

    // ===== Page actions =====

    fn entry_count(&self, id: SectionId) -> usize {
        let data = &self.state.data;
        match id {
            SectionId::Experience => data.experience.len(),
            SectionId::Education => data.education.len(),
            SectionId::Blog => data.blogs.len(),
            _ => 0,
        }
    }

    pub(super) fn scroll_by(&mut self, delta: isize) {
        self.state.page.scroll_by(delta, self.state.layout.max_scroll);
    }

    /// Move focus to the next section and scroll its header to the top.
    pub(super) fn focus_next_section(&mut self) {
        let available = self.state.layout.focusable();
        self.state.page.focus_next(&available);

        if let Some(row) = self
            .state
            .page
            .focus
            .and_then(|id| self.state.layout.row_of(id))
        {
            self.state.page.scroll = row.min(self.state.layout.max_scroll);
        }
    }

    pub(super) fn show_more_focused(&mut self) {
        match self.state.page.focus {
            Some(id) if id.has_show_more() => {
                self.state.page.toggle_show_all(id);
            }
            _ => self
                .state
                .set_info("Tab to Experience, Education or Blog first"),
        }
    }

    pub(super) fn expand_next_focused(&mut self) {
        if let Some(id) = self.state.page.focus {
            let visible = self.state.page.visible_count(id, self.entry_count(id));
            self.state.page.expand_next(id, visible);
        }
    }
}

fn init_logger(config: &Config) {
    let min_level = LogLevel::from_str(&config.logging.min_level).unwrap_or(LogLevel::Info);
    let log_file = match config.log_file_path() {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("Warning: no log file: {:#}", e);
            None
        }
    };
    folio_logger::init(log_file, min_level);
}

/// Persistent store in the data directory, or memory when that fails.
fn open_store() -> Box<dyn KeyValueStore> {
    match get_data_dir().and_then(|dir| FileStore::open_in(&dir)) {
        Ok(store) => {
            folio_logger::debug(format!("Storage: {}", store.path().display()));
            Box::new(store)
        }
        Err(e) => {
            folio_logger::warn(format!("Mode will not persist: {:#}", e));
            Box::new(MemoryStore::new())
        }
    }
}

fn initial_preset(config: &Config, data: &PortfolioData, theme_override: Option<&str>) -> String {
    theme_override
        .or(data.theme.as_deref())
        .unwrap_or(&config.general.theme)
        .to_string()
}

fn spotify_poller(config: &Config) -> Option<SpotifyPoller> {
    if !config.widgets.spotify {
        return None;
    }
    let source: Box<dyn NowPlayingSource> = match &config.widgets.spotify_snapshot {
        Some(path) => Box::new(SnapshotFileSource::new(path)),
        None => Box::new(NoSource),
    };
    Some(SpotifyPoller::new(
        source,
        Duration::from_secs(config.widgets.spotify_poll_interval_secs),
    ))
}

/// Random index into `len` items, `0` when there are none.
fn random_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    rand::thread_rng().gen_range(0..len)
}
