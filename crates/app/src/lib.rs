//! Application orchestrator for folio.
//!
//! [`App`] owns the theme session, the page state and the Spotify poller,
//! turns terminal events into session and page operations, and draws frames.

mod app;
pub mod event;
pub mod state;

pub use app::App;
pub use event::{Event, EventHandler};
pub use state::{ActiveModal, AppState};
