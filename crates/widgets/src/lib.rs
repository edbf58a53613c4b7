//! External data widgets for folio.
//!
//! The page shows two widgets backed by third-party services: the GitHub
//! contribution chart and the Spotify player. Neither talks to the network
//! here; they only shape what the UI displays.

pub mod github;
pub mod spotify;

pub use github::{chart_url, profile_url};
pub use spotify::{
    best_image, format_time, NoSource, NowPlaying, NowPlayingSource, PlaybackState,
    PlayerSnapshot, SnapshotFileSource, SpotifyPoller, Track, POLL_INTERVAL,
};
