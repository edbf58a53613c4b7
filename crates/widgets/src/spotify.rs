//! Spotify "now playing" widget state.
//!
//! Talking to the Spotify Web API is left to a [`NowPlayingSource`]. The
//! poller only decides when to ask and what to show: the current track if
//! there is one, otherwise the most recently played track, otherwise nothing.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Default poll interval.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

/// Track object as returned by the Web API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub album: Album,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub duration_ms: u64,
}

impl Track {
    /// Artist names joined with ", ".
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Currently-playing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NowPlaying {
    pub is_playing: bool,
    pub item: Option<Track>,
    #[serde(default)]
    pub progress_ms: u64,
    #[serde(default = "default_playing_type")]
    pub currently_playing_type: String,
}

fn default_playing_type() -> String {
    "track".to_string()
}

/// Read-only access to the player. Failures are reported as `None`.
pub trait NowPlayingSource {
    fn currently_playing(&mut self) -> Option<NowPlaying>;
    fn recently_played(&mut self) -> Option<Track>;
}

/// Source used when the widget is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSource;

impl NowPlayingSource for NoSource {
    fn currently_playing(&mut self) -> Option<NowPlaying> {
        None
    }

    fn recently_played(&mut self) -> Option<Track> {
        None
    }
}

/// Snapshot file kept up to date by an external helper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    #[serde(default)]
    pub now_playing: Option<NowPlaying>,
    #[serde(default)]
    pub recent: Option<Track>,
}

/// Reads a [`PlayerSnapshot`] JSON file on every poll.
#[derive(Debug, Clone)]
pub struct SnapshotFileSource {
    path: PathBuf,
}

impl SnapshotFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<PlayerSnapshot> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read player snapshot: {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse player snapshot: {}", self.path.display()))
    }

    fn read_or_log(&self) -> Option<PlayerSnapshot> {
        match self.read() {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                folio_logger::debug(format!("{:#}", e));
                None
            }
        }
    }
}

impl NowPlayingSource for SnapshotFileSource {
    fn currently_playing(&mut self) -> Option<NowPlaying> {
        self.read_or_log()?.now_playing
    }

    fn recently_played(&mut self) -> Option<Track> {
        self.read_or_log()?.recent
    }
}

/// What the widget shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub track: Track,
    pub is_playing: bool,
    /// Playback position, known only for the current track
    pub progress_ms: Option<u64>,
}

/// Polls a source on a fixed interval.
pub struct SpotifyPoller {
    source: Box<dyn NowPlayingSource>,
    interval: Duration,
    last_poll: Option<Instant>,
    state: Option<PlaybackState>,
}

impl SpotifyPoller {
    pub fn new(source: Box<dyn NowPlayingSource>, interval: Duration) -> Self {
        Self {
            source,
            interval,
            last_poll: None,
            state: None,
        }
    }

    /// Poll if the interval elapsed (or nothing was polled yet).
    ///
    /// Returns `true` when the displayed state changed.
    pub fn poll_if_due(&mut self, now: Instant) -> bool {
        let due = match self.last_poll {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if !due {
            return false;
        }
        self.last_poll = Some(now);
        self.refresh()
    }

    /// Ask the source right away. Returns `true` when the state changed.
    pub fn refresh(&mut self) -> bool {
        let next = match self.source.currently_playing() {
            Some(NowPlaying {
                item: Some(track),
                is_playing,
                progress_ms,
                ..
            }) => Some(PlaybackState {
                track,
                is_playing,
                progress_ms: Some(progress_ms),
            }),
            _ => self.source.recently_played().map(|track| PlaybackState {
                track,
                is_playing: false,
                progress_ms: None,
            }),
        };

        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Current state; `None` hides the widget.
    pub fn state(&self) -> Option<&PlaybackState> {
        self.state.as_ref()
    }
}

/// Milliseconds as `m:ss`.
pub fn format_time(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    format!("{}:{:02}", minutes, seconds)
}

/// Prefer the tallest image between 300 and 640 px, else the tallest.
pub fn best_image(images: &[Image]) -> Option<&Image> {
    let mut sorted: Vec<&Image> = images.iter().collect();
    sorted.sort_by_key(|img| std::cmp::Reverse(img.height.unwrap_or(0)));

    sorted
        .iter()
        .find(|img| (300..=640).contains(&img.height.unwrap_or(0)))
        .or_else(|| sorted.first())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use tempfile::NamedTempFile;

    fn track(name: &str) -> Track {
        Track {
            name: name.to_string(),
            artists: vec![
                Artist {
                    name: "A".into(),
                },
                Artist {
                    name: "B".into(),
                },
            ],
            album: Album {
                name: "Album".into(),
                images: Vec::new(),
            },
            external_urls: ExternalUrls {
                spotify: "https://open.spotify.com/track/x".into(),
            },
            duration_ms: 200_000,
        }
    }

    #[derive(Default)]
    struct Scripted {
        now: VecDeque<Option<NowPlaying>>,
        recent: VecDeque<Option<Track>>,
    }

    impl NowPlayingSource for Scripted {
        fn currently_playing(&mut self) -> Option<NowPlaying> {
            self.now.pop_front().flatten()
        }

        fn recently_played(&mut self) -> Option<Track> {
            self.recent.pop_front().flatten()
        }
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(61_000), "1:01");
        assert_eq!(format_time(3_599_999), "59:59");
    }

    #[test]
    fn test_best_image() {
        let img = |h: u32| Image {
            url: format!("img{}", h),
            height: Some(h),
            width: Some(h),
        };
        let images = vec![img(64), img(640), img(300), img(1000)];
        assert_eq!(best_image(&images).unwrap().url, "img640");

        let tiny = vec![img(64), img(100)];
        assert_eq!(best_image(&tiny).unwrap().url, "img100");

        assert!(best_image(&[]).is_none());
    }

    #[test]
    fn test_prefers_current_track() {
        let mut source = Scripted::default();
        source.now.push_back(Some(NowPlaying {
            is_playing: true,
            item: Some(track("Live")),
            progress_ms: 10,
            currently_playing_type: "track".into(),
        }));
        let mut poller = SpotifyPoller::new(Box::new(source), POLL_INTERVAL);

        assert!(poller.refresh());
        let state = poller.state().unwrap();
        assert_eq!(state.track.name, "Live");
        assert!(state.is_playing);
        assert_eq!(state.progress_ms, Some(10));
        assert_eq!(state.track.artist_names(), "A, B");
    }

    #[test]
    fn test_falls_back_to_recent() {
        let mut source = Scripted::default();
        source.now.push_back(Some(NowPlaying {
            is_playing: false,
            item: None,
            progress_ms: 0,
            currently_playing_type: "track".into(),
        }));
        source.recent.push_back(Some(track("Earlier")));
        let mut poller = SpotifyPoller::new(Box::new(source), POLL_INTERVAL);

        poller.refresh();
        let state = poller.state().unwrap();
        assert_eq!(state.track.name, "Earlier");
        assert!(!state.is_playing);
        assert_eq!(state.progress_ms, None);
    }

    #[test]
    fn test_nothing_hides_widget() {
        let mut poller = SpotifyPoller::new(Box::new(NoSource), POLL_INTERVAL);
        assert!(!poller.refresh());
        assert!(poller.state().is_none());
    }

    #[test]
    fn test_poll_interval() {
        let mut source = Scripted::default();
        source.recent.push_back(Some(track("One")));
        source.recent.push_back(Some(track("Two")));
        let mut poller = SpotifyPoller::new(Box::new(source), Duration::from_secs(30));

        let start = Instant::now();
        assert!(poller.poll_if_due(start));
        assert_eq!(poller.state().unwrap().track.name, "One");

        assert!(!poller.poll_if_due(start + Duration::from_secs(10)));
        assert_eq!(poller.state().unwrap().track.name, "One");

        assert!(poller.poll_if_due(start + Duration::from_secs(30)));
        assert_eq!(poller.state().unwrap().track.name, "Two");
    }

    #[test]
    fn test_snapshot_file_source() {
        use std::io::Write;

        let snapshot = PlayerSnapshot {
            now_playing: None,
            recent: Some(track("From file")),
        };
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&snapshot).unwrap()).unwrap();

        let mut poller = SpotifyPoller::new(
            Box::new(SnapshotFileSource::new(file.path())),
            POLL_INTERVAL,
        );
        poller.refresh();
        assert_eq!(poller.state().unwrap().track.name, "From file");

        let mut missing = SnapshotFileSource::new(file.path().with_extension("gone"));
        assert!(missing.currently_playing().is_none());
        assert!(missing.recently_played().is_none());
    }
}
