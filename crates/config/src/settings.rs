//! Configuration structures for folio settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// External data widgets
    #[serde(default)]
    pub widgets: WidgetSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Preset selected at startup (the portfolio data may override it)
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Storage key for the persisted light/dark mode
    #[serde(default = "default_mode_storage_key")]
    pub mode_storage_key: String,

    /// Never animate mode changes
    #[serde(default)]
    pub reduced_motion: bool,

    /// Animate even when the terminal does not advertise true color
    #[serde(default)]
    pub force_animations: bool,

    /// Portfolio data file (defaults to data.json in the config directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
}

/// External data widget settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// GitHub user for the contribution chart (overrides the data file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Show the Spotify widget
    #[serde(default = "default_spotify")]
    pub spotify: bool,

    /// JSON snapshot of the Spotify player, written by an external helper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_snapshot: Option<String>,

    /// Spotify poll interval in seconds
    #[serde(default = "default_spotify_poll_interval_secs")]
    pub spotify_poll_interval_secs: u64,

    /// Hero role rotation interval in ms
    #[serde(default = "default_role_rotate_interval_ms")]
    pub role_rotate_interval_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_theme_name() -> String {
    defaults::THEME_NAME.to_string()
}

fn default_mode_storage_key() -> String {
    defaults::MODE_STORAGE_KEY.to_string()
}

fn default_spotify() -> bool {
    defaults::SPOTIFY
}

fn default_spotify_poll_interval_secs() -> u64 {
    defaults::SPOTIFY_POLL_INTERVAL_SECS
}

fn default_role_rotate_interval_ms() -> u64 {
    defaults::ROLE_ROTATE_INTERVAL_MS
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

// Default implementations
impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            mode_storage_key: default_mode_storage_key(),
            reduced_motion: false,
            force_animations: false,
            data_file: None,
        }
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            github: None,
            spotify: default_spotify(),
            spotify_snapshot: None,
            spotify_poll_interval_secs: default_spotify_poll_interval_secs(),
            role_rotate_interval_ms: default_role_rotate_interval_ms(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
