//! Configuration management for folio.
//!
//! This crate provides configuration loading and saving in TOML format,
//! following XDG directory conventions.

pub mod constants;
mod settings;
mod xdg;

pub use settings::{Config, GeneralSettings, LoggingSettings, WidgetSettings};
pub use xdg::{get_config_dir, get_data_dir, HOME_ENV};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const THEME_NAME: &str = "ocean";
    pub const MODE_STORAGE_KEY: &str = "portfolio-mode";
    pub const SPOTIFY: bool = true;
    pub const SPOTIFY_POLL_INTERVAL_SECS: u64 = 30;
    pub const ROLE_ROTATE_INTERVAL_MS: u64 = 2500;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const DATA_FILE_NAME: &str = "data.json";
    pub const LOG_FILE_NAME: &str = "folio.log";
}

impl Config {
    /// Load configuration from the XDG config file.
    ///
    /// On first run, creates the config file with default values and the
    /// user themes directory.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        let first_run = !config_path.exists();

        let config = Self::load_from(&config_path)?;

        if first_run {
            Self::ensure_themes_dir()?;
        }
        Ok(config)
    }

    /// Load configuration from `path`.
    ///
    /// A missing file is created with defaults. Missing keys are filled in
    /// and the normalized content is written back.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&original_content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to the XDG config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Get path to the user themes directory.
    pub fn get_themes_dir() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("themes"))
    }

    /// Portfolio data file: configured path, else `data.json` in the config dir.
    pub fn data_file_path(&self) -> Result<PathBuf> {
        match &self.general.data_file {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(get_config_dir()?.join(defaults::DATA_FILE_NAME)),
        }
    }

    /// Log file: configured path, else `folio.log` in the data dir.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.logging.file_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(get_data_dir()?.join(defaults::LOG_FILE_NAME)),
        }
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }

    fn ensure_themes_dir() -> Result<()> {
        let themes_dir = Self::get_themes_dir()?;
        if !themes_dir.exists() {
            std::fs::create_dir_all(themes_dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.general.theme, "ocean");
        assert_eq!(config.general.mode_storage_key, "portfolio-mode");
        assert!(!config.general.reduced_motion);
        assert_eq!(config.widgets.spotify_poll_interval_secs, 30);
        assert_eq!(config.widgets.role_rotate_interval_ms, 2500);
        assert_eq!(config.logging.min_level, "info");
    }

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_missing_keys_are_completed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\ntheme = \"rose\"\nreduced_motion = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.general.theme, "rose");
        assert!(config.general.reduced_motion);
        assert_eq!(config.general.mode_storage_key, "portfolio-mode");

        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("mode_storage_key"));
        assert!(rewritten.contains("[widgets]"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general\ntheme = ").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_validate_content() {
        assert!(Config::validate_content("[widgets]\nspotify = false\n").is_ok());
        assert!(Config::validate_content("[widgets]\nspotify = \"nope\"\n").is_err());
    }

    #[test]
    fn test_explicit_paths_win() {
        let mut config = Config::default();
        config.general.data_file = Some("/srv/portfolio.json".into());
        config.logging.file_path = Some("/tmp/folio.log".into());

        assert_eq!(
            config.data_file_path().unwrap(),
            PathBuf::from("/srv/portfolio.json")
        );
        assert_eq!(config.log_file_path().unwrap(), PathBuf::from("/tmp/folio.log"));
    }
}
