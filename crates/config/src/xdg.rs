//! Directory layout for folio.
//!
//! Config lives in the XDG config directory, persisted preferences and the
//! log file in the XDG data directory. Setting [`HOME_ENV`] keeps both under
//! one directory instead, e.g. to run a portfolio from its own repository.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "folio";

/// Overrides both directories when set to a non-empty path.
pub const HOME_ENV: &str = "FOLIO_HOME";

fn home_override() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn config_dir_in(home: Option<&Path>, xdg_config: Option<PathBuf>) -> Option<PathBuf> {
    match home {
        Some(home) => Some(home.to_path_buf()),
        None => xdg_config.map(|p| p.join(APP_NAME)),
    }
}

fn data_dir_in(home: Option<&Path>, xdg_data: Option<PathBuf>) -> Option<PathBuf> {
    match home {
        Some(home) => Some(home.join("data")),
        None => xdg_data.map(|p| p.join(APP_NAME)),
    }
}

/// `$FOLIO_HOME`, else `$XDG_CONFIG_HOME/folio` or `~/.config/folio`.
pub fn get_config_dir() -> Result<PathBuf> {
    config_dir_in(home_override().as_deref(), dirs::config_dir())
        .context("Failed to determine config directory")
}

/// `$FOLIO_HOME/data`, else `$XDG_DATA_HOME/folio` or `~/.local/share/folio`.
pub fn get_data_dir() -> Result<PathBuf> {
    data_dir_in(home_override().as_deref(), dirs::data_dir())
        .context("Failed to determine data directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdg_layout() {
        let config = config_dir_in(None, Some(PathBuf::from("/x/config")));
        let data = data_dir_in(None, Some(PathBuf::from("/x/share")));
        assert_eq!(config, Some(PathBuf::from("/x/config/folio")));
        assert_eq!(data, Some(PathBuf::from("/x/share/folio")));
    }

    #[test]
    fn test_home_override_keeps_everything_together() {
        let home = Path::new("/srv/portfolio");
        assert_eq!(
            config_dir_in(Some(home), Some(PathBuf::from("/x/config"))),
            Some(PathBuf::from("/srv/portfolio"))
        );
        assert_eq!(
            data_dir_in(Some(home), None),
            Some(PathBuf::from("/srv/portfolio/data"))
        );
    }

    #[test]
    fn test_no_base_directory() {
        assert_eq!(config_dir_in(None, None), None);
        assert_eq!(data_dir_in(None, None), None);
    }
}
