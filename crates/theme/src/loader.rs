//! Preset loading from TOML files.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::{ColorSet, ThemePreset};

/// TOML preset structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlPreset {
    name: String,
    light: ColorSet,
    dark: ColorSet,
}

/// Load a preset from TOML text under the given id.
pub fn load_preset_from_str(content: &str, id: &str) -> Result<ThemePreset> {
    let toml_preset: TomlPreset =
        toml::from_str(content).with_context(|| format!("Invalid preset '{}'", id))?;

    Ok(ThemePreset {
        id: id.to_string(),
        name: toml_preset.name,
        light: toml_preset.light,
        dark: toml_preset.dark,
    })
}

/// Load a preset file. The id is the file stem.
pub fn load_preset(path: &Path) -> Result<ThemePreset> {
    let id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Invalid preset file name: {}", path.display()))?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset file: {}", path.display()))?;
    load_preset_from_str(&content, id)
}

/// Load every `*.toml` preset in `dir`, sorted by file name.
///
/// Files that fail to parse are logged and skipped. A missing directory
/// yields no presets.
pub fn load_presets_dir(dir: &Path) -> Vec<ThemePreset> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut paths: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();

    paths
        .iter()
        .filter_map(|path| match load_preset(path) {
            Ok(preset) => Some(preset),
            Err(e) => {
                folio_logger::warn(format!("Skipping preset {}: {:#}", path.display(), e));
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DUSK: &str = r##"
name = "Dusk"

[dark]
primary = "#ff0000"
secondary = "#00ff00"
accent = "#0000ff"
highlight = "#ffff00"
muted = "#00ffff"
background = "#000000"
foreground = "#ffffff"
card = "rgba(255,255,255,0.02)"
border = "rgba(255,255,255,0.08)"

[light]
primary = "#ff0000"
secondary = "#00ff00"
accent = "#0000ff"
highlight = "#ffff00"
muted = "#00ffff"
background = "#ffffff"
foreground = "#000000"
card = "rgba(255,255,255,0.6)"
border = "rgba(0,0,0,0.08)"
"##;

    #[test]
    fn test_load_from_str() {
        let preset = load_preset_from_str(DUSK, "dusk").unwrap();
        assert_eq!(preset.id, "dusk");
        assert_eq!(preset.name, "Dusk");
        assert_eq!(preset.dark.background.as_str(), "#000000");
        assert_eq!(preset.light.background.as_str(), "#ffffff");
    }

    #[test]
    fn test_missing_mode_is_rejected() {
        let dark_only = DUSK.split("[light]").next().unwrap();
        assert!(load_preset_from_str(dark_only, "dusk").is_err());
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let broken = DUSK.replacen("#ff0000", "#ff00", 1);
        assert!(load_preset_from_str(&broken, "dusk").is_err());
    }

    #[test]
    fn test_load_dir_skips_broken_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b-dusk.toml"), DUSK).unwrap();
        fs::write(dir.path().join("a-broken.toml"), "name = 1").unwrap();
        fs::write(dir.path().join("notes.txt"), DUSK).unwrap();

        let presets = load_presets_dir(dir.path());
        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].id, "b-dusk");
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_presets_dir(&dir.path().join("absent")).is_empty());
    }
}
