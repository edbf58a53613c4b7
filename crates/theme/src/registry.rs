//! Catalog of named presets.

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::loader;
use crate::palette::derive_color_set;
use crate::{ColorSet, Mode, CUSTOM_PRESET_ID};

/// Preset used when no id, or an unknown id, is supplied.
pub const DEFAULT_PRESET_ID: &str = "ocean";

// Embed preset files at compile time
const PRESET_OCEAN_TOML: &str = include_str!("../themes/ocean.toml");
const PRESET_MIDNIGHT_TOML: &str = include_str!("../themes/midnight.toml");
const PRESET_SUNSET_TOML: &str = include_str!("../themes/sunset.toml");
const PRESET_FOREST_TOML: &str = include_str!("../themes/forest.toml");
const PRESET_ROSE_TOML: &str = include_str!("../themes/rose.toml");
const PRESET_MONOCHROME_TOML: &str = include_str!("../themes/monochrome.toml");

/// Built-in presets in display order.
const BUILTIN_PRESETS: &[(&str, &str)] = &[
    ("ocean", PRESET_OCEAN_TOML),
    ("midnight", PRESET_MIDNIGHT_TOML),
    ("sunset", PRESET_SUNSET_TOML),
    ("forest", PRESET_FOREST_TOML),
    ("rose", PRESET_ROSE_TOML),
    ("monochrome", PRESET_MONOCHROME_TOML),
];

static BUILTIN: OnceLock<Arc<ThemeRegistry>> = OnceLock::new();

/// A named pair of light and dark color sets.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemePreset {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    pub light: ColorSet,
    pub dark: ColorSet,
}

impl ThemePreset {
    pub fn colors(&self, mode: Mode) -> &ColorSet {
        match mode {
            Mode::Dark => &self.dark,
            Mode::Light => &self.light,
        }
    }
}

/// Hardcoded fallback in case an embedded preset fails to parse.
fn fallback_preset(id: &str) -> ThemePreset {
    let none: [&str; 0] = [];
    ThemePreset {
        id: id.to_string(),
        name: id.to_string(),
        light: derive_color_set(&none, false),
        dark: derive_color_set(&none, true),
    }
}

/// Ordered, read-only mapping from preset id to preset.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    presets: Vec<ThemePreset>,
    index: HashMap<String, usize>,
}

impl ThemeRegistry {
    /// Build a registry. Ids must be unique, must not be
    /// [`CUSTOM_PRESET_ID`], and the list must be non-empty.
    pub fn from_presets(presets: Vec<ThemePreset>) -> Result<Self> {
        if presets.is_empty() {
            bail!("A theme registry needs at least one preset");
        }

        let mut index = HashMap::with_capacity(presets.len());
        for (i, preset) in presets.iter().enumerate() {
            if preset.id == CUSTOM_PRESET_ID {
                bail!("Preset id '{}' is reserved for custom palettes", preset.id);
            }
            if index.insert(preset.id.clone(), i).is_some() {
                bail!("Duplicate preset id '{}'", preset.id);
            }
        }

        Ok(Self { presets, index })
    }

    /// Process-wide registry of the built-in presets.
    pub fn builtin() -> Arc<ThemeRegistry> {
        BUILTIN
            .get_or_init(|| Arc::new(Self::load_builtin()))
            .clone()
    }

    fn load_builtin() -> Self {
        let presets: Vec<ThemePreset> = BUILTIN_PRESETS
            .iter()
            .map(|(id, content)| match loader::load_preset_from_str(content, id) {
                Ok(preset) => preset,
                Err(e) => {
                    folio_logger::error(format!(
                        "Failed to parse built-in preset '{}': {:#}. Using fallback.",
                        id, e
                    ));
                    fallback_preset(id)
                }
            })
            .collect();

        let index = presets
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self { presets, index }
    }

    /// Built-in presets followed by user presets found in `dir`.
    ///
    /// User presets whose id collides with an existing one, or with
    /// [`CUSTOM_PRESET_ID`], are skipped.
    pub fn with_user_presets(dir: &Path) -> Self {
        let mut registry = (*Self::builtin()).clone();

        for preset in loader::load_presets_dir(dir) {
            if preset.id == CUSTOM_PRESET_ID {
                folio_logger::warn(format!(
                    "User preset '{}' uses the custom palette id, skipped",
                    preset.id
                ));
                continue;
            }
            if registry.contains(&preset.id) {
                folio_logger::warn(format!(
                    "User preset '{}' shadows an existing preset, skipped",
                    preset.id
                ));
                continue;
            }
            folio_logger::info(format!("Loaded user preset '{}'", preset.id));
            registry.index.insert(preset.id.clone(), registry.presets.len());
            registry.presets.push(preset);
        }

        registry
    }

    /// Look up a preset. Unknown ids yield `None`.
    pub fn get(&self, id: &str) -> Option<&ThemePreset> {
        self.index.get(id).map(|&i| &self.presets[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Preset ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.presets.iter().map(|p| p.id.as_str())
    }

    pub fn list_preset_ids(&self) -> Vec<&str> {
        self.ids().collect()
    }

    /// Presets in declaration order.
    pub fn presets(&self) -> &[ThemePreset] {
        &self.presets
    }

    /// Position of `id` in declaration order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// [`DEFAULT_PRESET_ID`] if present, otherwise the first preset.
    pub fn default_preset(&self) -> &ThemePreset {
        self.get(DEFAULT_PRESET_ID).unwrap_or(&self.presets[0])
    }

    /// `id` if known, otherwise the default preset's id.
    pub fn resolve_id<'a>(&'a self, id: &str) -> &'a str {
        match self.get(id) {
            Some(preset) => &preset.id,
            None => &self.default_preset().id,
        }
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
