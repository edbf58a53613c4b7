//! The active theme: which preset or custom palette, which mode.
//!
//! [`ThemeSession`] is the only holder of theme state. Renderers get a
//! [`ThemeView`] snapshot; only the owner of the session can change it.

use std::sync::Arc;
use std::time::Instant;

use folio_storage::KeyValueStore;

use crate::palette::CustomPalette;
use crate::transition::{CellPoint, MotionEnvironment, TransitionStrategy};
use crate::{ColorSet, Mode, ThemeRegistry};

/// Preset id reported while a custom palette is installed.
pub const CUSTOM_PRESET_ID: &str = "custom";

/// Storage key for the persisted mode.
pub const DEFAULT_MODE_STORAGE_KEY: &str = "portfolio-mode";

/// Source of the active colors. A custom palette and a preset are
/// mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum PresetSelection {
    Preset(String),
    Custom(CustomPalette),
}

/// Read-only snapshot handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeView {
    pub colors: ColorSet,
    pub mode: Mode,
    pub preset_id: String,
}

/// Result of a mode change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeChange {
    pub previous: Mode,
    pub current: Mode,
    pub strategy: TransitionStrategy,
}

/// Theme state for one run of the application.
pub struct ThemeSession {
    registry: Arc<ThemeRegistry>,
    store: Box<dyn KeyValueStore>,
    storage_key: String,
    selection: PresetSelection,
    mode: Mode,
}

impl ThemeSession {
    /// Start a session, reading the persisted mode once.
    ///
    /// An unknown `initial_preset` falls back to the registry default; a
    /// missing or unreadable stored mode falls back to [`Mode::Dark`].
    pub fn restore(
        registry: Arc<ThemeRegistry>,
        store: Box<dyn KeyValueStore>,
        storage_key: impl Into<String>,
        initial_preset: &str,
    ) -> Self {
        let storage_key = storage_key.into();
        let mode = store
            .get(&storage_key)
            .and_then(|value| value.parse::<Mode>().ok())
            .unwrap_or_default();
        let preset_id = registry.resolve_id(initial_preset).to_string();

        if preset_id != initial_preset {
            folio_logger::warn(format!(
                "Unknown preset '{}', using '{}'",
                initial_preset, preset_id
            ));
        }
        folio_logger::debug(format!("Theme session: preset={} mode={}", preset_id, mode));

        Self {
            registry,
            store,
            storage_key,
            selection: PresetSelection::Preset(preset_id),
            mode,
        }
    }

    /// Colors for the current selection and mode, derived on every call.
    pub fn colors(&self) -> ColorSet {
        match &self.selection {
            PresetSelection::Custom(palette) => palette.colors(self.mode).clone(),
            PresetSelection::Preset(id) => {
                let preset = self
                    .registry
                    .get(id)
                    .unwrap_or_else(|| self.registry.default_preset());
                preset.colors(self.mode).clone()
            }
        }
    }

    /// Active preset id, or [`CUSTOM_PRESET_ID`].
    pub fn preset_id(&self) -> &str {
        match &self.selection {
            PresetSelection::Preset(id) => id,
            PresetSelection::Custom(_) => CUSTOM_PRESET_ID,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selection(&self) -> &PresetSelection {
        &self.selection
    }

    pub fn custom_palette(&self) -> Option<&CustomPalette> {
        match &self.selection {
            PresetSelection::Custom(palette) => Some(palette),
            PresetSelection::Preset(_) => None,
        }
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn view(&self) -> ThemeView {
        ThemeView {
            colors: self.colors(),
            mode: self.mode,
            preset_id: self.preset_id().to_string(),
        }
    }

    /// Switch to a registry preset, discarding any custom palette.
    ///
    /// Unknown ids leave the session untouched and return `false`.
    pub fn select_preset(&mut self, id: &str) -> bool {
        if !self.registry.contains(id) {
            folio_logger::debug(format!("Ignoring unknown preset '{}'", id));
            return false;
        }
        self.selection = PresetSelection::Preset(id.to_string());
        folio_logger::info(format!("Preset selected: {}", id));
        true
    }

    /// Select the preset at `index` in registry order.
    pub fn select_preset_at(&mut self, index: usize) -> bool {
        let id = match self.registry.presets().get(index) {
            Some(preset) => preset.id.clone(),
            None => return false,
        };
        self.select_preset(&id)
    }

    /// Move `step` presets forward (or back) in registry order, wrapping.
    ///
    /// From a custom palette the walk starts at the default preset.
    pub fn cycle_preset(&mut self, step: isize) -> bool {
        let len = self.registry.len() as isize;
        if len == 0 {
            return false;
        }
        let current = match &self.selection {
            PresetSelection::Preset(id) => self.registry.position(id),
            PresetSelection::Custom(_) => None,
        };
        let next = match current {
            Some(i) => (i as isize + step).rem_euclid(len),
            None => self
                .registry
                .position(&self.registry.default_preset().id)
                .unwrap_or(0) as isize,
        };
        self.select_preset_at(next as usize)
    }

    /// Change mode, persist it, and pick how the change is shown.
    ///
    /// State and storage are updated before the strategy is returned, so the
    /// first frame of an animated reveal already draws the new mode.
    pub fn set_mode(
        &mut self,
        mode: Mode,
        origin: Option<CellPoint>,
        env: &MotionEnvironment,
    ) -> ModeChange {
        let previous = self.mode;

        if let Err(e) = self.store.set(&self.storage_key, mode.as_str()) {
            folio_logger::warn(format!("Failed to persist mode: {:#}", e));
        }
        self.mode = mode;

        let strategy = TransitionStrategy::choose(origin, env, Instant::now());
        folio_logger::debug(format!(
            "Mode {} -> {} ({})",
            previous,
            mode,
            if strategy.is_animated() {
                "animated"
            } else {
                "immediate"
            }
        ));

        ModeChange {
            previous,
            current: mode,
            strategy,
        }
    }

    pub fn toggle_mode(
        &mut self,
        origin: Option<CellPoint>,
        env: &MotionEnvironment,
    ) -> ModeChange {
        self.set_mode(self.mode.toggled(), origin, env)
    }

    /// Install a palette from a Coolors URL.
    ///
    /// URLs with fewer than five codes are ignored and return `false`.
    pub fn install_custom_palette(&mut self, source_url: &str) -> bool {
        match CustomPalette::from_url(source_url) {
            Some(palette) => {
                folio_logger::info(format!(
                    "Custom palette installed: {}",
                    palette.codes().join(" ")
                ));
                self.selection = PresetSelection::Custom(palette);
                true
            }
            None => {
                folio_logger::debug(format!("Ignoring palette URL '{}'", source_url));
                false
            }
        }
    }

    /// Give back the store, e.g. to start a fresh session over it.
    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }
}
