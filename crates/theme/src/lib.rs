//! Theme system for folio.
//!
//! - [`ThemeRegistry`]: built-in presets (embedded TOML) plus user presets
//! - [`palette`]: Coolors URL parsing and custom color set derivation
//! - [`ThemeSession`]: the active preset/palette and mode, with persistence
//! - [`transition`]: immediate or circular-reveal mode changes

mod colors;
pub mod effects;
mod loader;
mod mode;
pub mod palette;
mod registry;
mod session;
pub mod transition;

pub use colors::{ColorSet, Rgba, ThemeColor};
pub use loader::{load_preset, load_preset_from_str, load_presets_dir};
pub use mode::Mode;
pub use palette::{derive_color_set, parse_palette_url, CustomPalette, MIN_PALETTE_CODES};
pub use registry::{ThemePreset, ThemeRegistry, DEFAULT_PRESET_ID};
pub use session::{
    ModeChange, PresetSelection, ThemeSession, ThemeView, CUSTOM_PRESET_ID,
    DEFAULT_MODE_STORAGE_KEY,
};
pub use transition::{
    CellPoint, CircularReveal, MotionEnvironment, TransitionStrategy, Viewport,
    TRANSITION_DURATION,
};
