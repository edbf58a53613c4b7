//! Command line interface.

use clap::Parser;
use std::path::PathBuf;

/// folio CLI arguments
///
/// Examples:
///   folio                          # Portfolio from the config directory
///   folio --data ./data.json       # Portfolio from a file
///   folio --theme forest           # Start with the forest preset
///   folio --list-themes            # Print available presets
#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(
    name = "folio",
    version,
    about = "Themeable personal portfolio rendered in the terminal"
)]
pub struct CliArgs {
    /// Portfolio data file (JSON)
    #[clap(long = "data", short = 'd')]
    pub data: Option<PathBuf>,

    /// Preset to start with, overriding config and data file
    #[clap(long = "theme", short = 't')]
    pub theme: Option<String>,

    /// Print preset ids and names, then exit
    #[clap(long = "list-themes")]
    pub list_themes: bool,
}
