mod cli;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use cli::CliArgs;
use folio_app::App;
use folio_config::Config;
use folio_portfolio::PortfolioData;
use folio_theme::ThemeRegistry;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config: {:#}. Using defaults.", e);
        Config::default()
    });

    if args.list_themes {
        list_themes();
        return Ok(());
    }

    // Without portfolio data there is nothing to show
    let data_path = match args.data {
        Some(path) => path,
        None => config.data_file_path()?,
    };
    let data = PortfolioData::load(&data_path)?;

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // Kitty protocol reports key releases; only presses are handled
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);

    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, data, args.theme.as_deref());
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    if keyboard_enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // Print error if there was one
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn list_themes() {
    let registry = match Config::get_themes_dir() {
        Ok(dir) => ThemeRegistry::with_user_presets(&dir),
        Err(_) => (*ThemeRegistry::builtin()).clone(),
    };
    for preset in registry.presets() {
        println!("{:<12} {}", preset.id, preset.name);
    }
}
