//! Folio - terminal-based personal portfolio viewer.
//!
//! Renders a scroll-synchronized two-column portfolio in the terminal: a
//! profile sidebar whose navigation follows the section currently in view,
//! and a scrollable content column with a cursor-following glow effect.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use ratatui::layout::Rect;

use folio::config::{Config, ThemeMode};
use folio::constants::APP_NAME;
use folio::tui;

/// Theme selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    /// Follow the OS dark/light setting
    Auto,
    /// Always dark
    Dark,
    /// Always light
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => Self::Auto,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

/// Folio - terminal-based personal portfolio viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Theme override for this session
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Disable the cursor glow effect
    #[arg(long)]
    no_glow: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{APP_NAME}: failed to load config, using defaults: {e:#}");
            Config::default()
        }
    };
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme.into();
    }
    if cli.no_glow {
        config.ui.cursor_glow = false;
    }

    let mut terminal = tui::setup_terminal()?;
    let size = terminal.size()?;
    let mut state = tui::AppState::new(config, Rect::new(0, 0, size.width, size.height));

    let result = tui::run_tui(&mut state, &mut terminal);

    // Release observers and restore the terminal on every exit path before
    // surfacing any loop error.
    state.teardown();
    tui::restore_terminal(terminal)?;
    result?;

    Ok(())
}
