//! favgame - Terminal game detail viewer with persistent favorites
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use favgame::headless::HeadlessEvent;
use favgame::{build_detail_screen, run_headless, LaunchOptions};
use favgame_app::config::{global_config_path, init_config_dir, load_settings};
use favgame_core::prelude::*;
use favgame_core::GameId;

/// favgame - Show one game's details and keep it in your favorites
#[derive(Parser, Debug)]
#[command(name = "favgame")]
#[command(about = "Terminal game detail viewer with persistent favorites", long_about = None)]
struct Args {
    /// Catalog id of the game to show
    #[arg(value_name = "GAME_ID")]
    game_id: Option<u64>,

    /// Read game details from a JSON file instead of the RAWG API
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Favorites file to use
    #[arg(long, value_name = "FILE")]
    favorites: Option<PathBuf>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// In headless mode, toggle the favorite once and exit
    #[arg(long, requires = "headless")]
    toggle: bool,

    /// Keep the favorite icon flipped when saving fails
    #[arg(long)]
    legacy_toggle: bool,

    /// Write a default config.toml and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let Some(dir) = global_config_path().and_then(|path| path.parent().map(PathBuf::from))
        else {
            eprintln!("No user config directory on this platform");
            std::process::exit(1);
        };
        let path = init_config_dir(&dir)?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    // Logs go to a file, since the TUI owns the terminal
    favgame_core::logging::init()?;
    info!("favgame starting");

    let working_dir = std::env::current_dir()?;
    let mut settings = load_settings(&working_dir);

    let options = LaunchOptions {
        game_id: args.game_id.map(GameId::new),
        catalog: args.catalog,
        favorites: args.favorites,
        legacy_toggle: args.legacy_toggle,
    };
    options.apply(&mut settings);

    let screen = match build_detail_screen(&options, settings) {
        Ok(screen) => screen,
        Err(e) => {
            error!("Failed to build detail screen: {}", e);
            if args.headless {
                HeadlessEvent::error(e.to_string(), true).emit();
            }
            return Err(e.into());
        }
    };

    let result = if args.headless {
        run_headless(screen, args.toggle).await
    } else {
        favgame_tui::run(screen.engine).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        eprintln!(
            "Details in {}",
            favgame_core::logging::get_current_log_file().display()
        );
    }
    Ok(result?)
}
