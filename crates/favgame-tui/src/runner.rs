//! Main TUI runner - entry point and event loop

use favgame_app::signals;
use favgame_app::Engine;
use favgame_core::prelude::*;

use super::{event, render, terminal};

/// Run the detail screen in the terminal until the user leaves it
pub async fn run(mut engine: Engine) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_focus_reporting() {
        warn!("{}", e);
    }

    signals::spawn_signal_handler(engine.msg_sender());

    engine.start();
    let result = run_loop(&mut term, &mut engine).await;

    engine.shutdown();

    terminal::disable_focus_reporting();
    ratatui::restore();

    result
}

/// Main event loop
async fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Use case completions and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }

        // Let use-case tasks run on single-threaded runtimes
        tokio::task::yield_now().await;
    }

    Ok(())
}
