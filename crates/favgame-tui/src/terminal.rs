//! Terminal setup and restoration

use crossterm::event::{DisableFocusChange, EnableFocusChange};
use favgame_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::execute!(std::io::stdout(), DisableFocusChange);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Ask the terminal to report focus changes
pub fn enable_focus_reporting() -> Result<()> {
    crossterm::execute!(std::io::stdout(), EnableFocusChange)
        .map_err(|e| Error::terminal(format!("Failed to enable focus reporting: {}", e)))
}

pub fn disable_focus_reporting() {
    if let Err(e) = crossterm::execute!(std::io::stdout(), DisableFocusChange) {
        warn!("Failed to disable focus reporting: {}", e);
    }
}
