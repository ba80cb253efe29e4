//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.has_alert() {
        handle_key_alert(key)
    } else {
        handle_key_normal(key)
    }
}

/// The alert swallows everything but its acknowledgement
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::DismissAlert),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('f') | InputKey::Enter => Some(Message::ToggleFavorite),
        InputKey::Char('r') => Some(Message::ScreenAppeared),

        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        InputKey::Char('q') | InputKey::Esc => Some(Message::Back),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
