//! Abstract input key event, independent of terminal library.
//!
//! `favgame-app` never sees crossterm types; the TUI converts its key events
//! into [`InputKey`] at the boundary so the headless runner and tests can
//! drive the same key handling.

/// Abstract input key event, converted from crossterm at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
}
