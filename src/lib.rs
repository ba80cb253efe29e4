//! favgame Library
//!
//! Composition of the game detail screen for the `favgame` binary, and the
//! headless NDJSON runner.

pub mod headless;
pub mod launch;

pub use headless::run_headless;
pub use launch::{build_detail_screen, make_screen, DetailScreen, LaunchOptions};
