//! Configuration file parsing for favgame
//!
//! Supports:
//! - `.favgame/config.toml` - Settings local to the working directory
//! - `<config_dir>/favgame/config.toml` - User-wide settings
//! - `FAVGAME_API_KEY` - Environment override for the catalog API key

pub mod settings;
pub mod types;

pub use settings::{global_config_path, init_config_dir, load_settings, load_settings_from};
pub use types::*;
