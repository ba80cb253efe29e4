//! Configuration types for favgame
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::favorite::FailurePolicy;

/// Global settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub favorites: FavoritesSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Catalog API settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Empty means "not configured"
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiSettings {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

fn default_base_url() -> String {
    "https://api.rawg.io/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Favorite store settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FavoritesSettings {
    /// Favorites file; defaults to `<data_local_dir>/favgame/favorites.json`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Revert the favorite icon when an insert/delete does not go through
    #[serde(default = "default_true")]
    pub rollback_on_failure: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            rollback_on_failure: true,
        }
    }
}

impl BehaviorSettings {
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.rollback_on_failure {
            FailurePolicy::Rollback
        } else {
            FailurePolicy::KeepOptimistic
        }
    }
}

fn default_true() -> bool {
    true
}

/// Icon rendering mode.
///
/// Nerd Font glyphs look better but need a patched font in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Rows reserved for the header region of the detail page
    #[serde(default = "default_header_height")]
    pub header_height: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            header_height: default_header_height(),
        }
    }
}

fn default_header_height() -> u16 {
    12
}
