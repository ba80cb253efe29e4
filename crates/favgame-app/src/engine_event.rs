//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use favgame_core::GameDetail;

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// A detail was fetched and is now the page's single item
    DetailLoaded { detail: Box<GameDetail> },

    /// The favorite control changed what it shows
    FavoriteStatus { is_favorite: bool, pending: bool },

    /// A use-case call failed and an alert is visible
    Alert { message: String },

    /// The screen is being torn down
    Shutdown,
}

impl EngineEvent {
    /// Event type name for logging and serialization
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::DetailLoaded { .. } => "detail_loaded",
            EngineEvent::FavoriteStatus { .. } => "favorite_status",
            EngineEvent::Alert { .. } => "alert",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
