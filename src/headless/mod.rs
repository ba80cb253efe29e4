//! Headless mode - JSON event output for scripting and E2E testing
//!
//! Runs the detail screen without a terminal and writes structured events to
//! stdout instead of drawing.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"detail_loaded","game_id":3328,"name":"The Witcher 3: Wild Hunt","released":"2015-05-18","rating":4.66,"timestamp":1704700001000}
//! {"event":"favorite_status","is_favorite":false,"pending":false,"timestamp":1704700001020}
//! {"event":"favorite_status","is_favorite":true,"pending":true,"timestamp":1704700002000}
//! {"event":"favorite_changed","timestamp":1704700002015}
//! ```

pub mod runner;

pub use runner::run_headless;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use favgame_app::EngineEvent;
use favgame_core::GameDetail;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The detail was fetched and rendered
    DetailLoaded {
        game_id: u64,
        name: String,
        released: Option<String>,
        rating: f64,
        timestamp: i64,
    },

    /// The favorite control changed what it shows
    FavoriteStatus {
        is_favorite: bool,
        pending: bool,
        timestamp: i64,
    },

    /// The "favorite changed" signal went out
    FavoriteChanged { timestamp: i64 },

    /// A use case failed and the screen shows an alert
    Alert { message: String, timestamp: i64 },

    /// Startup failed before the screen could run
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn detail_loaded(detail: &GameDetail) -> Self {
        Self::DetailLoaded {
            game_id: detail.id.get(),
            name: detail.name.clone(),
            released: detail.released.map(|date| date.to_string()),
            rating: detail.rating,
            timestamp: Self::now(),
        }
    }

    pub fn favorite_status(is_favorite: bool, pending: bool) -> Self {
        Self::FavoriteStatus {
            is_favorite,
            pending,
            timestamp: Self::now(),
        }
    }

    pub fn favorite_changed() -> Self {
        Self::FavoriteChanged {
            timestamp: Self::now(),
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self::Alert {
            message: message.into(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Map an engine event to its headless line; `Shutdown` has none
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::DetailLoaded { detail } => Some(Self::detail_loaded(detail)),
            EngineEvent::FavoriteStatus {
                is_favorite,
                pending,
            } => Some(Self::favorite_status(*is_favorite, *pending)),
            EngineEvent::Alert { message } => Some(Self::alert(message.clone())),
            EngineEvent::Shutdown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use favgame_core::GameId;

    #[test]
    fn test_detail_loaded_serialization() {
        let mut detail = GameDetail::new(GameId::new(3328), "The Witcher 3: Wild Hunt");
        detail.released = NaiveDate::from_ymd_opt(2015, 5, 18);
        detail.rating = 4.5;

        let json = serde_json::to_string(&HeadlessEvent::detail_loaded(&detail)).unwrap();

        assert!(json.contains(r#""event":"detail_loaded""#));
        assert!(json.contains(r#""game_id":3328"#));
        assert!(json.contains(r#""released":"2015-05-18""#));
        assert!(json.contains(r#""rating":4.5"#));
        assert!(json.contains(r#""timestamp":"#));
    }

    #[test]
    fn test_favorite_status_serialization() {
        let json = serde_json::to_string(&HeadlessEvent::favorite_status(true, true)).unwrap();

        assert!(json.contains(r#""event":"favorite_status""#));
        assert!(json.contains(r#""is_favorite":true"#));
        assert!(json.contains(r#""pending":true"#));
    }

    #[test]
    fn test_favorite_changed_serialization() {
        let json = serde_json::to_string(&HeadlessEvent::favorite_changed()).unwrap();
        assert!(json.starts_with(r#"{"event":"favorite_changed","timestamp":"#));
    }

    #[test]
    fn test_engine_event_mapping() {
        let alert = HeadlessEvent::from_engine_event(&EngineEvent::Alert {
            message: "disk full".to_string(),
        });
        assert!(matches!(
            alert,
            Some(HeadlessEvent::Alert { ref message, .. }) if message == "disk full"
        ));

        assert!(HeadlessEvent::from_engine_event(&EngineEvent::Shutdown).is_none());
    }

    #[test]
    fn test_timestamp_is_current() {
        let before = Utc::now().timestamp_millis();
        let event = HeadlessEvent::favorite_changed();
        let after = Utc::now().timestamp_millis();

        match event {
            HeadlessEvent::FavoriteChanged { timestamp } => {
                assert!(timestamp >= before && timestamp <= after);
            }
            _ => panic!("Expected FavoriteChanged"),
        }
    }
}
