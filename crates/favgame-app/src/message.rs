//! Message types for the application (TEA pattern)

use favgame_core::{GameDetail, GameId};

use crate::input_key::InputKey;
use crate::state::ScreenEpoch;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the terminal or stdin
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Set the game shown by the screen (overwrites any previous id)
    Configure { game_id: GameId },

    /// Screen was shown for the first time
    ScreenLoaded,

    /// Screen became visible (first time or returning to it)
    ScreenAppeared,

    /// Leave the screen; tears it down and quits
    Back,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // User Input
    // ─────────────────────────────────────────────────────────
    /// Favorite control activated
    ToggleFavorite,
    /// Acknowledge the visible alert
    DismissAlert,
    /// Scroll description up one line
    ScrollUp,
    /// Scroll description down one line
    ScrollDown,
    /// Scroll description to the top
    ScrollToTop,
    /// Scroll description to the bottom
    ScrollToBottom,
    /// Page up in description
    PageUp,
    /// Page down in description
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Use Case Completions
    // ─────────────────────────────────────────────────────────
    /// Detail fetch succeeded
    GameDetailLoaded {
        epoch: ScreenEpoch,
        detail: Box<GameDetail>,
    },
    /// Detail fetch failed
    GameDetailFailed { epoch: ScreenEpoch, error: String },

    /// Favorite status check succeeded
    FavoriteChecked {
        epoch: ScreenEpoch,
        is_favorite: bool,
    },
    /// Favorite status check failed
    FavoriteCheckFailed { epoch: ScreenEpoch, error: String },

    /// Insert favorite answered; `changed` is the use case payload
    FavoriteInserted { epoch: ScreenEpoch, changed: bool },
    /// Insert favorite failed
    FavoriteInsertFailed { epoch: ScreenEpoch, error: String },

    /// Delete favorite answered; `changed` is the use case payload
    FavoriteDeleted { epoch: ScreenEpoch, changed: bool },
    /// Delete favorite failed
    FavoriteDeleteFailed { epoch: ScreenEpoch, error: String },
}

impl Message {
    /// Epoch carried by use-case completions, `None` for everything else
    pub fn epoch(&self) -> Option<ScreenEpoch> {
        match self {
            Message::GameDetailLoaded { epoch, .. }
            | Message::GameDetailFailed { epoch, .. }
            | Message::FavoriteChecked { epoch, .. }
            | Message::FavoriteCheckFailed { epoch, .. }
            | Message::FavoriteInserted { epoch, .. }
            | Message::FavoriteInsertFailed { epoch, .. }
            | Message::FavoriteDeleted { epoch, .. }
            | Message::FavoriteDeleteFailed { epoch, .. } => Some(*epoch),
            _ => None,
        }
    }
}
