//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `detail`: Screen lifecycle and use-case completion handlers
//! - `keys`: Key event handlers
//! - `scroll`: Description scroll handlers

pub(crate) mod detail;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;


use favgame_core::{Game, GameId};

use crate::message::Message;
use crate::state::ScreenEpoch;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch the detail for `game_id`
    FetchGameDetail { epoch: ScreenEpoch, game_id: GameId },

    /// Ask the favorite store whether `game_id` is a favorite
    CheckFavorite { epoch: ScreenEpoch, game_id: GameId },

    /// Persist `game` as a favorite
    InsertFavorite { epoch: ScreenEpoch, game: Game },

    /// Remove `game_id` from the favorites
    DeleteFavorite { epoch: ScreenEpoch, game_id: GameId },

    /// Broadcast the "favorite changed" signal to listeners
    NotifyFavoriteChanged,
}

impl UpdateAction {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            UpdateAction::FetchGameDetail { .. } => "fetch_game_detail",
            UpdateAction::CheckFavorite { .. } => "check_favorite",
            UpdateAction::InsertFavorite { .. } => "insert_favorite",
            UpdateAction::DeleteFavorite { .. } => "delete_favorite",
            UpdateAction::NotifyFavoriteChanged => "notify_favorite_changed",
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
