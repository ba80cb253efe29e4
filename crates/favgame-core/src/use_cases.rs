//! Use-case contracts consumed by the detail screen
//!
//! Each trait encapsulates one business operation and its asynchronous
//! execution. The screen never sees how a use case fetches or persists data;
//! `favgame-data` provides the concrete implementations.
//!
//! Every contract comes in two flavors generated by `trait_variant`: the
//! `Local*` trait with plain `async fn`s, and the `Send` variant whose futures
//! can be moved onto tokio worker tasks. Implement the `Send` variant.

use crate::error::Result;
use crate::types::{Game, GameDetail, GameId};

/// Fetch the full detail for one game
#[trait_variant::make(GetGameDetailUseCase: Send)]
pub trait LocalGetGameDetailUseCase {
    async fn execute(&self, game_id: GameId) -> Result<GameDetail>;
}

/// Report whether a game is currently stored as a favorite
#[trait_variant::make(CheckIsFavoriteUseCase: Send)]
pub trait LocalCheckIsFavoriteUseCase {
    async fn execute(&self, game_id: GameId) -> Result<bool>;
}

/// Store a game as a favorite.
///
/// Resolves to `true` when the favorite store changed.
#[trait_variant::make(InsertFavoriteGameUseCase: Send)]
pub trait LocalInsertFavoriteGameUseCase {
    async fn execute(&self, game: Game) -> Result<bool>;
}

/// Remove a game from the favorites.
///
/// Resolves to `true` when the favorite store changed.
#[trait_variant::make(DeleteFavoriteGameUseCase: Send)]
pub trait LocalDeleteFavoriteGameUseCase {
    async fn execute(&self, game_id: GameId) -> Result<bool>;
}
