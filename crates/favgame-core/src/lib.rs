//! # favgame-core - Core Domain Types
//!
//! Foundation crate for favgame. Provides the game domain types, error
//! handling, logging setup, and the use-case contracts that the detail
//! screen consumes.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, trait-variant).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`GameId`] - Identifier of a game in the catalog
//! - [`GameDetail`] - Full detail record rendered by the detail screen
//! - [`Game`] - Reduced projection persisted as a favorite
//!
//! ### Use Cases (`use_cases`)
//! - [`GetGameDetailUseCase`] - Fetch the detail for one game
//! - [`CheckIsFavoriteUseCase`] - Ask the favorite store about one game
//! - [`InsertFavoriteGameUseCase`] - Add a game to the favorite store
//! - [`DeleteFavoriteGameUseCase`] - Remove a game from the favorite store
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use favgame_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;
pub mod use_cases;

/// Prelude for common imports used throughout all favgame crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{Game, GameDetail, GameId};
pub use use_cases::{
    CheckIsFavoriteUseCase, DeleteFavoriteGameUseCase, GetGameDetailUseCase,
    InsertFavoriteGameUseCase, LocalCheckIsFavoriteUseCase, LocalDeleteFavoriteGameUseCase,
    LocalGetGameDetailUseCase, LocalInsertFavoriteGameUseCase,
};
