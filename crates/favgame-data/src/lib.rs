//! favgame-data - Concrete use-case collaborators
//!
//! Implements the `favgame-core` use-case contracts:
//! - [`RawgClient`] - game detail over the RAWG HTTP API
//! - [`StaticCatalog`] - game detail from memory or a JSON file
//! - [`FavoriteStore`] - check/insert/delete favorites in a JSON file

pub mod catalog;
pub mod favorites;
pub mod rawg;

pub use catalog::StaticCatalog;
pub use favorites::{default_favorites_path, FavoriteStore};
pub use rawg::{RawgClient, DEFAULT_BASE_URL};
