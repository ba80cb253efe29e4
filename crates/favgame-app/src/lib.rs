//! favgame-app - Detail screen state and orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the game
//! detail screen: state, messages, the update function, background use-case
//! dispatch, the Engine shared by the TUI and headless runners, configuration
//! loading and the router that composes a screen from its collaborators.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod favorite;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifier;
pub mod process;
pub mod router;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::{ActionDispatcher, ScreenTasks};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use favorite::{FailurePolicy, FavoriteToggle};
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use notifier::{FavoriteBus, FavoriteEvent, FavoriteNotifier};
pub use router::{DetailDependencies, DetailRouter};
pub use state::{AlertState, AppState, ScreenEpoch};
