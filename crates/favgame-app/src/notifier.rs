//! "Favorite changed" signal
//!
//! The detail screen tells other parts of the application that the set of
//! favorites changed through [`FavoriteNotifier`]. [`FavoriteBus`] is the
//! default implementation: a tokio broadcast channel that listeners subscribe
//! to when the application is composed.

use tokio::sync::broadcast;
use tracing::debug;

/// Observer interface for the "favorite changed" signal
#[cfg_attr(test, mockall::automock)]
pub trait FavoriteNotifier: Send + Sync {
    fn favorite_changed(&self);
}

/// Event delivered to [`FavoriteBus`] subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteEvent {
    Changed,
}

/// Broadcast implementation of [`FavoriteNotifier`]
#[derive(Debug, Clone)]
pub struct FavoriteBus {
    tx: broadcast::Sender<FavoriteEvent>,
}

impl FavoriteBus {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Receive every signal sent after this call
    pub fn subscribe(&self) -> broadcast::Receiver<FavoriteEvent> {
        self.tx.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for FavoriteBus {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoriteNotifier for FavoriteBus {
    fn favorite_changed(&self) {
        if self.tx.send(FavoriteEvent::Changed).is_err() {
            debug!("Favorite changed, no listeners subscribed");
        }
    }
}
