//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Use-case calls run on tokio tasks. Each task reports back by sending a
//! [`Message`] over the engine's channel, so completions are handled on the
//! update loop in arrival order.

use std::sync::Arc;

use favgame_core::{
    CheckIsFavoriteUseCase, DeleteFavoriteGameUseCase, GetGameDetailUseCase,
    InsertFavoriteGameUseCase,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::router::DetailDependencies;

/// Executes the actions returned by `handler::update`.
///
/// Object-safe so the engine does not carry the use-case type parameters.
pub trait ActionDispatcher: Send + Sync {
    /// Start `action`. Returns the handle of the spawned task, if any.
    fn dispatch(&self, action: UpdateAction, msg_tx: mpsc::Sender<Message>)
        -> Option<JoinHandle<()>>;
}

impl<G, C, I, D> ActionDispatcher for DetailDependencies<G, C, I, D>
where
    G: GetGameDetailUseCase + Send + Sync + 'static,
    C: CheckIsFavoriteUseCase + Send + Sync + 'static,
    I: InsertFavoriteGameUseCase + Send + Sync + 'static,
    D: DeleteFavoriteGameUseCase + Send + Sync + 'static,
{
    fn dispatch(
        &self,
        action: UpdateAction,
        msg_tx: mpsc::Sender<Message>,
    ) -> Option<JoinHandle<()>> {
        match action {
            UpdateAction::FetchGameDetail { epoch, game_id } => {
                let use_case = self.get_detail.clone();
                Some(tokio::spawn(async move {
                    let msg = match use_case.execute(game_id).await {
                        Ok(detail) => Message::GameDetailLoaded {
                            epoch,
                            detail: Box::new(detail),
                        },
                        Err(e) => Message::GameDetailFailed {
                            epoch,
                            error: e.to_string(),
                        },
                    };
                    send_completion(&msg_tx, msg).await;
                }))
            }

            UpdateAction::CheckFavorite { epoch, game_id } => {
                let use_case = self.check_favorite.clone();
                Some(tokio::spawn(async move {
                    let msg = match use_case.execute(game_id).await {
                        Ok(is_favorite) => Message::FavoriteChecked { epoch, is_favorite },
                        Err(e) => Message::FavoriteCheckFailed {
                            epoch,
                            error: e.to_string(),
                        },
                    };
                    send_completion(&msg_tx, msg).await;
                }))
            }

            UpdateAction::InsertFavorite { epoch, game } => {
                let use_case = self.insert_favorite.clone();
                Some(tokio::spawn(async move {
                    let msg = match use_case.execute(game).await {
                        Ok(changed) => Message::FavoriteInserted { epoch, changed },
                        Err(e) => Message::FavoriteInsertFailed {
                            epoch,
                            error: e.to_string(),
                        },
                    };
                    send_completion(&msg_tx, msg).await;
                }))
            }

            UpdateAction::DeleteFavorite { epoch, game_id } => {
                let use_case = self.delete_favorite.clone();
                Some(tokio::spawn(async move {
                    let msg = match use_case.execute(game_id).await {
                        Ok(changed) => Message::FavoriteDeleted { epoch, changed },
                        Err(e) => Message::FavoriteDeleteFailed {
                            epoch,
                            error: e.to_string(),
                        },
                    };
                    send_completion(&msg_tx, msg).await;
                }))
            }

            UpdateAction::NotifyFavoriteChanged => {
                self.notifier.favorite_changed();
                None
            }
        }
    }
}

async fn send_completion(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Screen closed before use case completed");
    }
}

/// Background tasks owned by one screen.
///
/// Dropping the set aborts whatever is still running.
#[derive(Debug, Default)]
pub struct ScreenTasks {
    handles: Vec<JoinHandle<()>>,
}

impl ScreenTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, handle: JoinHandle<()>) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    /// Number of tasks that have not finished yet
    pub fn running(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn abort_all(&mut self) {
        let running = self.running();
        if running > 0 {
            warn!("Aborting {} in-flight use case task(s)", running);
        }
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for ScreenTasks {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

/// Shared handle to a dispatcher
pub type SharedDispatcher = Arc<dyn ActionDispatcher>;
