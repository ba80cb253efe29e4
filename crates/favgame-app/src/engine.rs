//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the detail screen's state, the message channel, the
//! screen's background tasks and the event broadcaster. Both front ends drive
//! it the same way: feed messages in, read state or subscribe to events.

use tokio::sync::{broadcast, mpsc};
use tracing::info;

use crate::actions::{ScreenTasks, SharedDispatcher};
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    render_generation: u64,
    is_favorite: bool,
    pending: bool,
    alert: Option<String>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            render_generation: state.render_generation,
            is_favorite: state.favorite.is_favorite(),
            pending: state.favorite.is_pending(),
            alert: state.alert.as_ref().map(|a| a.message.clone()),
        }
    }
}

/// Orchestration engine for one detail screen
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin, terminal).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    dispatcher: SharedDispatcher,

    tasks: ScreenTasks,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an engine around `state`, dispatching actions to `dispatcher`
    pub fn new(state: AppState, dispatcher: SharedDispatcher) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            dispatcher,
            tasks: ScreenTasks::new(),
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Show the screen: first load, then first appearance
    pub fn start(&mut self) {
        self.process_message(Message::ScreenLoaded);
        self.process_message(Message::ScreenAppeared);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            self.dispatcher.as_ref(),
            &self.msg_tx,
            &mut self.tasks,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Number of use-case tasks still running
    pub fn in_flight_tasks(&self) -> usize {
        self.tasks.running()
    }

    /// Tear the screen down: abort its tasks and ignore late completions
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        self.state.teardown();
        self.tasks.abort_all();
        info!("Detail screen shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.render_generation != pre.render_generation {
            if let Some(detail) = &self.state.game_detail {
                self.emit(EngineEvent::DetailLoaded {
                    detail: Box::new(detail.clone()),
                });
            }
        }

        if post.is_favorite != pre.is_favorite || post.pending != pre.pending {
            self.emit(EngineEvent::FavoriteStatus {
                is_favorite: post.is_favorite,
                pending: post.pending,
            });
        }

        if post.alert != pre.alert {
            if let Some(message) = &post.alert {
                self.emit(EngineEvent::Alert {
                    message: message.clone(),
                });
            }
        }
    }

    /// Broadcast an event to all subscribers (ignores send errors when no subscribers).
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
