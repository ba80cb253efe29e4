//! Message processing
//!
//! Runs the TEA update loop for one message and hands the resulting
//! actions to the dispatcher.

use tokio::sync::mpsc;
use tracing::trace;

use crate::actions::{ActionDispatcher, ScreenTasks};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    dispatcher: &dyn ActionDispatcher,
    msg_tx: &mpsc::Sender<Message>,
    tasks: &mut ScreenTasks,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            trace!("Dispatching {}", action.name());
            if let Some(handle) = dispatcher.dispatch(action, msg_tx.clone()) {
                tasks.track(handle);
            }
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
