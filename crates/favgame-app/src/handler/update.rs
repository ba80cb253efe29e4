//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::state::AppState;

use super::{detail, keys::handle_key, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    // Completions issued before a re-configure or teardown are dropped
    if let Some(epoch) = message.epoch() {
        if epoch != state.epoch {
            debug!(
                "Ignoring stale completion from epoch {} (current {})",
                epoch, state.epoch
            );
            return UpdateResult::none();
        }
    }

    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Configure { game_id } => detail::handle_configure(state, game_id),

        Message::ScreenLoaded => detail::handle_screen_loaded(state),
        Message::ScreenAppeared => detail::handle_screen_appeared(state),

        Message::Back | Message::Quit => {
            state.teardown();
            UpdateResult::none()
        }

        Message::ToggleFavorite => detail::handle_toggle_favorite(state),

        Message::DismissAlert => {
            state.alert = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Use Case Completions
        // ─────────────────────────────────────────────────────────
        Message::GameDetailLoaded {
            detail: game_detail,
            ..
        } => detail::handle_detail_loaded(state, *game_detail),
        Message::GameDetailFailed { error, .. } => detail::handle_detail_failed(state, error),

        Message::FavoriteChecked { is_favorite, .. } => {
            detail::handle_favorite_checked(state, is_favorite)
        }
        Message::FavoriteCheckFailed { error, .. } => {
            detail::handle_favorite_check_failed(state, error)
        }

        Message::FavoriteInserted { changed, .. } => {
            detail::handle_favorite_toggled(state, "insert", Ok(changed))
        }
        Message::FavoriteInsertFailed { error, .. } => {
            detail::handle_favorite_toggled(state, "insert", Err(error))
        }
        Message::FavoriteDeleted { changed, .. } => {
            detail::handle_favorite_toggled(state, "delete", Ok(changed))
        }
        Message::FavoriteDeleteFailed { error, .. } => {
            detail::handle_favorite_toggled(state, "delete", Err(error))
        }
    }
}
