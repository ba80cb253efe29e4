//! Detail screen handlers
//!
//! Screen lifecycle (load, appear), the favorite toggle, and the completions
//! of the four use-case calls.

use favgame_core::{Game, GameDetail, GameId};
use tracing::{debug, error, info, warn};

use crate::favorite::{Resolution, ToggleOutcome};
use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Point the screen at `game_id`.
///
/// A screen that is already showing another game loads the new one right
/// away instead of waiting for a first appearance that has already passed.
pub fn handle_configure(state: &mut AppState, game_id: GameId) -> UpdateResult {
    let was_shown = state.has_loaded;
    state.configure(game_id);
    if !was_shown || state.has_loaded {
        return UpdateResult::none();
    }

    info!("Detail screen switched to game {}", game_id);
    let mut result = handle_screen_loaded(state);
    result.message = Some(Message::ScreenAppeared);
    result
}

/// First appearance: fetch the detail once
pub fn handle_screen_loaded(state: &mut AppState) -> UpdateResult {
    if state.has_loaded {
        return UpdateResult::none();
    }
    state.has_loaded = true;

    let Some(game_id) = state.game_id else {
        debug!("No game id configured, skipping detail fetch");
        return UpdateResult::none();
    };

    state.in_flight.detail = true;
    UpdateResult::action(UpdateAction::FetchGameDetail {
        epoch: state.epoch,
        game_id,
    })
}

/// Every appearance: re-check the favorite status
pub fn handle_screen_appeared(state: &mut AppState) -> UpdateResult {
    let Some(game_id) = state.game_id else {
        debug!("No game id configured, skipping favorite check");
        return UpdateResult::none();
    };

    state.in_flight.favorite_check = true;
    UpdateResult::action(UpdateAction::CheckFavorite {
        epoch: state.epoch,
        game_id,
    })
}

pub fn handle_detail_loaded(state: &mut AppState, detail: GameDetail) -> UpdateResult {
    info!("Loaded detail for {} ({})", detail.name, detail.id);
    state.in_flight.detail = false;
    state.game_detail = Some(detail);
    state.description_scroll.reset();
    state.render_generation = state.render_generation.wrapping_add(1);
    UpdateResult::none()
}

pub fn handle_detail_failed(state: &mut AppState, error: String) -> UpdateResult {
    error!("Fetching game detail failed: {}", error);
    state.in_flight.detail = false;
    state.show_alert(error);
    UpdateResult::none()
}

pub fn handle_favorite_checked(state: &mut AppState, is_favorite: bool) -> UpdateResult {
    debug!("Favorite status: {}", is_favorite);
    state.in_flight.favorite_check = false;
    state.favorite.refresh(is_favorite);
    UpdateResult::none()
}

pub fn handle_favorite_check_failed(state: &mut AppState, error: String) -> UpdateResult {
    error!("Checking favorite status failed: {}", error);
    state.in_flight.favorite_check = false;
    state.show_alert(error);
    UpdateResult::none()
}

/// Flip the favorite control and issue the matching insert/delete
pub fn handle_toggle_favorite(state: &mut AppState) -> UpdateResult {
    if state.favorite.is_pending() {
        debug!("Favorite toggle already pending, ignoring");
        return UpdateResult::none();
    }

    let action = if state.favorite.is_favorite() {
        let Some(game_id) = state.game_id else {
            debug!("No game id configured, ignoring favorite toggle");
            return UpdateResult::none();
        };
        UpdateAction::DeleteFavorite {
            epoch: state.epoch,
            game_id,
        }
    } else {
        let Some(detail) = state.game_detail.as_ref() else {
            debug!("Detail not loaded yet, ignoring favorite toggle");
            return UpdateResult::none();
        };
        UpdateAction::InsertFavorite {
            epoch: state.epoch,
            game: Game::from(detail),
        }
    };

    state.favorite.begin();
    UpdateResult::action(action)
}

/// Settle the pending toggle with an insert/delete answer
pub fn handle_favorite_toggled(
    state: &mut AppState,
    operation: &str,
    result: Result<bool, String>,
) -> UpdateResult {
    let outcome = match &result {
        Ok(changed) => ToggleOutcome::from_payload(*changed),
        Err(_) => ToggleOutcome::Failed,
    };

    match state.favorite.resolve(outcome, state.failure_policy()) {
        Resolution::Confirmed { is_favorite } => {
            info!("Favorite {} confirmed, favorite={}", operation, is_favorite)
        }
        Resolution::RolledBack { is_favorite } => {
            warn!("Favorite {} not applied, rolled back to favorite={}", operation, is_favorite)
        }
        Resolution::Kept { is_favorite } => {
            warn!("Favorite {} not applied, keeping favorite={}", operation, is_favorite)
        }
        Resolution::Ignored => debug!("Favorite {} answered with no toggle pending", operation),
    }

    match result {
        Ok(true) => UpdateResult::action(UpdateAction::NotifyFavoriteChanged),
        Ok(false) => UpdateResult::none(),
        Err(error) => {
            error!("Favorite {} failed: {}", operation, error);
            state.show_alert(error);
            UpdateResult::none()
        }
    }
}
