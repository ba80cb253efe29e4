//! Detail screen composition
//!
//! [`DetailRouter`] builds a ready-to-run detail screen from its
//! collaborators. Every collaborator is a constructor argument, so a missing
//! one is a compile error instead of a lookup failure at runtime.

use std::sync::Arc;

use favgame_core::{
    CheckIsFavoriteUseCase, DeleteFavoriteGameUseCase, GameId, GetGameDetailUseCase,
    InsertFavoriteGameUseCase,
};
use tracing::info;

use crate::config::Settings;
use crate::engine::Engine;
use crate::notifier::FavoriteNotifier;
use crate::state::AppState;

/// Collaborators of the detail screen
pub struct DetailDependencies<G, C, I, D> {
    pub get_detail: Arc<G>,
    pub check_favorite: Arc<C>,
    pub insert_favorite: Arc<I>,
    pub delete_favorite: Arc<D>,
    pub notifier: Arc<dyn FavoriteNotifier>,
}

impl<G, C, I, D> DetailDependencies<G, C, I, D> {
    pub fn new(
        get_detail: Arc<G>,
        check_favorite: Arc<C>,
        insert_favorite: Arc<I>,
        delete_favorite: Arc<D>,
        notifier: Arc<dyn FavoriteNotifier>,
    ) -> Self {
        Self {
            get_detail,
            check_favorite,
            insert_favorite,
            delete_favorite,
            notifier,
        }
    }
}

// Manual impl: derive would require the use cases themselves to be Clone
impl<G, C, I, D> Clone for DetailDependencies<G, C, I, D> {
    fn clone(&self) -> Self {
        Self {
            get_detail: self.get_detail.clone(),
            check_favorite: self.check_favorite.clone(),
            insert_favorite: self.insert_favorite.clone(),
            delete_favorite: self.delete_favorite.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

/// Factory for detail screens
pub struct DetailRouter<G, C, I, D> {
    deps: DetailDependencies<G, C, I, D>,
}

impl<G, C, I, D> DetailRouter<G, C, I, D>
where
    G: GetGameDetailUseCase + Send + Sync + 'static,
    C: CheckIsFavoriteUseCase + Send + Sync + 'static,
    I: InsertFavoriteGameUseCase + Send + Sync + 'static,
    D: DeleteFavoriteGameUseCase + Send + Sync + 'static,
{
    pub fn new(deps: DetailDependencies<G, C, I, D>) -> Self {
        Self { deps }
    }

    /// Build a detail screen for `game_id`.
    ///
    /// `None` builds a screen in degraded mode: it never calls a use case
    /// that needs an id.
    pub fn make_detail_screen(&self, game_id: Option<GameId>, settings: Settings) -> Engine {
        let mut state = AppState::with_settings(settings);
        if let Some(game_id) = game_id {
            state.configure(game_id);
        }
        info!(
            "Built detail screen for {}",
            game_id.map_or_else(|| "<none>".to_string(), |id| id.to_string())
        );
        Engine::new(state, Arc::new(self.deps.clone()))
    }
}
