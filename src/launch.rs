//! Detail screen assembly for one run
//!
//! Picks the concrete collaborators (static catalog or RAWG client, the
//! favorites file) and hands them to a [`DetailRouter`].

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use favgame_app::config::Settings;
use favgame_app::{DetailDependencies, DetailRouter, Engine, FavoriteBus};
use favgame_core::prelude::*;
use favgame_core::{GameId, GetGameDetailUseCase};
use favgame_data::{default_favorites_path, FavoriteStore, RawgClient, StaticCatalog};

/// What the command line asked for
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub game_id: Option<GameId>,

    /// Serve details from this JSON file instead of the RAWG API
    pub catalog: Option<PathBuf>,

    /// Favorites file, overriding `[favorites] path`
    pub favorites: Option<PathBuf>,

    /// Keep the optimistic favorite state when a save fails
    pub legacy_toggle: bool,
}

impl LaunchOptions {
    /// Fold command-line overrides into the loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if self.legacy_toggle {
            settings.behavior.rollback_on_failure = false;
        }
        if let Some(path) = &self.favorites {
            settings.favorites.path = Some(path.clone());
        }
    }
}

/// A built screen plus the bus its favorite signal goes out on
pub struct DetailScreen {
    pub engine: Engine,
    pub bus: FavoriteBus,
}

/// Build the detail screen described by `options` and `settings`
pub fn build_detail_screen(options: &LaunchOptions, settings: Settings) -> Result<DetailScreen> {
    let favorites_path = settings
        .favorites
        .path
        .clone()
        .unwrap_or_else(default_favorites_path);
    let store = Arc::new(FavoriteStore::open(favorites_path)?);
    let bus = FavoriteBus::new();

    let engine = match &options.catalog {
        Some(path) => {
            let catalog = Arc::new(StaticCatalog::load(path)?);
            make_screen(catalog, store, &bus, options.game_id, settings)
        }
        None => {
            let client = Arc::new(RawgClient::new(
                &settings.api.base_url,
                settings.api.api_key.clone(),
                Duration::from_secs(settings.api.timeout_secs),
            )?);
            make_screen(client, store, &bus, options.game_id, settings)
        }
    };

    Ok(DetailScreen { engine, bus })
}

/// Wire one detail source and the favorite store into a screen
pub fn make_screen<G>(
    get_detail: Arc<G>,
    store: Arc<FavoriteStore>,
    bus: &FavoriteBus,
    game_id: Option<GameId>,
    settings: Settings,
) -> Engine
where
    G: GetGameDetailUseCase + Send + Sync + 'static,
{
    let deps = DetailDependencies::new(
        get_detail,
        store.clone(),
        store.clone(),
        store,
        Arc::new(bus.clone()),
    );
    DetailRouter::new(deps).make_detail_screen(game_id, settings)
}
