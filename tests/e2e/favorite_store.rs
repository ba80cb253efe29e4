//! The detail screen over the real catalog and favorites file

use std::sync::Arc;

use favgame::make_screen;
use favgame_app::{FavoriteBus, FavoriteEvent, Message};
use favgame_data::{FavoriteStore, StaticCatalog};
use tempfile::tempdir;

use crate::{settings, settle, witcher, WITCHER_ID};

#[tokio::test]
async fn test_favorite_survives_a_new_screen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("favorites.json");
    let catalog = Arc::new(StaticCatalog::from_details([witcher()]));
    let bus = FavoriteBus::new();
    let mut signals = bus.subscribe();

    let store = Arc::new(FavoriteStore::open(&path).unwrap());
    let mut engine = make_screen(
        catalog.clone(),
        store,
        &bus,
        Some(WITCHER_ID),
        settings(true),
    );
    engine.start();
    settle(&mut engine).await;
    assert!(!engine.state.is_favorite());

    engine.process_message(Message::ToggleFavorite);
    settle(&mut engine).await;
    engine.shutdown();

    assert!(path.exists());
    assert_eq!(signals.try_recv().unwrap(), FavoriteEvent::Changed);

    // A fresh screen over a freshly opened store sees the saved favorite
    let reopened = Arc::new(FavoriteStore::open(&path).unwrap());
    assert!(reopened.contains(WITCHER_ID).await);
    let mut engine = make_screen(
        catalog,
        reopened.clone(),
        &bus,
        Some(WITCHER_ID),
        settings(true),
    );
    engine.start();
    settle(&mut engine).await;
    assert!(engine.state.is_favorite());

    engine.process_message(Message::ToggleFavorite);
    settle(&mut engine).await;

    assert!(!engine.state.is_favorite());
    assert!(!reopened.contains(WITCHER_ID).await);
    assert_eq!(signals.try_recv().unwrap(), FavoriteEvent::Changed);
}

#[tokio::test]
async fn test_saved_game_is_the_reduced_projection() {
    let store = Arc::new(FavoriteStore::in_memory());
    let bus = FavoriteBus::new();
    let mut engine = make_screen(
        Arc::new(StaticCatalog::from_details([witcher()])),
        store.clone(),
        &bus,
        Some(WITCHER_ID),
        settings(true),
    );

    engine.start();
    settle(&mut engine).await;
    engine.process_message(Message::ToggleFavorite);
    settle(&mut engine).await;

    let games = store.games().await;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, WITCHER_ID);
    assert_eq!(games[0].name, "The Witcher 3: Wild Hunt");
    assert_eq!(games[0].rating, 4.66);
}
