//! Loading the screen: detail fetch, favorite status, appearances

use favgame_app::{EngineEvent, Message};
use favgame_core::GameId;

use super::fakes::{FakeCatalog, FakeFavorites};
use crate::{harness, settings, settle, witcher, WITCHER_ID};

#[tokio::test]
async fn test_start_loads_detail_and_status() {
    let mut h = harness(
        FakeCatalog::with(witcher()),
        FakeFavorites::new(true),
        Some(WITCHER_ID),
        settings(true),
    );
    let mut events = h.engine.subscribe();

    h.engine.start();
    settle(&mut h.engine).await;

    assert_eq!(h.engine.state.items(), &[witcher()]);
    assert!(h.engine.state.is_favorite());
    assert!(!h.engine.state.has_alert());
    assert_eq!(h.catalog.calls(), 1);
    assert_eq!(h.favorites.checks(), 1);

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event.event_type());
    }
    assert!(seen.contains(&"detail_loaded"));
    assert!(seen.contains(&"favorite_status"));
}

#[tokio::test]
async fn test_each_appearance_rechecks_status_but_not_detail() {
    let mut h = harness(
        FakeCatalog::with(witcher()),
        FakeFavorites::new(false),
        Some(WITCHER_ID),
        settings(true),
    );
    h.engine.start();
    settle(&mut h.engine).await;
    assert!(!h.engine.state.is_favorite());

    // Favorited elsewhere while the screen was hidden
    h.favorites.set_stored(true);
    h.engine.process_message(Message::ScreenAppeared);
    settle(&mut h.engine).await;

    assert!(h.engine.state.is_favorite());
    assert_eq!(h.favorites.checks(), 2);
    assert_eq!(h.catalog.calls(), 1);
}

#[tokio::test]
async fn test_without_game_id_calls_nothing() {
    let mut h = harness(
        FakeCatalog::with(witcher()),
        FakeFavorites::new(false),
        None,
        settings(true),
    );

    h.engine.start();
    h.engine.process_message(Message::ScreenAppeared);
    h.engine.process_message(Message::ToggleFavorite);

    assert!(!h.engine.state.is_busy());
    assert_eq!(h.engine.in_flight_tasks(), 0);
    assert!(h.engine.state.items().is_empty());
    assert!(!h.engine.state.is_favorite());
    assert_eq!(h.catalog.calls(), 0);
    assert_eq!(h.favorites.checks(), 0);
    assert_eq!(h.favorites.inserts(), 0);
}

#[tokio::test]
async fn test_detail_failure_shows_alert() {
    let mut h = harness(
        FakeCatalog::empty(),
        FakeFavorites::new(false),
        Some(GameId::new(404)),
        settings(true),
    );
    let mut events = h.engine.subscribe();

    h.engine.start();
    settle(&mut h.engine).await;

    let alert = h.engine.state.alert.as_ref().expect("alert shown");
    assert_eq!(alert.title, "Alert");
    assert_eq!(alert.message, "Game 404 was not found in the catalog");
    assert_eq!(alert.action_label, "Ok");
    assert!(h.engine.state.items().is_empty());

    let mut alerts = 0;
    while let Ok(event) = events.try_recv() {
        if matches!(event, EngineEvent::Alert { .. }) {
            alerts += 1;
        }
    }
    assert_eq!(alerts, 1);

    h.engine.process_message(Message::DismissAlert);
    assert!(!h.engine.state.has_alert());
}

#[tokio::test]
async fn test_status_check_failure_shows_alert_and_keeps_state() {
    let mut h = harness(
        FakeCatalog::with(witcher()),
        FakeFavorites::new(true).failing_check(),
        Some(WITCHER_ID),
        settings(true),
    );

    h.engine.start();
    settle(&mut h.engine).await;

    assert_eq!(h.engine.state.items().len(), 1);
    assert!(!h.engine.state.is_favorite());
    assert_eq!(
        h.engine.state.alert.as_ref().map(|a| a.message.as_str()),
        Some("Favorite store error: store unavailable")
    );
}

#[tokio::test]
async fn test_back_tears_down_screen() {
    let mut h = harness(
        FakeCatalog::with(witcher()),
        FakeFavorites::new(false),
        Some(WITCHER_ID),
        settings(true),
    );
    h.engine.start();

    h.engine.process_message(Message::Back);

    assert!(h.engine.should_quit());
    assert!(!h.engine.state.is_busy());
}
