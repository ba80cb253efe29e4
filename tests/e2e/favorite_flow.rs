//! Toggling the favorite: saves, rollback, and the "favorite changed" signal

use favgame_app::{EngineEvent, FavoriteEvent, Message};
use tokio::sync::broadcast::error::TryRecvError;

use super::fakes::{FakeCatalog, FakeFavorites, Outcome, SAVE_ERROR};
use crate::{harness, settings, settle, witcher, Harness, WITCHER_ID};

/// A loaded screen over `favorites`
async fn loaded(favorites: FakeFavorites, rollback_on_failure: bool) -> Harness {
    let mut h = harness(
        FakeCatalog::with(witcher()),
        favorites,
        Some(WITCHER_ID),
        settings(rollback_on_failure),
    );
    h.engine.start();
    settle(&mut h.engine).await;
    h
}

#[tokio::test]
async fn test_insert_success_confirms_and_signals_once() {
    let mut h = loaded(FakeFavorites::new(false), true).await;
    let mut signals = h.bus.subscribe();

    h.engine.process_message(Message::ToggleFavorite);
    assert!(h.engine.state.is_favorite());
    assert!(h.engine.state.favorite.is_pending());

    settle(&mut h.engine).await;

    assert!(h.engine.state.is_favorite());
    assert!(h.favorites.stored());
    assert_eq!(h.favorites.inserts(), 1);
    assert_eq!(h.favorites.deletes(), 0);
    assert_eq!(signals.try_recv().unwrap(), FavoriteEvent::Changed);
    assert_eq!(signals.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_delete_success_confirms_and_signals_once() {
    let mut h = loaded(FakeFavorites::new(true), true).await;
    let mut signals = h.bus.subscribe();

    h.engine.process_message(Message::ToggleFavorite);
    assert!(!h.engine.state.is_favorite());
    settle(&mut h.engine).await;

    assert!(!h.engine.state.is_favorite());
    assert!(!h.favorites.stored());
    assert_eq!(h.favorites.deletes(), 1);
    assert_eq!(h.favorites.inserts(), 0);
    assert_eq!(signals.try_recv().unwrap(), FavoriteEvent::Changed);
    assert_eq!(signals.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_failed_insert_rolls_back_and_alerts() {
    let mut h = loaded(FakeFavorites::new(false).insert_outcome(Outcome::Fail), true).await;
    let mut signals = h.bus.subscribe();
    let mut events = h.engine.subscribe();

    h.engine.process_message(Message::ToggleFavorite);
    settle(&mut h.engine).await;

    assert!(!h.engine.state.is_favorite());
    assert_eq!(
        h.engine.state.alert.as_ref().map(|a| a.message.as_str()),
        Some(SAVE_ERROR)
    );
    assert_eq!(signals.try_recv(), Err(TryRecvError::Empty));

    let mut statuses = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let EngineEvent::FavoriteStatus {
            is_favorite,
            pending,
        } = event
        {
            statuses.push((is_favorite, pending));
        }
    }
    assert_eq!(statuses, vec![(true, true), (false, false)]);
}

#[tokio::test]
async fn test_failed_delete_rolls_back_and_alerts() {
    let mut h = loaded(FakeFavorites::new(true).delete_outcome(Outcome::Fail), true).await;
    let mut signals = h.bus.subscribe();

    h.engine.process_message(Message::ToggleFavorite);
    settle(&mut h.engine).await;

    assert!(h.engine.state.is_favorite());
    assert!(h.engine.state.has_alert());
    assert_eq!(signals.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_failed_insert_keeps_flip_under_legacy_policy() {
    let mut h = loaded(FakeFavorites::new(false).insert_outcome(Outcome::Fail), false).await;
    let mut signals = h.bus.subscribe();

    h.engine.process_message(Message::ToggleFavorite);
    settle(&mut h.engine).await;

    assert!(h.engine.state.is_favorite());
    assert!(!h.favorites.stored());
    assert!(h.engine.state.has_alert());
    assert_eq!(signals.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_unchanged_store_rolls_back_silently() {
    let mut h = loaded(
        FakeFavorites::new(false).insert_outcome(Outcome::Unchanged),
        true,
    )
    .await;
    let mut signals = h.bus.subscribe();

    h.engine.process_message(Message::ToggleFavorite);
    settle(&mut h.engine).await;

    assert!(!h.engine.state.is_favorite());
    assert!(!h.engine.state.has_alert());
    assert_eq!(signals.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_taps_while_pending_are_ignored() {
    let mut h = loaded(FakeFavorites::gated(false), true).await;
    let mut signals = h.bus.subscribe();

    h.engine.process_message(Message::ToggleFavorite);
    h.engine.process_message(Message::ToggleFavorite);
    h.engine.process_message(Message::ToggleFavorite);
    assert!(h.engine.state.is_favorite());
    assert_eq!(h.engine.in_flight_tasks(), 1);

    h.favorites.open_gate();
    settle(&mut h.engine).await;

    assert!(h.engine.state.is_favorite());
    assert_eq!(h.favorites.inserts(), 1);
    assert_eq!(h.favorites.deletes(), 0);
    assert_eq!(signals.try_recv().unwrap(), FavoriteEvent::Changed);
    assert_eq!(signals.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_toggle_twice_round_trips() {
    let mut h = loaded(FakeFavorites::new(false), true).await;
    let mut signals = h.bus.subscribe();

    h.engine.process_message(Message::ToggleFavorite);
    settle(&mut h.engine).await;
    h.engine.process_message(Message::ToggleFavorite);
    settle(&mut h.engine).await;

    assert!(!h.engine.state.is_favorite());
    assert!(!h.favorites.stored());
    assert_eq!(h.favorites.inserts(), 1);
    assert_eq!(h.favorites.deletes(), 1);
    assert_eq!(signals.try_recv().unwrap(), FavoriteEvent::Changed);
    assert_eq!(signals.try_recv().unwrap(), FavoriteEvent::Changed);
}

#[tokio::test]
async fn test_shutdown_while_pending_drops_the_save() {
    let mut h = loaded(FakeFavorites::gated(false), true).await;
    let mut signals = h.bus.subscribe();

    h.engine.process_message(Message::ToggleFavorite);
    h.engine.shutdown();
    h.favorites.open_gate();
    tokio::task::yield_now().await;
    h.engine.drain_pending_messages();

    assert!(h.engine.should_quit());
    assert!(!h.engine.state.favorite.is_pending());
    assert_eq!(h.engine.in_flight_tasks(), 0);
    assert_eq!(signals.try_recv(), Err(TryRecvError::Empty));
}
