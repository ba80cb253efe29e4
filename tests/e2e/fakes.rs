//! Fake use cases with scripted outcomes
//!
//! The fakes count every call so flows can assert how often the screen
//! reached its collaborators. A [`FakeFavorites`] built with
//! [`FakeFavorites::gated`] holds every save until the test opens the gate,
//! which keeps a toggle pending for as long as the test needs.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use tokio::sync::Semaphore;

use favgame_core::{
    CheckIsFavoriteUseCase, DeleteFavoriteGameUseCase, Error, Game, GameDetail, GameId,
    GetGameDetailUseCase, InsertFavoriteGameUseCase, Result,
};

/// Catalog holding at most one detail
pub struct FakeCatalog {
    detail: Option<GameDetail>,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn with(detail: GameDetail) -> Self {
        Self {
            detail: Some(detail),
            calls: AtomicUsize::new(0),
        }
    }

    /// Every lookup fails
    pub fn empty() -> Self {
        Self {
            detail: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GetGameDetailUseCase for FakeCatalog {
    async fn execute(&self, game_id: GameId) -> Result<GameDetail> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.detail {
            Some(detail) if detail.id == game_id => Ok(detail.clone()),
            _ => Err(Error::game_not_found(game_id)),
        }
    }
}

/// Scripted result of a save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `Ok(true)`: the store changed
    Changed,
    /// `Ok(false)`: the store was left as it was
    Unchanged,
    /// `Err(..)`
    Fail,
}

pub const SAVE_ERROR: &str = "Favorite store error: disk full";

/// Favorite store with scripted answers
pub struct FakeFavorites {
    stored: AtomicBool,
    check_fails: AtomicBool,
    insert_outcome: Mutex<Outcome>,
    delete_outcome: Mutex<Outcome>,
    gate: Option<Semaphore>,
    checks: AtomicUsize,
    inserts: AtomicUsize,
    deletes: AtomicUsize,
}

impl FakeFavorites {
    pub fn new(stored: bool) -> Self {
        Self {
            stored: AtomicBool::new(stored),
            check_fails: AtomicBool::new(false),
            insert_outcome: Mutex::new(Outcome::Changed),
            delete_outcome: Mutex::new(Outcome::Changed),
            gate: None,
            checks: AtomicUsize::new(0),
            inserts: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        }
    }

    /// Saves wait until [`open_gate`](Self::open_gate) is called
    pub fn gated(stored: bool) -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new(stored)
        }
    }

    pub fn insert_outcome(self, outcome: Outcome) -> Self {
        *self.insert_outcome.lock().unwrap() = outcome;
        self
    }

    pub fn delete_outcome(self, outcome: Outcome) -> Self {
        *self.delete_outcome.lock().unwrap() = outcome;
        self
    }

    pub fn failing_check(self) -> Self {
        self.check_fails.store(true, Ordering::SeqCst);
        self
    }

    /// Let one waiting save through
    pub fn open_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn set_stored(&self, stored: bool) {
        self.stored.store(stored, Ordering::SeqCst);
    }

    pub fn stored(&self) -> bool {
        self.stored.load(Ordering::SeqCst)
    }

    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
    }

    fn apply(&self, outcome: Outcome, stored_after: bool) -> Result<bool> {
        match outcome {
            Outcome::Changed => {
                self.stored.store(stored_after, Ordering::SeqCst);
                Ok(true)
            }
            Outcome::Unchanged => Ok(false),
            Outcome::Fail => Err(Error::favorites("disk full")),
        }
    }
}

impl CheckIsFavoriteUseCase for FakeFavorites {
    async fn execute(&self, _game_id: GameId) -> Result<bool> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        if self.check_fails.load(Ordering::SeqCst) {
            return Err(Error::favorites("store unavailable"));
        }
        Ok(self.stored())
    }
}

impl InsertFavoriteGameUseCase for FakeFavorites {
    async fn execute(&self, _game: Game) -> Result<bool> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        let outcome = *self.insert_outcome.lock().unwrap();
        self.apply(outcome, true)
    }
}

impl DeleteFavoriteGameUseCase for FakeFavorites {
    async fn execute(&self, _game_id: GameId) -> Result<bool> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        let outcome = *self.delete_outcome.lock().unwrap();
        self.apply(outcome, false)
    }
}
