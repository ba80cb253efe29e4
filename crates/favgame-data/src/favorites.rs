//! Persistent favorite store
//!
//! Keeps favorite [`Game`]s in a JSON file and implements the check, insert
//! and delete use cases on top of it. Writes go to a temp file under an
//! exclusive lock and are renamed into place, so a crash never leaves a
//! half-written store behind.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use tokio::sync::Mutex;

use favgame_core::prelude::*;
use favgame_core::{
    CheckIsFavoriteUseCase, DeleteFavoriteGameUseCase, Game, GameId, InsertFavoriteGameUseCase,
};

const FAVORITES_FILENAME: &str = "favorites.json";

/// Default location of the favorites file
pub fn default_favorites_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("favgame")
        .join(FAVORITES_FILENAME)
}

/// Favorite store shared by the three favorite use cases.
///
/// Cloning is cheap; clones share the same games and file.
#[derive(Debug, Clone)]
pub struct FavoriteStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// `None` keeps the store in memory only
    path: Option<PathBuf>,
    games: Mutex<Vec<Game>>,
}

impl FavoriteStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file is an empty store; an unreadable or malformed file is
    /// an error rather than silently discarding the user's favorites.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let games = if path.exists() {
            read_games(&path)?
        } else {
            debug!("No favorites file at {:?}, starting empty", path);
            Vec::new()
        };

        info!("Favorite store opened with {} game(s)", games.len());
        Ok(Self {
            inner: Arc::new(Inner {
                path: Some(path),
                games: Mutex::new(games),
            }),
        })
    }

    /// Store that never touches the filesystem
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Inner {
                path: None,
                games: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.inner.path.as_deref()
    }

    /// Snapshot of every stored favorite, in insertion order
    pub async fn games(&self) -> Vec<Game> {
        self.inner.games.lock().await.clone()
    }

    pub async fn contains(&self, game_id: GameId) -> bool {
        self.inner
            .games
            .lock()
            .await
            .iter()
            .any(|g| g.id == game_id)
    }

    /// Add `game` unless already present. Returns `true` when stored.
    pub async fn insert(&self, game: Game) -> Result<bool> {
        let mut games = self.inner.games.lock().await;
        if games.iter().any(|g| g.id == game.id) {
            debug!("Game {} is already a favorite", game.id);
            return Ok(false);
        }

        let mut updated = games.clone();
        updated.push(game);
        self.persist(&updated).await?;
        *games = updated;
        Ok(true)
    }

    /// Remove the game with `game_id`. Returns `true` when something was removed.
    pub async fn remove(&self, game_id: GameId) -> Result<bool> {
        let mut games = self.inner.games.lock().await;
        if !games.iter().any(|g| g.id == game_id) {
            debug!("Game {} is not a favorite, nothing to delete", game_id);
            return Ok(false);
        }

        let updated: Vec<Game> = games.iter().filter(|g| g.id != game_id).cloned().collect();
        self.persist(&updated).await?;
        *games = updated;
        Ok(true)
    }

    /// Write `games` to disk. Called with the games lock held, so writes
    /// from this process are serialized.
    async fn persist(&self, games: &[Game]) -> Result<()> {
        let Some(path) = self.inner.path.clone() else {
            return Ok(());
        };
        let games = games.to_vec();

        tokio::task::spawn_blocking(move || write_games(&path, &games))
            .await
            .map_err(|e| Error::favorites(format!("Favorite write task failed: {}", e)))?
    }
}

fn read_games(path: &Path) -> Result<Vec<Game>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::favorites(format!("Failed to read {}: {}", path.display(), e)))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&content).map_err(|e| {
        warn!("Failed to parse favorites {:?}: {}", path, e);
        Error::favorites_corrupt(path)
    })
}

fn write_games(path: &Path, games: &[Game]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::favorites(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    // Blocks if another favgame process is writing
    let lock_path = lock_path(path);
    let lock = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| Error::favorites(format!("Failed to open {}: {}", lock_path.display(), e)))?;
    lock.lock_exclusive()
        .map_err(|e| Error::favorites(format!("Failed to lock favorites: {}", e)))?;

    let tmp_path = path.with_extension(format!("json.{}.tmp", std::process::id()));
    let file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_path)
        .map_err(|e| Error::favorites(format!("Failed to open {}: {}", tmp_path.display(), e)))?;

    serde_json::to_writer_pretty(&file, games)?;
    file.sync_all()
        .map_err(|e| Error::favorites(format!("Failed to flush favorites: {}", e)))?;
    drop(file);

    std::fs::rename(&tmp_path, path)
        .map_err(|e| Error::favorites(format!("Failed to replace {}: {}", path.display(), e)))?;

    debug!("Saved {} favorite(s) to {:?}", games.len(), path);
    Ok(())
}

/// Lock file guarding writes to the favorites file at `path`
fn lock_path(path: &Path) -> PathBuf {
    path.with_extension("json.lock")
}

// ─────────────────────────────────────────────────────────────────
// Use case implementations
// ─────────────────────────────────────────────────────────────────

impl CheckIsFavoriteUseCase for FavoriteStore {
    async fn execute(&self, game_id: GameId) -> Result<bool> {
        Ok(self.contains(game_id).await)
    }
}

impl InsertFavoriteGameUseCase for FavoriteStore {
    async fn execute(&self, game: Game) -> Result<bool> {
        self.insert(game).await
    }
}

impl DeleteFavoriteGameUseCase for FavoriteStore {
    async fn execute(&self, game_id: GameId) -> Result<bool> {
        self.remove(game_id).await
    }
}
