//! In-memory game catalog
//!
//! Serves [`GameDetail`] records from memory, optionally loaded from a JSON
//! file holding an array of details. Used for offline runs and tests.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use favgame_core::prelude::*;
use favgame_core::{GameDetail, GameId, GetGameDetailUseCase};

/// Catalog backed by a fixed set of details
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    details: HashMap<GameId, GameDetail>,
    latency: Option<Duration>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_details(details: impl IntoIterator<Item = GameDetail>) -> Self {
        Self {
            details: details.into_iter().map(|d| (d.id, d)).collect(),
            latency: None,
        }
    }

    /// Load a catalog file containing a JSON array of details
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::catalog(format!("Failed to read {}: {}", path.display(), e)))?;
        let details: Vec<GameDetail> = serde_json::from_str(&content)
            .map_err(|e| Error::catalog(format!("Failed to parse {}: {}", path.display(), e)))?;

        info!("Loaded {} game(s) from {}", details.len(), path.display());
        Ok(Self::from_details(details))
    }

    /// Delay every lookup, to mimic a remote catalog
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

impl GetGameDetailUseCase for StaticCatalog {
    async fn execute(&self, game_id: GameId) -> Result<GameDetail> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        self.details
            .get(&game_id)
            .cloned()
            .ok_or_else(|| Error::game_not_found(game_id))
    }
}
