//! Game domain types shared by every favgame crate

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a game in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Full detail record for one game.
///
/// Produced by a [`GetGameDetailUseCase`](crate::GetGameDetailUseCase) and
/// held by the detail screen as a single cached copy. A new fetch replaces it
/// wholesale; nothing updates it field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDetail {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub released: Option<NaiveDate>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default = "default_rating_top")]
    pub rating_top: u8,
    #[serde(default)]
    pub metacritic: Option<u32>,
    /// Average playtime in hours
    #[serde(default)]
    pub playtime: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
}

fn default_rating_top() -> u8 {
    5
}

impl GameDetail {
    /// Minimal detail with only the required fields set
    pub fn new(id: GameId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            released: None,
            background_image: None,
            rating: 0.0,
            rating_top: default_rating_top(),
            metacritic: None,
            playtime: 0,
            description: String::new(),
            genres: Vec::new(),
            platforms: Vec::new(),
            developers: Vec::new(),
            publishers: Vec::new(),
            website: None,
        }
    }

    /// Release date formatted for display, e.g. `"Sep 17, 2013"`
    pub fn released_display(&self) -> String {
        match self.released {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => "TBA".to_string(),
        }
    }

    /// Rating formatted for display, e.g. `"4.47 / 5"`
    pub fn rating_display(&self) -> String {
        format!("{:.2} / {}", self.rating, self.rating_top)
    }
}

/// Reduced projection of [`GameDetail`] persisted as a favorite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub released: Option<NaiveDate>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub rating: f64,
}

impl From<&GameDetail> for Game {
    fn from(detail: &GameDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name.clone(),
            released: detail.released,
            background_image: detail.background_image.clone(),
            rating: detail.rating,
        }
    }
}
