//! HTTP catalog client for the RAWG games API
//!
//! Implements [`GetGameDetailUseCase`] by fetching
//! `GET {base_url}/games/{id}?key={api_key}` and mapping the JSON payload
//! into a [`GameDetail`].

use std::sync::LazyLock;
use std::time::Duration;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use url::Url;

use favgame_core::prelude::*;
use favgame_core::{GameDetail, GameId, GetGameDetailUseCase};

/// Default API root used when the config does not override it
pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";

/// Matches HTML tags in RAWG's `description` field
static HTML_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("HTML tag regex is valid"));

/// RAWG-backed game detail use case
#[derive(Debug, Clone)]
pub struct RawgClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl RawgClient {
    /// Build a client for the given API root.
    ///
    /// Fails when the API key is empty or the base URL cannot be parsed.
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config(format!("Invalid catalog base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Catalog base URL cannot be a base: {base_url}"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("favgame/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// URL of the detail endpoint for one game
    pub fn detail_url(&self, game_id: GameId) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new()`: the base URL always has path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("games")
                .push(&game_id.to_string());
        }
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }
}

impl GetGameDetailUseCase for RawgClient {
    async fn execute(&self, game_id: GameId) -> Result<GameDetail> {
        let url = self.detail_url(game_id);
        debug!("Fetching game detail {} from {}", game_id, self.base_url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::http(e.without_url().to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::game_not_found(game_id));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(status.as_u16(), api_error_message(&body, status)));
        }

        let payload: RawgGameDetail = response
            .json()
            .await
            .map_err(|e| Error::catalog(format!("Malformed detail for game {game_id}: {e}")))?;

        Ok(payload.into_detail())
    }
}

/// Extract RAWG's `{"detail": "..."}` error text, falling back to the reason phrase
fn api_error_message(body: &str, status: reqwest::StatusCode) -> String {
    #[derive(Deserialize)]
    struct ApiError {
        detail: String,
    }

    serde_json::from_str::<ApiError>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        })
}

// ─────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PlatformEntry {
    platform: Named,
}

#[derive(Debug, Deserialize)]
struct RawgGameDetail {
    id: u64,
    name: String,
    #[serde(default)]
    released: Option<NaiveDate>,
    #[serde(default)]
    background_image: Option<String>,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    rating_top: u8,
    #[serde(default)]
    metacritic: Option<u32>,
    #[serde(default)]
    playtime: u32,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    description_raw: Option<String>,
    #[serde(default)]
    genres: Vec<Named>,
    #[serde(default)]
    platforms: Option<Vec<PlatformEntry>>,
    #[serde(default)]
    developers: Vec<Named>,
    #[serde(default)]
    publishers: Vec<Named>,
    #[serde(default)]
    website: Option<String>,
}

impl RawgGameDetail {
    fn into_detail(self) -> GameDetail {
        let description = match self.description_raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => strip_html(self.description.as_deref().unwrap_or_default()),
        };

        GameDetail {
            id: GameId::new(self.id),
            name: self.name,
            released: self.released,
            background_image: self.background_image.filter(|s| !s.is_empty()),
            rating: self.rating,
            rating_top: if self.rating_top == 0 {
                5
            } else {
                self.rating_top
            },
            metacritic: self.metacritic,
            playtime: self.playtime,
            description: description.trim().to_string(),
            genres: names(self.genres),
            platforms: self
                .platforms
                .unwrap_or_default()
                .into_iter()
                .map(|p| p.platform.name)
                .collect(),
            developers: names(self.developers),
            publishers: names(self.publishers),
            website: self.website.filter(|s| !s.is_empty()),
        }
    }
}

fn names(items: Vec<Named>) -> Vec<String> {
    items.into_iter().map(|n| n.name).collect()
}

/// Turn RAWG's HTML description into plain text
fn strip_html(html: &str) -> String {
    let with_breaks = html
        .replace("<br />", "\n")
        .replace("<br>", "\n")
        .replace("</p>", "\n");
    HTML_TAG_PATTERN
        .replace_all(&with_breaks, "")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}
