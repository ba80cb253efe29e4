//! Application state (Model in TEA pattern)

use favgame_core::{GameDetail, GameId};

use crate::config::Settings;
use crate::favorite::{FailurePolicy, FavoriteToggle};

/// Lifecycle phase of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Identifies one lifetime of the screen's requests.
///
/// Every request is tagged with the epoch current when it was issued.
/// Reconfiguring or tearing the screen down starts a new epoch, and
/// completions from an older epoch are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenEpoch(u64);

impl ScreenEpoch {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ScreenEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Blocking alert with a single acknowledgement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub title: String,
    pub message: String,
    pub action_label: String,
}

impl AlertState {
    /// Alert for a failed use-case call
    pub fn use_case_failed(message: impl Into<String>) -> Self {
        Self {
            title: "Alert".to_string(),
            message: message.into(),
            action_label: "Ok".to_string(),
        }
    }
}

/// Requests whose completion has not arrived yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InFlight {
    pub detail: bool,
    pub favorite_check: bool,
}

/// Vertical scroll position of the description region.
///
/// `max_offset` is written back by the renderer once it knows how tall the
/// wrapped description is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub page_size: u16,
}

impl ScrollState {
    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    /// Record the scrollable range, clamping the offset into it
    pub fn set_bounds(&mut self, max_offset: u16, page_size: u16) {
        self.max_offset = max_offset;
        self.page_size = page_size.max(1);
        self.offset = self.offset.min(max_offset);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// Complete state of the detail screen
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,

    /// Game shown by the screen; `None` runs the screen in degraded mode
    pub game_id: Option<GameId>,

    /// Single cached copy of the fetched detail
    pub game_detail: Option<GameDetail>,

    pub favorite: FavoriteToggle,

    pub alert: Option<AlertState>,

    pub in_flight: InFlight,

    pub epoch: ScreenEpoch,

    /// Bumped whenever both display regions must be redrawn from scratch
    pub render_generation: u64,

    /// Whether the first-appearance load already ran
    pub has_loaded: bool,

    pub description_scroll: ScrollState,

    pub settings: Settings,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Store the game id. Switching to another id starts a new epoch, so
    /// completions for the previous id are discarded, and forgets
    /// everything known about the previous game.
    pub fn configure(&mut self, game_id: GameId) {
        if self.game_id == Some(game_id) {
            return;
        }

        if self.game_id.is_some() {
            self.epoch = self.epoch.next();
            self.in_flight = InFlight::default();
        }
        self.game_id = Some(game_id);
        self.game_detail = None;
        self.has_loaded = false;
        self.favorite = FavoriteToggle::default();
        self.description_scroll.reset();
        self.render_generation = self.render_generation.wrapping_add(1);
    }

    /// Content items of the detail page: empty until a detail arrives,
    /// then exactly one item at index 0.
    pub fn items(&self) -> &[GameDetail] {
        self.game_detail.as_slice()
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite.is_favorite()
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.settings.behavior.failure_policy()
    }

    /// Surface a use-case failure. A newer failure replaces the visible one.
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(AlertState::use_case_failed(message));
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    /// Whether any request issued by this screen is still outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight.detail || self.in_flight.favorite_check || self.favorite.is_pending()
    }

    /// Release the screen: drop in-flight completions and quit
    pub fn teardown(&mut self) {
        self.epoch = self.epoch.next();
        self.in_flight = InFlight::default();
        self.favorite.cancel();
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_empty_until_detail_arrives() {
        let mut state = AppState::new();
        assert!(state.items().is_empty());

        let detail = GameDetail::new(GameId::new(1), "Portal");
        state.game_detail = Some(detail.clone());

        assert_eq!(state.items(), &[detail]);
    }

    #[test]
    fn test_configure_overwrites_and_starts_new_epoch() {
        let mut state = AppState::new();
        state.configure(GameId::new(1));
        let first_epoch = state.epoch;

        state.configure(GameId::new(2));

        assert_eq!(state.game_id, Some(GameId::new(2)));
        assert_ne!(state.epoch, first_epoch);
    }

    #[test]
    fn test_configure_other_id_forgets_previous_game() {
        let mut state = AppState::new();
        state.configure(GameId::new(1));
        state.has_loaded = true;
        state.game_detail = Some(GameDetail::new(GameId::new(1), "Portal"));
        state.favorite.refresh(true);
        state.favorite.begin();

        state.configure(GameId::new(2));

        assert!(state.items().is_empty());
        assert!(!state.has_loaded);
        assert!(!state.is_favorite());
        assert!(!state.favorite.is_pending());
    }

    #[test]
    fn test_configure_same_id_keeps_state() {
        let mut state = AppState::new();
        state.configure(GameId::new(1));
        state.has_loaded = true;
        state.in_flight.detail = true;
        let epoch = state.epoch;

        state.configure(GameId::new(1));

        assert!(state.has_loaded);
        assert!(state.in_flight.detail);
        assert_eq!(state.epoch, epoch);
    }

    #[test]
    fn test_first_configure_keeps_epoch() {
        let mut state = AppState::new();
        let epoch = state.epoch;
        state.configure(GameId::new(1));
        assert_eq!(state.epoch, epoch);
    }

    #[test]
    fn test_teardown_quits_and_invalidates_requests() {
        let mut state = AppState::new();
        state.in_flight.detail = true;
        let epoch = state.epoch;

        state.teardown();

        assert!(state.should_quit());
        assert!(!state.in_flight.detail);
        assert_ne!(state.epoch, epoch);
    }

    #[test]
    fn test_newer_alert_replaces_older() {
        let mut state = AppState::new();
        state.show_alert("first");
        state.show_alert("second");

        let alert = state.alert.as_ref().unwrap();
        assert_eq!(alert.message, "second");
        assert_eq!(alert.action_label, "Ok");
    }

    #[test]
    fn test_scroll_is_clamped_to_bounds() {
        let mut scroll = ScrollState::default();
        scroll.set_bounds(3, 10);

        scroll.scroll_down(10);
        assert_eq!(scroll.offset, 3);

        scroll.scroll_up(1);
        assert_eq!(scroll.offset, 2);

        scroll.set_bounds(1, 10);
        assert_eq!(scroll.offset, 1);

        scroll.to_top();
        assert_eq!(scroll.offset, 0);
    }
}
