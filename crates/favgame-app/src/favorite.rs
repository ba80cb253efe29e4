//! Favorite toggle state machine
//!
//! The favorite control flips immediately when tapped, before the favorite
//! store has answered. While the request is in flight the toggle is
//! `Pending` and remembers the value it replaced, so the completion can
//! either confirm the new value or roll back to the old one.
//!
//! ```text
//! Idle { v } ── begin ──▶ Pending { previous: v, target: !v }
//! Pending ── Succeeded ──▶ Idle { target }            Confirmed
//! Pending ── Rejected/Failed ──▶ Idle { previous }    RolledBack (Rollback policy)
//! Pending ── Rejected/Failed ──▶ Idle { target }      Kept (KeepOptimistic policy)
//! any ── refresh(v) ──▶ authoritative value v
//! ```

use serde::{Deserialize, Serialize};

/// What to do with the speculative value when the store does not confirm it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Restore the value from before the tap
    #[default]
    Rollback,
    /// Leave the speculative value on screen until the next status check
    KeepOptimistic,
}

/// How an insert/delete request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The use case reported a change (`Ok(true)`)
    Succeeded,
    /// The use case answered but reported no change (`Ok(false)`)
    Rejected,
    /// The use case failed (`Err(_)`)
    Failed,
}

impl ToggleOutcome {
    pub fn from_payload(changed: bool) -> Self {
        if changed {
            Self::Succeeded
        } else {
            Self::Rejected
        }
    }
}

/// Result of resolving a pending toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The store confirmed the new value
    Confirmed { is_favorite: bool },
    /// The new value was discarded in favor of the previous one
    RolledBack { is_favorite: bool },
    /// The store did not confirm, but the speculative value stays
    Kept { is_favorite: bool },
    /// No toggle was pending
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Idle { is_favorite: bool },
    Pending { previous: bool, target: bool },
}

impl Default for FavoriteToggle {
    fn default() -> Self {
        Self::Idle { is_favorite: false }
    }
}

impl FavoriteToggle {
    /// Value currently shown by the favorite control
    pub fn is_favorite(&self) -> bool {
        match *self {
            Self::Idle { is_favorite } => is_favorite,
            Self::Pending { target, .. } => target,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Speculatively flip the value.
    ///
    /// Returns the new value, or `None` when a toggle is already pending.
    pub fn begin(&mut self) -> Option<bool> {
        match *self {
            Self::Idle { is_favorite } => {
                let target = !is_favorite;
                *self = Self::Pending {
                    previous: is_favorite,
                    target,
                };
                Some(target)
            }
            Self::Pending { .. } => None,
        }
    }

    /// Settle a pending toggle with the request's outcome
    pub fn resolve(&mut self, outcome: ToggleOutcome, policy: FailurePolicy) -> Resolution {
        let Self::Pending { previous, target } = *self else {
            return Resolution::Ignored;
        };

        let resolution = match (outcome, policy) {
            (ToggleOutcome::Succeeded, _) => Resolution::Confirmed {
                is_favorite: target,
            },
            (_, FailurePolicy::Rollback) => Resolution::RolledBack {
                is_favorite: previous,
            },
            (_, FailurePolicy::KeepOptimistic) => Resolution::Kept {
                is_favorite: target,
            },
        };

        let is_favorite = match resolution {
            Resolution::Confirmed { is_favorite }
            | Resolution::RolledBack { is_favorite }
            | Resolution::Kept { is_favorite } => is_favorite,
            Resolution::Ignored => previous,
        };
        *self = Self::Idle { is_favorite };
        resolution
    }

    /// Drop a pending toggle whose completion will never be applied
    pub fn cancel(&mut self) {
        if let Self::Pending { previous, .. } = *self {
            *self = Self::Idle {
                is_favorite: previous,
            };
        }
    }

    /// Apply an authoritative value from a status check.
    ///
    /// A pending toggle stays pending; the checked value becomes what a
    /// rollback would restore.
    pub fn refresh(&mut self, is_favorite: bool) {
        match self {
            Self::Idle { .. } => *self = Self::Idle { is_favorite },
            Self::Pending { previous, .. } => *previous = is_favorite,
        }
    }
}
