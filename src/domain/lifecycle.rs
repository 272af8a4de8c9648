//! Event lifecycle state machine.
//!
//! The only state machine in the system. Legal transitions:
//!
//! ```text
//! PENDING ──approve──▶ ACTIVE ◀──toggle──▶ FINISHED
//!    │
//!    └──reject──▶ (deleted)
//! ```
//!
//! A rejected event is physically removed from the store; there is no
//! tombstone and no archival state. `PENDING` is never reachable from
//! `ACTIVE` or `FINISHED`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Lifecycle state of a calendar event.
///
/// Externally-ingested events start at [`Pending`](Self::Pending) and wait
/// for moderation. Manually created events bypass review and are inserted
/// directly at [`Active`](Self::Active).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "event_status")]
pub enum EventStatus {
    /// Awaiting moderation. Only approve and reject apply.
    #[sqlx(rename = "PENDING")]
    Pending,
    /// Published and visible on the dashboard.
    #[sqlx(rename = "ACTIVE")]
    Active,
    /// Concluded. Can be reactivated, nothing else.
    #[sqlx(rename = "FINISHED")]
    Finished,
}

impl EventStatus {
    /// Returns the wire/store representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Finished => "FINISHED",
        }
    }

    /// Returns `true` if this event is awaiting moderation.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Validates a transition from `self` to `to`.
    ///
    /// Approval (`PENDING → ACTIVE`) is idempotent in effect: re-approving
    /// an already-`ACTIVE` record is accepted as a no-op write. The
    /// `ACTIVE ⇄ FINISHED` toggle is legal in both directions. Everything
    /// else, notably any transition into `PENDING`, is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTransition`] for any transition not
    /// listed above.
    pub fn validate_transition(self, to: Self) -> Result<(), CalendarError> {
        match (self, to) {
            (Self::Pending | Self::Active, Self::Active)
            | (Self::Active, Self::Finished)
            | (Self::Finished, Self::Active) => Ok(()),
            (from, to) => Err(CalendarError::InvalidTransition { from, to }),
        }
    }

    /// Validates moderation approval from `self`.
    ///
    /// Approval targets `ACTIVE` and only applies to records still in the
    /// moderation flow: legal from `PENDING`, a no-op from `ACTIVE`, and
    /// refused from `FINISHED`. Concluded events are reactivated through
    /// the status toggle, never through approve.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTransition`] when called on a
    /// `FINISHED` record.
    pub fn validate_approval(self) -> Result<(), CalendarError> {
        match self {
            Self::Pending | Self::Active => Ok(()),
            Self::Finished => Err(CalendarError::InvalidTransition {
                from: self,
                to: Self::Active,
            }),
        }
    }

    /// Returns the complement of the `ACTIVE ⇄ FINISHED` toggle.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTransition`] when called on a
    /// `PENDING` event; pending records only accept approve or reject.
    pub fn toggled(self) -> Result<Self, CalendarError> {
        match self {
            Self::Active => Ok(Self::Finished),
            Self::Finished => Ok(Self::Active),
            Self::Pending => Err(CalendarError::InvalidTransition {
                from: Self::Pending,
                to: Self::Finished,
            }),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn approve_from_pending_is_legal() {
        assert!(
            EventStatus::Pending
                .validate_transition(EventStatus::Active)
                .is_ok()
        );
    }

    #[test]
    fn approve_is_idempotent_on_active() {
        assert!(
            EventStatus::Active
                .validate_transition(EventStatus::Active)
                .is_ok()
        );
    }

    #[test]
    fn toggle_cycle_restores_original_status() {
        let Ok(finished) = EventStatus::Active.toggled() else {
            panic!("active must toggle");
        };
        assert_eq!(finished, EventStatus::Finished);
        let Ok(active) = finished.toggled() else {
            panic!("finished must toggle");
        };
        assert_eq!(active, EventStatus::Active);
    }

    #[test]
    fn toggle_is_illegal_from_pending() {
        assert!(EventStatus::Pending.toggled().is_err());
    }

    #[test]
    fn pending_is_unreachable() {
        for from in [
            EventStatus::Pending,
            EventStatus::Active,
            EventStatus::Finished,
        ] {
            assert!(from.validate_transition(EventStatus::Pending).is_err());
        }
    }

    #[test]
    fn approval_is_refused_from_finished() {
        assert!(EventStatus::Pending.validate_approval().is_ok());
        assert!(EventStatus::Active.validate_approval().is_ok());
        assert!(matches!(
            EventStatus::Finished.validate_approval(),
            Err(CalendarError::InvalidTransition {
                from: EventStatus::Finished,
                to: EventStatus::Active,
            })
        ));
    }

    #[test]
    fn reactivate_from_finished_is_legal() {
        assert!(
            EventStatus::Finished
                .validate_transition(EventStatus::Active)
                .is_ok()
        );
    }

    #[test]
    fn pending_cannot_jump_to_finished() {
        assert!(
            EventStatus::Pending
                .validate_transition(EventStatus::Finished)
                .is_err()
        );
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&EventStatus::Pending).unwrap_or_default();
        assert_eq!(json, "\"PENDING\"");
        let back: Option<EventStatus> = serde_json::from_str("\"FINISHED\"").ok();
        assert_eq!(back, Some(EventStatus::Finished));
    }
}
