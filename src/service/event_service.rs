//! Event service: orchestrates the moderation workflow over the store.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::tickers::parse_tickers;
use crate::domain::{Event, EventId, EventProxy, EventStatus, EventType, HypeMetric, NewEvent};
use crate::error::CalendarError;
use crate::persistence::{EventRepository, EventSort};

/// Outcome of an alert-subscription toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertToggle {
    /// The caller is now subscribed.
    Subscribed,
    /// The caller's subscription was removed.
    Unsubscribed,
}

/// Orchestration layer for all event operations.
///
/// Stateless coordinator over the [`EventRepository`]. Every mutation is a
/// single round trip to the store: validate against the current record,
/// write, and return the fresh record. Nothing is retried and nothing is
/// cached; consumers re-fetch after mutating.
#[derive(Debug, Clone)]
pub struct EventService {
    repo: Arc<dyn EventRepository>,
}

impl EventService {
    /// Creates a new `EventService`.
    #[must_use]
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }

    /// Lists events for the public dashboard.
    ///
    /// Returns the page of events plus the total matching count for
    /// pagination metadata.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] on store failure.
    pub async fn list_events(
        &self,
        status: Option<EventStatus>,
        sort: EventSort,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Event>, i64), CalendarError> {
        let events = self.repo.list_events(status, sort, offset, limit).await?;
        let total = self.repo.count_events(status).await?;
        Ok((events, total))
    }

    /// Lists events for the moderation console, most-recently-created
    /// first, bundled with the pending count for the badge.
    ///
    /// The pending count is computed independently of the active filter,
    /// always against `status = PENDING`.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] on store failure.
    pub async fn moderation_list(
        &self,
        status: Option<EventStatus>,
    ) -> Result<(Vec<Event>, i64), CalendarError> {
        let events = self
            .repo
            .list_events(status, EventSort::CreatedDesc, 0, i64::from(u16::MAX))
            .await?;
        let pending = self.pending_count().await?;
        Ok((events, pending))
    }

    /// Counts events awaiting moderation.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] on store failure.
    pub async fn pending_count(&self) -> Result<i64, CalendarError> {
        self.repo.count_events(Some(EventStatus::Pending)).await
    }

    /// Fetches an event with its hype series and proxy signals.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EventNotFound`] if the event does not
    /// exist, or a [`CalendarError`] on store failure.
    pub async fn detail(
        &self,
        id: EventId,
    ) -> Result<(Event, Vec<HypeMetric>, Vec<EventProxy>), CalendarError> {
        let event = self.fetch_or_not_found(id).await?;
        let metrics = self.repo.hype_metrics(id).await?;
        let proxies = self.repo.event_proxies(id).await?;
        Ok((event, metrics, proxies))
    }

    /// Fetches the hype series for an event, oldest sample first.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EventNotFound`] if the event does not
    /// exist, or a [`CalendarError`] on store failure.
    pub async fn hype_series(&self, id: EventId) -> Result<Vec<HypeMetric>, CalendarError> {
        self.fetch_or_not_found(id).await?;
        self.repo.hype_metrics(id).await
    }

    /// Creates a manual admin entry.
    ///
    /// The free-text ticker field is comma-split, trimmed, and emptied of
    /// blanks; the manual-entry lifecycle defaults are applied regardless
    /// of caller input (auto-approved at `ACTIVE`, `hype_score = 50`,
    /// `gpt_confidence = 1.0`).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRequest`] when the title is blank,
    /// or a [`CalendarError`] on store failure.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_manual(
        &self,
        title: String,
        description: Option<String>,
        source_url: Option<String>,
        target_date: NaiveDate,
        is_date_confirmed: bool,
        event_type: EventType,
        related_tickers: &str,
    ) -> Result<Event, CalendarError> {
        if title.trim().is_empty() {
            return Err(CalendarError::InvalidRequest(
                "title must not be empty".to_string(),
            ));
        }
        let new = NewEvent::manual_entry(
            title,
            description,
            source_url,
            target_date,
            is_date_confirmed,
            event_type,
            parse_tickers(related_tickers),
        );
        let event = self.repo.insert_event(&new).await?;
        tracing::info!(event_id = %event.id, "manual event created");
        Ok(event)
    }

    /// Approves a pending event (`PENDING → ACTIVE`).
    ///
    /// Idempotent in effect: approving an already-`ACTIVE` record is a
    /// no-op write. Approval never touches concluded events; a `FINISHED`
    /// record is reactivated through [`set_status`](Self::set_status),
    /// not through approve.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EventNotFound`] for a missing id,
    /// [`CalendarError::InvalidTransition`] for a `FINISHED` record, or a
    /// [`CalendarError`] on store failure.
    pub async fn approve(&self, id: EventId) -> Result<Event, CalendarError> {
        let current = self.fetch_or_not_found(id).await?;
        current.status.validate_approval()?;
        let updated = self
            .repo
            .update_status(id, EventStatus::Active)
            .await?
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))?;
        tracing::info!(event_id = %id, from = %current.status, "event approved");
        Ok(updated)
    }

    /// Moves an event to the requested lifecycle state after validating
    /// the transition against the record's current status.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EventNotFound`] for a missing id,
    /// [`CalendarError::InvalidTransition`] for an illegal transition, or
    /// a [`CalendarError`] on store failure. On failure the store is left
    /// untouched.
    pub async fn set_status(
        &self,
        id: EventId,
        target: EventStatus,
    ) -> Result<Event, CalendarError> {
        let current = self.fetch_or_not_found(id).await?;
        current.status.validate_transition(target)?;
        let updated = self
            .repo
            .update_status(id, target)
            .await?
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))?;
        tracing::info!(event_id = %id, from = %current.status, to = %target, "status updated");
        Ok(updated)
    }

    /// Rejects a pending event by physically deleting it.
    ///
    /// Destructive and irreversible: no tombstone, no undo, no audit
    /// trail. A subsequent fetch by id reports not-found.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EventNotFound`] for a missing id,
    /// [`CalendarError::NotRejectable`] for a non-`PENDING` record, or a
    /// [`CalendarError`] on store failure.
    pub async fn reject(&self, id: EventId) -> Result<(), CalendarError> {
        let current = self.fetch_or_not_found(id).await?;
        if !current.status.is_pending() {
            return Err(CalendarError::NotRejectable(current.status));
        }
        let deleted = self.repo.delete_event(id).await?;
        if !deleted {
            return Err(CalendarError::EventNotFound(id.to_string()));
        }
        tracing::info!(event_id = %id, "pending event rejected and deleted");
        Ok(())
    }

    /// Toggles the caller's alert subscription for an event.
    ///
    /// Subscribes when no subscription exists, unsubscribes otherwise.
    /// The subscription record is the only authority; no local state is
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EventNotFound`] for a missing event, or a
    /// [`CalendarError`] on store failure.
    pub async fn toggle_alert(
        &self,
        user_id: Uuid,
        event_id: EventId,
    ) -> Result<AlertToggle, CalendarError> {
        self.fetch_or_not_found(event_id).await?;
        if self.repo.alert_exists(user_id, event_id).await? {
            self.repo.delete_alert(user_id, event_id).await?;
            Ok(AlertToggle::Unsubscribed)
        } else {
            self.repo.insert_alert(user_id, event_id).await?;
            Ok(AlertToggle::Subscribed)
        }
    }

    /// Reads the role attribute for an auth subject.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] on store failure.
    pub async fn user_role(&self, user_id: Uuid) -> Result<Option<String>, CalendarError> {
        self.repo.user_role(user_id).await
    }

    async fn fetch_or_not_found(&self, id: EventId) -> Result<Event, CalendarError> {
        self.repo
            .fetch_event(id)
            .await?
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))
    }
}
