//! Persistence layer: the authoritative event store.
//!
//! [`EventRepository`] is the seam between the moderation workflow and the
//! store. Production uses [`PostgresEventStore`]; tests use the in-memory
//! double in [`memory`].

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Event, EventId, EventProxy, EventStatus, HypeMetric, NewEvent};
use crate::error::CalendarError;

/// Ordering applied to event list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventSort {
    /// Most-recently-created first. The moderation console uses this
    /// unconditionally.
    #[default]
    CreatedDesc,
    /// Highest hype score first. The public dashboard's default view.
    HypeDesc,
}

/// Storage operations backing the event lifecycle and its read models.
///
/// Every mutation is a single round trip; there is no transaction spanning
/// multiple calls. Callers re-fetch after mutating.
#[async_trait]
pub trait EventRepository: Send + Sync + std::fmt::Debug {
    /// Lists events, optionally filtered by status (equality), ordered per
    /// `sort`, with offset/limit pagination.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn list_events(
        &self,
        status: Option<EventStatus>,
        sort: EventSort,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Event>, CalendarError>;

    /// Counts events, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn count_events(&self, status: Option<EventStatus>) -> Result<i64, CalendarError>;

    /// Fetches a single event by id, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn fetch_event(&self, id: EventId) -> Result<Option<Event>, CalendarError>;

    /// Inserts a new event and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn insert_event(&self, new: &NewEvent) -> Result<Event, CalendarError>;

    /// Updates the status of the event with the given id, returning the
    /// updated record or `None` if the id does not exist. Single-field
    /// update; `updated_at` is bumped server-side.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn update_status(
        &self,
        id: EventId,
        status: EventStatus,
    ) -> Result<Option<Event>, CalendarError>;

    /// Physically deletes the event with the given id. Returns `true` if a
    /// row was removed. No tombstone is left behind.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn delete_event(&self, id: EventId) -> Result<bool, CalendarError>;

    /// Returns the hype series for an event, oldest sample first.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn hype_metrics(&self, id: EventId) -> Result<Vec<HypeMetric>, CalendarError>;

    /// Returns the proxy signals detected for an event, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn event_proxies(&self, id: EventId) -> Result<Vec<EventProxy>, CalendarError>;

    /// Looks up the role attribute for an auth subject, or `None` if the
    /// user record does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn user_role(&self, user_id: Uuid) -> Result<Option<String>, CalendarError>;

    /// Returns `true` if the user currently subscribes to alerts for the
    /// given event.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn alert_exists(&self, user_id: Uuid, event_id: EventId) -> Result<bool, CalendarError>;

    /// Records an alert subscription.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn insert_alert(&self, user_id: Uuid, event_id: EventId) -> Result<(), CalendarError>;

    /// Removes an alert subscription.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PersistenceError`] on store failure.
    async fn delete_alert(&self, user_id: Uuid, event_id: EventId) -> Result<(), CalendarError>;
}

pub use postgres::PostgresEventStore;
