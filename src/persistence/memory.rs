//! In-memory event store used by workflow tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use super::{EventRepository, EventSort};
use crate::domain::{Event, EventId, EventProxy, EventStatus, HypeMetric, NewEvent};
use crate::error::CalendarError;

#[derive(Debug, Default)]
struct Inner {
    events: Vec<Event>,
    metrics: Vec<HypeMetric>,
    proxies: Vec<EventProxy>,
    roles: HashMap<Uuid, String>,
    alerts: HashSet<(Uuid, i64)>,
    next_id: i64,
}

/// Hash-map backed [`EventRepository`] double. Single `Mutex`, no I/O.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    inner: Mutex<Inner>,
}

impl MemoryEventStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Registers a user record with the given role.
    pub fn set_role(&self, user_id: Uuid, role: &str) {
        self.lock().roles.insert(user_id, role.to_string());
    }

    /// Seeds a hype sample for an event.
    pub fn add_metric(&self, metric: HypeMetric) {
        self.lock().metrics.push(metric);
    }

    /// Seeds a proxy signal for an event.
    pub fn add_proxy(&self, proxy: EventProxy) {
        self.lock().proxies.push(proxy);
    }

    fn store_event(inner: &mut Inner, new: &NewEvent) -> Event {
        inner.next_id += 1;
        // Spread creation timestamps so CreatedDesc ordering is observable.
        let created = Utc::now() + Duration::seconds(inner.next_id);
        let event = Event {
            id: EventId::new(inner.next_id),
            title: new.title.clone(),
            description: new.description.clone(),
            source_url: new.source_url.clone(),
            target_date: new.target_date,
            is_date_confirmed: new.is_date_confirmed,
            event_type: new.event_type,
            hype_score: new.hype_score,
            gpt_confidence: Some(new.gpt_confidence),
            related_tickers: new.related_tickers.clone(),
            status: new.status,
            created_at: created,
            updated_at: created,
        };
        inner.events.push(event.clone());
        event
    }

    /// Seeds an event directly, honoring the status carried by `new`.
    pub fn seed(&self, new: &NewEvent) -> Event {
        Self::store_event(&mut self.lock(), new)
    }
}

#[async_trait]
impl EventRepository for MemoryEventStore {
    async fn list_events(
        &self,
        status: Option<EventStatus>,
        sort: EventSort,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Event>, CalendarError> {
        let inner = self.lock();
        let mut rows: Vec<Event> = inner
            .events
            .iter()
            .filter(|e| status.is_none_or(|s| e.status == s))
            .cloned()
            .collect();
        match sort {
            EventSort::CreatedDesc => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            EventSort::HypeDesc => rows.sort_by(|a, b| b.hype_score.cmp(&a.hype_score)),
        }
        Ok(rows
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn count_events(&self, status: Option<EventStatus>) -> Result<i64, CalendarError> {
        let inner = self.lock();
        let count = inner
            .events
            .iter()
            .filter(|e| status.is_none_or(|s| e.status == s))
            .count();
        Ok(count as i64)
    }

    async fn fetch_event(&self, id: EventId) -> Result<Option<Event>, CalendarError> {
        Ok(self.lock().events.iter().find(|e| e.id == id).cloned())
    }

    async fn insert_event(&self, new: &NewEvent) -> Result<Event, CalendarError> {
        Ok(Self::store_event(&mut self.lock(), new))
    }

    async fn update_status(
        &self,
        id: EventId,
        status: EventStatus,
    ) -> Result<Option<Event>, CalendarError> {
        let mut inner = self.lock();
        let Some(event) = inner.events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        event.status = status;
        event.updated_at = Utc::now();
        Ok(Some(event.clone()))
    }

    async fn delete_event(&self, id: EventId) -> Result<bool, CalendarError> {
        let mut inner = self.lock();
        let before = inner.events.len();
        inner.events.retain(|e| e.id != id);
        Ok(inner.events.len() < before)
    }

    async fn hype_metrics(&self, id: EventId) -> Result<Vec<HypeMetric>, CalendarError> {
        let inner = self.lock();
        let mut rows: Vec<HypeMetric> = inner
            .metrics
            .iter()
            .filter(|m| m.event_id == id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));
        Ok(rows)
    }

    async fn event_proxies(&self, id: EventId) -> Result<Vec<EventProxy>, CalendarError> {
        let inner = self.lock();
        let mut rows: Vec<EventProxy> = inner
            .proxies
            .iter()
            .filter(|p| p.parent_event_id == id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.detected_at.cmp(&a.detected_at));
        Ok(rows)
    }

    async fn user_role(&self, user_id: Uuid) -> Result<Option<String>, CalendarError> {
        Ok(self.lock().roles.get(&user_id).cloned())
    }

    async fn alert_exists(&self, user_id: Uuid, event_id: EventId) -> Result<bool, CalendarError> {
        Ok(self.lock().alerts.contains(&(user_id, event_id.get())))
    }

    async fn insert_alert(&self, user_id: Uuid, event_id: EventId) -> Result<(), CalendarError> {
        self.lock().alerts.insert((user_id, event_id.get()));
        Ok(())
    }

    async fn delete_alert(&self, user_id: Uuid, event_id: EventId) -> Result<(), CalendarError> {
        self.lock().alerts.remove(&(user_id, event_id.get()));
        Ok(())
    }
}
