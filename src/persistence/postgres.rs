//! PostgreSQL implementation of the event store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{EventRepository, EventSort};
use crate::domain::{Event, EventId, EventProxy, EventStatus, HypeMetric, NewEvent};
use crate::error::CalendarError;

/// Column list shared by every query returning full event records.
const EVENT_COLUMNS: &str = "id, title, description, source_url, target_date, is_date_confirmed, \
     event_type, hype_score, gpt_confidence, related_tickers, status, created_at, updated_at";

/// PostgreSQL-backed event store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresEventStore {
    pool: PgPool,
}

impl PostgresEventStore {
    /// Creates a new event store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const fn order_clause(sort: EventSort) -> &'static str {
    match sort {
        EventSort::CreatedDesc => "created_at DESC",
        EventSort::HypeDesc => "hype_score DESC",
    }
}

fn persistence_err(e: sqlx::Error) -> CalendarError {
    CalendarError::PersistenceError(e.to_string())
}

#[async_trait]
impl EventRepository for PostgresEventStore {
    async fn list_events(
        &self,
        status: Option<EventStatus>,
        sort: EventSort,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Event>, CalendarError> {
        let order = order_clause(sort);
        let rows = if let Some(status) = status {
            sqlx::query_as::<_, Event>(&format!(
                "SELECT {EVENT_COLUMNS} FROM events WHERE status = $1 \
                 ORDER BY {order} LIMIT $2 OFFSET $3",
            ))
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, Event>(&format!(
                "SELECT {EVENT_COLUMNS} FROM events ORDER BY {order} LIMIT $1 OFFSET $2",
            ))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(persistence_err)?;

        Ok(rows)
    }

    async fn count_events(&self, status: Option<EventStatus>) -> Result<i64, CalendarError> {
        let count = if let Some(status) = status {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events WHERE status = $1")
                .bind(status)
                .fetch_one(&self.pool)
                .await
        } else {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
                .fetch_one(&self.pool)
                .await
        }
        .map_err(persistence_err)?;

        Ok(count)
    }

    async fn fetch_event(&self, id: EventId) -> Result<Option<Event>, CalendarError> {
        sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(persistence_err)
    }

    async fn insert_event(&self, new: &NewEvent) -> Result<Event, CalendarError> {
        sqlx::query_as::<_, Event>(&format!(
            "INSERT INTO events (title, description, source_url, target_date, \
             is_date_confirmed, event_type, hype_score, gpt_confidence, \
             related_tickers, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {EVENT_COLUMNS}",
        ))
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.source_url)
        .bind(new.target_date)
        .bind(new.is_date_confirmed)
        .bind(new.event_type)
        .bind(new.hype_score)
        .bind(new.gpt_confidence)
        .bind(&new.related_tickers)
        .bind(new.status)
        .fetch_one(&self.pool)
        .await
        .map_err(persistence_err)
    }

    async fn update_status(
        &self,
        id: EventId,
        status: EventStatus,
    ) -> Result<Option<Event>, CalendarError> {
        sqlx::query_as::<_, Event>(&format!(
            "UPDATE events SET status = $2, updated_at = now() WHERE id = $1 \
             RETURNING {EVENT_COLUMNS}",
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(persistence_err)
    }

    async fn delete_event(&self, id: EventId) -> Result<bool, CalendarError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(persistence_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn hype_metrics(&self, id: EventId) -> Result<Vec<HypeMetric>, CalendarError> {
        sqlx::query_as::<_, HypeMetric>(
            "SELECT id, event_id, search_volume, community_buzz, video_mentions, \
             recorded_at, created_at \
             FROM hype_metrics WHERE event_id = $1 ORDER BY recorded_at ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(persistence_err)
    }

    async fn event_proxies(&self, id: EventId) -> Result<Vec<EventProxy>, CalendarError> {
        sqlx::query_as::<_, EventProxy>(
            "SELECT id, parent_event_id, proxy_name, detected_at \
             FROM event_proxies WHERE parent_event_id = $1 ORDER BY detected_at DESC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(persistence_err)
    }

    async fn user_role(&self, user_id: Uuid) -> Result<Option<String>, CalendarError> {
        sqlx::query_scalar::<_, String>("SELECT role FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence_err)
    }

    async fn alert_exists(&self, user_id: Uuid, event_id: EventId) -> Result<bool, CalendarError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM alerts WHERE user_id = $1 AND event_id = $2)",
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(persistence_err)
    }

    async fn insert_alert(&self, user_id: Uuid, event_id: EventId) -> Result<(), CalendarError> {
        sqlx::query(
            "INSERT INTO alerts (user_id, event_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(event_id)
        .execute(&self.pool)
        .await
        .map_err(persistence_err)?;

        Ok(())
    }

    async fn delete_alert(&self, user_id: Uuid, event_id: EventId) -> Result<(), CalendarError> {
        sqlx::query("DELETE FROM alerts WHERE user_id = $1 AND event_id = $2")
            .bind(user_id)
            .bind(event_id)
            .execute(&self.pool)
            .await
            .map_err(persistence_err)?;

        Ok(())
    }
}
