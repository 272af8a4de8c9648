//! Event aggregate and its read-only companions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{EventId, EventStatus};

/// Hype score assigned to manually created events.
pub const MANUAL_HYPE_SCORE: i32 = 50;

/// Extraction confidence assigned to manually created events. Manual
/// entries are authored by an admin, so confidence is absolute.
pub const MANUAL_GPT_CONFIDENCE: f64 = 1.0;

/// Author-assigned event category. Not lifecycle state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "event_type")]
pub enum EventType {
    /// A confirmed, fact-driven event (product launch, regulatory date).
    #[sqlx(rename = "BIG_EVENT")]
    BigEvent,
    /// A speculation-driven wave of attention around a theme.
    #[sqlx(rename = "WAVE_EVENT")]
    WaveEvent,
}

/// A speculative market event, the sole entity with lifecycle semantics.
///
/// The authoritative copy lives in the store; everything a consumer holds
/// is a disposable snapshot re-fetched after each mutation. `hype_score`
/// and `gpt_confidence` are computed by the external scoring pipeline and
/// are read-mostly here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    /// Store-assigned identifier, stable after creation.
    pub id: EventId,
    /// Event headline.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Provenance link, if the event was discovered by the crawler.
    pub source_url: Option<String>,
    /// The date the event is expected to happen; drives D-Day labels.
    pub target_date: NaiveDate,
    /// Whether `target_date` is confirmed rather than speculated.
    pub is_date_confirmed: bool,
    /// Author-assigned category.
    pub event_type: EventType,
    /// Externally-computed hype score, 0–100.
    pub hype_score: i32,
    /// Externally-computed extraction confidence, 0.0–1.0.
    pub gpt_confidence: Option<f64>,
    /// Ordered ticker symbols related to this event.
    pub related_tickers: Vec<String>,
    /// Lifecycle state; see [`EventStatus`].
    pub status: EventStatus,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-assigned last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new event, with lifecycle defaults already applied.
#[derive(Debug, Clone)]
pub struct NewEvent {
    /// Event headline.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Provenance link.
    pub source_url: Option<String>,
    /// Expected event date.
    pub target_date: NaiveDate,
    /// Whether the date is confirmed.
    pub is_date_confirmed: bool,
    /// Author-assigned category.
    pub event_type: EventType,
    /// Initial hype score.
    pub hype_score: i32,
    /// Extraction confidence.
    pub gpt_confidence: f64,
    /// Parsed, ordered ticker symbols.
    pub related_tickers: Vec<String>,
    /// Initial lifecycle state.
    pub status: EventStatus,
}

impl NewEvent {
    /// Builds the insert payload for a manual admin entry.
    ///
    /// Manual entries are auto-approved: they are inserted directly at
    /// `ACTIVE` with `hype_score = 50` and `gpt_confidence = 1.0`,
    /// regardless of anything the caller might wish for those fields.
    /// A manual creation never produces a `PENDING` record.
    #[must_use]
    pub fn manual_entry(
        title: String,
        description: Option<String>,
        source_url: Option<String>,
        target_date: NaiveDate,
        is_date_confirmed: bool,
        event_type: EventType,
        related_tickers: Vec<String>,
    ) -> Self {
        Self {
            title,
            description,
            source_url,
            target_date,
            is_date_confirmed,
            event_type,
            hype_score: MANUAL_HYPE_SCORE,
            gpt_confidence: MANUAL_GPT_CONFIDENCE,
            related_tickers,
            status: EventStatus::Active,
        }
    }
}

/// A time-stamped hype measurement for one event, used only for charting.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct HypeMetric {
    /// Row identifier.
    pub id: i64,
    /// Event this measurement belongs to.
    pub event_id: EventId,
    /// Search interest sample.
    pub search_volume: i32,
    /// Community discussion sample.
    pub community_buzz: i32,
    /// Video mention count sample.
    pub video_mentions: i32,
    /// The day the sample covers.
    pub recorded_at: NaiveDate,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A detected proxy signal for an event. Display-only.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct EventProxy {
    /// Row identifier.
    pub id: i64,
    /// Event this signal points at.
    pub parent_event_id: EventId,
    /// Human-readable signal name.
    pub proxy_name: String,
    /// When the signal was detected.
    pub detected_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn target_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default()
    }

    #[test]
    fn manual_entry_is_auto_approved() {
        let new = NewEvent::manual_entry(
            "GTA VI launch".to_string(),
            None,
            None,
            target_date(),
            true,
            EventType::BigEvent,
            vec!["TTWO".to_string()],
        );
        assert_eq!(new.status, EventStatus::Active);
        assert_eq!(new.hype_score, MANUAL_HYPE_SCORE);
        assert!((new.gpt_confidence - MANUAL_GPT_CONFIDENCE).abs() < f64::EPSILON);
    }

    #[test]
    fn event_type_serializes_screaming_snake() {
        let json = serde_json::to_string(&EventType::WaveEvent).unwrap_or_default();
        assert_eq!(json, "\"WAVE_EVENT\"");
    }
}
