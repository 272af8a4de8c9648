//! Event DTOs for the public dashboard endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common_dto::{PaginationMeta, PaginationParams, default_page, default_per_page};
use crate::domain::dday::d_day_label;
use crate::domain::{Event, EventId, EventProxy, EventStatus, EventType, HypeMetric};
use crate::persistence::EventSort;

/// Sort options for the public event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortParam {
    /// Most-recently-created first.
    #[default]
    Created,
    /// Highest hype score first (the dashboard's lead view).
    Hype,
}

impl From<SortParam> for EventSort {
    fn from(sort: SortParam) -> Self {
        match sort {
            SortParam::Created => Self::CreatedDesc,
            SortParam::Hype => Self::HypeDesc,
        }
    }
}

/// Query parameters for `GET /events`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct EventListParams {
    /// Optional lifecycle filter (server-side equality).
    #[serde(default)]
    pub status: Option<EventStatus>,
    /// Sort order. Defaults to creation time, newest first.
    #[serde(default)]
    pub sort: SortParam,
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (max 100).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl EventListParams {
    /// Returns the clamped pagination portion of the parameters.
    #[must_use]
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            per_page: self.per_page,
        }
        .clamped()
    }
}

/// Full event payload.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct EventDto {
    /// Event identifier.
    pub id: EventId,
    /// Event headline.
    pub title: String,
    /// Optional longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Provenance link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Expected event date.
    pub target_date: NaiveDate,
    /// Whether the date is confirmed.
    pub is_date_confirmed: bool,
    /// Author-assigned category.
    pub event_type: EventType,
    /// Externally-computed hype score, 0–100.
    pub hype_score: i32,
    /// Externally-computed extraction confidence, 0.0–1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpt_confidence: Option<f64>,
    /// Ordered related ticker symbols.
    pub related_tickers: Vec<String>,
    /// Lifecycle state.
    pub status: EventStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            source_url: event.source_url,
            target_date: event.target_date,
            is_date_confirmed: event.is_date_confirmed,
            event_type: event.event_type,
            hype_score: event.hype_score,
            gpt_confidence: event.gpt_confidence,
            related_tickers: event.related_tickers,
            status: event.status,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// Event card payload for list responses, with the countdown label
/// precomputed server-side.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct EventSummaryDto {
    /// Event identifier.
    pub id: EventId,
    /// Event headline.
    pub title: String,
    /// Author-assigned category.
    pub event_type: EventType,
    /// Expected event date.
    pub target_date: NaiveDate,
    /// Countdown label (`D-3`, `D-Day`, `D+2`).
    pub d_day: String,
    /// Whether the date is confirmed.
    pub is_date_confirmed: bool,
    /// Externally-computed hype score.
    pub hype_score: i32,
    /// Ordered related ticker symbols.
    pub related_tickers: Vec<String>,
    /// Lifecycle state.
    pub status: EventStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl EventSummaryDto {
    /// Builds a card summary, computing the D-Day label against `today`.
    #[must_use]
    pub fn from_event(event: Event, today: NaiveDate) -> Self {
        let d_day = d_day_label(event.target_date, today);
        Self {
            id: event.id,
            title: event.title,
            event_type: event.event_type,
            target_date: event.target_date,
            d_day,
            is_date_confirmed: event.is_date_confirmed,
            hype_score: event.hype_score,
            related_tickers: event.related_tickers,
            status: event.status,
            created_at: event.created_at,
        }
    }
}

/// Paginated list response for `GET /events`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EventListResponse {
    /// Event card summaries.
    pub data: Vec<EventSummaryDto>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

/// Detail response for `GET /events/{id}`, embedding the read-only
/// relations.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EventDetailResponse {
    /// The event itself.
    #[serde(flatten)]
    pub event: EventDto,
    /// Hype samples, oldest first.
    pub hype_metrics: Vec<HypeMetric>,
    /// Detected proxy signals, newest first.
    pub proxies: Vec<EventProxy>,
}

/// One chart-ready point of the hype series.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HypePointDto {
    /// Short display date label (e.g. `"Aug 27"`).
    pub date: String,
    /// Search interest sample.
    pub search_volume: i32,
    /// Community discussion sample.
    pub community_buzz: i32,
    /// Video mention count sample.
    pub video_mentions: i32,
}

impl From<&HypeMetric> for HypePointDto {
    fn from(metric: &HypeMetric) -> Self {
        Self {
            date: metric.recorded_at.format("%b %d").to_string(),
            search_volume: metric.search_volume,
            community_buzz: metric.community_buzz,
            video_mentions: metric.video_mentions,
        }
    }
}

/// Chart series response for `GET /events/{id}/hype`. Points are ordered
/// oldest first, ready to plot left to right.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HypeSeriesResponse {
    /// Chart points.
    pub data: Vec<HypePointDto>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_event(target: NaiveDate) -> Event {
        Event {
            id: EventId::new(1),
            title: "launch".to_string(),
            description: None,
            source_url: None,
            target_date: target,
            is_date_confirmed: true,
            event_type: EventType::BigEvent,
            hype_score: 64,
            gpt_confidence: Some(0.9),
            related_tickers: vec!["AAPL".to_string()],
            status: EventStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn summary_carries_d_day_label() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap_or_default();
        let target = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap_or_default();
        let summary = EventSummaryDto::from_event(make_event(target), today);
        assert_eq!(summary.d_day, "D-3");
    }

    #[test]
    fn hype_point_formats_display_date() {
        let metric = HypeMetric {
            id: 1,
            event_id: EventId::new(1),
            search_volume: 10,
            community_buzz: 20,
            video_mentions: 3,
            recorded_at: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap_or_default(),
            created_at: Utc::now(),
        };
        let point = HypePointDto::from(&metric);
        assert_eq!(point.date, "Aug 05");
        assert_eq!(point.community_buzz, 20);
    }

    #[test]
    fn sort_param_defaults_to_created() {
        let params: EventListParams = serde_json::from_str("{}").unwrap_or_else(|e| {
            panic!("deserialize failed: {e}");
        });
        assert_eq!(params.sort, SortParam::Created);
        assert_eq!(params.page, 1);
    }
}
