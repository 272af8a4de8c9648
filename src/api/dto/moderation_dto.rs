//! DTOs for the admin console endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::event_dto::EventDto;
use crate::domain::{EventStatus, EventType};

/// Request body for `POST /events` (manual event entry).
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CreateEventRequest {
    /// Event headline. Must be non-blank.
    pub title: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional provenance link.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Expected event date.
    pub target_date: NaiveDate,
    /// Whether the date is confirmed. Manual entries default to confirmed.
    #[serde(default = "default_date_confirmed")]
    pub is_date_confirmed: bool,
    /// Author-assigned category.
    pub event_type: EventType,
    /// Comma-separated ticker symbols (`"AAPL, TSLA"`).
    #[serde(default)]
    pub related_tickers: String,
}

fn default_date_confirmed() -> bool {
    true
}

/// Query parameters for `GET /admin/events`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct ModerationListParams {
    /// Optional lifecycle filter. Omit for all statuses.
    #[serde(default)]
    pub status: Option<EventStatus>,
}

/// Moderation list response. The pending count is computed over the whole
/// store, regardless of the active status filter.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ModerationListResponse {
    /// Events matching the filter, newest first.
    pub data: Vec<EventDto>,
    /// Number of events awaiting review across the whole store.
    pub pending_count: i64,
}

/// Response for `GET /admin/events/pending-count`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PendingCountResponse {
    /// Number of events awaiting review.
    pub count: i64,
}

/// Request body for `PATCH /admin/events/{id}/status`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct UpdateStatusRequest {
    /// Requested lifecycle state.
    pub status: EventStatus,
}

/// Response for `POST /admin/crawl/manual`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CrawlTriggerResponse {
    /// Human-readable acknowledgement.
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_date_confirmed() {
        let json = r#"{"title":"Fed decision","target_date":"2026-09-17","event_type":"BIG_EVENT"}"#;
        let req: CreateEventRequest = serde_json::from_str(json).unwrap_or_else(|e| {
            panic!("deserialize failed: {e}");
        });
        assert!(req.is_date_confirmed);
        assert!(req.related_tickers.is_empty());
    }

    #[test]
    fn status_filter_is_optional() {
        let params: ModerationListParams = serde_json::from_str("{}").unwrap_or_else(|e| {
            panic!("deserialize failed: {e}");
        });
        assert!(params.status.is_none());
    }
}
