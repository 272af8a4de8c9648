//! Public dashboard handlers: event list, detail, and hype series.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{
    EventDetailResponse, EventListParams, EventListResponse, EventSummaryDto, HypePointDto,
    HypeSeriesResponse, PaginationMeta,
};
use crate::app_state::AppState;
use crate::domain::EventId;
use crate::error::{CalendarError, ErrorResponse};

/// Parses a path segment into an [`EventId`].
///
/// A malformed (non-numeric) id is indistinguishable from a missing one:
/// both report not-found, never a validation error.
fn parse_event_id(raw: &str) -> Result<EventId, CalendarError> {
    raw.parse()
        .map_err(|_| CalendarError::EventNotFound(raw.to_string()))
}

/// `GET /events` — List events for the dashboard.
///
/// # Errors
///
/// Returns [`CalendarError`] on store failure.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Events",
    summary = "List events",
    description = "Returns a paginated list of event cards with server-computed D-Day countdown labels. Supports filtering by lifecycle status and sorting by creation time or hype score.",
    params(EventListParams),
    responses(
        (status = 200, description = "Paginated event list", body = EventListResponse),
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> Result<impl IntoResponse, CalendarError> {
    let pagination = params.pagination();
    let (events, total) = state
        .events
        .list_events(
            params.status,
            params.sort.into(),
            pagination.offset(),
            i64::from(pagination.per_page),
        )
        .await?;

    let today = Utc::now().date_naive();
    let data: Vec<EventSummaryDto> = events
        .into_iter()
        .map(|e| EventSummaryDto::from_event(e, today))
        .collect();

    Ok(Json(EventListResponse {
        data,
        pagination: PaginationMeta::for_page(&pagination, total),
    }))
}

/// `GET /events/:id` — Event detail with hype series and proxy signals.
///
/// # Errors
///
/// Returns [`CalendarError::EventNotFound`] for a missing or malformed id.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    tag = "Events",
    summary = "Get event details",
    description = "Returns the full event record with its hype metric history (oldest first) and detected proxy signals (newest first).",
    params(
        ("id" = i64, Path, description = "Event identifier"),
    ),
    responses(
        (status = 200, description = "Event details", body = EventDetailResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CalendarError> {
    let id = parse_event_id(&id)?;
    let (event, hype_metrics, proxies) = state.events.detail(id).await?;

    Ok(Json(EventDetailResponse {
        event: event.into(),
        hype_metrics,
        proxies,
    }))
}

/// `GET /events/:id/hype` — Chart-ready hype series for an event.
///
/// # Errors
///
/// Returns [`CalendarError::EventNotFound`] for a missing or malformed id.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}/hype",
    tag = "Events",
    summary = "Get hype series",
    description = "Returns the event's hype samples reshaped for charting: one point per recorded day, oldest first, with short display date labels.",
    params(
        ("id" = i64, Path, description = "Event identifier"),
    ),
    responses(
        (status = 200, description = "Hype chart series", body = HypeSeriesResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_hype_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CalendarError> {
    let id = parse_event_id(&id)?;
    let metrics = state.events.hype_series(id).await?;
    let data: Vec<HypePointDto> = metrics.iter().map(HypePointDto::from).collect();

    Ok(Json(HypeSeriesResponse { data }))
}

/// Public event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{id}", get(get_event))
        .route("/events/{id}/hype", get(get_hype_series))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_id_reports_not_found() {
        let result = parse_event_id("not-a-number");
        assert!(matches!(result, Err(CalendarError::EventNotFound(_))));
    }

    #[test]
    fn numeric_id_parses() {
        let result = parse_event_id("17");
        assert_eq!(result.ok(), Some(EventId::new(17)));
    }
}
