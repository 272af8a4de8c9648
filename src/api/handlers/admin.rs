//! Moderation console handlers: manual entry, review queue, approval,
//! lifecycle toggles, rejection, and the manual crawl trigger.
//!
//! Every handler here resolves [`require_admin`] before touching any
//! data; the 401/403 taxonomy comes out of the guard, not the handlers.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};

use crate::api::dto::{
    CrawlTriggerResponse, CreateEventRequest, EventDto, ModerationListParams,
    ModerationListResponse, PendingCountResponse, UpdateStatusRequest,
};
use crate::app_state::AppState;
use crate::auth::require_admin;
use crate::domain::EventId;
use crate::error::{CalendarError, ErrorResponse};

/// `POST /events` — Create a manual event entry.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidRequest`] for a blank title, plus the
/// admin-guard errors.
#[utoipa::path(
    post,
    path = "/api/v1/events",
    tag = "Moderation",
    summary = "Create a manual event",
    description = "Creates an admin-authored event. Manual entries skip the review queue: they are stored ACTIVE with a neutral hype score of 50 and full extraction confidence. The ticker field is free text, comma-split and trimmed server-side.",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, CalendarError> {
    require_admin(&state, &headers).await?;

    let event = state
        .events
        .create_manual(
            req.title,
            req.description,
            req.source_url,
            req.target_date,
            req.is_date_confirmed,
            req.event_type,
            &req.related_tickers,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(EventDto::from(event))))
}

/// `GET /admin/events` — Moderation review queue.
///
/// # Errors
///
/// Returns the admin-guard errors, or [`CalendarError`] on store failure.
#[utoipa::path(
    get,
    path = "/api/v1/admin/events",
    tag = "Moderation",
    summary = "List events for moderation",
    description = "Returns events newest-first, optionally filtered by lifecycle status. The pending count in the response ignores the filter and always reflects the whole store.",
    params(ModerationListParams),
    responses(
        (status = 200, description = "Moderation queue", body = ModerationListResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
    )
)]
pub async fn list_moderation_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ModerationListParams>,
) -> Result<impl IntoResponse, CalendarError> {
    require_admin(&state, &headers).await?;

    let (events, pending_count) = state.events.moderation_list(params.status).await?;
    let data: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();

    Ok(Json(ModerationListResponse {
        data,
        pending_count,
    }))
}

/// `GET /admin/events/pending-count` — Review-badge counter.
///
/// # Errors
///
/// Returns the admin-guard errors, or [`CalendarError`] on store failure.
#[utoipa::path(
    get,
    path = "/api/v1/admin/events/pending-count",
    tag = "Moderation",
    summary = "Count pending events",
    description = "Returns the number of events awaiting review, for the console badge.",
    responses(
        (status = 200, description = "Pending count", body = PendingCountResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
    )
)]
pub async fn pending_count(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, CalendarError> {
    require_admin(&state, &headers).await?;

    let count = state.events.pending_count().await?;
    Ok(Json(PendingCountResponse { count }))
}

/// `POST /admin/events/:id/approve` — Approve a pending event.
///
/// # Errors
///
/// Returns [`CalendarError::EventNotFound`] for a missing id or
/// [`CalendarError::InvalidTransition`] for a finished record, plus the
/// admin-guard errors.
#[utoipa::path(
    post,
    path = "/api/v1/admin/events/{id}/approve",
    tag = "Moderation",
    summary = "Approve a pending event",
    description = "Publishes a pending event (PENDING to ACTIVE). Approving an already-active event is a no-op.",
    params(
        ("id" = i64, Path, description = "Event identifier"),
    ),
    responses(
        (status = 200, description = "Event approved", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 409, description = "Illegal transition", body = ErrorResponse),
    )
)]
pub async fn approve_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<EventId>,
) -> Result<impl IntoResponse, CalendarError> {
    require_admin(&state, &headers).await?;

    let event = state.events.approve(id).await?;
    Ok(Json(EventDto::from(event)))
}

/// `PATCH /admin/events/:id/status` — Toggle an event's lifecycle state.
///
/// # Errors
///
/// Returns [`CalendarError::EventNotFound`] for a missing id or
/// [`CalendarError::InvalidTransition`] for an illegal transition, plus
/// the admin-guard errors.
#[utoipa::path(
    patch,
    path = "/api/v1/admin/events/{id}/status",
    tag = "Moderation",
    summary = "Update event status",
    description = "Moves an event between ACTIVE and FINISHED. Transitions are validated against the record's current status; a failed transition leaves the store untouched.",
    params(
        ("id" = i64, Path, description = "Event identifier"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 409, description = "Illegal transition", body = ErrorResponse),
    )
)]
pub async fn update_event_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<EventId>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, CalendarError> {
    require_admin(&state, &headers).await?;

    let event = state.events.set_status(id, req.status).await?;
    Ok(Json(EventDto::from(event)))
}

/// `DELETE /admin/events/:id` — Reject a pending event.
///
/// # Errors
///
/// Returns [`CalendarError::EventNotFound`] for a missing id or
/// [`CalendarError::NotRejectable`] for a non-pending record, plus the
/// admin-guard errors.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/events/{id}",
    tag = "Moderation",
    summary = "Reject a pending event",
    description = "Physically deletes a pending event. Rejection is irreversible and only defined for PENDING records; published events must be finished instead.",
    params(
        ("id" = i64, Path, description = "Event identifier"),
    ),
    responses(
        (status = 204, description = "Event rejected and deleted"),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 409, description = "Event is not pending", body = ErrorResponse),
    )
)]
pub async fn reject_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<EventId>,
) -> Result<impl IntoResponse, CalendarError> {
    require_admin(&state, &headers).await?;

    state.events.reject(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /admin/crawl/manual` — Trigger a crawler run.
///
/// # Errors
///
/// Returns the admin-guard errors.
#[utoipa::path(
    post,
    path = "/api/v1/admin/crawl/manual",
    tag = "Moderation",
    summary = "Trigger a manual crawl",
    description = "Kicks off the external discovery/scoring crawler in the background. The 202 only means the trigger was dispatched; new events appear in the review queue as the crawler finds them.",
    responses(
        (status = 202, description = "Crawl trigger dispatched", body = CrawlTriggerResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
    )
)]
pub async fn trigger_crawl(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, CalendarError> {
    require_admin(&state, &headers).await?;

    state.ingest.spawn_manual_run();
    Ok((
        StatusCode::ACCEPTED,
        Json(CrawlTriggerResponse {
            message: "Crawl started in background".to_string(),
        }),
    ))
}

/// Moderation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event))
        .route("/admin/events", get(list_moderation_events))
        .route("/admin/events/pending-count", get(pending_count))
        .route("/admin/events/{id}/approve", post(approve_event))
        .route("/admin/events/{id}/status", patch(update_event_status))
        .route("/admin/events/{id}", delete(reject_event))
        .route("/admin/crawl/manual", post(trigger_crawl))
}
