//! Alert subscription handler.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::AlertToggleResponse;
use crate::app_state::AppState;
use crate::auth::require_session;
use crate::domain::EventId;
use crate::error::{CalendarError, ErrorResponse};

/// `POST /alerts/:event_id` — Toggle the caller's alert for an event.
///
/// # Errors
///
/// Returns [`CalendarError::MissingCredentials`] without touching the
/// store when no token is supplied, and
/// [`CalendarError::EventNotFound`] for a missing or malformed event id.
#[utoipa::path(
    post,
    path = "/api/v1/alerts/{event_id}",
    tag = "Alerts",
    summary = "Toggle an event alert",
    description = "Subscribes the caller to an event's notifications, or unsubscribes if a subscription already exists. Requires a signed-in session; the subscription record is the only state.",
    params(
        ("event_id" = i64, Path, description = "Event identifier"),
    ),
    responses(
        (status = 200, description = "Resulting subscription state", body = AlertToggleResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn toggle_alert(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, CalendarError> {
    let user = require_session(&state, &headers).await?;

    let event_id: EventId = event_id
        .parse()
        .map_err(|_| CalendarError::EventNotFound(event_id))?;
    let toggle = state.events.toggle_alert(user.id, event_id).await?;

    Ok(Json(AlertToggleResponse::from(toggle)))
}

/// Alert routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/alerts/{event_id}", post(toggle_alert))
}
