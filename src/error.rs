//! Service error types with HTTP status code mapping.
//!
//! [`CalendarError`] is the central error type for the service. Each
//! variant maps to a specific HTTP status code and structured JSON error
//! response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::EventStatus;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2002,
///     "message": "illegal status transition: PENDING -> FINISHED",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges below).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                  |
/// |-----------|-----------------|------------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request              |
/// | 2000–2999 | State/Not Found | 404 Not Found / 409 Conflict |
/// | 3000–3999 | Server/Upstream | 500 / 502                    |
/// | 4000–4999 | Auth            | 401 / 403                    |
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Event with the given identifier was not found. Carries the raw
    /// identifier text so a malformed (non-numeric) id reports the same
    /// way as a missing one.
    #[error("event not found: {0}")]
    EventNotFound(String),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The requested lifecycle transition is not legal.
    #[error("illegal status transition: {from} -> {to}")]
    InvalidTransition {
        /// Status the event currently holds.
        from: EventStatus,
        /// Status the caller asked for.
        to: EventStatus,
    },

    /// Reject is only defined for pending events.
    #[error("only pending events can be rejected (status: {0})")]
    NotRejectable(EventStatus),

    /// No bearer credential was supplied where one is required.
    #[error("authentication required")]
    MissingCredentials,

    /// The supplied bearer credential was rejected by the auth provider.
    #[error("invalid session token: {0}")]
    InvalidToken(String),

    /// Session is valid but the caller lacks the required role.
    #[error("access denied: admin role required")]
    Forbidden,

    /// The auth provider could not be reached or answered abnormally.
    #[error("auth provider error: {0}")]
    AuthUpstream(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CalendarError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::EventNotFound(_) => 2001,
            Self::InvalidTransition { .. } => 2002,
            Self::NotRejectable(_) => 2003,
            Self::Internal(_) => 3000,
            Self::PersistenceError(_) => 3001,
            Self::AuthUpstream(_) => 3002,
            Self::MissingCredentials => 4001,
            Self::InvalidToken(_) => 4002,
            Self::Forbidden => 4003,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::EventNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidTransition { .. } | Self::NotRejectable(_) => StatusCode::CONFLICT,
            Self::MissingCredentials | Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::AuthUpstream(_) => StatusCode::BAD_GATEWAY,
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CalendarError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn transition_error_maps_to_conflict() {
        let err = CalendarError::InvalidTransition {
            from: EventStatus::Pending,
            to: EventStatus::Finished,
        };
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), 2002);
    }

    #[test]
    fn auth_errors_map_to_401_and_403() {
        assert_eq!(
            CalendarError::MissingCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            CalendarError::InvalidToken("expired".to_string()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(CalendarError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn not_found_message_carries_raw_id() {
        let err = CalendarError::EventNotFound("abc".to_string());
        assert_eq!(err.to_string(), "event not found: abc");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
