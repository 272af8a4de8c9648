//! Auth callback handler for the provider's code-exchange redirect.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::http::header::HOST;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::auth::select_redirect_origin;
use crate::error::CalendarError;

/// Query parameters the auth provider appends to the callback redirect.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct CallbackParams {
    /// One-time authorization code.
    #[serde(default)]
    pub code: Option<String>,
    /// Path to land on after a successful exchange.
    #[serde(default)]
    pub next: Option<String>,
}

/// Resolves the browser-facing origin for the final redirect.
fn request_origin(state: &AppState, headers: &HeaderMap) -> String {
    let forwarded = headers
        .get("x-forwarded-host")
        .and_then(|v| v.to_str().ok());
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    select_redirect_origin(
        state.config.site_url.as_deref(),
        forwarded,
        &format!("http://{host}"),
    )
}

/// `GET /auth/callback` — Complete the provider's sign-in redirect.
///
/// Always answers with a browser redirect: to the requested landing path
/// on success, to the site's error page with a fixed reason token on
/// failure. Only same-site landing paths are honored.
#[utoipa::path(
    get,
    path = "/auth/callback",
    tag = "Auth",
    summary = "Auth provider callback",
    description = "Exchanges the provider's one-time authorization code for a session, then redirects the browser back to the site. Failures redirect to the site's error page with a reason token instead of rendering a response body.",
    params(CallbackParams),
    responses(
        (status = 303, description = "Redirect to the landing path or error page"),
    )
)]
pub async fn auth_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CallbackParams>,
) -> impl IntoResponse {
    let origin = request_origin(&state, &headers);

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        return Redirect::to(&format!("{origin}/auth/error?error=NoCodeProvided"));
    };

    match state.sessions.exchange_code(&code).await {
        Ok(()) => {
            let next = params
                .next
                .filter(|n| n.starts_with('/'))
                .unwrap_or_else(|| "/".to_string());
            Redirect::to(&format!("{origin}{next}"))
        }
        Err(CalendarError::InvalidToken(_)) => {
            tracing::warn!("auth code exchange rejected");
            Redirect::to(&format!("{origin}/auth/error?error=ExchangeFailed"))
        }
        Err(e) => {
            tracing::warn!(error = %e, "auth provider unavailable during code exchange");
            Redirect::to(&format!("{origin}/auth/error?error=AuthUnavailable"))
        }
    }
}

/// Auth routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/callback", get(auth_callback))
}
