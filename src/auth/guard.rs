//! Session and admin-role guards for protected handlers.
//!
//! Every admin handler calls [`require_admin`] before touching any data:
//! resolve the bearer credential, verify it with the auth provider, then
//! read the user's role from the store and require `ADMIN`. The guard is
//! the only path into admin mutations; no admin data access happens
//! before it resolves.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

use super::client::AuthUser;
use crate::app_state::AppState;
use crate::error::CalendarError;

/// Role attribute required for moderation endpoints.
const ADMIN_ROLE: &str = "ADMIN";

/// Extracts the bearer token from the `Authorization` header.
///
/// # Errors
///
/// Returns [`CalendarError::MissingCredentials`] if the header is absent
/// or not a bearer credential.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, CalendarError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or(CalendarError::MissingCredentials)
}

/// Resolves the current session, or refuses the request.
///
/// # Errors
///
/// Returns [`CalendarError::MissingCredentials`] without issuing any
/// network call when no token is supplied, and propagates verification
/// errors from the auth provider otherwise.
pub async fn require_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<AuthUser, CalendarError> {
    let token = bearer_token(headers)?;
    state.sessions.verify_token(token).await
}

/// Resolves the current session and requires the `ADMIN` role.
///
/// # Errors
///
/// Returns the [`require_session`] errors, plus
/// [`CalendarError::Forbidden`] when the user record is missing or its
/// role attribute is not `ADMIN`.
pub async fn require_admin(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<AuthUser, CalendarError> {
    let user = require_session(state, headers).await?;
    let role = state.events.user_role(user.id).await?;
    match role.as_deref() {
        Some(ADMIN_ROLE) => Ok(user),
        _ => {
            tracing::warn!(user_id = %user.id, "admin access denied");
            Err(CalendarError::Forbidden)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::http::HeaderValue;
    use uuid::Uuid;

    use super::*;
    use crate::app_state::AppState;
    use crate::auth::client::SessionVerifier;
    use crate::config::CalendarConfig;
    use crate::persistence::memory::MemoryEventStore;
    use crate::service::{EventService, IngestTrigger};

    /// Verifier that accepts exactly one token for one subject.
    #[derive(Debug)]
    struct StubVerifier {
        token: &'static str,
        user_id: Uuid,
    }

    #[async_trait]
    impl SessionVerifier for StubVerifier {
        async fn verify_token(&self, token: &str) -> Result<AuthUser, CalendarError> {
            if token == self.token {
                Ok(AuthUser {
                    id: self.user_id,
                    email: Some("admin@example.com".to_string()),
                })
            } else {
                Err(CalendarError::InvalidToken("unknown token".to_string()))
            }
        }

        async fn exchange_code(&self, _code: &str) -> Result<(), CalendarError> {
            Ok(())
        }
    }

    fn test_config() -> CalendarConfig {
        CalendarConfig {
            listen_addr: "127.0.0.1:0".parse().unwrap_or_else(|_| {
                panic!("valid test addr");
            }),
            database_url: String::new(),
            database_max_connections: 1,
            database_min_connections: 1,
            database_connect_timeout_secs: 1,
            auth_base_url: String::new(),
            auth_api_key: String::new(),
            ingest_trigger_url: "http://localhost:0/crawl".to_string(),
            site_url: None,
        }
    }

    fn make_state(store: Arc<MemoryEventStore>, user_id: Uuid) -> AppState {
        let config = Arc::new(test_config());
        AppState {
            events: Arc::new(EventService::new(store)),
            ingest: Arc::new(IngestTrigger::new(config.ingest_trigger_url.clone())),
            sessions: Arc::new(StubVerifier {
                token: "good-token",
                user_id,
            }),
            config,
        }
    }

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) else {
            panic!("valid header value");
        };
        headers.insert(AUTHORIZATION, value);
        headers
    }

    #[test]
    fn bearer_token_requires_bearer_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_err());
        assert!(bearer_token(&HeaderMap::new()).is_err());
    }

    #[tokio::test]
    async fn missing_token_is_refused_before_verification() {
        let user_id = Uuid::new_v4();
        let state = make_state(Arc::new(MemoryEventStore::new()), user_id);
        let result = require_session(&state, &HeaderMap::new()).await;
        assert!(matches!(result, Err(CalendarError::MissingCredentials)));
    }

    #[tokio::test]
    async fn admin_role_grants_access() {
        let user_id = Uuid::new_v4();
        let store = Arc::new(MemoryEventStore::new());
        store.set_role(user_id, "ADMIN");
        let state = make_state(store, user_id);

        let result = require_admin(&state, &headers_with("good-token")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn non_admin_role_is_forbidden() {
        let user_id = Uuid::new_v4();
        let store = Arc::new(MemoryEventStore::new());
        store.set_role(user_id, "USER");
        let state = make_state(store, user_id);

        let result = require_admin(&state, &headers_with("good-token")).await;
        assert!(matches!(result, Err(CalendarError::Forbidden)));
    }

    #[tokio::test]
    async fn missing_user_record_is_forbidden() {
        let user_id = Uuid::new_v4();
        let state = make_state(Arc::new(MemoryEventStore::new()), user_id);

        let result = require_admin(&state, &headers_with("good-token")).await;
        assert!(matches!(result, Err(CalendarError::Forbidden)));
    }

    #[tokio::test]
    async fn bad_token_is_rejected() {
        let user_id = Uuid::new_v4();
        let store = Arc::new(MemoryEventStore::new());
        store.set_role(user_id, "ADMIN");
        let state = make_state(store, user_id);

        let result = require_admin(&state, &headers_with("wrong-token")).await;
        assert!(matches!(result, Err(CalendarError::InvalidToken(_))));
    }
}
