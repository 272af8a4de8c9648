//! HTTP client for the external auth provider.

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::CalendarError;

/// Identity attached to a verified session token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Auth-provider subject id; also the key of the `users` store row.
    pub id: Uuid,
    /// Email recorded by the provider, when available.
    pub email: Option<String>,
}

/// Verifies bearer credentials and exchanges auth callback codes.
///
/// Production uses [`AuthProviderClient`]; tests substitute a stub.
#[async_trait]
pub trait SessionVerifier: Send + Sync + std::fmt::Debug {
    /// Resolves a bearer token to the identity it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidToken`] when the provider rejects
    /// the token and [`CalendarError::AuthUpstream`] when the provider
    /// cannot be reached or answers abnormally.
    async fn verify_token(&self, token: &str) -> Result<AuthUser, CalendarError>;

    /// Exchanges an authorization code for a session.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidToken`] when the provider rejects
    /// the code and [`CalendarError::AuthUpstream`] on provider failure.
    async fn exchange_code(&self, code: &str) -> Result<(), CalendarError>;
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: Uuid,
    email: Option<String>,
}

/// Auth provider client speaking the provider's REST surface.
#[derive(Debug, Clone)]
pub struct AuthProviderClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AuthProviderClient {
    /// Creates a client for the provider at `base_url`.
    #[must_use]
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl SessionVerifier for AuthProviderClient {
    async fn verify_token(&self, token: &str) -> Result<AuthUser, CalendarError> {
        let response = self
            .http
            .get(format!("{}/auth/v1/user", self.base_url))
            .bearer_auth(token)
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| CalendarError::AuthUpstream(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let payload: UserPayload = response
                .json()
                .await
                .map_err(|e| CalendarError::AuthUpstream(e.to_string()))?;
            return Ok(AuthUser {
                id: payload.id,
                email: payload.email,
            });
        }
        if status.is_client_error() {
            return Err(CalendarError::InvalidToken(format!(
                "provider returned {status}"
            )));
        }
        Err(CalendarError::AuthUpstream(format!(
            "provider returned {status}"
        )))
    }

    async fn exchange_code(&self, code: &str) -> Result<(), CalendarError> {
        let response = self
            .http
            .post(format!(
                "{}/auth/v1/token?grant_type=authorization_code",
                self.base_url
            ))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "auth_code": code }))
            .send()
            .await
            .map_err(|e| CalendarError::AuthUpstream(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status.is_client_error() {
            return Err(CalendarError::InvalidToken(format!(
                "code exchange rejected: {status}"
            )));
        }
        Err(CalendarError::AuthUpstream(format!(
            "provider returned {status}"
        )))
    }
}
