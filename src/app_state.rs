//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::auth::client::SessionVerifier;
use crate::config::CalendarConfig;
use crate::service::{EventService, IngestTrigger};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Event service for all moderation and read-model logic.
    pub events: Arc<EventService>,
    /// Fire-and-forget crawler trigger.
    pub ingest: Arc<IngestTrigger>,
    /// Session verification against the external auth provider.
    pub sessions: Arc<dyn SessionVerifier>,
    /// Service configuration (redirect origin selection reads it).
    pub config: Arc<CalendarConfig>,
}
