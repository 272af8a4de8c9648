//! Fire-and-forget trigger for the external discovery/scoring crawler.

use reqwest::Client;

/// Pokes the external crawler to run discovery and scoring.
///
/// The crawler runs asynchronously behind an opaque HTTP endpoint; a
/// trigger means "accepted for background processing", never "completed".
/// Nothing here polls for completion and nothing is retried.
#[derive(Debug, Clone)]
pub struct IngestTrigger {
    http: Client,
    endpoint: String,
}

impl IngestTrigger {
    /// Creates a trigger pointed at the crawler's run endpoint.
    #[must_use]
    pub fn new(endpoint: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    /// Kicks off a manual crawler run in the background.
    ///
    /// Returns immediately; the outcome of the request is only logged.
    pub fn spawn_manual_run(&self) {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();
        tokio::spawn(async move {
            match http.post(&endpoint).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::info!(%endpoint, "manual crawl accepted");
                }
                Ok(response) => {
                    tracing::warn!(%endpoint, status = %response.status(), "crawler refused manual run");
                }
                Err(e) => {
                    tracing::warn!(%endpoint, error = %e, "failed to reach crawler");
                }
            }
        });
    }
}
