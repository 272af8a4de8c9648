//! Service layer: moderation workflow orchestration and the ingestion
//! trigger.

pub mod event_service;
pub mod ingest;

pub use event_service::{AlertToggle, EventService};
pub use ingest::IngestTrigger;
