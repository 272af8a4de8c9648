//! Domain layer: event model, lifecycle state machine, and display rules.
//!
//! This module contains the server-side domain model: event identity, the
//! event aggregate with its hype metrics and proxy signals, the status
//! lifecycle with its legal transitions, and the small pure rules the
//! dashboard renders from (ticker parsing, D-Day labels).

pub mod dday;
pub mod event;
pub mod event_id;
pub mod lifecycle;
pub mod tickers;

pub use event::{Event, EventProxy, EventType, HypeMetric, NewEvent};
pub use event_id::EventId;
pub use lifecycle::EventStatus;
