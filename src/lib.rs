//! # alpha-calendar
//!
//! REST backend for a market-event calendar: a moderated feed of upcoming
//! market-moving events (earnings, product launches, macro decisions) with
//! crowd-interest "hype" tracking.
//!
//! Events enter the store as `PENDING` via an external crawler or as
//! `ACTIVE` via manual admin entry, get reviewed in a moderation console,
//! and are served to the public dashboard with countdown labels and
//! chart-ready hype series.
//!
//! ## Architecture
//!
//! ```text
//! Clients (dashboard, moderation console)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── Session/Admin Guards (auth/)
//!     │
//!     ├── EventService (service/)
//!     ├── IngestTrigger (service/)
//!     │
//!     ├── EventRepository (persistence/)
//!     └── PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
