//! # Downstream event subscribers.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`] fan-out
//! and built-in subscribers for broker events.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   BrokerRelay ── publish(BrokerEvent) ──► Hub fanout ──► SubscriberSet
//!                                                                 │
//!                                            ┌──────────┬─────────┼─────────┐
//!                                            ▼          ▼         ▼         ▼
//!                                       StatusBoard  LogWriter  Startup   Audit ...
//! ```
//!
//! ## Subscriber types
//! - **Passive subscribers** - observe and react to events (logging, auditing)
//! - **Stateful subscribers** - maintain state based on events (StatusBoard)

mod embedded;
mod subscribe;
mod subscriber_set;

#[cfg(feature = "logging")]
pub use embedded::LogWriter;
pub use embedded::{StatusBoard, WorkspaceStatus};
pub use subscribe::Subscribe;
pub use subscriber_set::SubscriberSet;
