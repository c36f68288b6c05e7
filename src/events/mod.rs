//! Broker events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** the relay publishes
//! normalized broker notifications on.
//!
//! ## Contents
//! - [`EventKind`], [`BrokerEvent`] event classification and payload
//! - [`Publish`] the outbound collaborator trait the relay depends on
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast` implementing [`Publish`]
//!
//! ## Quick reference
//! - **Publishers**: [`BrokerRelay`](crate::BrokerRelay) (one event per valid notification).
//! - **Consumers**: any receiver obtained from [`Bus::subscribe`]. Inside a
//!   [`Hub`](crate::Hub) the bus mirrors what subscribers already receive directly.

mod bus;
mod event;

pub use bus::{Bus, Publish};
pub use event::{BrokerEvent, EventKind, RESULT_METHOD, STATUS_CHANGED_METHOD};
