//! # broker-relay
//!
//! **broker-relay** forwards the progress reports of an out-of-process plugin
//! broker onto an in-process event bus.
//!
//! The broker prepares plugin tooling for a workspace and reports over two
//! response-less notifications, `broker/statusChanged` and `broker/result`. The
//! relay validates each notification, decodes the plugin list the broker sends as
//! a JSON string, and publishes one normalized [`BrokerEvent`] so that startup
//! orchestration, status panels or auditing can react without knowing the wire
//! format.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!      broker process
//!            │  broker/statusChanged, broker/result   (notifications, no response)
//!            ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  NotificationRouter (method name → consumer)                      │
//! │  - deserializes params into InboundStatusMessage                  │
//! │  - unknown method / bad params ─► warn, drop                      │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  BrokerRelay::handle(kind, msg)                                   │
//! │  - validate: workspaceId, status, (error | tooling)               │
//! │       └─ invalid ─► RelayObserver::on_dropped, nothing published  │
//! │  - decode_tooling(msg.tooling)                                    │
//! │       └─ malformed ─► RelayObserver::on_decode_failed, no tooling │
//! │  - Publish::publish(BrokerEvent)                                  │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                ▼
//!                       ┌────────────────────┐
//!                       │    Hub fanout      │
//!                       └──┬──────────────┬──┘
//!                          ▼              ▼
//!                   SubscriberSet     Bus (broadcast channel,
//!                  (per-sub queues)    capacity: Config::bus_capacity)
//!                          │              └─► Bus::subscribe() receivers
//!           ┌──────────────┼──────────────┐
//!           ▼              ▼              ▼
//!      StatusBoard     LogWriter     custom subs
//! ```
//!
//! ### Lifecycle of one notification
//! ```text
//! Notification{method, params}
//!   ├─► router: method bound?                 no  ─► warn, drop
//!   ├─► params → InboundStatusMessage?        no  ─► warn, drop
//!   ├─► relay: required fields present?       no  ─► error log, drop
//!   ├─► tooling non-empty and decodable?      no  ─► error log (if malformed), tooling = None
//!   └─► publish(BrokerEvent{seq, at, kind, source, decoded_tooling})
//! ```
//! The relay is stateless: no retries, no buffering, no reordering, no dedup.
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                          |
//! |-------------------|--------------------------------------------------------------|---------------------------------------------|
//! | **Relay**         | Validate, decode and publish broker notifications.           | [`BrokerRelay`], [`decode_tooling`]         |
//! | **Wire model**    | Typed notification params and opaque plugin descriptors.     | [`InboundStatusMessage`], [`PluginDescriptor`] |
//! | **Events**        | Normalized events and the broadcast bus.                     | [`BrokerEvent`], [`Bus`], [`Publish`]       |
//! | **Routing**       | Method-name registry for inbound notifications.              | [`NotificationRouter`], [`NotificationRegistry`] |
//! | **Subscriber API**| Downstream consumers with isolated queues.                   | [`Subscribe`], [`SubscriberSet`], [`StatusBoard`] |
//! | **Observability** | Drop / decode-failure reporting.                             | [`RelayObserver`], [`TracingObserver`]      |
//! | **Errors**        | Typed local failures.                                        | [`RelayError`]                              |
//! | **Configuration** | Bus and queue sizing.                                        | [`Config`]                                  |
//!
//! ## Optional features
//! - `logging`: exports the built-in [`LogWriter`] subscriber.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use broker_relay::{Bus, BrokerRelay, EventKind, InboundStatusMessage};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let bus = Bus::new(16);
//!     let mut rx = bus.subscribe();
//!     let relay = BrokerRelay::new(Arc::new(bus.clone()));
//!
//!     let msg = InboundStatusMessage::new("ws-1", "DONE").with_tooling(r#"[{"id":"p1"}]"#);
//!     relay.handle(EventKind::Result, msg);
//!
//!     let ev = rx.recv().await.unwrap();
//!     assert_eq!(ev.tooling()[0].id(), Some("p1"));
//! }
//! ```
mod broker;
mod config;
mod core;
mod error;
mod events;
mod observers;
mod relay;
mod rpc;
mod subscribers;

// ---- Public re-exports ----

pub use broker::{InboundStatusMessage, PluginDescriptor};
pub use config::Config;
pub use crate::core::{Hub, HubBuilder};
pub use error::RelayError;
pub use events::{BrokerEvent, Bus, EventKind, Publish, RESULT_METHOD, STATUS_CHANGED_METHOD};
pub use observers::{RelayObserver, TracingObserver};
pub use relay::{BrokerRelay, decode_tooling, try_decode_tooling};
pub use rpc::{
    Notification, NotificationConsumer, NotificationRegistry, NotificationRegistryExt,
    NotificationRouter,
};
pub use subscribers::{StatusBoard, Subscribe, SubscriberSet, WorkspaceStatus};

// Optional: expose a simple built-in logger subscriber.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
