//! # Hub: wires the relay, the bus and downstream subscribers.
//!
//! The [`Hub`] owns the event bus, a [`SubscriberSet`] and the notification router
//! with the relay bound to it. The relay publishes through the hub's fanout, which
//! feeds the subscriber queues directly and mirrors every event onto the bus.
//!
//! ## High-level architecture
//! ```text
//! transport ──► Hub::dispatch(method, params) ──► NotificationRouter
//!                                                     └─► BrokerRelay::handle(kind, msg)
//!                                                            └─► Fanout::publish(BrokerEvent)
//!                                                                  ├─► SubscriberSet::emit
//!                                                                  │     ┌─────────┬─────────┐
//!                                                                  │     ▼         ▼         ▼
//!                                                                  │  StatusBoard [queue S1] ... [queue SN]
//!                                                                  └─► Bus (extra receivers)
//!
//! Shutdown path:
//!   drop router + relay
//!     └─► SubscriberSet::shutdown() (workers drain their queues)
//! ```
//!
//! ## Delivery
//! Each subscriber gets every event published before [`Hub::shutdown`], unless its
//! own queue was full at publish time. That event is then dropped for that
//! subscriber only and logged at `warn`. Receivers taken from [`Hub::bus`] are
//! additionally bounded by `bus_capacity` and may observe `Lagged`.
//!
//! ## Example
//! ```rust
//! use serde_json::json;
//! use broker_relay::{Config, Hub};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let hub = Hub::builder(Config::default()).build();
//!     let status = hub.status();
//!
//!     hub.dispatch(
//!         "broker/result",
//!         json!({"workspaceId": "ws-1", "status": "DONE", "tooling": "[{\"id\":\"p1\"}]"}),
//!     );
//!     hub.shutdown().await;
//!
//!     let ws = status.get("ws-1").await.unwrap();
//!     assert_eq!(ws.tooling.unwrap().len(), 1);
//! }
//! ```

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::builder::HubBuilder;
use crate::{
    config::Config,
    events::Bus,
    relay::BrokerRelay,
    rpc::{Notification, NotificationRouter},
    subscribers::{StatusBoard, SubscriberSet},
};

/// Running relay: router in front, bus and subscribers behind.
pub struct Hub {
    pub(super) cfg: Config,
    pub(super) bus: Bus,
    pub(super) relay: Arc<BrokerRelay>,
    pub(super) router: NotificationRouter,
    pub(super) status: Arc<StatusBoard>,
    pub(super) subs: Arc<SubscriberSet>,
}

impl Hub {
    /// Starts building a hub.
    pub fn builder(cfg: Config) -> HubBuilder {
        HubBuilder::new(cfg)
    }

    /// Configuration the hub was built with.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Event bus; extra receivers can be taken with [`Bus::subscribe`].
    ///
    /// Bus receivers are bounded by `bus_capacity` and lag on bursts; hub
    /// subscribers are not affected by that.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Relay bound to the router.
    ///
    /// Holding a clone of it past [`Hub::shutdown`] leaves the subscriber workers running.
    pub fn relay(&self) -> &Arc<BrokerRelay> {
        &self.relay
    }

    /// Router with both broker methods registered.
    pub fn router(&self) -> &NotificationRouter {
        &self.router
    }

    /// Built-in latest-status board.
    pub fn status(&self) -> Arc<StatusBoard> {
        Arc::clone(&self.status)
    }

    /// Dispatches one notification (fire-and-forget).
    pub fn dispatch(&self, method: &str, params: Value) {
        self.router.dispatch(method, params);
    }

    /// Dispatches one parsed JSON-RPC notification (fire-and-forget).
    pub fn dispatch_notification(&self, n: Notification) {
        self.router.dispatch_notification(n);
    }

    /// Stops accepting notifications and waits for every subscriber to drain its queue.
    ///
    /// Events published before this call are delivered to each subscriber whose
    /// queue had room for them; see the module docs.
    pub async fn shutdown(self) {
        let Hub {
            router, relay, subs, ..
        } = self;
        drop(router);
        drop(relay);

        match Arc::try_unwrap(subs) {
            Ok(set) => set.shutdown().await,
            Err(_) => warn!("subscriber set still shared; workers left running"),
        }
        debug!("broker relay hub stopped");
    }
}
