//! # In-process notification router.
//!
//! [`NotificationRouter`] implements [`NotificationRegistry`] with a method-name
//! map. Transports hand it parsed notifications; the router finds the consumer and
//! runs it on the calling thread.
//!
//! ## Architecture
//! ```text
//! transport ── Notification{method, params} ──► NotificationRouter::dispatch_notification
//!                                                   │
//!                                   ┌───────────────┼─────────────────┐
//!                                   ▼               ▼                 ▼
//!                         "broker/statusChanged"  "broker/result"   unknown
//!                                   │               │                 │
//!                                   └──► consumer(params)             └──► warn, drop
//!                                          └─ bad params ──► warn, drop
//! ```
//!
//! ## Rules
//! - **Fire-and-forget**: `dispatch` returns nothing; failures are logged at `warn`.
//! - **Synchronous**: consumers run on the dispatching thread, to completion.
//! - **Shared**: after registration the router is read-only and `Sync`.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::registry::{NotificationConsumer, NotificationRegistry};
use crate::error::RelayError;

fn jsonrpc_version() -> String {
    "2.0".to_string()
}

/// JSON-RPC 2.0 notification object (a request without `id`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Protocol version, `"2.0"`.
    #[serde(default = "jsonrpc_version")]
    pub jsonrpc: String,
    /// Method name.
    pub method: String,
    /// Params; `null` when omitted.
    #[serde(default)]
    pub params: Value,
}

impl Notification {
    /// Creates a `2.0` notification.
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: jsonrpc_version(),
            method: method.into(),
            params,
        }
    }
}

/// Method-name routing table for inbound notifications.
#[derive(Default)]
pub struct NotificationRouter {
    consumers: HashMap<String, NotificationConsumer>,
}

impl NotificationRouter {
    /// Creates an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a consumer is bound to `method`.
    pub fn handles(&self, method: &str) -> bool {
        self.consumers.contains_key(method)
    }

    /// Registered method names, sorted.
    pub fn methods(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.consumers.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    /// Runs the consumer bound to `method`, reporting what went wrong.
    pub fn try_dispatch(&self, method: &str, params: Value) -> Result<(), RelayError> {
        let consumer = self
            .consumers
            .get(method)
            .ok_or_else(|| RelayError::UnknownMethod {
                method: method.to_string(),
            })?;
        consumer(params)
    }

    /// Runs the consumer bound to `method`; failures are logged and dropped.
    pub fn dispatch(&self, method: &str, params: Value) {
        if let Err(err) = self.try_dispatch(method, params) {
            warn!(method, reason = err.as_label(), error = %err, "notification dropped");
        }
    }

    /// Dispatches a parsed JSON-RPC notification.
    pub fn dispatch_notification(&self, n: Notification) {
        self.dispatch(&n.method, n.params);
    }
}

impl NotificationRegistry for NotificationRouter {
    fn register_notification(&mut self, method: &str, consumer: NotificationConsumer) {
        if self.consumers.insert(method.to_string(), consumer).is_some() {
            warn!(method, "notification consumer replaced");
        } else {
            debug!(method, "notification consumer registered");
        }
    }
}

impl fmt::Debug for NotificationRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRouter")
            .field("methods", &self.methods())
            .finish()
    }
}
