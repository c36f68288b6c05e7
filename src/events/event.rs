//! # Normalized broker events published on the bus.
//!
//! The [`EventKind`] enum names the notification that produced an event; each kind
//! is bound to exactly one wire method name:
//! - [`EventKind::StatusChanged`] ← `broker/statusChanged`
//! - [`EventKind::Result`] ← `broker/result`
//!
//! The [`BrokerEvent`] struct carries the original message and the decoded tooling.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically within the process. The relay itself does not sequence or
//! deduplicate anything; `seq` only lets consumers discard events that reach them
//! later than a newer one.
//!
//! ## Example
//! ```rust
//! use broker_relay::{BrokerEvent, EventKind, InboundStatusMessage};
//!
//! let msg = InboundStatusMessage::new("ws-1", "FAILED").with_error("build failed");
//! let ev = BrokerEvent::new(EventKind::Result, msg, None);
//!
//! assert_eq!(ev.workspace_id(), Some("ws-1"));
//! assert_eq!(ev.source.error.as_deref(), Some("build failed"));
//! assert!(ev.decoded_tooling.is_none());
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::broker::{InboundStatusMessage, PluginDescriptor};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(1);

/// Wire method of status-changed notifications.
pub const STATUS_CHANGED_METHOD: &str = "broker/statusChanged";

/// Wire method of final-result notifications.
pub const RESULT_METHOD: &str = "broker/result";

/// Notification kind an event was relayed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Progress update (`broker/statusChanged`).
    StatusChanged,
    /// Final outcome (`broker/result`).
    Result,
}

impl EventKind {
    /// All kinds, in registration order.
    pub const ALL: [EventKind; 2] = [EventKind::StatusChanged, EventKind::Result];

    /// Returns the wire method name bound to this kind.
    #[inline]
    pub fn method(self) -> &'static str {
        match self {
            EventKind::StatusChanged => STATUS_CHANGED_METHOD,
            EventKind::Result => RESULT_METHOD,
        }
    }

    /// Maps a wire method name back to its kind.
    pub fn from_method(method: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.method() == method)
    }
}

/// Broker notification normalized for internal consumers.
///
/// - `seq`: monotonic global sequence
/// - `at`: wall-clock timestamp (for logs)
/// - `source`: the message exactly as received (raw status/error/workspace id)
/// - `decoded_tooling`: present only when `tooling` was non-empty and decoded
#[derive(Clone, Debug)]
pub struct BrokerEvent {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Notification kind.
    pub kind: EventKind,
    /// Original inbound message.
    pub source: InboundStatusMessage,
    /// Decoded plugin descriptors, order preserved.
    pub decoded_tooling: Option<Vec<PluginDescriptor>>,
}

impl BrokerEvent {
    /// Creates a new event with current timestamp and next sequence number.
    pub fn new(
        kind: EventKind,
        source: InboundStatusMessage,
        decoded_tooling: Option<Vec<PluginDescriptor>>,
    ) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            source,
            decoded_tooling,
        }
    }

    /// Workspace the broker acted on.
    #[inline]
    pub fn workspace_id(&self) -> Option<&str> {
        self.source.workspace_id.as_deref()
    }

    /// Broker lifecycle marker as received.
    #[inline]
    pub fn status(&self) -> Option<&str> {
        self.source.status.as_deref()
    }

    /// Broker-reported failure, if any.
    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.source.error.as_deref()
    }

    /// Decoded descriptors as a slice (empty when absent).
    #[inline]
    pub fn tooling(&self) -> &[PluginDescriptor] {
        self.decoded_tooling.as_deref().unwrap_or_default()
    }
}
