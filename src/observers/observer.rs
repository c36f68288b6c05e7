//! # RelayObserver: the relay's observability seam
//!
//! Every side effect of the relay other than publishing goes through a
//! [`RelayObserver`]. Production code uses [`TracingObserver`](crate::TracingObserver);
//! tests plug in a recorder to assert on drops and decode failures without
//! inspecting log output.
//!
//! # High-level architecture:
//! ```text
//! BrokerRelay::handle(kind, msg)
//!   ├─ invalid      ──► RelayObserver::on_dropped(kind, &msg, &err)
//!   ├─ bad tooling  ──► RelayObserver::on_decode_failed(&raw, &err)
//!   └─ published    ──► RelayObserver::on_published(&event)
//! ```
//!
//! # Example: counting drops
//! ```no_run
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use broker_relay::{EventKind, InboundStatusMessage, RelayError, RelayObserver};
//!
//! #[derive(Default)]
//! struct DropCounter(AtomicUsize);
//!
//! impl RelayObserver for DropCounter {
//!     fn on_dropped(&self, _: EventKind, _: &InboundStatusMessage, _: &RelayError) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//!     fn on_decode_failed(&self, _: &str, _: &RelayError) {}
//! }
//! ```

use crate::broker::InboundStatusMessage;
use crate::error::RelayError;
use crate::events::{BrokerEvent, EventKind};

/// Receives the relay's local failure reports.
///
/// Called synchronously on the dispatching thread; implementations must be cheap
/// and must not panic.
pub trait RelayObserver: Send + Sync + 'static {
    /// A message failed validation and was dropped.
    fn on_dropped(&self, kind: EventKind, msg: &InboundStatusMessage, err: &RelayError);

    /// The tooling payload could not be decoded; the event is published without it.
    fn on_decode_failed(&self, raw: &str, err: &RelayError);

    /// An event was handed to the publisher.
    fn on_published(&self, _event: &BrokerEvent) {}
}
