//! # Event bus for broadcasting broker events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] that provides
//! non-blocking event publishing from any number of concurrent relay invocations.
//!
//! ## Architecture
//! ```text
//! Publishers (many):                       Subscribers:
//!   relay (broker/statusChanged) ──┐
//!   relay (broker/result)        ──┼──► Bus ──► Bus::subscribe() receivers
//!   relay (other dispatch task)  ──┘
//! ```
//!
//! The relay only sees the bus through the [`Publish`] trait, so any other
//! delivery mechanism can stand in for it.
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks; it calls `broadcast::Sender::send`.
//! - **Bounded capacity**: a single ring buffer stores recent events for all receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip `n` oldest items.
//! - **No persistence**: events are lost if there are no active receivers at send time.

use tokio::sync::broadcast;

use super::event::BrokerEvent;

/// Outbound collaborator of the relay.
///
/// `publish` must be safe to call concurrently and must not fail synchronously for
/// normal payloads; the relay does not inspect any outcome.
pub trait Publish: Send + Sync {
    /// Hands the event over for delivery (fire-and-forget).
    fn publish(&self, event: BrokerEvent);
}

/// Broadcast channel for broker events.
///
/// ### Properties
/// - **Non-blocking**: `publish()` returns immediately (send clones internally).
/// - **Fire-and-forget**: no delivery or durability guarantees.
/// - **Cloneable**: cheap to clone (internally holds an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<BrokerEvent>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity.
    ///
    /// ### Notes
    /// - Capacity is **shared** across all receivers (not per-subscriber).
    /// - The minimum capacity is 1 (clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<BrokerEvent>(capacity);
        Self { tx }
    }

    /// Creates a new receiver that will observe subsequent events.
    ///
    /// - Each call creates an **independent** receiver.
    /// - A receiver only gets events **sent after** it subscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<BrokerEvent> {
        self.tx.subscribe()
    }

    /// Number of live receivers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Publish for Bus {
    /// Publishes an event to all active receivers.
    ///
    /// If there are no receivers, the event is dropped.
    fn publish(&self, event: BrokerEvent) {
        let _ = self.tx.send(event);
    }
}
