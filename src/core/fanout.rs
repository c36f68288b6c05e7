//! # Fanout: the hub's publisher.
//!
//! The relay inside a [`Hub`](super::Hub) publishes through [`Fanout`], which hands
//! each event straight to the [`SubscriberSet`] and then mirrors it onto the [`Bus`]
//! for receivers taken with [`Bus::subscribe`].
//!
//! ```text
//! BrokerRelay ── publish(ev) ──► Fanout
//!                                  ├─► SubscriberSet::emit_arc   (per-subscriber queues)
//!                                  └─► Bus::publish              (broadcast ring, may lag)
//! ```
//!
//! Subscribers never sit behind the broadcast ring, so a burst larger than
//! `bus_capacity` cannot make them skip events. Their only bound is their own queue.

use std::sync::Arc;

use crate::events::{BrokerEvent, Bus, Publish};
use crate::subscribers::SubscriberSet;

pub(super) struct Fanout {
    subs: Arc<SubscriberSet>,
    bus: Bus,
}

impl Fanout {
    pub(super) fn new(subs: Arc<SubscriberSet>, bus: Bus) -> Self {
        Self { subs, bus }
    }
}

impl Publish for Fanout {
    fn publish(&self, event: BrokerEvent) {
        self.subs.emit(&event);
        self.bus.publish(event);
    }
}
