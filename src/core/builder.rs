use std::sync::Arc;

use tracing::info;

use super::fanout::Fanout;
use super::hub::Hub;
use crate::{
    config::Config,
    events::Bus,
    observers::RelayObserver,
    relay::BrokerRelay,
    rpc::NotificationRouter,
    subscribers::{StatusBoard, Subscribe, SubscriberSet},
};

/// Builder for constructing a [`Hub`] with optional subscribers and observer.
pub struct HubBuilder {
    cfg: Config,
    subscribers: Vec<Arc<dyn Subscribe>>,
    observer: Option<Arc<dyn RelayObserver>>,
}

impl HubBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
            observer: None,
        }
    }

    /// Sets downstream subscribers.
    ///
    /// Subscribers receive every published broker event through dedicated
    /// workers with bounded queues.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Adds one downstream subscriber.
    pub fn with_subscriber(mut self, subscriber: Arc<dyn Subscribe>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Replaces the relay's default `tracing` observer.
    pub fn with_observer(mut self, observer: Arc<dyn RelayObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Adds the built-in [`LogWriter`](crate::LogWriter), sized by the config.
    ///
    /// Requires the `logging` feature flag.
    #[cfg(feature = "logging")]
    pub fn with_log_writer(self) -> Self {
        let cap = self.cfg.queue_capacity_clamped();
        self.with_subscriber(Arc::new(crate::subscribers::LogWriter::new().with_capacity(cap)))
    }

    /// Builds and returns the hub.
    ///
    /// Initializes, in order:
    /// - event bus and the built-in [`StatusBoard`]
    /// - subscriber workers and the fanout publisher
    /// - relay and its method registrations
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Hub {
        let bus = Bus::new(self.cfg.bus_capacity_clamped());

        let status = Arc::new(StatusBoard::new().with_capacity(self.cfg.queue_capacity_clamped()));
        let mut subscribers = self.subscribers;
        subscribers.insert(0, status.clone());
        let subscriber_count = subscribers.len();
        let subs = Arc::new(SubscriberSet::new(subscribers));

        let fanout = Fanout::new(Arc::clone(&subs), bus.clone());
        let mut relay = BrokerRelay::new(Arc::new(fanout));
        if let Some(observer) = self.observer {
            relay = relay.with_observer(observer);
        }
        let relay = Arc::new(relay);

        let mut router = NotificationRouter::new();
        relay.configure_methods(&mut router);

        info!(
            bus_capacity = self.cfg.bus_capacity_clamped(),
            subscribers = subscriber_count,
            methods = ?router.methods(),
            "broker relay hub started"
        );

        Hub {
            cfg: self.cfg,
            bus,
            relay,
            router,
            status,
            subs,
        }
    }
}
