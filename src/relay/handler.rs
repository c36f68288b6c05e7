//! # BrokerRelay: validate, decode, publish.
//!
//! [`BrokerRelay`] is bound to both broker notification methods and turns each
//! [`InboundStatusMessage`] into at most one [`BrokerEvent`].
//!
//! ## Handling pass
//! ```text
//! handle(kind, msg)
//!   ├─► validate(msg)
//!   │     └─ Err ──► observer.on_dropped(kind, msg, err), return   (nothing published)
//!   ├─► decode_tooling(msg.tooling)
//!   │     └─ Err ──► observer.on_decode_failed(raw, err), tooling = None
//!   ├─► BrokerEvent::new(kind, msg, tooling)
//!   └─► publisher.publish(event)                                   (fire-and-forget)
//! ```
//!
//! ## Rules
//! - **Stateless**: nothing survives a handling pass; safe to call concurrently.
//! - **No sequencing**: duplicates and out-of-order statuses are relayed as-is.
//! - **Silent to the broker**: notifications have no response channel.

use std::sync::Arc;

use super::decoder::decode_tooling;
use crate::broker::InboundStatusMessage;
use crate::error::RelayError;
use crate::events::{BrokerEvent, EventKind, Publish};
use crate::observers::{RelayObserver, TracingObserver};
use crate::rpc::{NotificationRegistry, NotificationRegistryExt};

/// Relays broker notifications onto the event bus.
pub struct BrokerRelay {
    publisher: Arc<dyn Publish>,
    observer: Arc<dyn RelayObserver>,
}

impl BrokerRelay {
    /// Creates a relay publishing to `publisher` and logging through `tracing`.
    pub fn new(publisher: Arc<dyn Publish>) -> Self {
        Self {
            publisher,
            observer: Arc::new(TracingObserver::new()),
        }
    }

    /// Replaces the observer.
    pub fn with_observer(mut self, observer: Arc<dyn RelayObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Binds `broker/statusChanged` and `broker/result` to this relay.
    ///
    /// Both methods take [`InboundStatusMessage`] params and expect no result.
    pub fn configure_methods(self: &Arc<Self>, registry: &mut dyn NotificationRegistry) {
        for kind in EventKind::ALL {
            let relay = Arc::clone(self);
            registry.register_typed(kind.method(), move |msg: InboundStatusMessage| {
                relay.handle(kind, msg);
            });
        }
    }

    /// Checks required-field presence.
    ///
    /// Valid iff `workspaceId` and `status` are present and at least one of
    /// `error`/`tooling` is. Rules are checked in that order.
    pub fn validate(msg: &InboundStatusMessage) -> Result<(), RelayError> {
        if msg.workspace_id.is_none() {
            return Err(RelayError::MissingWorkspaceId);
        }
        if msg.status.is_none() {
            return Err(RelayError::MissingStatus);
        }
        if msg.error.is_none() && msg.tooling.is_none() {
            return Err(RelayError::MissingPayload);
        }
        Ok(())
    }

    /// Runs one handling pass for a notification of `kind`.
    pub fn handle(&self, kind: EventKind, msg: InboundStatusMessage) {
        if let Err(err) = Self::validate(&msg) {
            self.observer.on_dropped(kind, &msg, &err);
            return;
        }

        let tooling = decode_tooling(msg.tooling.as_deref(), self.observer.as_ref());
        let event = BrokerEvent::new(kind, msg, tooling);
        self.observer.on_published(&event);
        self.publisher.publish(event);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::rpc::NotificationRouter;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<BrokerEvent>>);

    impl Recorder {
        fn events(&self) -> Vec<BrokerEvent> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Publish for Recorder {
        fn publish(&self, event: BrokerEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[derive(Default)]
    struct Reports {
        dropped: Mutex<Vec<&'static str>>,
        decode_failed: Mutex<usize>,
    }

    impl RelayObserver for Reports {
        fn on_dropped(&self, _: EventKind, _: &InboundStatusMessage, err: &RelayError) {
            self.dropped.lock().unwrap().push(err.as_label());
        }

        fn on_decode_failed(&self, _: &str, _: &RelayError) {
            *self.decode_failed.lock().unwrap() += 1;
        }
    }

    fn relay() -> (BrokerRelay, Arc<Recorder>, Arc<Reports>) {
        let rec = Arc::new(Recorder::default());
        let reports = Arc::new(Reports::default());
        let relay = BrokerRelay::new(rec.clone()).with_observer(reports.clone());
        (relay, rec, reports)
    }

    fn msg(
        ws: Option<&str>,
        status: Option<&str>,
        error: Option<&str>,
        tooling: Option<&str>,
    ) -> InboundStatusMessage {
        InboundStatusMessage {
            workspace_id: ws.map(str::to_string),
            status: status.map(str::to_string),
            error: error.map(str::to_string),
            tooling: tooling.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_required_fields_are_dropped() {
        let (relay, rec, reports) = relay();

        relay.handle(EventKind::Result, msg(None, Some("DONE"), Some("e"), Some("[]")));
        relay.handle(EventKind::Result, msg(Some("w1"), None, Some("e"), Some("[]")));
        relay.handle(EventKind::Result, msg(Some("w1"), Some("DONE"), None, None));
        relay.handle(EventKind::Result, msg(None, None, None, None));

        assert!(rec.events().is_empty());
        assert_eq!(
            *reports.dropped.lock().unwrap(),
            vec![
                "broker_missing_workspace_id",
                "broker_missing_status",
                "broker_missing_payload",
                "broker_missing_workspace_id",
            ]
        );
    }

    #[test]
    fn test_starting_without_payload_is_dropped() {
        let (relay, rec, _) = relay();
        relay.handle(
            EventKind::StatusChanged,
            msg(Some("ws-1"), Some("STARTING"), None, None),
        );
        assert!(rec.events().is_empty());
    }

    #[test]
    fn test_empty_tooling_publishes_without_tooling() {
        let (relay, rec, reports) = relay();
        relay.handle(EventKind::Result, msg(Some("w1"), Some("DONE"), None, Some("")));

        let events = rec.events();
        assert_eq!(events.len(), 1);
        assert!(events[0].decoded_tooling.is_none());
        assert_eq!(*reports.decode_failed.lock().unwrap(), 0);
    }

    #[test]
    fn test_two_descriptors_in_order() {
        let (relay, rec, _) = relay();
        let tooling =
            json!([{"id": "p1", "name": "one"}, {"id": "p2", "name": "two"}]).to_string();
        relay.handle(
            EventKind::Result,
            msg(Some("ws-1"), Some("DONE"), None, Some(tooling.as_str())),
        );

        let events = rec.events();
        let ids: Vec<_> = events[0].tooling().iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec![Some("p1"), Some("p2")]);
    }

    #[test]
    fn test_single_descriptor_passes_through() {
        let (relay, rec, _) = relay();
        relay.handle(
            EventKind::Result,
            msg(Some("ws-1"), Some("DONE"), None, Some(r#"[{"id":"p1"}]"#)),
        );

        let events = rec.events();
        let tooling = events[0].decoded_tooling.as_ref().unwrap();
        assert_eq!(tooling.len(), 1);
        assert_eq!(serde_json::to_value(&tooling[0]).unwrap(), json!({"id": "p1"}));
        assert_eq!(events[0].status(), Some("DONE"));
    }

    #[test]
    fn test_bad_tooling_still_publishes() {
        let (relay, rec, reports) = relay();
        relay.handle(
            EventKind::Result,
            msg(Some("ws-1"), Some("DONE"), None, Some("{not json")),
        );

        let events = rec.events();
        assert_eq!(events.len(), 1);
        assert!(events[0].decoded_tooling.is_none());
        assert_eq!(*reports.decode_failed.lock().unwrap(), 1);
        assert!(reports.dropped.lock().unwrap().is_empty());
    }

    #[test]
    fn test_failure_carries_error() {
        let (relay, rec, _) = relay();
        relay.handle(
            EventKind::Result,
            msg(Some("ws-1"), Some("FAILED"), Some("build failed"), None),
        );

        let events = rec.events();
        assert_eq!(events.len(), 1);
        assert!(events[0].decoded_tooling.is_none());
        assert_eq!(events[0].error(), Some("build failed"));
        assert_eq!(events[0].workspace_id(), Some("ws-1"));
    }

    #[test]
    fn test_duplicates_are_not_deduplicated() {
        let (relay, rec, _) = relay();
        let m = msg(Some("ws-1"), Some("DONE"), None, Some("[]"));
        relay.handle(EventKind::Result, m.clone());
        relay.handle(EventKind::Result, m);

        let events = rec.events();
        assert_eq!(events.len(), 2);
        assert_ne!(events[0].seq, events[1].seq);
    }

    #[test]
    fn test_configure_methods_routes_both_kinds() {
        let rec = Arc::new(Recorder::default());
        let relay = Arc::new(BrokerRelay::new(rec.clone()));
        let mut router = NotificationRouter::new();
        relay.configure_methods(&mut router);

        assert_eq!(router.methods(), vec!["broker/result", "broker/statusChanged"]);

        router.dispatch(
            "broker/statusChanged",
            json!({"workspaceId": "ws-1", "status": "STARTED", "tooling": ""}),
        );
        router.dispatch(
            "broker/result",
            json!({"workspaceId": "ws-1", "status": "FAILED", "error": "boom"}),
        );

        let kinds: Vec<_> = rec.events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::StatusChanged, EventKind::Result]);
    }

    #[test]
    fn test_non_object_params_never_reach_relay() {
        let rec = Arc::new(Recorder::default());
        let relay = Arc::new(BrokerRelay::new(rec.clone()));
        let mut router = NotificationRouter::new();
        relay.configure_methods(&mut router);

        router.dispatch("broker/result", json!(["ws-1", "DONE"]));
        router.dispatch("broker/result", json!({"workspaceId": 5, "status": "DONE"}));

        assert!(rec.events().is_empty());
    }

    #[test]
    fn test_concurrent_handling() {
        let (relay, rec, _) = relay();
        let relay = Arc::new(relay);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let relay = Arc::clone(&relay);
                std::thread::spawn(move || {
                    let ws = format!("ws-{i}");
                    relay.handle(
                        EventKind::StatusChanged,
                        msg(Some(ws.as_str()), Some("STARTED"), None, Some("[]")),
                    );
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(rec.events().len(), 8);
    }
}
