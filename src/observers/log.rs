//! # TracingObserver — default relay observer
//!
//! Reports relay failures through `tracing`:
//! - dropped messages at `error` with the full offending content
//! - decode failures at `error` with the parser cause
//! - published events at `debug`
//!
//! ## Example output (fmt subscriber)
//! ```text
//! ERROR broker event skipped due to illegal content method="broker/statusChanged" reason=broker_missing_payload content=BrokerStatus{workspaceId=Some("ws-1"), ...}
//! ERROR parsing broker tooling failed error=tooling payload could not be decoded: key must be a string at line 1 column 2
//! DEBUG broker event published seq=7 method="broker/result" workspace_id="ws-1" status="DONE" plugins=2
//! ```

use tracing::{debug, error};

use super::observer::RelayObserver;
use crate::broker::InboundStatusMessage;
use crate::error::RelayError;
use crate::events::{BrokerEvent, EventKind};

/// Observer that writes to the active `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    /// Construct a new [`TracingObserver`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RelayObserver for TracingObserver {
    fn on_dropped(&self, kind: EventKind, msg: &InboundStatusMessage, err: &RelayError) {
        error!(
            method = kind.method(),
            reason = err.as_label(),
            content = %msg,
            "broker event skipped due to illegal content"
        );
    }

    fn on_decode_failed(&self, raw: &str, err: &RelayError) {
        error!(error = %err, bytes = raw.len(), "parsing broker tooling failed");
    }

    fn on_published(&self, ev: &BrokerEvent) {
        debug!(
            seq = ev.seq,
            method = ev.kind.method(),
            workspace_id = ev.workspace_id().unwrap_or_default(),
            status = ev.status().unwrap_or_default(),
            plugins = ev.tooling().len(),
            "broker event published"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let out = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(out.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        String::from_utf8(out.0.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_dropped_message_logged_at_error_with_content() {
        let msg = InboundStatusMessage {
            workspace_id: Some("ws-1".into()),
            status: Some("STARTING".into()),
            error: None,
            tooling: None,
        };
        let out = capture(|| {
            TracingObserver::new().on_dropped(
                EventKind::StatusChanged,
                &msg,
                &RelayError::MissingPayload,
            );
        });

        assert!(out.contains("ERROR"), "got {out}");
        assert!(out.contains("broker_missing_payload"), "got {out}");
        assert!(out.contains("broker/statusChanged"), "got {out}");
        assert!(out.contains(r#"workspaceId=Some("ws-1")"#), "got {out}");
    }

    #[test]
    fn test_decode_failure_logged_at_error_with_cause() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let cause = source.to_string();
        let err = RelayError::Decode { source };

        let out = capture(|| TracingObserver::new().on_decode_failed("{not json", &err));

        assert!(out.contains("ERROR"), "got {out}");
        assert!(out.contains("parsing broker tooling failed"), "got {out}");
        assert!(out.contains(&cause), "got {out}");
    }
}
