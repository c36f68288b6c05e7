//! # LogWriter — broker event logger
//!
//! A minimal subscriber that writes every incoming [`BrokerEvent`] to `tracing`.
//! Useful for demos and as an audit trail.
//!
//! ## Example output (fmt subscriber)
//! ```text
//!  INFO [status-changed] workspace_id="ws-1" status="STARTED" seq=3
//!  INFO [result] workspace_id="ws-1" status="DONE" plugins=2 seq=4
//!  WARN [result] workspace_id="ws-2" status="FAILED" error="build failed" seq=5
//! ```

use async_trait::async_trait;
use tracing::{info, warn};

use crate::events::{BrokerEvent, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Debug, Clone, Copy)]
pub struct LogWriter {
    capacity: usize,
}

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self { capacity: 1024 }
    }

    /// Configure the queue capacity for this subscriber.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &BrokerEvent) {
        let ws = e.workspace_id().unwrap_or("<unknown>");
        let status = e.status().unwrap_or("<unknown>");

        match (e.kind, e.error()) {
            (EventKind::StatusChanged, None) => {
                info!(workspace_id = ws, status, seq = e.seq, "[status-changed]");
            }
            (EventKind::Result, None) => {
                info!(
                    workspace_id = ws,
                    status,
                    plugins = e.tooling().len(),
                    seq = e.seq,
                    "[result]"
                );
            }
            (kind, Some(error)) => {
                let tag = match kind {
                    EventKind::StatusChanged => "[status-changed]",
                    EventKind::Result => "[result]",
                };
                warn!(workspace_id = ws, status, error, seq = e.seq, "{tag}");
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }

    fn queue_capacity(&self) -> usize {
        self.capacity
    }
}
