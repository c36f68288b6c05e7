//! # StatusBoard – latest broker status per workspace
//!
//! Keeps the most recent broker report for every workspace, for status panels and
//! startup orchestration that only care about "where is the broker now".
//!
//! ## Behavior
//! - The relay does not sequence anything, so events may arrive late. Events with
//!   `seq <= last_seq` for their workspace are **rejected** (stale).
//! - Duplicates are harmless: a repeated terminal event simply overwrites itself.
//! - Events without a workspace id are ignored (the relay never publishes them).
//!
//! ## Internal scheme
//! ```text
//! on_event(ev):
//!   ├─ ev.workspace_id missing         => ignore
//!   ├─ ev.seq <= board[ws].seq         => ignore (stale)
//!   └─ otherwise                       => board[ws] = WorkspaceStatus::from(ev)
//!
//! snapshot() -> Vec<WorkspaceStatus>  (sorted by workspace id)
//! ```

use std::collections::HashMap;
use std::time::SystemTime;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::broker::PluginDescriptor;
use crate::events::{BrokerEvent, EventKind};
use crate::subscribers::Subscribe;

/// Last known broker state of one workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceStatus {
    /// Workspace id.
    pub workspace_id: String,
    /// Sequence of the event this entry was built from.
    pub seq: u64,
    /// When that event was built.
    pub at: SystemTime,
    /// Notification kind.
    pub kind: EventKind,
    /// Status marker as reported.
    pub status: Option<String>,
    /// Failure description, if reported.
    pub error: Option<String>,
    /// Decoded tooling, if any.
    pub tooling: Option<Vec<PluginDescriptor>>,
}

impl WorkspaceStatus {
    fn from_event(workspace_id: &str, ev: &BrokerEvent) -> Self {
        Self {
            workspace_id: workspace_id.to_string(),
            seq: ev.seq,
            at: ev.at,
            kind: ev.kind,
            status: ev.source.status.clone(),
            error: ev.source.error.clone(),
            tooling: ev.decoded_tooling.clone(),
        }
    }
}

/// Tracks the latest broker report per workspace.
pub struct StatusBoard {
    state: RwLock<HashMap<String, WorkspaceStatus>>,
    capacity: usize,
}

impl StatusBoard {
    /// Construct an empty [`StatusBoard`] with a queue capacity of 1024.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(HashMap::new()),
            capacity: 1024,
        }
    }

    /// Configure the queue capacity for this subscriber.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Applies an event if it is newer than what the board holds.
    ///
    /// Returns `true` if the board changed.
    pub async fn update(&self, ev: &BrokerEvent) -> bool {
        let Some(ws) = ev.workspace_id() else {
            return false;
        };

        let mut state = self.state.write().await;
        if state.get(ws).is_some_and(|cur| ev.seq <= cur.seq) {
            return false;
        }
        state.insert(ws.to_string(), WorkspaceStatus::from_event(ws, ev));
        true
    }

    /// Latest status of `workspace_id`, if any was seen.
    pub async fn get(&self, workspace_id: &str) -> Option<WorkspaceStatus> {
        self.state.read().await.get(workspace_id).cloned()
    }

    /// Returns all entries sorted by workspace id.
    pub async fn snapshot(&self) -> Vec<WorkspaceStatus> {
        let state = self.state.read().await;
        let mut v: Vec<WorkspaceStatus> = state.values().cloned().collect();
        v.sort_unstable_by(|a, b| a.workspace_id.cmp(&b.workspace_id));
        v
    }

    /// Forgets a workspace (e.g. after it was stopped).
    pub async fn remove(&self, workspace_id: &str) -> Option<WorkspaceStatus> {
        self.state.write().await.remove(workspace_id)
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Subscribe for StatusBoard {
    async fn on_event(&self, ev: &BrokerEvent) {
        self.update(ev).await;
    }

    fn name(&self) -> &'static str {
        "StatusBoard"
    }

    fn queue_capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::InboundStatusMessage;

    fn ev(ws: &str, kind: EventKind, status: &str) -> BrokerEvent {
        let msg = InboundStatusMessage::new(ws, status).with_tooling("");
        BrokerEvent::new(kind, msg, None)
    }

    #[tokio::test]
    async fn test_keeps_latest() {
        let board = StatusBoard::new();
        assert!(board.update(&ev("ws-1", EventKind::StatusChanged, "STARTED")).await);
        assert!(board.update(&ev("ws-1", EventKind::Result, "DONE")).await);

        let s = board.get("ws-1").await.unwrap();
        assert_eq!(s.status.as_deref(), Some("DONE"));
        assert_eq!(s.kind, EventKind::Result);
    }

    #[tokio::test]
    async fn test_rejects_stale() {
        let board = StatusBoard::new();
        let older = ev("ws-1", EventKind::StatusChanged, "STARTED");
        let newer = ev("ws-1", EventKind::Result, "DONE");

        assert!(board.update(&newer).await);
        assert!(!board.update(&older).await);
        assert!(!board.update(&newer).await);
        assert_eq!(
            board.get("ws-1").await.unwrap().status.as_deref(),
            Some("DONE")
        );
    }

    #[tokio::test]
    async fn test_ignores_missing_workspace() {
        let board = StatusBoard::new();
        let anon = BrokerEvent::new(EventKind::Result, InboundStatusMessage::default(), None);
        assert!(!board.update(&anon).await);
        assert!(board.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_sorted_and_remove() {
        let board = StatusBoard::new();
        board.update(&ev("ws-b", EventKind::Result, "DONE")).await;
        board.update(&ev("ws-a", EventKind::Result, "FAILED")).await;

        let ids: Vec<String> = board
            .snapshot()
            .await
            .into_iter()
            .map(|s| s.workspace_id)
            .collect();
        assert_eq!(ids, vec!["ws-a", "ws-b"]);

        assert!(board.remove("ws-a").await.is_some());
        assert!(board.get("ws-a").await.is_none());
    }
}
