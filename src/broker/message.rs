//! # Inbound broker status message.
//!
//! [`InboundStatusMessage`] is the params object of both broker notifications.
//! Every field is optional at the type level: deserialization accepts whatever
//! the broker sent and the relay checks required-field presence explicitly.
//!
//! ## Wire shape
//! ```text
//! {
//!   "workspaceId": "ws-1",            required
//!   "status":      "DONE",            required, opaque
//!   "error":       "build failed",    optional
//!   "tooling":     "[{\"id\":...}]"   optional, JSON array encoded as a string
//! }
//! ```
//! Unknown keys are ignored and `null` counts as absent.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broker notification params as received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundStatusMessage {
    /// Workspace the broker is acting on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    /// Broker lifecycle marker (e.g. `STARTING`, `DONE`, `FAILED`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Human-readable failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// JSON-encoded array of plugin descriptors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooling: Option<String>,
}

impl InboundStatusMessage {
    /// Creates a message with the two required fields set.
    pub fn new(workspace_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            workspace_id: Some(workspace_id.into()),
            status: Some(status.into()),
            error: None,
            tooling: None,
        }
    }

    /// Attaches a failure description.
    #[inline]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Attaches an encoded tooling payload.
    #[inline]
    pub fn with_tooling(mut self, tooling: impl Into<String>) -> Self {
        self.tooling = Some(tooling.into());
        self
    }
}

impl fmt::Display for InboundStatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BrokerStatus{{workspaceId={:?}, status={:?}, error={:?}, tooling={:?}}}",
            self.workspace_id, self.status, self.error, self.tooling
        )
    }
}
