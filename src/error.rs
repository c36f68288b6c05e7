//! Error types used by the relay and the notification router.
//!
//! [`RelayError`] covers every local failure the crate can observe. None of them is
//! ever reported back to the broker: notifications are one-directional, so each
//! error ends in a log line and either a dropped message or a degraded event.
//!
//! Like the rest of the crate, the enum provides helper methods (`as_label`,
//! `as_message`) for logs/metrics.

use thiserror::Error;

/// # Errors produced while relaying broker notifications.
///
/// Validation errors (`Missing*`) cause the message to be dropped.
/// [`RelayError::Decode`] only degrades the event (no tooling attached).
/// Router errors (`UnknownMethod`, `Params`) happen before the relay is invoked.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RelayError {
    /// The message carries no `workspaceId`.
    #[error("broker message has no workspace id")]
    MissingWorkspaceId,

    /// The message carries no `status`.
    #[error("broker message has no status")]
    MissingStatus,

    /// The message carries neither `error` nor `tooling`.
    #[error("broker message has neither error nor tooling")]
    MissingPayload,

    /// The `tooling` string is not a JSON array of descriptor objects.
    #[error("tooling payload could not be decoded: {source}")]
    Decode {
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// No consumer is registered for the notification method.
    #[error("no consumer registered for method {method:?}")]
    UnknownMethod {
        /// Method name as received.
        method: String,
    },

    /// Notification params do not match the shape declared for the method.
    #[error("params of {method:?} could not be deserialized: {source}")]
    Params {
        /// Method name as received.
        method: String,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl RelayError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use broker_relay::RelayError;
    ///
    /// assert_eq!(RelayError::MissingStatus.as_label(), "broker_missing_status");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RelayError::MissingWorkspaceId => "broker_missing_workspace_id",
            RelayError::MissingStatus => "broker_missing_status",
            RelayError::MissingPayload => "broker_missing_payload",
            RelayError::Decode { .. } => "tooling_decode_failed",
            RelayError::UnknownMethod { .. } => "rpc_unknown_method",
            RelayError::Params { .. } => "rpc_bad_params",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RelayError::MissingWorkspaceId => "missing field: workspaceId".to_string(),
            RelayError::MissingStatus => "missing field: status".to_string(),
            RelayError::MissingPayload => "missing field: error or tooling".to_string(),
            RelayError::Decode { source } => format!("decode: {source}"),
            RelayError::UnknownMethod { method } => format!("unknown method: {method}"),
            RelayError::Params { method, source } => format!("params of {method}: {source}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> RelayError {
        let source = serde_json::from_str::<Vec<u8>>("{not json").unwrap_err();
        RelayError::Decode { source }
    }

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(
            RelayError::MissingWorkspaceId.as_label(),
            "broker_missing_workspace_id"
        );
        assert_eq!(RelayError::MissingPayload.as_label(), "broker_missing_payload");
        assert_eq!(decode_error().as_label(), "tooling_decode_failed");
        assert_eq!(
            RelayError::UnknownMethod {
                method: "x".into()
            }
            .as_label(),
            "rpc_unknown_method"
        );
    }

    #[test]
    fn test_message_keeps_cause() {
        let msg = decode_error().as_message();
        assert!(msg.starts_with("decode: "), "got {msg}");
    }
}
