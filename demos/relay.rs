//! # Example: relay
//!
//! Feeds a typical broker conversation through a [`Hub`] and prints what the
//! status board ends up with.
//!
//! Shows how to:
//! - build a hub with the built-in `LogWriter` and a custom subscriber;
//! - dispatch JSON-RPC notifications as a transport would;
//! - see dropped messages and decode failures in the log.
//!
//! ## Flow
//! ```text
//! Notification ──► Hub::dispatch_notification()
//!     └─► NotificationRouter ──► BrokerRelay::handle()
//!           └─► publish(BrokerEvent) ──► SubscriberSet
//!                                          ├─► StatusBoard
//!                                          ├─► LogWriter
//!                                          └─► StartupGate
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example relay --features logging
//! ```

use std::sync::Arc;

use broker_relay::{BrokerEvent, Config, EventKind, Hub, Notification, Subscribe};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Lets a workspace start once the broker delivered its tooling.
struct StartupGate;

#[async_trait::async_trait]
impl Subscribe for StartupGate {
    async fn on_event(&self, ev: &BrokerEvent) {
        if ev.kind != EventKind::Result {
            return;
        }
        match (ev.error(), ev.decoded_tooling.as_deref()) {
            (Some(err), _) => {
                println!("[gate] {}: broker failed: {err}", ev.workspace_id().unwrap_or("?"));
            }
            (None, Some(plugins)) => {
                let ids: Vec<&str> = plugins.iter().filter_map(|p| p.id()).collect();
                println!("[gate] {}: start with {ids:?}", ev.workspace_id().unwrap_or("?"));
            }
            (None, None) => {
                println!("[gate] {}: no tooling, start bare", ev.workspace_id().unwrap_or("?"));
            }
        }
    }

    fn name(&self) -> &'static str {
        "startup-gate"
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let hub = Hub::builder(Config::default())
        .with_log_writer()
        .with_subscriber(Arc::new(StartupGate))
        .build();
    let status = hub.status();

    let tooling = json!([
        {"id": "eclipse/che-theia/next", "name": "theia-ide", "version": "next"},
        {"id": "redhat/java/0.38.0", "name": "java", "version": "0.38.0"}
    ])
    .to_string();

    let conversation = [
        // progress without payload: dropped
        Notification::new(
            "broker/statusChanged",
            json!({"workspaceId": "ws-1", "status": "STARTING"}),
        ),
        Notification::new(
            "broker/statusChanged",
            json!({"workspaceId": "ws-1", "status": "STARTED", "tooling": ""}),
        ),
        Notification::new(
            "broker/result",
            json!({"workspaceId": "ws-1", "status": "DONE", "tooling": tooling}),
        ),
        // malformed tooling: published without it
        Notification::new(
            "broker/result",
            json!({"workspaceId": "ws-2", "status": "DONE", "tooling": "{not json"}),
        ),
        Notification::new(
            "broker/result",
            json!({"workspaceId": "ws-3", "status": "FAILED", "error": "image pull failed"}),
        ),
    ];

    for n in conversation {
        hub.dispatch_notification(n);
    }
    hub.shutdown().await;

    for ws in status.snapshot().await {
        println!(
            "[board] {} status={} plugins={} error={}",
            ws.workspace_id,
            ws.status.as_deref().unwrap_or("-"),
            ws.tooling.as_ref().map_or(0, Vec::len),
            ws.error.as_deref().unwrap_or("-"),
        );
    }
}
