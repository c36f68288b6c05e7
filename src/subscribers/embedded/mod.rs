//! # Built-in subscribers
//!
//! - [`StatusBoard`]: latest broker status per workspace.
//! - [`LogWriter`]: writes events to `tracing` (`logging` feature).

#[cfg(feature = "logging")]
mod log;
mod status;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use status::{StatusBoard, WorkspaceStatus};
