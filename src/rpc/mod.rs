//! Inbound notification plumbing.
//!
//! - [`NotificationRegistry`] / [`NotificationRegistryExt`]: the registration
//!   contract the relay binds itself to
//! - [`NotificationRouter`]: in-process implementation keyed by method name
//! - [`Notification`]: JSON-RPC 2.0 notification object handed over by transports

mod registry;
mod router;

pub use registry::{NotificationConsumer, NotificationRegistry, NotificationRegistryExt};
pub use router::{Notification, NotificationRouter};
