//! Broker wire model.
//!
//! - [`InboundStatusMessage`]: params of `broker/statusChanged` and `broker/result`
//! - [`PluginDescriptor`]: one decoded entry of the `tooling` payload

mod descriptor;
mod message;

pub use descriptor::PluginDescriptor;
pub use message::InboundStatusMessage;
