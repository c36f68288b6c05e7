//! Runtime wiring.
//!
//! The only public API from this module is [`Hub`] and its [`HubBuilder`], which
//! assemble the bus, subscribers, router and relay into one running unit.
//!
//! Internal modules:
//! - [`builder`]: assembles the components and spawns the subscriber workers;
//! - [`fanout`]: the relay's publisher, feeding subscribers and the bus;
//! - [`hub`]: owns the components, dispatch entry points, graceful shutdown.

mod builder;
mod fanout;
mod hub;

pub use builder::HubBuilder;
pub use hub::Hub;
