//! Broker notification relay.
//!
//! - [`decoder`]: turns the string-encoded tooling payload into descriptors
//! - [`handler`]: [`BrokerRelay`], validation and publication

mod decoder;
mod handler;

pub use decoder::{decode_tooling, try_decode_tooling};
pub use handler::BrokerRelay;
