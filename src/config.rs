//! # Global hub configuration.
//!
//! Provides [`Config`], the settings consumed by [`Hub::builder`](crate::Hub::builder).
//!
//! The relay itself needs no configuration: it only holds its collaborators.
//! Everything here sizes the in-process bus and the subscriber queues.
//!
//! ## Sentinel values
//! - `bus_capacity = 0` → clamped to 1 by the bus
//! - `subscriber_queue_capacity = 0` → clamped to 1 by the subscriber set

/// Global configuration for the relay hub.
///
/// ## Field semantics
/// - `bus_capacity`: Event bus ring buffer size (min 1; clamped by Bus)
/// - `subscriber_queue_capacity`: Default queue size for built-in subscribers
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to avoid
/// sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug)]
pub struct Config {
    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Only bounds receivers taken with `Bus::subscribe`: one lagging behind more
    /// than `bus_capacity` events observes `Lagged` and skips older items. Hub
    /// subscribers are fed directly and do not depend on it. Minimum value is 1
    /// (enforced by Bus).
    pub bus_capacity: usize,

    /// Queue capacity handed to built-in subscribers (`StatusBoard`, `LogWriter`).
    ///
    /// Custom subscribers declare their own via `Subscribe::queue_capacity`.
    /// Events published while a queue is full are dropped for that subscriber.
    pub subscriber_queue_capacity: usize,
}

impl Config {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }

    /// Returns the subscriber queue capacity clamped to a minimum of 1.
    #[inline]
    pub fn queue_capacity_clamped(&self) -> usize {
        self.subscriber_queue_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `bus_capacity = 1024`
    /// - `subscriber_queue_capacity = 1024`
    fn default() -> Self {
        Self {
            bus_capacity: 1024,
            subscriber_queue_capacity: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacities_are_clamped() {
        let cfg = Config {
            bus_capacity: 0,
            subscriber_queue_capacity: 0,
        };
        assert_eq!(cfg.bus_capacity_clamped(), 1);
        assert_eq!(cfg.queue_capacity_clamped(), 1);
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.bus_capacity_clamped(), 1024);
        assert_eq!(cfg.queue_capacity_clamped(), 1024);
    }
}
