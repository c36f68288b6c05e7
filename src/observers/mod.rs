mod log;
mod observer;

pub use log::TracingObserver;
pub use observer::RelayObserver;
