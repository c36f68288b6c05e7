//! # Notification registration contract
//!
//! [`NotificationRegistry`] is the inbound collaborator of the relay: something
//! that routes response-less notifications by method name to a consumer. The
//! relay never sees transport framing; it registers typed consumers and receives
//! already-deserialized params.
//!
//! [`NotificationRegistryExt::register_typed`] is the typed form: params are
//! deserialized into `T` before the consumer runs, and a shape mismatch is
//! returned to the registry as [`RelayError::Params`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RelayError;

/// Untyped notification consumer.
///
/// Returns `Err` only when params could not be turned into the declared shape.
pub type NotificationConsumer = Box<dyn Fn(Value) -> Result<(), RelayError> + Send + Sync>;

/// Registers consumers for response-less notifications.
pub trait NotificationRegistry {
    /// Binds `consumer` to `method`, replacing any previous binding.
    fn register_notification(&mut self, method: &str, consumer: NotificationConsumer);
}

/// Typed registration helpers available on every [`NotificationRegistry`].
pub trait NotificationRegistryExt: NotificationRegistry {
    /// Binds a consumer of `T` to `method` (no result is ever sent back).
    fn register_typed<T, F>(&mut self, method: &str, consumer: F)
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) + Send + Sync + 'static,
    {
        let owned = method.to_string();
        self.register_notification(
            method,
            Box::new(move |params: Value| {
                let typed = serde_json::from_value::<T>(params).map_err(|source| {
                    RelayError::Params {
                        method: owned.clone(),
                        source,
                    }
                })?;
                consumer(typed);
                Ok(())
            }),
        );
    }
}

impl<R: NotificationRegistry + ?Sized> NotificationRegistryExt for R {}
