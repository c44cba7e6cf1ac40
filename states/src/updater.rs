use std::any::{Any, type_name};

use flume::Sender;
use log::error;

use crate::TypeKey;

pub(crate) type Update = (TypeKey, Box<dyn Any>);

/// Handle used by computes and commands to publish replacement values.
///
/// Published values are applied by [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    /// Publish `value` as the new value of the state or compute of type `T`.
    pub fn set<T: Any>(&self, value: T) {
        if let Err(err) = self.send.send((TypeKey::of::<T>(), Box::new(value))) {
            error!("Failed to publish update for {}: {err}", type_name::<T>());
        }
    }
}
