use std::collections::BTreeMap;

use crate::ctx::ComputeSlot;
use crate::{Compute, Error, State, TypeKey};

/// Read-only view of the registered states and computes.
///
/// Handed to [`Compute::compute`] and [`Command::run`](crate::Command::run).
#[derive(Clone, Copy)]
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeKey, Box<dyn State>>,
    computes: &'a BTreeMap<TypeKey, ComputeSlot>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeKey, Box<dyn State>>,
        computes: &'a BTreeMap<TypeKey, ComputeSlot>,
    ) -> Self {
        Self { states, computes }
    }

    pub fn try_state_ref<T: State>(&self) -> Result<&'a T, Error> {
        let key = TypeKey::of::<T>();
        self.states
            .get(&key)
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(key, "Dep::get_state_ref"))
    }

    /// Get a registered state by type.
    ///
    /// # Panics
    /// Panics if the state type is not registered. Registration happens once at
    /// startup, so a miss is a wiring bug rather than a runtime condition.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.try_state_ref::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_compute_ref<T: Compute>(&self) -> Result<&'a T, Error> {
        let key = TypeKey::of::<T>();
        self.computes
            .get(&key)
            .and_then(|slot| slot.compute().as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::compute_not_found(key, "Dep::get_compute_ref"))
    }

    /// Get a registered compute by type.
    ///
    /// # Panics
    /// Panics if the compute type is not registered.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        self.try_compute_ref::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }
}
