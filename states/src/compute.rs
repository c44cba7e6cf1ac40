use std::any::Any;

use crate::{Dep, State, TypeKey, Updater};

/// Dependencies of a [`Compute`]: the states and computes it reads.
///
/// When any of them changes, the compute is marked dirty and re-runs on the
/// next [`StateCtx::run_all_dirty`](crate::StateCtx::run_all_dirty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputeDeps {
    states: Vec<TypeKey>,
    computes: Vec<TypeKey>,
}

impl ComputeDeps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state<T: State>(mut self) -> Self {
        self.states.push(TypeKey::of::<T>());
        self
    }

    pub fn compute<T: Compute>(mut self) -> Self {
        self.computes.push(TypeKey::of::<T>());
        self
    }

    pub fn states(&self) -> &[TypeKey] {
        &self.states
    }

    pub fn computes(&self) -> &[TypeKey] {
        &self.computes
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeKey> {
        self.states.iter().chain(self.computes.iter())
    }
}

/// A derived value cached by the runtime.
///
/// `compute` must be free of side effects: it may run at startup and after any
/// dependency change. It publishes its new value with `updater.set(Self { .. })`.
/// Side effects belong in a [`Command`].
pub trait Compute: Any {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any>);
}
