use std::any::Any;

use crate::{Dep, Updater};

/// An explicit, manually dispatched operation.
///
/// Commands never run implicitly. They are started with
/// [`StateCtx::dispatch`](crate::StateCtx::dispatch) or queued with
/// [`StateCtx::enqueue_command`](crate::StateCtx::enqueue_command), read their
/// inputs from `deps` and publish results with `updater.set(..)`.
pub trait Command: Any {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
