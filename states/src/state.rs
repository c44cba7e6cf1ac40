use std::any::{Any, type_name};

use log::error;

/// A value stored in [`StateCtx`](crate::StateCtx), looked up by its type.
///
/// States are the inputs of the runtime. Widgets and commands change them,
/// computes read them through [`Dep`](crate::Dep).
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a value published through an [`Updater`](crate::Updater).
    fn assign_box(&mut self, new_self: Box<dyn Any>);
}

/// Shared `assign_box` body for states and computes.
///
/// A value of the wrong type is dropped and logged; the target keeps its old value.
pub fn assign_impl<T: Any>(target: &mut T, new_self: Box<dyn Any>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!(
            "Refusing to assign a value of another type to {}",
            type_name::<T>()
        ),
    }
}
