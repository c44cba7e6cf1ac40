//! Typed state runtime for immediate-mode UIs.
//!
//! States are inputs, computes are cached derived values and commands are
//! explicit operations. Everything runs on the UI thread.

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod key;
mod state;
mod updater;

pub use command::Command;
pub use compute::{Compute, ComputeDeps};
pub use ctx::{StateCtx, SyncStatus};
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use key::TypeKey;
pub use state::{State, assign_impl};
pub use updater::Updater;

#[cfg(test)]
mod state_runtime_test {
    use std::any::Any;

    use super::*;

    #[derive(Debug, Default)]
    struct Celsius(i32);

    impl State for Celsius {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any>) {
            assign_impl(self, new_self);
        }
    }

    #[derive(Debug, Default)]
    struct Fahrenheit(i32);

    impl Compute for Fahrenheit {
        fn deps(&self) -> ComputeDeps {
            ComputeDeps::new().state::<Celsius>()
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            let celsius = deps.get_state_ref::<Celsius>();
            updater.set(Self(celsius.0 * 9 / 5 + 32));
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any>) {
            assign_impl(self, new_self);
        }
    }

    #[derive(Debug, Default)]
    struct Label(String);

    impl Compute for Label {
        fn deps(&self) -> ComputeDeps {
            ComputeDeps::new().compute::<Fahrenheit>()
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            let fahrenheit = deps.get_compute_ref::<Fahrenheit>();
            updater.set(Self(format!("{}°F", fahrenheit.0)));
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any>) {
            assign_impl(self, new_self);
        }
    }

    #[derive(Debug, Default)]
    struct Boil;

    impl Command for Boil {
        fn run(&self, _deps: Dep<'_>, updater: Updater) {
            updater.set(Celsius(100));
        }
    }

    fn ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Celsius(0));
        ctx.record_compute(Label::default());
        ctx.record_compute(Fahrenheit::default());
        ctx.record_command(Boil);
        ctx
    }

    #[test]
    fn computes_run_in_dependency_order() {
        let mut ctx = ctx();
        ctx.run_all_dirty();

        assert_eq!(ctx.cached::<Fahrenheit>().map(|f| f.0), Some(32));
        assert_eq!(
            ctx.cached::<Label>().map(|l| l.0.as_str()),
            Some("32°F"),
            "downstream compute should see the fresh upstream value"
        );
    }

    #[test]
    fn state_update_marks_dependents_dirty() {
        let mut ctx = ctx();
        ctx.run_all_dirty();
        assert!(!ctx.is_dirty::<Fahrenheit>(), "clean after first run");

        ctx.update::<Celsius>(|c| c.0 = 10);
        assert!(ctx.is_dirty::<Fahrenheit>(), "dirty after input change");

        ctx.run_all_dirty();
        assert_eq!(ctx.cached::<Fahrenheit>().map(|f| f.0), Some(50));
        assert_eq!(ctx.cached::<Label>().map(|l| l.0.as_str()), Some("50°F"));
    }

    #[test]
    fn dispatched_command_updates_state() {
        let mut ctx = ctx();
        ctx.run_all_dirty();
        ctx.dispatch::<Boil>().expect("Boil is registered");

        assert_eq!(ctx.state::<Celsius>().0, 100);
        assert!(ctx.is_dirty::<Fahrenheit>(), "command result should dirty readers");
    }

    #[test]
    fn queued_commands_run_once_on_flush() {
        let mut ctx = ctx();
        ctx.enqueue_command::<Boil>();
        ctx.enqueue_command::<Boil>();
        assert_eq!(ctx.state::<Celsius>().0, 0, "queued commands do not run eagerly");

        ctx.flush_commands();
        assert_eq!(ctx.state::<Celsius>().0, 100);
        assert_eq!(ctx.sync_computes(), 0, "nothing left to apply");
    }

    #[test]
    fn dispatch_unknown_command_is_an_error() {
        struct Unregistered;
        impl Command for Unregistered {
            fn run(&self, _deps: Dep<'_>, _updater: Updater) {}
        }

        let mut ctx = ctx();
        let err = ctx.dispatch::<Unregistered>().unwrap_err();
        assert!(matches!(err, Error::CommandNotFound { .. }));
    }

    #[test]
    fn updater_set_is_applied_on_sync() {
        let mut ctx = ctx();
        ctx.updater().set(Celsius(-40));
        assert_eq!(ctx.state::<Celsius>().0, 0, "not applied before sync");

        assert_eq!(ctx.sync_computes(), 1);
        assert_eq!(ctx.state::<Celsius>().0, -40);
    }

    #[test]
    fn cached_is_none_for_unrecorded_compute() {
        let ctx = StateCtx::new();
        assert!(ctx.cached::<Fahrenheit>().is_none());
    }

    #[test]
    fn cyclic_computes_are_rejected() {
        #[derive(Default)]
        struct Ping;
        #[derive(Default)]
        struct Pong;

        impl Compute for Ping {
            fn deps(&self) -> ComputeDeps {
                ComputeDeps::new().compute::<Pong>()
            }
            fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}
            fn as_any(&self) -> &dyn Any {
                self
            }
            fn assign_box(&mut self, new_self: Box<dyn Any>) {
                assign_impl(self, new_self);
            }
        }

        impl Compute for Pong {
            fn deps(&self) -> ComputeDeps {
                ComputeDeps::new().compute::<Ping>()
            }
            fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}
            fn as_any(&self) -> &dyn Any {
                self
            }
            fn assign_box(&mut self, new_self: Box<dyn Any>) {
                assign_impl(self, new_self);
            }
        }

        let mut ctx = StateCtx::new();
        ctx.record_compute(Ping);
        ctx.record_compute(Pong);

        assert!(matches!(
            ctx.verify_deps(),
            Err(TopologyError::CycleDetected(_))
        ));
    }
}
