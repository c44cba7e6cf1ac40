use std::collections::BTreeMap;

use flume::{Receiver, Sender};
use log::{debug, error, warn};

use crate::updater::Update;
use crate::{Command, Compute, Dep, Error, Graph, State, TopologyError, TypeKey, Updater};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatus {
    #[default]
    Dirty,
    Clean,
}

pub(crate) struct ComputeSlot {
    compute: Box<dyn Compute>,
    status: SyncStatus,
}

impl ComputeSlot {
    pub(crate) fn compute(&self) -> &dyn Compute {
        self.compute.as_ref()
    }
}

/// Owner of every registered state, compute and command.
///
/// The frame loop looks like:
/// 1. `sync_computes()` applies values published through [`Updater`]s
/// 2. `run_all_dirty()` re-runs computes whose dependencies changed
/// 3. widgets read (`state`, `cached`) and queue work (`update`, `enqueue_command`)
/// 4. `flush_commands()` runs queued commands and applies their results
pub struct StateCtx {
    states: BTreeMap<TypeKey, Box<dyn State>>,
    computes: BTreeMap<TypeKey, ComputeSlot>,
    commands: BTreeMap<TypeKey, Box<dyn Command>>,
    queued: Vec<TypeKey>,

    graph: Graph<TypeKey>,
    order: Option<Vec<TypeKey>>,

    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.keys().collect::<Vec<_>>())
            .field("computes", &self.computes.keys().collect::<Vec<_>>())
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .field("queued", &self.queued)
            .finish_non_exhaustive()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queued: Vec::new(),
            graph: Graph::new(),
            order: None,
            send,
            recv,
        }
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let key = TypeKey::of::<T>();
        debug!("Register state {key:?}");
        self.states.insert(key, Box::new(state));
        self.mark_dependents_dirty(key);
    }

    /// Register a compute. It starts dirty, so the next `run_all_dirty` fills it.
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let key = TypeKey::of::<T>();
        let deps = compute.deps();
        debug!("Register compute {key:?} with deps {:?}", deps.iter().collect::<Vec<_>>());

        self.graph.add_node(key);
        for dep in deps.iter() {
            self.graph.route_to(*dep, key);
        }
        self.order = None;

        self.computes.insert(
            key,
            ComputeSlot {
                compute: Box::new(compute),
                status: SyncStatus::Dirty,
            },
        );
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        let key = TypeKey::of::<T>();
        debug!("Register command {key:?}");
        self.commands.insert(key, Box::new(command));
    }

    /// Validate the dependency graph and cache the compute order.
    pub fn verify_deps(&mut self) -> Result<(), TopologyError<TypeKey>> {
        let order = self.graph.topology_sort()?;
        self.order = Some(order);
        Ok(())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        Dep::new(&self.states, &self.computes).try_state_ref::<T>()
    }

    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access to a state. Computes reading it are marked dirty.
    ///
    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let key = TypeKey::of::<T>();
        self.mark_dependents_dirty(key);
        self.states
            .get_mut(&key)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", Error::state_not_found(key, "StateCtx::state_mut")))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Latest value of a compute, `None` if it was never recorded.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        Dep::new(&self.states, &self.computes)
            .try_compute_ref::<T>()
            .ok()
    }

    pub fn is_dirty<T: Compute>(&self) -> bool {
        self.computes
            .get(&TypeKey::of::<T>())
            .is_some_and(|slot| slot.status == SyncStatus::Dirty)
    }

    /// Run a command now and apply what it published.
    pub fn dispatch<T: Command>(&mut self) -> Result<(), Error> {
        self.run_command(TypeKey::of::<T>())?;
        self.sync_computes();
        Ok(())
    }

    /// Queue a command for the next `flush_commands`. Queuing twice runs it once.
    pub fn enqueue_command<T: Command>(&mut self) {
        let key = TypeKey::of::<T>();
        if !self.queued.contains(&key) {
            self.queued.push(key);
        }
    }

    pub fn flush_commands(&mut self) {
        for key in std::mem::take(&mut self.queued) {
            if let Err(err) = self.run_command(key) {
                error!("Skipping queued command: {err}");
                continue;
            }
            self.sync_computes();
        }
    }

    fn run_command(&self, key: TypeKey) -> Result<(), Error> {
        let command = self
            .commands
            .get(&key)
            .ok_or_else(|| Error::command_not_found(key, "StateCtx::dispatch"))?;
        debug!("Run command {key:?}");
        command.run(Dep::new(&self.states, &self.computes), self.updater());
        Ok(())
    }

    /// Apply every value published since the last sync. Returns how many were applied.
    pub fn sync_computes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((key, value)) = self.recv.try_recv() {
            if let Some(state) = self.states.get_mut(&key) {
                state.assign_box(value);
            } else if let Some(slot) = self.computes.get_mut(&key) {
                slot.compute.assign_box(value);
            } else {
                warn!("Dropping update for unregistered type {key:?}");
                continue;
            }
            applied += 1;
            self.mark_dependents_dirty(key);
        }
        applied
    }

    /// Re-run dirty computes in dependency order.
    pub fn run_all_dirty(&mut self) {
        if self.order.is_none()
            && let Err(err) = self.verify_deps()
        {
            error!("Cannot run computes: {err}");
            return;
        }
        let order = self.order.clone().unwrap_or_default();

        for key in order {
            let Some(slot) = self.computes.get(&key) else {
                continue;
            };
            if slot.status != SyncStatus::Dirty {
                continue;
            }
            debug!("Recompute {key:?}");
            slot.compute
                .compute(Dep::new(&self.states, &self.computes), self.updater());
            self.mark_clean(key);
            self.sync_computes();
        }
    }

    fn mark_clean(&mut self, key: TypeKey) {
        if let Some(slot) = self.computes.get_mut(&key) {
            slot.status = SyncStatus::Clean;
        }
    }

    fn mark_dependents_dirty(&mut self, key: TypeKey) {
        for dependent in self.graph.dependents(key) {
            if let Some(slot) = self.computes.get_mut(&dependent) {
                slot.status = SyncStatus::Dirty;
            }
        }
    }
}
