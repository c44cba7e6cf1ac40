//! Owner and query selection.
//!
//! `SelectionState` is an immutable value changed only through [`reduce`].
//! Widgets never write it directly:
//! 1) push a [`SelectionAction`] with [`request_selection`]
//! 2) the app loop runs `ctx.flush_commands()` at end of frame
//! 3) [`ApplySelectionCommand`] folds every queued action and publishes one new state

use std::any::Any;

use catalog_states::{Command, Dep, State, StateCtx, Updater, assign_impl};
use log::info;

/// Current filter inputs. Defaults to no owner filter and an empty query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Owner to filter by; `0` means all owners.
    pub selected_user_id: u32,
    /// Raw query text as typed. Normalized only when filtering.
    pub query: String,
}

impl SelectionState {
    pub fn with_user(selected_user_id: u32) -> Self {
        Self {
            selected_user_id,
            query: String::new(),
        }
    }

    pub fn has_user_filter(&self) -> bool {
        self.selected_user_id != 0
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}

impl State for SelectionState {
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Filter by owner id; `0` clears the owner filter.
    SelectUser(u32),
    /// Replace the query verbatim.
    SetQuery(String),
    ClearQuery,
    /// Clear both the owner filter and the query.
    ResetAll,
}

/// Pure transition function for [`SelectionState`].
///
/// Inputs are not validated: any id and any text are accepted.
pub fn reduce(state: &SelectionState, action: SelectionAction) -> SelectionState {
    match action {
        SelectionAction::SelectUser(selected_user_id) => SelectionState {
            selected_user_id,
            ..state.clone()
        },
        SelectionAction::SetQuery(query) => SelectionState {
            query,
            ..state.clone()
        },
        SelectionAction::ClearQuery => SelectionState {
            query: String::new(),
            ..state.clone()
        },
        SelectionAction::ResetAll => SelectionState::default(),
    }
}

/// Actions requested during the current frame, applied by [`ApplySelectionCommand`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionInput {
    actions: Vec<SelectionAction>,
}

impl SelectionInput {
    pub fn push(&mut self, action: SelectionAction) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[SelectionAction] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl State for SelectionInput {
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

/// Folds queued [`SelectionAction`]s into a new [`SelectionState`] and empties the queue.
#[derive(Default, Debug)]
pub struct ApplySelectionCommand;

impl Command for ApplySelectionCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let input = deps.get_state_ref::<SelectionInput>();
        if input.is_empty() {
            return;
        }

        let current = deps.get_state_ref::<SelectionState>();
        let next = input
            .actions()
            .iter()
            .cloned()
            .fold(current.clone(), |state, action| reduce(&state, action));

        if next != *current {
            info!(
                "Selection changed: user {} -> {}, query {:?} -> {:?}",
                current.selected_user_id, next.selected_user_id, current.query, next.query
            );
            updater.set(next);
        }
        updater.set(SelectionInput::default());
    }
}

/// Queue `action` for the end-of-frame flush.
pub fn request_selection(ctx: &mut StateCtx, action: SelectionAction) {
    ctx.update::<SelectionInput>(|input| input.push(action));
    ctx.enqueue_command::<ApplySelectionCommand>();
}
