//! Harness helpers for widget tests.

use catalog_business::{CatalogConfig, CatalogState, SelectionState};
use egui_kittest::Harness;
use kittest::{NodeT, Queryable};

use crate::state::State;

pub struct TestCtx<'a> {
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Harness over the bundled catalog with nothing selected.
    pub fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        Self::with_selection(app, SelectionState::default())
    }

    pub fn with_selection(
        app: impl FnMut(&mut egui::Ui, &mut State) + 'a,
        selection: SelectionState,
    ) -> Self {
        let catalog =
            CatalogState::load(&CatalogConfig::default()).expect("bundled catalog should load");
        let state = State::from_catalog(catalog, selection).expect("catalog graph is acyclic");
        let harness = Harness::new_ui_state(app, state);
        Self { harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }
}

/// One frame to apply queued selections and one to draw the result.
pub fn settle(harness: &mut Harness<'_, State>) {
    harness.step();
    harness.step();
}

/// Focus the search field and type `text` into it, then let the query land.
pub fn type_query(harness: &mut Harness<'_, State>, text: &str) {
    harness.get_by_role(egui::accesskit::Role::TextInput).focus();
    harness.step();
    harness.event(egui::Event::Text(text.to_owned()));
    settle(harness);
}

/// Whether the tab labelled `label` is drawn as selected.
pub fn is_tab_selected(harness: &Harness<'_, State>, label: &str) -> bool {
    let tab = harness.get_by_label(label).accesskit_node();
    tab.toggled() == Some(egui::accesskit::Toggled::True) || tab.is_selected() == Some(true)
}
