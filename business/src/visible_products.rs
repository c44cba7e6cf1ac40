use std::any::Any;

use catalog_states::{Compute, ComputeDeps, Dep, Updater, assign_impl};
use log::debug;

use crate::{CatalogState, EnrichedProduct, SelectionState, filter_products};

/// Rows the table shows for the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleProductsCompute {
    rows: Vec<EnrichedProduct>,
}

impl VisibleProductsCompute {
    pub fn rows(&self) -> &[EnrichedProduct] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl Compute for VisibleProductsCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new()
            .state::<CatalogState>()
            .state::<SelectionState>()
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let catalog = deps.get_state_ref::<CatalogState>();
        let selection = deps.get_state_ref::<SelectionState>();

        let rows: Vec<EnrichedProduct> = filter_products(&catalog.products, selection)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            "Visible products: {} of {} (user {}, query {:?})",
            rows.len(),
            catalog.products.len(),
            selection.selected_user_id,
            selection.query
        );
        updater.set(Self { rows });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use catalog_states::StateCtx;

    use super::*;
    use crate::CatalogConfig;

    fn ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(CatalogState::load(&CatalogConfig::default()).expect("bundled catalog"));
        ctx.add_state(SelectionState::default());
        ctx.record_compute(VisibleProductsCompute::default());
        ctx
    }

    fn names(ctx: &StateCtx) -> Vec<String> {
        ctx.cached::<VisibleProductsCompute>()
            .map(|visible| visible.rows().iter().map(|p| p.name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn first_run_shows_every_product() {
        let mut ctx = ctx();
        assert!(ctx.cached::<VisibleProductsCompute>().is_some_and(|v| v.is_empty()));

        ctx.run_all_dirty();
        assert_eq!(ctx.cached::<VisibleProductsCompute>().map(|v| v.len()), Some(10));
    }

    #[test]
    fn recomputes_after_selection_changes() {
        let mut ctx = ctx();
        ctx.run_all_dirty();

        ctx.update::<SelectionState>(|selection| selection.selected_user_id = 1);
        ctx.run_all_dirty();
        assert_eq!(names(&ctx), vec!["Milk", "Beer", "Macbook"]);

        ctx.update::<SelectionState>(|selection| selection.query = "be".to_owned());
        ctx.run_all_dirty();
        assert_eq!(names(&ctx), vec!["Beer"]);
    }

    #[test]
    fn owner_without_products_yields_no_rows() {
        let mut ctx = ctx();
        ctx.update::<SelectionState>(|selection| selection.selected_user_id = 4);
        ctx.run_all_dirty();
        assert!(ctx.cached::<VisibleProductsCompute>().is_some_and(|v| v.is_empty()));
    }
}
