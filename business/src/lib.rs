//! Catalog domain: datasets, the join resolver, the filter pipeline and the
//! selection reducer, hosted on `catalog-states`.

mod catalog_state;
mod config;
pub mod dataset;
mod error;
pub mod filter;
pub mod join;
mod models;
mod selection;
mod visible_products;

use catalog_states::StateCtx;

pub use catalog_state::CatalogState;
pub use config::CatalogConfig;
pub use dataset::Dataset;
pub use error::CatalogError;
pub use filter::{filter_products, normalize_query};
pub use join::resolve;
pub use models::{Category, EnrichedProduct, Product, Sex, User};
pub use selection::{
    ApplySelectionCommand, SelectionAction, SelectionInput, SelectionState, reduce,
    request_selection,
};
pub use visible_products::VisibleProductsCompute;

/// Register every catalog state, compute and command on `ctx`.
pub fn register(ctx: &mut StateCtx, catalog: CatalogState, selection: SelectionState) {
    ctx.add_state(catalog);
    ctx.add_state(selection);
    ctx.add_state(SelectionInput::default());
    ctx.record_compute(VisibleProductsCompute::default());
    ctx.record_command(ApplySelectionCommand);
}
