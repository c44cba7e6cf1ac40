//! Catalog page: title, filters and the visible products.

use catalog_business::VisibleProductsCompute;
use egui::{Response, Ui};

use crate::{state::State, widgets};

/// Renders the catalog page.
///
/// The table is replaced by the "no results" message when nothing matches.
pub fn catalog_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Product Categories");
        ui.add_space(8.0);

        widgets::filters_panel(&mut state.ctx, ui);
        ui.add_space(12.0);

        match state.ctx.cached::<VisibleProductsCompute>() {
            Some(visible) if !visible.is_empty() => widgets::product_table(ui, visible.rows()),
            _ => {
                widgets::no_results(ui);
            }
        }
    })
    .response
}
