use egui::{Response, RichText, Ui};

pub const NO_RESULTS_TEXT: &str = "No products matching selected criteria";

/// Shown in place of the product table when no row passes the filters.
pub fn no_results(ui: &mut Ui) -> Response {
    ui.label(RichText::new(NO_RESULTS_TEXT).italics())
}
