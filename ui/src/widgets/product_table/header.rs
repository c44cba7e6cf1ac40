//! Table header rendering for the product table.

use egui_extras::TableRow;

const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];

#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    for label in HEADERS {
        header.col(|ui| {
            ui.strong(label);
        });
    }
}
