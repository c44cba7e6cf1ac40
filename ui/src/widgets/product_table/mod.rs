//! Product table.
//!
//! Split the same way as the other tables in the app:
//! - `columns`: Column definitions and widths
//! - `header`: Table header rendering
//! - `row`: One product per row
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use catalog_business::EnrichedProduct;
use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_product_row;

/// Renders `rows` as a striped table in the given order.
pub fn product_table(ui: &mut Ui, rows: &[EnrichedProduct]) {
    let mut table = TableBuilder::new(ui)
        .id_salt("product_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        table = table.column(column);
    }

    table
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header);
        })
        .body(|mut body| {
            for product in rows {
                body.row(ROW_HEIGHT, |mut row| {
                    render_product_row(&mut row, product);
                });
            }
        });
}
