//! Column definitions for the product table.

use egui_extras::Column;

pub const ID_WIDTH: f32 = 50.0;
pub const USER_WIDTH: f32 = 100.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Columns in order: ID, Product, Category, User.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),             // ID
        Column::remainder().at_least(120.0), // Product - flexible
        Column::auto().at_least(140.0),      // Category
        Column::exact(USER_WIDTH),           // User
    ]
}
