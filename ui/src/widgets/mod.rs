mod filters_panel;
mod no_results;
pub mod product_table;

pub use filters_panel::filters_panel;
pub use no_results::{NO_RESULTS_TEXT, no_results};
pub use product_table::product_table;
