//! Pages module for the application.
//!
//! The catalog has a single page: filters above the product table.

mod catalog_page;

pub use catalog_page::catalog_page;
