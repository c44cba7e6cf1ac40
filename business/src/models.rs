//! Catalog records.
//!
//! Wire names follow the bundled JSON datasets (`ownerId`, `categoryId`, `"m"`/`"f"`).
//! Names, titles and icons are interned with `Ustr` because they are copied
//! into every enriched row.

use serde::Deserialize;
use ustr::Ustr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: Ustr,
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub title: Ustr,
    pub icon: Ustr,
    pub owner_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
}

/// A product with its category and the category owner resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProduct {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub user: User,
}

impl EnrichedProduct {
    /// Category cell text, e.g. `"🍏 - Fruits"`.
    pub fn category_label(&self) -> String {
        format!("{} - {}", self.category.icon, self.category.title)
    }
}
