use std::fs;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::{Category, CatalogError, Product, User};

const USERS_JSON: &str = include_str!("../data/users.json");
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");
const PRODUCTS_JSON: &str = include_str!("../data/products.json");

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// The three raw record sets the catalog is joined from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Dataset {
    /// Datasets compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(USERS_JSON, CATEGORIES_JSON, PRODUCTS_JSON)
    }

    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            users: parse("users", users)?,
            categories: parse("categories", categories)?,
            products: parse("products", products)?,
        })
    }

    /// Read `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        info!("Loading catalog datasets from {}", dir.display());
        let users = read(dir, USERS_FILE)?;
        let categories = read(dir, CATEGORIES_FILE)?;
        let products = read(dir, PRODUCTS_FILE)?;
        Self::from_json(&users, &categories, &products)
    }
}

fn read(dir: &Path, file: &str) -> Result<String, CatalogError> {
    let path = dir.join(file);
    fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
}

fn parse<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Dataset { name, source })
}
