use std::any::Any;

use catalog_states::{State, assign_impl};
use log::info;

use crate::{CatalogConfig, CatalogError, Dataset, EnrichedProduct, User, join};

/// Loaded catalog: the owners shown as tabs and every resolved product.
///
/// Immutable after startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub users: Vec<User>,
    pub products: Vec<EnrichedProduct>,
}

impl CatalogState {
    /// Load the datasets named by `config` and join them.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let dataset = match &config.data_dir {
            Some(dir) => Dataset::from_dir(dir)?,
            None => Dataset::bundled()?,
        };
        Self::from_dataset(&dataset)
    }

    pub fn from_dataset(dataset: &Dataset) -> Result<Self, CatalogError> {
        let products = join::resolve(dataset)?;
        info!(
            "Catalog loaded: {} users, {} categories, {} products",
            dataset.users.len(),
            dataset.categories.len(),
            products.len()
        );
        Ok(Self {
            users: dataset.users.clone(),
            products,
        })
    }
}

impl State for CatalogState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}
