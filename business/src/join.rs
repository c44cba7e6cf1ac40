//! Join resolver: products → categories → owners.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::warn;

use crate::{Category, CatalogError, Dataset, EnrichedProduct, User};

/// Resolve every product's category and owner.
///
/// Lookups go through id-keyed tables built once. When a dataset repeats an
/// id, the first record wins. Output keeps the product order of `dataset`.
/// The first dangling reference aborts the join.
pub fn resolve(dataset: &Dataset) -> Result<Vec<EnrichedProduct>, CatalogError> {
    let categories = index_by_id("categories", &dataset.categories, |c| c.id);
    let users = index_by_id("users", &dataset.users, |u| u.id);

    dataset
        .products
        .iter()
        .map(|product| -> Result<EnrichedProduct, CatalogError> {
            let category: Category = categories
                .get(&product.category_id)
                .map(|category| **category)
                .ok_or(CatalogError::UnresolvedCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                })?;
            let user: User = users
                .get(&category.owner_id)
                .map(|user| **user)
                .ok_or(CatalogError::UnresolvedOwner {
                    category_id: category.id,
                    owner_id: category.owner_id,
                })?;

            Ok(EnrichedProduct {
                id: product.id,
                name: product.name.clone(),
                category,
                user,
            })
        })
        .collect()
}

fn index_by_id<'a, T>(
    name: &str,
    records: &'a [T],
    id: impl Fn(&T) -> u32,
) -> HashMap<u32, &'a T> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        match index.entry(id(record)) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(slot) => {
                warn!("Duplicate id {} in {name}, keeping the first record", slot.key());
            }
        }
    }
    index
}
