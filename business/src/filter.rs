//! Filter pipeline: owner filter, then text filter.

use crate::{EnrichedProduct, SelectionState};

/// Query as compared against product names: trimmed and lower-cased.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Rows visible under `selection`, in source order.
///
/// `selected_user_id == 0` disables the owner filter; a blank query disables
/// the text filter. Both filters must pass for a row to be kept.
pub fn filter_products<'a>(
    products: &'a [EnrichedProduct],
    selection: &SelectionState,
) -> Vec<&'a EnrichedProduct> {
    let mut visible: Vec<&EnrichedProduct> = products.iter().collect();

    if selection.has_user_filter() {
        visible.retain(|product| product.user.id == selection.selected_user_id);
    }

    let query = normalize_query(&selection.query);
    if !query.is_empty() {
        visible.retain(|product| product.name.to_lowercase().contains(&query));
    }

    visible
}
