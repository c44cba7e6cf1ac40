use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the catalog.
///
/// All of them surface at startup; once the catalog is built, filtering and
/// rendering cannot fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product {product_id} references unknown category {category_id}")]
    UnresolvedCategory { product_id: u32, category_id: u32 },

    #[error("category {category_id} references unknown owner {owner_id}")]
    UnresolvedOwner { category_id: u32, owner_id: u32 },

    #[error("failed to parse the {name} dataset")]
    Dataset {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog configuration")]
    Config(#[from] serde_env::Error),
}
