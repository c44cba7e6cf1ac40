use std::env::vars_os;
use std::ffi::OsString;
use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

use crate::CatalogError;

/// Startup configuration for the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory holding `users.json`, `categories.json` and `products.json`.
    /// `None` uses the datasets bundled into the binary.
    pub data_dir: Option<PathBuf>,
    /// Owner filter applied on the first frame, `0` for all owners.
    pub initial_user_id: u32,
}

// Environment variables as read, before defaults are applied.
#[derive(Debug, Deserialize)]
pub(crate) struct RawConfig {
    catalog_data_dir: Option<String>,
    catalog_initial_user: Option<u32>,
}

impl CatalogConfig {
    /// Read `CATALOG_DATA_DIR` and `CATALOG_INITIAL_USER`.
    pub fn from_env() -> Result<Self, CatalogError> {
        info!("Loading catalog configuration from environment variables");
        Self::from_vars(vars_os())
    }

    /// Like [`from_env`](Self::from_env) over an explicit variable list.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub(crate) fn from_vars(
        vars: impl IntoIterator<Item = (OsString, OsString)>,
    ) -> Result<Self, CatalogError> {
        let vars = vars.into_iter().filter_map(|(key, value)| {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (Ok(key), Err(_)) => {
                    warn!("Ignoring environment variable {key}: value is not valid Unicode");
                    None
                }
                (Err(key), _) => {
                    warn!("Ignoring environment variable {key:?}: name is not valid Unicode");
                    None
                }
            }
        });
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Ok(Self::from_raw(raw))
    }

    pub(crate) fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            catalog_data_dir,
            catalog_initial_user,
        } = raw;

        let data_dir = catalog_data_dir
            .map(|dir| dir.trim().to_owned())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        match &data_dir {
            Some(dir) => info!("Using catalog data from {}", dir.display()),
            None => info!("Using bundled catalog data"),
        }

        Self {
            data_dir,
            initial_user_id: catalog_initial_user.unwrap_or_default(),
        }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_initial_user(mut self, user_id: u32) -> Self {
        self.initial_user_id = user_id;
        self
    }
}
