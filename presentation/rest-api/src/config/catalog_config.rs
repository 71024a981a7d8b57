use std::path::PathBuf;

use super::env_or;

/// Location of the per-language catalog datasets (`en.json`, `fr.json`, `nl.json`).
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub data_dir: PathBuf,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_DATA_DIR: directory holding the datasets (default: "data")
    pub fn from_env() -> Self {
        Self {
            data_dir: env_or("CATALOG_DATA_DIR", PathBuf::from("data")),
        }
    }
}
