use crate::error::{CatalogError, Result};
use crate::model::IdPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_CATALOG_FILE: &str = "library.json";

/// Configuration for bookshelf, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Backing file for the catalog. Relative paths resolve against the working directory.
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// How ids are assigned to new books
    #[serde(default)]
    pub id_policy: IdPolicy,
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_FILE)
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            id_policy: IdPolicy::default(),
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(CatalogError::Deserialization)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, file: Option<PathBuf>, id_policy: Option<IdPolicy>) -> Self {
        if let Some(file) = file {
            self.file = file;
        }
        if let Some(policy) = id_policy {
            self.id_policy = policy;
        }
        self
    }
}
