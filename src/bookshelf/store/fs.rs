use super::{to_pretty_json, DataStore, Sequence};
use crate::error::{CatalogError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores the catalog as one JSON file, rewritten in full on every save.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `library.json` -> `library.seq.json`
    pub fn sequence_path(&self) -> PathBuf {
        self.path.with_extension("seq.json")
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(CatalogError::Deserialization)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;
        let content = to_pretty_json(records)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn load_last_id(&self) -> Result<Option<u64>> {
        let seq_path = self.sequence_path();
        if !seq_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(seq_path)?;
        let seq: Sequence =
            serde_json::from_str(&content).map_err(CatalogError::Deserialization)?;
        Ok(Some(seq.last_id))
    }

    fn save_last_id(&mut self, last_id: u64) -> Result<()> {
        self.ensure_parent()?;
        let content = to_pretty_json(&Sequence { last_id })?;
        fs::write(self.sequence_path(), content)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
