use super::{to_pretty_json, DataStore};
use crate::error::{CatalogError, Result};
use crate::model::Record;
use std::io;

/// In-memory storage for testing.
/// Keeps the serialized JSON so loads go through the same decoding as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    data: Option<Vec<u8>>,
    last_id: Option<u64>,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every save fails with a persistence error.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Seed the store with raw JSON, as if an existing file held it.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            data: Some(raw.as_bytes().to_vec()),
            ..Self::default()
        }
    }

    pub fn set_failing(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_saves {
            return Err(CatalogError::Persistence(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        match &self.data {
            Some(bytes) => serde_json::from_slice(bytes).map_err(CatalogError::Deserialization),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.check_writable()?;
        self.data = Some(to_pretty_json(records)?);
        self.saves += 1;
        Ok(())
    }

    fn load_last_id(&self) -> Result<Option<u64>> {
        Ok(self.last_id)
    }

    fn save_last_id(&mut self, last_id: u64) -> Result<()> {
        self.check_writable()?;
        self.last_id = Some(last_id);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
