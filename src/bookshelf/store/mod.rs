//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the record sequence lives. The catalog
//! only ever reads or writes the whole sequence at once.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in a single JSON file
//!   - Record sequence in the backing file (JSON array)
//!   - Monotonic id high-water mark in a sidecar `<stem>.seq.json`
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - Keeps the serialized form so tests exercise the same encoding
//!   - Can be told to fail every save
//!
//! ## Storage Format
//!
//! ```text
//! library.json        # [{"id": 1, "title": ..., "author": ..., "year": ..., "status": ...}]
//! library.seq.json    # {"last_id": 3}   (only with monotonic ids)
//! ```

use crate::error::{CatalogError, Result};
use crate::model::Record;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
///
/// Every call reads or writes the full state; nothing is held open between calls.
pub trait DataStore {
    /// Load every record, in stored order. A store with nothing saved yet is empty.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the stored sequence with `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;

    /// Highest id ever handed out, if one was recorded
    fn load_last_id(&self) -> Result<Option<u64>>;

    fn save_last_id(&mut self, last_id: u64) -> Result<()>;

    /// Human-readable description of where the data lives
    fn location(&self) -> String;
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Sequence {
    pub last_id: u64,
}

/// Pretty JSON with 4-space indentation. serde_json leaves non-ASCII text unescaped.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(CatalogError::Serialization)?;
    Ok(buf)
}
