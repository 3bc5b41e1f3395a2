use crate::error::{CatalogError, Result};
use crate::model::{IdPolicy, Record};

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }
}

/// Id for the next record under `policy`.
///
/// `last_id` is the stored high-water mark and only matters for `Monotonic`.
pub fn next_id(records: &[Record], policy: IdPolicy, last_id: Option<u64>) -> Result<u64> {
    let current = match policy {
        IdPolicy::Sequential => records.len() as u64,
        IdPolicy::Monotonic => {
            let highest = records.iter().map(|r| r.id).max().unwrap_or(0);
            highest.max(last_id.unwrap_or(0))
        }
    };
    current
        .checked_add(1)
        .ok_or(CatalogError::IdExhausted(current))
}

/// Position of the first record with `id`. Ids are not guaranteed unique.
pub(crate) fn position_of(records: &[Record], id: u64) -> Option<usize> {
    records.iter().position(|r| r.id == id)
}
