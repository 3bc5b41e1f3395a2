use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lending state. Older catalog files used localized labels; those are read
/// from files but never accepted as typed input, and never written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "available", alias = "в наличии")]
    Available,
    #[serde(rename = "lent", alias = "выдана")]
    Lent,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Lent => "lent",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Status::Available),
            "lent" => Ok(Status::Lent),
            other => Err(CatalogError::InvalidStatus(other.to_string())),
        }
    }
}

/// How new records get their id.
///
/// `Sequential` hands out `count + 1`, so an id can repeat after a deletion.
/// `Monotonic` keeps a high-water mark next to the catalog and never reuses an id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    #[default]
    Sequential,
    Monotonic,
}

impl FromStr for IdPolicy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(IdPolicy::Sequential),
            "monotonic" => Ok(IdPolicy::Monotonic),
            other => Err(CatalogError::Input(format!(
                "Unknown id policy '{}': expected 'sequential' or 'monotonic'",
                other
            ))),
        }
    }
}

/// One book entry. The serialized form has exactly these five keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: Status,
}

impl Record {
    pub fn new(id: u64, title: String, author: String, year: i32) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: Status::default(),
        }
    }

    /// Case-sensitive substring match on title, author, or the decimal year.
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query)
            || self.author.contains(query)
            || self.year.to_string().contains(query)
    }
}
