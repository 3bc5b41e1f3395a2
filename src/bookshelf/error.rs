use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Book with id {0} not found")]
    NotFound(u64),

    #[error("Invalid status '{0}': expected 'available' or 'lent'")]
    InvalidStatus(String),

    #[error("No ids left to assign after {0}")]
    IdExhausted(u64),

    #[error("Catalog file is malformed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("{0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
