use thiserror::Error;

/// Failures reported by [`HashTable`](crate::HashTable) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A construction parameter was out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A strict lookup or a delete found no entry for the key.
    #[error("key not found")]
    KeyNotFound,
}

pub type Result<T> = std::result::Result<T, TableError>;
