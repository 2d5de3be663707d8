/// Error types for the item store and its persistence backend.
use thiserror::Error;

/// Failure inside a key-value backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum ElomaticError {
    #[error("Invalid item: {0}")]
    Validation(String),

    #[error("Index {index} out of range ({len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot compare item {0} against itself")]
    SameItem(usize),

    #[error("Need at least 2 items to compare, have {len}")]
    NotEnoughItems { len: usize },

    #[error("No valid items found in input")]
    EmptyInput,

    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),

    #[error("Stored data is not a list of items: {0}")]
    Deserialization(#[source] serde_json::Error),
}

impl ElomaticError {
    /// True for bad or clashing indices passed to `delete` / `record_result`.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::SameItem(_))
    }
}

pub type Result<T> = std::result::Result<T, ElomaticError>;
