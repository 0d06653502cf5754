use crate::storage::StorageError;
use shared::{OrderError, RemoteError};
use thiserror::Error;

/// Table-order errors
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),
}

pub type TableResult<T> = Result<T, TableError>;

impl TableError {
    /// True when the error comes from checking user input or state rules
    pub fn is_rejection(&self) -> bool {
        matches!(self, TableError::Order(_))
    }
}
