use sled::transaction::{ConflictableTransactionError, TransactionError};
use strum_macros::AsRefStr;
use thiserror::Error;

use crate::storage::{StorageError, TodoId};

#[derive(Error, Debug, AsRefStr)]
pub enum SledStartupError {
    #[error("Failed to open sled storage")]
    OpenSledStorageError(#[source] sled::Error),
}

#[derive(Error, Debug, AsRefStr)]
pub enum SledStorageError {
    #[error("Data for key not found")]
    NotFound,

    #[error("Failed to encode data")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Failed to decode data")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Sled error")]
    Sled(#[from] sled::Error),

    #[error("Id {0} is already taken")]
    IdTaken(TodoId),

    #[error("Key must be {expected} bytes, got {actual}")]
    InvalidKey { expected: usize, actual: usize },
}

impl From<SledStorageError> for ConflictableTransactionError<SledStorageError> {
    fn from(value: SledStorageError) -> Self {
        ConflictableTransactionError::Abort(value)
    }
}

impl From<TransactionError<SledStorageError>> for SledStorageError {
    fn from(value: TransactionError<SledStorageError>) -> Self {
        match value {
            TransactionError::Abort(e) => e,
            TransactionError::Storage(e) => Self::Sled(e),
        }
    }
}

impl From<SledStorageError> for StorageError {
    fn from(value: SledStorageError) -> Self {
        match value {
            SledStorageError::NotFound => {
                tracing::warn!(error = ?value, error_type = %value.as_ref(), "Record not found by id");
                Self::NotFound
            }
            _ => {
                tracing::error!(error = ?value, error_type = %value.as_ref(), "Storage error");
                Self::Internal(value)
            }
        }
    }
}
