//! Error types for CRUD operations.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No record has this id.
    #[error("feedback {0} not found")]
    NotFound(String),
    /// One or more field rules failed; nothing was written.
    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// HTTP-style status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::ValidationFailed(_) => 400,
            ServiceError::Store(_) => 500,
        }
    }
}
