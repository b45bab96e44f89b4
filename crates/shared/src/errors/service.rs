use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{context}: {source}")]
    Repo {
        context: String,
        #[source]
        source: RepositoryError,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Custom error: {0}")]
    Custom(String),
}

impl ServiceError {
    /// Wraps a repository failure with the operation and key it was serving.
    pub fn from_repo(context: &str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound(context.to_string()),
            RepositoryError::Conflict(msg) => ServiceError::Conflict(format!("{context}: {msg}")),
            RepositoryError::Unavailable(msg) => {
                ServiceError::Unavailable(format!("{context}: {msg}"))
            }
            source => ServiceError::Repo {
                context: context.to_string(),
                source,
            },
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, ServiceError::Unavailable(_))
    }
}
