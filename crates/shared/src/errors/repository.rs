use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;
use tracing::warn;

const MONGO_DUPLICATE_KEY: i32 = 11000;
const DUPLICATE_RECORD: &str = "record already exists";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("Document store error: {0}")]
    Mongo(mongodb::error::Error),

    #[error("Malformed record: {0}")]
    Decode(String),
}

/// The driver text names constraints and indexes; it goes to the log only.
fn duplicate(driver_message: &str) -> RepositoryError {
    warn!("⚠️ Unique key violated: {driver_message}");
    RepositoryError::Conflict(DUPLICATE_RECORD.to_string())
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                RepositoryError::Unavailable(err.to_string())
            }
            sqlx::Error::Io(ref e) => RepositoryError::Unavailable(e.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) => {
                RepositoryError::Decode(err.to_string())
            }
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                duplicate(db.message())
            }
            other => RepositoryError::Sqlx(other),
        }
    }
}

impl From<mongodb::error::Error> for RepositoryError {
    fn from(err: mongodb::error::Error) -> Self {
        let is_duplicate = matches!(
            err.kind.as_ref(),
            ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == MONGO_DUPLICATE_KEY
        );
        if is_duplicate {
            return duplicate(&err.to_string());
        }

        let unreachable = matches!(
            err.kind.as_ref(),
            ErrorKind::ServerSelection { .. } | ErrorKind::Io(_)
        );
        if unreachable {
            return RepositoryError::Unavailable(err.to_string());
        }

        RepositoryError::Mongo(err)
    }
}

impl From<mongodb::bson::de::Error> for RepositoryError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}
