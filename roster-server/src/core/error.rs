//! Startup errors
//!
//! Failures while bringing the server up (work directory, database, bind).
//! Request-path failures use [`shared::error::AppError`] instead, which maps
//! onto the API error envelope.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("database error: {0}")]
    Database(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<surrealdb::Error> for ServerError {
    fn from(err: surrealdb::Error) -> Self {
        ServerError::Database(err.to_string())
    }
}

/// Result alias for startup paths
pub type Result<T> = std::result::Result<T, ServerError>;
