//! Repositories over the embedded store
//!
//! Members are addressed by email, never by record id.

pub mod member;

pub use member::MemberRepository;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Store failures, classified so the API layer can pick the right
/// error code without parsing driver messages.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("duplicate: {0}")]
    Duplicate(String),

    #[error("lookup failed: {0}")]
    Lookup(String),

    #[error("persist failed: {0}")]
    Persist(String),

    #[error("invalid: {0}")]
    Validation(String),
}

impl RepoError {
    /// Classify a driver error raised while reading
    pub fn lookup(err: surrealdb::Error) -> Self {
        RepoError::Lookup(err.to_string())
    }

    /// Classify a driver error raised while writing.
    ///
    /// A violation of the unique email index surfaces as `Duplicate` so the
    /// caller reports a conflict rather than a server fault.
    pub fn persist(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        if msg.contains("unique_email") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Persist(msg)
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::MemberNotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::DuplicateEmail, msg),
            RepoError::Lookup(msg) => AppError::lookup_failed(msg),
            RepoError::Persist(msg) => AppError::persist_failed(msg),
            RepoError::Validation(msg) => AppError::invalid_request(msg),
        }
    }
}

pub type RepoResult<T> = Result<T, RepoError>;
