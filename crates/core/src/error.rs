use thiserror::Error;

use crate::meeting::validate::ValidationError;

/// Failures reported by a [`MeetingStore`](crate::store::MeetingStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a record with id {0} already exists")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors surfaced by the handler set.
///
/// `NotFound` carries only the kind of record that was missing. A record that
/// exists but belongs to another user yields the same error.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
