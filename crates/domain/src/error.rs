//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TodoHubError`] via `#[from]`.

use std::error::Error as StdError;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum TodoHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Failure inside a storage adapter. The concrete error stays opaque
    /// to the layers above.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// A domain invariant was violated by caller input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("subject must not be empty")]
    EmptySubject,

    #[error("identifier must be a positive integer, got {0}")]
    InvalidId(i64),

    #[error("request body could not be decoded")]
    MalformedBody,

    #[error("at most {max} identifiers per delete, got {count}")]
    TooManyIds { count: usize, max: usize },
}

/// An update or delete matched no rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {ids}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub ids: String,
}
