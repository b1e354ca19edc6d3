//! Typed identifier for todos.
//!
//! Identifiers are assigned by the store on insert and are never chosen by
//! clients, so there is no constructor that generates one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique, store-assigned identifier for a [`Todo`](crate::todo::Todo).
///
/// Deserialization goes through [`TodoId::new`], so a non-positive value is
/// rejected rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TodoId(i64);

impl TodoId {
    /// Wrap a raw identifier, rejecting anything that is not strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when `raw <= 0`.
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if raw <= 0 {
            return Err(ValidationError::InvalidId(raw));
        }
        Ok(Self(raw))
    }

    /// Wrap a value read back from the store, which is trusted to be valid.
    #[must_use]
    pub fn from_row(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<i64> for TodoId {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<TodoId> for i64 {
    fn from(id: TodoId) -> Self {
        id.0
    }
}
