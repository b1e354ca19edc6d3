//! Todo — the single entity managed by the service.

use serde::Serialize;

use crate::error::ValidationError;
use crate::id::TodoId;
use crate::time::Timestamp;

/// Number of todos returned by a read when the caller does not ask for a
/// positive page size.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Upper bound on identifiers in one delete. Keeps the single `IN (...)`
/// statement well under `SQLite`'s bind-parameter limit.
pub const MAX_DELETE_IDS: usize = 1000;

/// A persisted todo.
///
/// `id`, `created_at` and `updated_at` are assigned by the store and are
/// read-only to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: TodoId,
    pub subject: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The client-writable part of a todo, as submitted on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub subject: String,
    pub description: String,
}

impl TodoFields {
    /// Create a builder for constructing [`TodoFields`].
    #[must_use]
    pub fn builder() -> TodoFieldsBuilder {
        TodoFieldsBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySubject`] when `subject` is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subject.is_empty() {
            return Err(ValidationError::EmptySubject);
        }
        Ok(())
    }
}

/// Step-by-step builder for [`TodoFields`].
#[derive(Debug, Default)]
pub struct TodoFieldsBuilder {
    subject: Option<String>,
    description: Option<String>,
}

impl TodoFieldsBuilder {
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consume the builder, validate, and return [`TodoFields`].
    ///
    /// A missing description is stored as the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySubject`] if `subject` is missing or empty.
    pub fn build(self) -> Result<TodoFields, ValidationError> {
        let fields = TodoFields {
            subject: self.subject.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        };
        fields.validate()?;
        Ok(fields)
    }
}

/// One page of a cursor-paginated read, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Only return todos with an id strictly below this one.
    /// `None` starts from the most recent todo.
    pub before: Option<i64>,
    /// Maximum number of todos to return. Always positive.
    pub limit: i64,
}

impl PageRequest {
    /// Build a page request from raw wire values.
    ///
    /// A `prev_id` of 0 means "start from the top". A `size` of 0 or below
    /// falls back to [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn new(prev_id: i64, size: i64) -> Self {
        Self {
            before: (prev_id != 0).then_some(prev_id),
            limit: if size > 0 { size } else { DEFAULT_PAGE_SIZE },
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
