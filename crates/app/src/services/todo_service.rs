//! Todo service — use-cases for managing todos.

use todohub_domain::error::{TodoHubError, ValidationError};
use todohub_domain::id::TodoId;
use todohub_domain::todo::{MAX_DELETE_IDS, PageRequest, Todo, TodoFields};

use crate::ports::TodoRepository;

/// Application service for todo CRUD operations.
pub struct TodoService<R> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new todo after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TodoHubError::Validation`] if the subject is empty, or a
    /// storage error propagated from the repository.
    pub async fn create_todo(&self, fields: TodoFields) -> Result<Todo, TodoHubError> {
        fields.validate()?;
        let todo = self.repo.create(fields).await?;
        tracing::debug!(id = %todo.id, "todo created");
        Ok(todo)
    }

    /// Read one page of todos, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn read_todos(&self, page: PageRequest) -> Result<Vec<Todo>, TodoHubError> {
        tracing::debug!(before = ?page.before, limit = page.limit, "reading todos");
        self.repo.list_page(page).await
    }

    /// Replace the subject and description of an existing todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoHubError::Validation`] if the subject is empty,
    /// [`TodoHubError::NotFound`] if no todo has `id`, or a storage error
    /// from the repository.
    pub async fn update_todo(&self, id: TodoId, fields: TodoFields) -> Result<Todo, TodoHubError> {
        fields.validate()?;
        let todo = self.repo.update(id, fields).await?;
        tracing::debug!(%id, "todo updated");
        Ok(todo)
    }

    /// Delete every todo in `ids`. An empty set is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TodoHubError::Validation`] when `ids` is longer than
    /// [`MAX_DELETE_IDS`], [`TodoHubError::NotFound`] if none of the ids
    /// exist, or a storage error from the repository.
    pub async fn delete_todos(&self, ids: &[TodoId]) -> Result<(), TodoHubError> {
        if ids.is_empty() {
            return Ok(());
        }
        if ids.len() > MAX_DELETE_IDS {
            return Err(ValidationError::TooManyIds {
                count: ids.len(),
                max: MAX_DELETE_IDS,
            }
            .into());
        }
        self.repo.delete(ids).await?;
        tracing::debug!(count = ids.len(), "todos deleted");
        Ok(())
    }
}
