//! Storage port — repository trait for todo persistence.

use std::future::Future;

use todohub_domain::error::TodoHubError;
use todohub_domain::id::TodoId;
use todohub_domain::todo::{PageRequest, Todo, TodoFields};

/// Repository for persisting and querying [`Todo`]s.
///
/// Implementations own identifier and timestamp assignment.
pub trait TodoRepository {
    /// Insert a new todo and return it as stored.
    fn create(&self, fields: TodoFields) -> impl Future<Output = Result<Todo, TodoHubError>> + Send;

    /// Look up a single todo, `None` when no row has `id`.
    fn get_by_id(
        &self,
        id: TodoId,
    ) -> impl Future<Output = Result<Option<Todo>, TodoHubError>> + Send;

    /// Return one page of todos ordered by identifier, newest first.
    fn list_page(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<Todo>, TodoHubError>> + Send;

    /// Overwrite the writable fields of an existing todo.
    ///
    /// Fails with [`TodoHubError::NotFound`] when no row has `id`.
    fn update(
        &self,
        id: TodoId,
        fields: TodoFields,
    ) -> impl Future<Output = Result<Todo, TodoHubError>> + Send;

    /// Delete every todo in `ids` with a single statement.
    ///
    /// An empty slice succeeds without touching the store. Fails with
    /// [`TodoHubError::NotFound`] when none of the ids matched.
    fn delete(&self, ids: &[TodoId]) -> impl Future<Output = Result<(), TodoHubError>> + Send;
}
