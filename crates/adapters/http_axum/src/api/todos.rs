//! JSON REST handlers for todos.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use todohub_app::ports::TodoRepository;
use todohub_domain::id::TodoId;
use todohub_domain::todo::{PageRequest, Todo, TodoFields};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a todo.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

/// Response body for a created todo.
#[derive(Debug, Serialize)]
pub struct CreateTodoResponse {
    pub todo: Todo,
}

/// Query string for reading a page of todos.
///
/// Both parameters are lenient: a missing or non-numeric value reads as 0,
/// which means "from the newest" for `prev_id` and "default size" for `size`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReadTodoQuery {
    pub prev_id: i64,
    pub size: i64,
}

impl ReadTodoQuery {
    /// Pick each parameter independently from raw query pairs.
    ///
    /// Only the first occurrence of a key counts, so a repeated or garbled
    /// key never resets the other one.
    #[must_use]
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| -> i64 {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .and_then(|(_, value)| value.parse().ok())
                .unwrap_or(0)
        };
        Self {
            prev_id: first("prev_id"),
            size: first("size"),
        }
    }
}

/// Response body for a page of todos.
#[derive(Debug, Serialize)]
pub struct ReadTodoResponse {
    pub todos: Vec<Todo>,
}

/// Request body for updating a todo.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

/// Response body for an updated todo.
#[derive(Debug, Serialize)]
pub struct UpdateTodoResponse {
    pub todo: Todo,
}

/// Request body for deleting todos.
#[derive(Debug, Deserialize)]
pub struct DeleteTodoRequest {
    #[serde(default)]
    pub ids: Vec<i64>,
}

/// Empty acknowledgement, serialized as `{}`.
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {}

/// `GET /todos?prev_id=&size=`
pub async fn read<R>(
    State(state): State<AppState<R>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ReadTodoResponse>, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let query = pairs
        .map(|Query(pairs)| ReadTodoQuery::from_pairs(&pairs))
        .unwrap_or_default();
    let page = PageRequest::new(query.prev_id, query.size);
    let todos = state.todo_service.read_todos(page).await?;
    Ok(Json(ReadTodoResponse { todos }))
}

/// `POST /todos`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Json<CreateTodoResponse>, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let fields = TodoFields::builder()
        .subject(req.subject)
        .description(req.description)
        .build()?;
    let todo = state.todo_service.create_todo(fields).await?;
    Ok(Json(CreateTodoResponse { todo }))
}

/// `PUT /todos`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<UpdateTodoResponse>, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let id = TodoId::new(req.id)?;
    let fields = TodoFields::builder()
        .subject(req.subject)
        .description(req.description)
        .build()?;
    let todo = state.todo_service.update_todo(id, fields).await?;
    Ok(Json(UpdateTodoResponse { todo }))
}

/// `DELETE /todos`
///
/// A request without a body (and without a content type) deletes nothing.
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    payload: Result<Option<Json<DeleteTodoRequest>>, JsonRejection>,
) -> Result<Json<DeleteTodoResponse>, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let ids = payload?.map(|Json(req)| req.ids).unwrap_or_default();
    let ids = ids
        .into_iter()
        .map(TodoId::new)
        .collect::<Result<Vec<_>, _>>()?;
    state.todo_service.delete_todos(&ids).await?;
    Ok(Json(DeleteTodoResponse {}))
}
