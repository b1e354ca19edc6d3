//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod todos;

use axum::Router;
use axum::routing::get;

use todohub_app::ports::TodoRepository;

use crate::state::AppState;

/// Build the todo API sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: TodoRepository + Send + Sync + 'static,
{
    Router::new().route(
        "/todos",
        get(todos::read::<R>)
            .post(todos::create::<R>)
            .put(todos::update::<R>)
            .delete(todos::delete::<R>),
    )
}
