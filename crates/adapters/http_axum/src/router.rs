//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use todohub_app::ports::TodoRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the todo API next to a `/health` probe and wraps everything in a
/// [`TraceLayer`] that logs each HTTP request/response through `tracing`.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: TodoRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
