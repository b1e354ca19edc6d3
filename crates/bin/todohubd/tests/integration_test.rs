//! End-to-end tests for the full todohubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use todohub_adapter_http_axum::router;
use todohub_adapter_http_axum::state::AppState;
use todohub_adapter_storage_sqlite_sqlx::{SqliteTodoRepository, open};
use todohub_app::services::todo_service::TodoService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let pool = open("sqlite::memory:")
        .await
        .expect("in-memory database should initialise");

    let repo = SqliteTodoRepository::new(pool);
    router::build(AppState::new(TodoService::new(repo)))
}

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

async fn json_body(resp: Response) -> Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

async fn create(app: &axum::Router, subject: &str, description: &str) -> Value {
    let resp = send(
        app,
        "POST",
        "/todos",
        Some(json!({ "subject": subject, "description": description })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    json_body(resp).await["todo"].clone()
}

async fn read(app: &axum::Router, uri: &str) -> Vec<Value> {
    let resp = send(app, "GET", uri, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    json_body(resp).await["todos"]
        .as_array()
        .expect("todos should be an array")
        .clone()
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().expect("timestamp should be a string"))
        .expect("timestamp should be RFC 3339")
        .to_utc()
}

fn ids(todos: &[Value]) -> Vec<i64> {
    todos.iter().map(|t| t["id"].as_i64().unwrap()).collect()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let resp = send(&app, "GET", "/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_todo_with_store_assigned_fields() {
    let app = app().await;

    let first = create(&app, "buy milk", "2 litres").await;
    let second = create(&app, "walk dog", "").await;

    assert_eq!(first["subject"], "buy milk");
    assert_eq!(first["description"], "2 litres");
    assert!(first["id"].as_i64().unwrap() > 0);
    assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());
    assert!(timestamp(&second["created_at"]) >= timestamp(&first["created_at"]));
    assert!(timestamp(&second["updated_at"]) >= timestamp(&first["updated_at"]));
}

#[tokio::test]
async fn should_reject_empty_subject_and_persist_nothing() {
    let app = app().await;

    let resp = send(
        &app,
        "POST",
        "/todos",
        Some(json!({ "subject": "", "description": "orphan" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(read(&app, "/todos").await.is_empty());
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_empty_array_when_no_todos() {
    let app = app().await;
    let resp = send(&app, "GET", "/todos", None).await;
    assert_eq!(json_body(resp).await, json!({ "todos": [] }));
}

#[tokio::test]
async fn should_return_at_most_five_newest_first_by_default() {
    let app = app().await;
    let mut created = Vec::new();
    for n in 0..8 {
        created.push(create(&app, &format!("todo {n}"), "").await["id"].as_i64().unwrap());
    }

    let page = read(&app, "/todos?prev_id=0&size=0").await;
    let expected: Vec<i64> = created.iter().rev().take(5).copied().collect();
    assert_eq!(ids(&page), expected);
}

#[tokio::test]
async fn should_page_through_with_cursor() {
    let app = app().await;
    for n in 0..6 {
        create(&app, &format!("todo {n}"), "").await;
    }

    let first = read(&app, "/todos?size=4").await;
    assert_eq!(first.len(), 4);
    let cursor = *ids(&first).last().unwrap();

    let second = read(&app, &format!("/todos?prev_id={cursor}&size=4")).await;
    assert_eq!(second.len(), 2);
    assert!(ids(&second).iter().all(|id| *id < cursor));
    assert!(ids(&second).windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test]
async fn should_treat_garbage_query_params_as_defaults() {
    let app = app().await;
    for n in 0..6 {
        create(&app, &format!("todo {n}"), "").await;
    }

    let page = read(&app, "/todos?prev_id=last&size=many").await;
    assert_eq!(page.len(), 5);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_when_updating_missing_todo_and_create_nothing() {
    let app = app().await;

    let resp = send(
        &app,
        "PUT",
        "/todos",
        Some(json!({ "id": 12345, "subject": "ghost" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert!(read(&app, "/todos").await.is_empty());
}

#[tokio::test]
async fn should_reject_update_with_zero_id_or_empty_subject() {
    let app = app().await;
    let todo = create(&app, "keep", "me").await;

    let zero_id = send(&app, "PUT", "/todos", Some(json!({ "id": 0, "subject": "x" }))).await;
    assert_eq!(zero_id.status(), StatusCode::BAD_REQUEST);

    let empty_subject = send(
        &app,
        "PUT",
        "/todos",
        Some(json!({ "id": todo["id"], "subject": "" })),
    )
    .await;
    assert_eq!(empty_subject.status(), StatusCode::BAD_REQUEST);

    let page = read(&app, "/todos").await;
    assert_eq!(page[0]["subject"], "keep");
}

#[tokio::test]
async fn should_round_trip_create_read_update_read() {
    let app = app().await;
    let created = create(&app, "draft", "first version").await;
    let id = created["id"].as_i64().unwrap();

    let page = read(&app, &format!("/todos?prev_id={}&size=1", id + 1)).await;
    assert_eq!(page, vec![created.clone()]);

    std::thread::sleep(std::time::Duration::from_millis(5));
    let resp = send(
        &app,
        "PUT",
        "/todos",
        Some(json!({ "id": id, "subject": "final", "description": "second version" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = json_body(resp).await["todo"].clone();
    assert_eq!(updated["id"], id);

    let page = read(&app, &format!("/todos?prev_id={}&size=1", id + 1)).await;
    let reread = &page[0];
    assert_eq!(reread["subject"], "final");
    assert_eq!(reread["description"], "second version");
    assert_eq!(reread["created_at"], created["created_at"]);
    assert!(timestamp(&reread["updated_at"]) > timestamp(&created["updated_at"]));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_acknowledge_empty_delete_as_no_op() {
    let app = app().await;
    create(&app, "stay", "").await;

    let resp = send(&app, "DELETE", "/todos", Some(json!({ "ids": [] }))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!({}));

    assert_eq!(read(&app, "/todos").await.len(), 1);
}

#[tokio::test]
async fn should_return_not_found_when_deleting_only_missing_ids() {
    let app = app().await;
    create(&app, "stay", "").await;

    let resp = send(&app, "DELETE", "/todos", Some(json!({ "ids": [900, 901] }))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert_eq!(read(&app, "/todos").await.len(), 1);
}

#[tokio::test]
async fn should_delete_listed_todos() {
    let app = app().await;
    let a = create(&app, "a", "").await;
    let b = create(&app, "b", "").await;
    let c = create(&app, "c", "").await;

    let resp = send(
        &app,
        "DELETE",
        "/todos",
        Some(json!({ "ids": [a["id"], c["id"]] })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page = read(&app, "/todos").await;
    assert_eq!(page, vec![b]);
}

#[tokio::test]
async fn should_treat_bodyless_delete_as_empty_set() {
    let app = app().await;
    create(&app, "stay", "").await;

    let resp = send(&app, "DELETE", "/todos", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(read(&app, "/todos").await.len(), 1);
}

#[tokio::test]
async fn should_keep_cursor_when_size_is_repeated() {
    let app = app().await;
    let mut created = Vec::new();
    for n in 0..4 {
        created.push(create(&app, &format!("todo {n}"), "").await["id"].as_i64().unwrap());
    }

    let page = read(&app, &format!("/todos?prev_id={}&size=1&size=3", created[3])).await;
    assert_eq!(ids(&page), vec![created[2]]);
}
