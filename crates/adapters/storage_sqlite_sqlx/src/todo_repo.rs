//! `SQLite` implementation of [`TodoRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use todohub_app::ports::TodoRepository;
use todohub_domain::error::{NotFoundError, TodoHubError};
use todohub_domain::id::TodoId;
use todohub_domain::time::Timestamp;
use todohub_domain::todo::{PageRequest, Todo, TodoFields};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Todo`].
struct Wrapper(Todo);

fn parse_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let subject: String = row.try_get("subject")?;
        let description: String = row.try_get("description")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Todo {
            id: TodoId::from_row(id),
            subject,
            description,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO todos (subject, description) VALUES (?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, subject, description, created_at, updated_at FROM todos WHERE id = ?";
const SELECT_LATEST: &str = "SELECT id, subject, description, created_at, updated_at FROM todos ORDER BY id DESC LIMIT ?";
const SELECT_BEFORE: &str = "SELECT id, subject, description, created_at, updated_at FROM todos WHERE id < ? ORDER BY id DESC LIMIT ?";
const UPDATE: &str = r"
    UPDATE todos
    SET subject = ?, description = ?, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
    WHERE id = ?
";
const DELETE_PREFIX: &str = "DELETE FROM todos WHERE id IN (";

/// `SQLite`-backed todo repository.
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read back a row the caller just wrote, picking up store-assigned
    /// timestamps.
    async fn confirm(&self, id: TodoId) -> Result<Todo, TodoHubError> {
        self.get_by_id(id).await?.ok_or_else(|| not_found(&[id]))
    }
}

fn not_found(ids: &[TodoId]) -> TodoHubError {
    let ids = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    NotFoundError { entity: "Todo", ids }.into()
}

impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, fields: TodoFields) -> Result<Todo, TodoHubError> {
        let result = sqlx::query(INSERT)
            .bind(&fields.subject)
            .bind(&fields.description)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        self.confirm(TodoId::from_row(result.last_insert_rowid())).await
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<Todo>, TodoHubError> {
        let query = match page.before {
            None => sqlx::query_as::<Sqlite, Wrapper>(SELECT_LATEST).bind(page.limit),
            Some(before) => sqlx::query_as::<Sqlite, Wrapper>(SELECT_BEFORE)
                .bind(before)
                .bind(page.limit),
        };
        let rows: Vec<Wrapper> = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, id: TodoId, fields: TodoFields) -> Result<Todo, TodoHubError> {
        let result = sqlx::query(UPDATE)
            .bind(&fields.subject)
            .bind(&fields.description)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(not_found(&[id]));
        }

        self.confirm(id).await
    }

    async fn delete(&self, ids: &[TodoId]) -> Result<(), TodoHubError> {
        if ids.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(DELETE_PREFIX);
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id.as_i64());
        }
        separated.push_unseparated(")");

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(not_found(ids));
        }
        Ok(())
    }
}
