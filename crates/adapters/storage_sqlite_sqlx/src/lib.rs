//! # todohub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `TodoRepository` port defined in `todohub-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Create the `todos` table on first start (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `todohub-app` (for port traits) and `todohub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod todo_repo;

pub use pool::open;
pub use todo_repo::SqliteTodoRepository;
