//! # todohub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the `TodoRepository` port that storage adapters implement
//! - Provide `TodoService`, the driving port used by the HTTP adapter:
//!   validation, page-size defaulting, and the empty-delete short-circuit
//!
//! ## Dependency rule
//! Depends on `todohub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
