//! # todohub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON todo API on `/todos` (`GET`, `POST`, `PUT`, `DELETE`)
//! - Parse and shallowly validate requests before any store access
//! - Map application results into HTTP responses: JSON on success,
//!   short plaintext bodies on failure
//!
//! ## Dependency rule
//! Depends on `todohub-app` (for port traits and services) and `todohub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
