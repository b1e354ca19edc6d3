//! # todohub-domain
//!
//! Pure domain model for the todohub service.
//!
//! ## Responsibilities
//! - Foundational types: the store-assigned [`TodoId`](id::TodoId), timestamps,
//!   error conventions
//! - Define the **Todo** entity and the invariants every write must satisfy
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod todo;
