//! State ownership for the todo list.
//!
//! # Responsibility
//! - Hold the authoritative task sequence behind a narrow mutation API.
//! - Report semantic errors (`Validation`, `NotFound`) as typed results.
//!
//! # Invariants
//! - Callers never touch the underlying sequence directly.
//! - Every operation is all-or-nothing.

pub mod todo_store;
