//! Domain model for the todo list.
//!
//! # Responsibility
//! - Define the task record and its input constraints.
//!
//! # Invariants
//! - Every task is identified by a store-issued `TaskId`.
//! - Deletion is a hard remove; there are no tombstones.

pub mod task;
