//! Core use-case services.
//!
//! # Responsibility
//! - Wrap the store into command-level APIs for UI layers.
//! - Keep UI layers decoupled from rendering and notification wiring.

pub mod todo_service;
