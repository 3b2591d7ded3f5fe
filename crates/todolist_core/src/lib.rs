//! Core state and rendering for the todo list.
//! This crate owns every task invariant; front ends only issue commands.

pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::task::{Task, TaskId, TaskValidationError, MAX_TASK_TEXT_CHARS};
pub use render::html::{escape_html, render_stats_html, render_task_list_html};
pub use render::text::{display_text, render_stats_text, render_task_list_text};
pub use service::todo_service::{StoreEvent, StoreObserver, TodoService};
pub use store::todo_store::{StoreError, StoreResult, StoreView, TodoStats, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
