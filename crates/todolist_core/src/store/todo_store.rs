//! In-memory todo store.
//!
//! # Responsibility
//! - Own the ordered task sequence and the id counter.
//! - Provide all-or-nothing add/toggle/delete/clear operations.
//! - Project live statistics from the sequence.
//!
//! # Invariants
//! - Task ids are unique and strictly increasing in insertion order.
//! - `next_id` is greater than every id ever issued, including deleted ones.
//! - Failed operations leave both the sequence and the counter untouched.

use crate::model::task::{normalize_task_text, Task, TaskId, TaskValidationError};
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(TaskValidationError),
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Derived counters over the current sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Borrowed projection handed to rendering collaborators.
#[derive(Debug, Clone, Copy)]
pub struct StoreView<'a> {
    /// Tasks in display (insertion) order.
    pub tasks: &'a [Task],
    pub stats: TodoStats,
}

/// Owner of the task sequence.
#[derive(Debug, Clone)]
pub struct TodoStore {
    tasks: Vec<Task>,
    next_id: TaskId,
    clock: fn() -> DateTime<Utc>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Creates an empty store whose first issued id is `1`.
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Creates an empty store that stamps `created_at` from `clock`.
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    /// Validates `text` and appends a new pending task.
    ///
    /// # Errors
    /// - `StoreError::Validation` when the trimmed text is blank or too long.
    pub fn add(&mut self, text: &str) -> StoreResult<Task> {
        let text = normalize_task_text(text)?;

        let task = Task::new(self.next_id, text, (self.clock)());
        self.next_id += 1;
        self.tasks.push(task.clone());

        debug!(
            "event=task_add module=store status=ok id={} total={}",
            task.id,
            self.tasks.len()
        );
        Ok(task)
    }

    /// Flips the completion flag of task `id` and returns the updated task.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no task has `id`.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.toggle();

        debug!(
            "event=task_toggle module=store status=ok id={} completed={}",
            id, task.completed
        );
        Ok(task.clone())
    }

    /// Removes task `id`, keeping the relative order of the others.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no task has `id`.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<Task> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let removed = self.tasks.remove(index);

        debug!(
            "event=task_delete module=store status=ok id={} total={}",
            id,
            self.tasks.len()
        );
        Ok(removed)
    }

    /// Removes every task and returns how many were removed.
    ///
    /// The id counter keeps its value.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();

        debug!("event=task_clear module=store status=ok removed={removed}");
        removed
    }

    /// Recomputes counters from the live sequence.
    pub fn stats(&self) -> TodoStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TodoStats {
            total,
            completed,
            pending: total - completed,
        }
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id the next successful `add` will receive.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Current tasks plus freshly computed stats.
    pub fn view(&self) -> StoreView<'_> {
        StoreView {
            tasks: &self.tasks,
            stats: self.stats(),
        }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}
