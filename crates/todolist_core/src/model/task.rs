//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical todo record held by the store.
//! - Own text normalization and length validation for new tasks.
//!
//! # Invariants
//! - `id` is issued by the store and never reused for another task.
//! - `text` is trimmed, non-empty and at most `MAX_TASK_TEXT_CHARS` chars.
//! - `created_at` is fixed at creation time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-issued task identifier. Positive and monotonically assigned.
pub type TaskId = u64;

/// Upper bound for task text, counted in Unicode scalar values after trim.
///
/// This is not a UTF-16 code unit count. Text outside the Basic
/// Multilingual Plane (emoji, for example) counts one per character, so
/// 100 emoji are accepted even though they take 200 UTF-16 units.
pub const MAX_TASK_TEXT_CHARS: usize = 100;

/// Input validation failures for task text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming surrounding whitespace.
    Empty,
    /// Text exceeds `MAX_TASK_TEXT_CHARS` after trimming.
    TooLong { len: usize, max: usize },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty task"),
            Self::TooLong { .. } => write!(f, "task too long"),
        }
    }
}

impl Error for TaskValidationError {}

impl TaskValidationError {
    /// Longer message suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Empty => "Please enter a task!".to_string(),
            Self::TooLong { len, max } => format!(
                "Task is too long ({len} characters)! Please keep it under {max} characters."
            ),
        }
    }
}

/// Trims `raw` and checks it against the task text constraints.
///
/// Returns the trimmed slice on success.
pub fn normalize_task_text(raw: &str) -> Result<&str, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::Empty);
    }
    let len = trimmed.chars().count();
    if len > MAX_TASK_TEXT_CHARS {
        return Err(TaskValidationError::TooLong {
            len,
            max: MAX_TASK_TEXT_CHARS,
        });
    }
    Ok(trimmed)
}

/// A single todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    /// Untrusted user input. Renderers must escape it before display.
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a pending task from already-normalized text.
    ///
    /// Only the store calls this; `text` must have passed
    /// `normalize_task_text`.
    pub(crate) fn new(id: TaskId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at,
        }
    }

    /// Flips the completion flag.
    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_task_text, TaskValidationError, MAX_TASK_TEXT_CHARS};

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize_task_text("  Buy milk \n").unwrap(), "Buy milk");
    }

    #[test]
    fn normalize_rejects_blank_input() {
        assert_eq!(normalize_task_text(""), Err(TaskValidationError::Empty));
        assert_eq!(normalize_task_text(" \t\n"), Err(TaskValidationError::Empty));
    }

    #[test]
    fn normalize_accepts_exact_limit_and_rejects_one_more() {
        let at_limit = "x".repeat(MAX_TASK_TEXT_CHARS);
        assert!(normalize_task_text(&at_limit).is_ok());

        let over = "x".repeat(MAX_TASK_TEXT_CHARS + 1);
        assert_eq!(
            normalize_task_text(&over),
            Err(TaskValidationError::TooLong {
                len: MAX_TASK_TEXT_CHARS + 1,
                max: MAX_TASK_TEXT_CHARS,
            })
        );
    }

    #[test]
    fn length_is_measured_after_trim_in_chars() {
        let padded = format!("   {}   ", "é".repeat(MAX_TASK_TEXT_CHARS));
        assert_eq!(
            normalize_task_text(&padded).unwrap().chars().count(),
            MAX_TASK_TEXT_CHARS
        );
    }

    #[test]
    fn astral_characters_count_once_each() {
        let emoji = "\u{1F600}".repeat(MAX_TASK_TEXT_CHARS);
        assert_eq!(emoji.encode_utf16().count(), 2 * MAX_TASK_TEXT_CHARS);
        assert!(normalize_task_text(&emoji).is_ok());

        let over = "\u{1F600}".repeat(MAX_TASK_TEXT_CHARS + 1);
        assert!(matches!(
            normalize_task_text(&over),
            Err(TaskValidationError::TooLong { len, .. }) if len == MAX_TASK_TEXT_CHARS + 1
        ));
    }

    #[test]
    fn display_uses_short_messages() {
        assert_eq!(TaskValidationError::Empty.to_string(), "empty task");
        assert_eq!(
            TaskValidationError::TooLong { len: 101, max: 100 }.to_string(),
            "task too long"
        );
    }
}
