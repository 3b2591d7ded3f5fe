//! HTML rendering for the task list and stats panel.
//!
//! # Invariants
//! - Task text is always escaped before it is placed in markup.
//! - Only store-issued numeric ids are interpolated unescaped.

use crate::model::task::Task;
use crate::store::todo_store::{StoreView, TodoStats};
use std::borrow::Cow;
use std::fmt::Write;

const EMPTY_LIST_HTML: &str =
    "<li class=\"todo-empty\">No tasks yet. Add one above! \u{1F4DD}</li>";

/// Escapes untrusted text for element content and quoted attributes.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}

/// Renders the `<li>` items for every task, or a placeholder when empty.
pub fn render_task_list_html(view: &StoreView<'_>) -> String {
    if view.tasks.is_empty() {
        return EMPTY_LIST_HTML.to_string();
    }

    let mut html = String::new();
    for task in view.tasks {
        render_task_item(&mut html, task);
    }
    html
}

/// Renders the three stat labels shown under the list.
pub fn render_stats_html(stats: &TodoStats) -> String {
    format!(
        "<span id=\"total-tasks\">Total: {}</span>\
         <span id=\"completed-tasks\">Completed: {}</span>\
         <span id=\"pending-tasks\">Pending: {}</span>",
        stats.total, stats.completed, stats.pending
    )
}

fn render_task_item(out: &mut String, task: &Task) {
    let class = if task.completed {
        "todo-item completed"
    } else {
        "todo-item"
    };
    let toggle_label = if task.completed {
        "\u{21B6} Undo"
    } else {
        "\u{2713} Done"
    };

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<li class=\"{class}\" data-id=\"{id}\">\
         <span class=\"todo-text\">{text}</span>\
         <div class=\"todo-actions\">\
         <button class=\"todo-btn complete-btn\" data-action=\"toggle\" data-id=\"{id}\">{toggle_label}</button>\
         <button class=\"todo-btn delete-btn\" data-action=\"delete\" data-id=\"{id}\">\u{1F5D1}\u{FE0F} Delete</button>\
         </div></li>",
        id = task.id,
        text = escape_html(&task.text),
    );
}
