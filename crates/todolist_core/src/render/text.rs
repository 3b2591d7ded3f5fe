//! Plain-text rendering for terminal front ends.

use crate::store::todo_store::{StoreView, TodoStats};

/// Renders one line per task followed by the stats line.
///
/// Control characters in task text are replaced with spaces so a task
/// cannot rewrite the terminal.
pub fn render_task_list_text(view: &StoreView<'_>) -> String {
    let mut lines = Vec::with_capacity(view.tasks.len() + 1);
    if view.tasks.is_empty() {
        lines.push("No tasks yet. Add one above!".to_string());
    }
    for task in view.tasks {
        let mark = if task.completed { 'x' } else { ' ' };
        lines.push(format!(
            "[{mark}] #{} {}",
            task.id,
            display_text(&task.text)
        ));
    }
    lines.push(render_stats_text(&view.stats));
    lines.join("\n")
}

pub fn render_stats_text(stats: &TodoStats) -> String {
    format!(
        "Total: {} | Completed: {} | Pending: {}",
        stats.total, stats.completed, stats.pending
    )
}

/// Replaces control characters with spaces for terminal output.
///
/// Every path that writes task text to a terminal goes through this.
pub fn display_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{display_text, render_task_list_text};
    use crate::store::todo_store::TodoStore;

    #[test]
    fn renders_marks_ids_and_stats() {
        let mut store = TodoStore::new();
        store.add("a").unwrap();
        let b = store.add("b").unwrap();
        store.toggle(b.id).unwrap();

        let text = render_task_list_text(&store.view());
        assert_eq!(
            text,
            "[ ] #1 a\n[x] #2 b\nTotal: 2 | Completed: 1 | Pending: 1"
        );
    }

    #[test]
    fn control_characters_are_neutralized() {
        let mut store = TodoStore::new();
        store.add("evil\u{1b}[2Jtext").unwrap();
        let text = render_task_list_text(&store.view());
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn display_text_replaces_escape_and_newlines() {
        assert_eq!(display_text("a\u{1b}[2J\nb"), "a [2J b");
        assert_eq!(display_text("plain"), "plain");
    }
}
