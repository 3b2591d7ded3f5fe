use todolist_core::{render_stats_text, render_task_list_html, render_task_list_text, TodoStore};

#[test]
fn html_escapes_script_injection_in_task_text() {
    let mut store = TodoStore::new();
    store.add("<script>alert(\"pwned\")</script>").unwrap();

    let html = render_task_list_html(&store.view());

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&quot;pwned&quot;"));
}

#[test]
fn html_lists_tasks_in_insertion_order_with_ids() {
    let mut store = TodoStore::new();
    store.add("first").unwrap();
    store.add("second").unwrap();

    let html = render_task_list_html(&store.view());

    let first = html.find("first").unwrap();
    let second = html.find("second").unwrap();
    assert!(first < second);
    assert!(html.contains("data-id=\"1\""));
    assert!(html.contains("data-id=\"2\""));
    assert_eq!(html.matches("<li ").count(), 2);
}

#[test]
fn pending_task_offers_done_action() {
    let mut store = TodoStore::new();
    store.add("pending").unwrap();

    let html = render_task_list_html(&store.view());

    assert!(html.contains("Done"));
    assert!(html.contains("class=\"todo-item\""));
}

#[test]
fn text_rendering_for_empty_store() {
    let store = TodoStore::new();
    assert_eq!(
        render_task_list_text(&store.view()),
        "No tasks yet. Add one above!\nTotal: 0 | Completed: 0 | Pending: 0"
    );
    assert_eq!(
        render_stats_text(&store.stats()),
        "Total: 0 | Completed: 0 | Pending: 0"
    );
}
