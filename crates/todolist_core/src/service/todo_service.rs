//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the command entry points (add/toggle/delete/clear) for UI layers.
//! - Notify registered observers after every successful mutation so the
//!   rendering side can redraw from a consistent view.
//!
//! # Invariants
//! - Observers are called in registration order, once per successful mutation.
//! - Failed commands and no-op clears never notify.
//! - Service APIs never bypass store validation.

use crate::model::task::{Task, TaskId};
use crate::store::todo_store::{StoreResult, StoreView, TodoStats, TodoStore};
use log::info;

/// Mutation that just completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(TaskId),
    Toggled { id: TaskId, completed: bool },
    Deleted(TaskId),
    Cleared { removed: usize },
}

impl StoreEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Added(_) => "task_added",
            Self::Toggled { .. } => "task_toggled",
            Self::Deleted(_) => "task_deleted",
            Self::Cleared { .. } => "tasks_cleared",
        }
    }
}

/// Receives store state after each successful mutation.
pub trait StoreObserver {
    fn on_change(&mut self, event: &StoreEvent, view: &StoreView<'_>);
}

impl<F> StoreObserver for F
where
    F: FnMut(&StoreEvent, &StoreView<'_>),
{
    fn on_change(&mut self, event: &StoreEvent, view: &StoreView<'_>) {
        self(event, view)
    }
}

/// Command facade over one owned `TodoStore`.
pub struct TodoService {
    store: TodoStore,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl Default for TodoService {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoService {
    /// Creates a service over a fresh empty store.
    pub fn new() -> Self {
        Self::with_store(TodoStore::new())
    }

    /// Creates a service over an existing store.
    pub fn with_store(store: TodoStore) -> Self {
        Self {
            store,
            observers: Vec::new(),
        }
    }

    /// Registers an observer; it sees only mutations made after this call.
    pub fn subscribe(&mut self, observer: impl StoreObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn add(&mut self, text: &str) -> StoreResult<Task> {
        let task = self.store.add(text)?;
        self.notify(StoreEvent::Added(task.id));
        Ok(task)
    }

    pub fn toggle(&mut self, id: TaskId) -> StoreResult<Task> {
        let task = self.store.toggle(id)?;
        self.notify(StoreEvent::Toggled {
            id,
            completed: task.completed,
        });
        Ok(task)
    }

    /// Deletes unconditionally. Confirmation belongs to the caller.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<Task> {
        let task = self.store.delete(id)?;
        self.notify(StoreEvent::Deleted(id));
        Ok(task)
    }

    /// Clears unconditionally and returns the removed count.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.store.clear_all();
        if removed > 0 {
            self.notify(StoreEvent::Cleared { removed });
        }
        removed
    }

    pub fn stats(&self) -> TodoStats {
        self.store.stats()
    }

    pub fn view(&self) -> StoreView<'_> {
        self.store.view()
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    fn notify(&mut self, event: StoreEvent) {
        let view = self.store.view();
        info!(
            "event={} module=service status=ok total={} completed={} observers={}",
            event.name(),
            view.stats.total,
            view.stats.completed,
            self.observers.len()
        );
        for observer in &mut self.observers {
            observer.on_change(&event, &view);
        }
    }
}
