//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The mutators are
//! plain methods on `AppState` so they can be exercised without a reactive
//! runtime.

use chrono::{DateTime, Local};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{self, Stats};
use crate::models::{Category, Filter, Priority, Task, Theme};

/// Format used for `Task::created_at`, e.g. "10/18/2026, 3:04:05 PM"
const CREATED_AT_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Session state: the persisted list and theme plus ephemeral UI state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Newest first
    pub todos: Vec<Task>,
    pub theme: Theme,
    pub search: String,
    pub filter: Filter,
    /// Task currently loaded into the input for editing
    pub editing: Option<u64>,
    /// Pending input text
    pub input: String,
    /// Priority for the next new task
    pub priority: Priority,
    /// Category for the next new task
    pub category: Category,
}

impl AppState {
    pub fn new(todos: Vec<Task>, theme: Theme) -> Self {
        Self {
            todos,
            theme,
            ..Default::default()
        }
    }

    /// `now_ms`, bumped past the largest existing id on collision
    pub fn next_id(&self, now_ms: u64) -> u64 {
        match self.todos.iter().map(|t| t.id).max() {
            Some(max) if now_ms <= max => max + 1,
            _ => now_ms,
        }
    }

    /// Add a new task, or save the edit in progress.
    ///
    /// Blank input leaves everything untouched and returns `false`.
    pub fn submit(&mut self, now: DateTime<Local>) -> bool {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return false;
        }

        match self.editing.take() {
            Some(id) => {
                if let Some(task) = self.todos.iter_mut().find(|t| t.id == id) {
                    task.text = text;
                }
                tracing::debug!(id, "task edited");
            }
            None => {
                let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or_default();
                let id = self.next_id(now_ms);
                let created_at = now.format(CREATED_AT_FORMAT).to_string();
                self.todos.insert(0, Task::new(id, text, self.priority, self.category, created_at));
                tracing::debug!(id, priority = self.priority.as_str(), category = self.category.as_str(), "task added");
            }
        }

        self.input.clear();
        self.priority = Priority::default();
        true
    }

    pub fn toggle(&mut self, id: u64) {
        if let Some(task) = self.todos.iter_mut().find(|t| t.id == id) {
            task.done = !task.done;
            tracing::debug!(id, done = task.done, "task toggled");
        }
    }

    /// Deleting the task under edit also cancels the edit
    pub fn delete(&mut self, id: u64) {
        self.todos.retain(|t| t.id != id);
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        tracing::debug!(id, "task deleted");
    }

    /// Load a task's text and tags into the input row
    pub fn begin_edit(&mut self, id: u64) {
        let Some(task) = self.todos.iter().find(|t| t.id == id) else {
            return;
        };
        self.input = task.text.clone();
        self.priority = task.priority;
        self.category = task.category;
        self.editing = Some(id);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.input.clear();
        self.priority = Priority::default();
        self.category = Category::default();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn visible(&self) -> Vec<Task> {
        filter::visible_tasks(&self.todos, &self.search, self.filter)
    }

    pub fn stats(&self) -> Stats {
        Stats::from_tasks(&self.todos)
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_submit(store: &AppStore) {
    store.update(|state| {
        state.submit(Local::now());
    });
}

pub fn store_toggle(store: &AppStore, id: u64) {
    store.update(|state| state.toggle(id));
}

pub fn store_delete(store: &AppStore, id: u64) {
    store.update(|state| state.delete(id));
}

pub fn store_begin_edit(store: &AppStore, id: u64) {
    store.update(|state| state.begin_edit(id));
}

pub fn store_cancel_edit(store: &AppStore) {
    store.update(|state| state.cancel_edit());
}

pub fn store_set_input(store: &AppStore, input: String) {
    store.input().set(input);
}

pub fn store_set_search(store: &AppStore, search: String) {
    store.search().set(search);
}

pub fn store_set_filter(store: &AppStore, filter: Filter) {
    store.filter().set(filter);
}

pub fn store_set_priority(store: &AppStore, priority: Priority) {
    store.priority().set(priority);
}

pub fn store_set_category(store: &AppStore, category: Category) {
    store.category().set(category);
}

pub fn store_toggle_theme(store: &AppStore) {
    store.theme().update(|theme| *theme = theme.toggled());
}

// Reactive reads, tracked by the caller's effect or view

pub fn store_todos(store: &AppStore) -> Vec<Task> {
    store.todos().get()
}

pub fn store_theme(store: &AppStore) -> Theme {
    store.theme().get()
}

pub fn store_input(store: &AppStore) -> String {
    store.input().get()
}

pub fn store_search(store: &AppStore) -> String {
    store.search().get()
}

pub fn store_filter(store: &AppStore) -> Filter {
    store.filter().get()
}

pub fn store_priority(store: &AppStore) -> Priority {
    store.priority().get()
}

pub fn store_category(store: &AppStore) -> Category {
    store.category().get()
}

pub fn store_is_editing(store: &AppStore) -> bool {
    store.editing().with(|editing| editing.is_some())
}

pub fn store_visible(store: &AppStore) -> Vec<Task> {
    store.with(|state| state.visible())
}

pub fn store_stats(store: &AppStore) -> Stats {
    store.todos().with(|todos| Stats::from_tasks(todos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(ms).unwrap()
    }

    fn state_with_input(text: &str) -> AppState {
        AppState {
            input: text.to_string(),
            ..Default::default()
        }
    }

    fn add(state: &mut AppState, text: &str, ms: i64) -> u64 {
        state.input = text.to_string();
        assert!(state.submit(at(ms)));
        state.todos[0].id
    }

    #[test]
    fn test_blank_input_is_ignored() {
        for blank in ["", "   ", "\t\n"] {
            let mut state = state_with_input(blank);
            state.priority = Priority::High;

            assert!(!state.submit(at(1_000)));
            assert!(state.todos.is_empty());
            assert_eq!(state.input, blank);
            assert_eq!(state.priority, Priority::High);
        }
    }

    #[test]
    fn test_add_prepends_with_attributes() {
        let mut state = AppState::default();
        add(&mut state, "First", 1_000);

        state.input = "  Buy milk ".to_string();
        state.priority = Priority::High;
        state.category = Category::Shopping;
        assert!(state.submit(at(2_000)));

        let head = &state.todos[0];
        assert_eq!(state.todos.len(), 2);
        assert_eq!(head.id, 2_000);
        assert_eq!(head.text, "Buy milk");
        assert_eq!(head.priority, Priority::High);
        assert_eq!(head.category, Category::Shopping);
        assert!(!head.done);
        assert_eq!(head.due_date, None);
        assert!(!head.created_at.is_empty());
    }

    #[test]
    fn test_submit_resets_input_and_priority_only() {
        let mut state = state_with_input("Stretch");
        state.priority = Priority::Low;
        state.category = Category::Health;
        state.submit(at(1_000));

        assert!(state.input.is_empty());
        assert_eq!(state.priority, Priority::Medium);
        assert_eq!(state.category, Category::Health);
    }

    #[test]
    fn test_ids_stay_unique_within_same_millisecond() {
        let mut state = AppState::default();
        let a = add(&mut state, "a", 5_000);
        let b = add(&mut state, "b", 5_000);
        let c = add(&mut state, "c", 4_000);

        assert_eq!(a, 5_000);
        assert_eq!(b, 5_001);
        assert_eq!(c, 5_002);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut state = AppState::default();
        let id = add(&mut state, "Toggle me", 1_000);

        state.toggle(id);
        assert!(state.todos[0].done);
        state.toggle(id);
        assert!(!state.todos[0].done);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut state = AppState::default();
        add(&mut state, "Keep", 1_000);
        let before = state.todos.clone();

        state.toggle(99);
        assert_eq!(state.todos, before);
    }

    #[test]
    fn test_delete_only_task_clears_stats() {
        let mut state = AppState::default();
        let id = add(&mut state, "Only", 1_000);
        state.toggle(id);

        state.delete(id);
        let stats = state.stats();
        assert_eq!((stats.total, stats.completed, stats.remaining), (0, 0, 0));
        assert_eq!(stats.progress_percent(), None);
    }

    #[test]
    fn test_edit_overwrites_text_only() {
        let mut state = AppState::default();
        state.priority = Priority::High;
        state.category = Category::Work;
        let id = add(&mut state, "Draft report", 1_000);
        add(&mut state, "Other", 2_000);

        state.begin_edit(id);
        assert_eq!(state.input, "Draft report");
        assert_eq!(state.priority, Priority::High);
        assert_eq!(state.category, Category::Work);
        assert!(state.is_editing());

        state.input = " Final report ".to_string();
        state.priority = Priority::Low;
        assert!(state.submit(at(3_000)));

        assert_eq!(state.todos.len(), 2);
        let edited = state.todos.iter().find(|t| t.id == id).unwrap();
        assert_eq!(edited.text, "Final report");
        assert_eq!(edited.priority, Priority::High);
        assert!(!state.is_editing());
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_blank_edit_keeps_edit_open() {
        let mut state = AppState::default();
        let id = add(&mut state, "Keep", 1_000);
        state.begin_edit(id);
        state.input = "   ".to_string();

        assert!(!state.submit(at(2_000)));
        assert_eq!(state.editing, Some(id));
        assert_eq!(state.todos[0].text, "Keep");
    }

    #[test]
    fn test_cancel_edit_resets_draft() {
        let mut state = AppState::default();
        state.category = Category::Education;
        let id = add(&mut state, "Read", 1_000);

        state.begin_edit(id);
        state.cancel_edit();

        assert_eq!(state.editing, None);
        assert!(state.input.is_empty());
        assert_eq!(state.priority, Priority::Medium);
        assert_eq!(state.category, Category::Personal);
        assert_eq!(state.todos[0].text, "Read");
    }

    #[test]
    fn test_begin_edit_unknown_id_is_noop() {
        let mut state = state_with_input("typing");
        state.begin_edit(42);

        assert_eq!(state.editing, None);
        assert_eq!(state.input, "typing");
    }

    #[test]
    fn test_delete_task_under_edit_cancels_edit() {
        let mut state = AppState::default();
        let id = add(&mut state, "Gone", 1_000);
        state.begin_edit(id);

        state.delete(id);
        assert!(state.todos.is_empty());
        assert_eq!(state.editing, None);
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_visible_uses_search_and_filter() {
        let mut state = AppState::default();
        let milk = add(&mut state, "Buy milk", 1_000);
        add(&mut state, "Walk dog", 2_000);
        state.toggle(milk);

        state.search = "MILK".to_string();
        assert_eq!(state.visible().len(), 1);

        state.filter = Filter::Active;
        assert!(state.visible().is_empty());
        assert_eq!(state.stats().total, 2);
    }
}
