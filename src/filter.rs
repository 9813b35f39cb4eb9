//! Derived View
//!
//! Search/filter predicate over the task list plus the aggregate counters.

use crate::models::{Filter, Task};

/// Case-insensitive substring match; an empty search matches everything
pub fn matches_search(task: &Task, search: &str) -> bool {
    task.text.to_lowercase().contains(&search.to_lowercase())
}

/// Tasks passing both the search and the filter, in list order
pub fn visible_tasks(tasks: &[Task], search: &str, filter: Filter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| matches_search(task, search) && filter.matches(task))
        .cloned()
        .collect()
}

/// Counters over the whole list, independent of search and filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

impl Stats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.done).count();
        Self {
            total,
            completed,
            remaining: total - completed,
        }
    }

    /// Rounded completion percentage, `None` when there is nothing to track
    pub fn progress_percent(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        let ratio = self.completed as f64 / self.total as f64;
        Some((ratio * 100.0).round() as u32)
    }
}

/// Why the visible list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The list itself is empty
    NoTasks,
    /// Tasks exist but none pass search/filter
    NoMatches,
}

impl EmptyState {
    pub fn for_view(total: usize, visible: usize) -> Option<Self> {
        match (total, visible) {
            (0, _) => Some(EmptyState::NoTasks),
            (_, 0) => Some(EmptyState::NoMatches),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoTasks => "No tasks yet. Add one above!",
            EmptyState::NoMatches => "No tasks match your search.",
        }
    }
}
