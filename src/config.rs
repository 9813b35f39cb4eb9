//! Application Configuration
//!
//! Storage keys and display strings.

pub const APP_TITLE: &str = "Todo Mastery";
pub const APP_TAGLINE: &str = "Organize your life, one task at a time";
pub const SEARCH_PLACEHOLDER: &str = "Search your tasks...";
pub const INPUT_PLACEHOLDER: &str = "What needs to be done?";

/// Keys of the two persisted entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageKeys {
    /// JSON array of task records
    pub todos: &'static str,
    /// "dark" or "light"
    pub theme: &'static str,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            todos: "todos",
            theme: "theme",
        }
    }
}
