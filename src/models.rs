//! Frontend Models
//!
//! Task record plus the small enums used to tag, filter and theme it.

use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Order used by the priority selector
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Unknown values fall back to medium
    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    pub fn option_label(&self) -> &'static str {
        match self {
            Priority::Low => "🟢 Low Priority",
            Priority::Medium => "🟡 Medium Priority",
            Priority::High => "🔴 High Priority",
        }
    }

    /// CSS classes for the badge next to the task text
    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::High => "priority-badge priority-high",
            Priority::Medium => "priority-badge priority-medium",
            Priority::Low => "priority-badge priority-low",
        }
    }
}

/// Task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Personal,
    Work,
    Shopping,
    Health,
    Education,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Personal,
        Category::Work,
        Category::Shopping,
        Category::Health,
        Category::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Shopping => "shopping",
            Category::Health => "health",
            Category::Education => "education",
        }
    }

    /// Unknown values fall back to personal
    pub fn from_str(s: &str) -> Self {
        match s {
            "work" => Category::Work,
            "shopping" => Category::Shopping,
            "health" => Category::Health,
            "education" => Category::Education,
            _ => Category::Personal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Education => "Education",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Personal => "👤",
            Category::Work => "💼",
            Category::Shopping => "🛒",
            Category::Health => "🏥",
            Category::Education => "📚",
        }
    }
}

/// View predicate over the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.done,
            Filter::Completed => task.done,
        }
    }
}

/// Light/dark presentation, persisted across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only the exact string "dark" selects the dark theme
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A single to-do record, stored as camelCase JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Creation time in epoch milliseconds, unique within the list
    pub id: u64,
    pub text: String,
    pub done: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Category,
    /// Display string, never parsed back
    pub created_at: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl Task {
    pub fn new(id: u64, text: String, priority: Priority, category: Category, created_at: String) -> Self {
        Self {
            id,
            text,
            done: false,
            priority,
            category,
            created_at,
            due_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(done: bool) -> Task {
        let mut task = Task::new(1, "Task".to_string(), Priority::Low, Category::Work, String::new());
        task.done = done;
        task
    }

    #[test]
    fn test_priority_strings() {
        assert_eq!(Priority::High.as_str(), "high");
        assert_eq!(Priority::from_str("low"), Priority::Low);
        assert_eq!(Priority::from_str("urgent"), Priority::Medium);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_category_strings() {
        assert_eq!(Category::from_str("education"), Category::Education);
        assert_eq!(Category::from_str(""), Category::Personal);
        assert_eq!(Category::Shopping.icon(), "🛒");
        assert_eq!(Category::Health.label(), "Health");
    }

    #[test]
    fn test_filter_matches() {
        let open = make_task(false);
        let closed = make_task(true);

        assert!(Filter::All.matches(&open) && Filter::All.matches(&closed));
        assert!(Filter::Active.matches(&open));
        assert!(!Filter::Active.matches(&closed));
        assert!(Filter::Completed.matches(&closed));
        assert!(!Filter::Completed.matches(&open));
        assert_eq!(Filter::Completed.label(), "Completed");
    }

    #[test]
    fn test_theme() {
        assert_eq!(Theme::from_str("dark"), Theme::Dark);
        assert_eq!(Theme::from_str("Dark"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn test_task_json_layout() {
        let task = Task::new(42, "Buy milk".to_string(), Priority::High, Category::Shopping, "now".to_string());
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["id"], 42);
        assert_eq!(json["done"], false);
        assert_eq!(json["priority"], "high");
        assert_eq!(json["category"], "shopping");
        assert_eq!(json["createdAt"], "now");
        assert!(json["dueDate"].is_null());
    }

    #[test]
    fn test_task_missing_tags_use_defaults() {
        let raw = r#"{"id":7,"text":"Old","done":true,"createdAt":"then"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();

        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.category, Category::Personal);
        assert_eq!(task.due_date, None);
    }
}
