//! UI Components
//!
//! Leptos components making up the to-do card.

mod header;
mod search_bar;
mod filter_tabs;
mod new_task_form;
mod task_list;
mod task_row;
mod stats_panel;

pub use header::Header;
pub use search_bar::SearchBar;
pub use filter_tabs::FilterTabs;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use stats_panel::StatsPanel;
