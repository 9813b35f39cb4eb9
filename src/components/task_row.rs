//! Task Row Component
//!
//! A single task with toggle, tags, timestamps and edit/delete actions.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{self, use_app_store};

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let app_store = use_app_store();

    let id = task.id;
    let done = task.done;

    view! {
        <div class=if done { "task-row done" } else { "task-row" }>
            <button
                class=if done { "toggle-btn checked" } else { "toggle-btn" }
                on:click=move |_| store::store_toggle(&app_store, id)
            >
                {if done { "✓" } else { "" }}
            </button>

            <div class="task-body">
                <div class="task-title">
                    <span class="category-icon">{task.category.icon()}</span>
                    <span class="task-text">{task.text}</span>
                    <span class=task.priority.badge_class()>{task.priority.as_str()}</span>
                </div>
                <div class="task-meta">
                    <span class="created-at">"🕒 " {task.created_at}</span>
                    <span class="category-label">{task.category.label()}</span>
                </div>
            </div>

            <div class="task-actions">
                <button class="edit-btn" title="Edit" on:click=move |_| store::store_begin_edit(&app_store, id)>
                    "✎"
                </button>
                <button class="delete-btn" title="Delete" on:click=move |_| store::store_delete(&app_store, id)>
                    "×"
                </button>
            </div>
        </div>
    }
}
