//! New Task Form Component
//!
//! Input row for adding a task or saving an edit, with priority and
//! category selectors.

use leptos::prelude::*;

use crate::config::INPUT_PLACEHOLDER;
use crate::models::{Category, Priority};
use crate::store::{self, use_app_store};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let app_store = use_app_store();
    let is_editing = move || store::store_is_editing(&app_store);

    view! {
        <div class="new-task-form">
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder=INPUT_PLACEHOLDER
                    prop:value=move || store::store_input(&app_store)
                    on:input=move |ev| store::store_set_input(&app_store, event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            store::store_submit(&app_store);
                        }
                    }
                />

                <Show when=is_editing>
                    <button
                        class="cancel-btn"
                        title="Cancel edit"
                        on:click=move |_| store::store_cancel_edit(&app_store)
                    >
                        "✗"
                    </button>
                </Show>

                <button
                    class="submit-btn"
                    on:click=move |_| store::store_submit(&app_store)
                >
                    {move || if is_editing() { "✓" } else { "+" }}
                </button>
            </div>

            <div class="selector-row">
                <select
                    class="priority-select"
                    on:change=move |ev| {
                        store::store_set_priority(&app_store, Priority::from_str(&event_target_value(&ev)))
                    }
                >
                    {Priority::ALL.iter().map(|&priority| view! {
                        <option
                            value=priority.as_str()
                            prop:selected=move || store::store_priority(&app_store) == priority
                        >
                            {priority.option_label()}
                        </option>
                    }).collect_view()}
                </select>

                <select
                    class="category-select"
                    on:change=move |ev| {
                        store::store_set_category(&app_store, Category::from_str(&event_target_value(&ev)))
                    }
                >
                    {Category::ALL.iter().map(|&category| view! {
                        <option
                            value=category.as_str()
                            prop:selected=move || store::store_category(&app_store) == category
                        >
                            {format!("{} {}", category.icon(), category.label())}
                        </option>
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
