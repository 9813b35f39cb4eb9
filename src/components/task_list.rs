//! Task List Component
//!
//! Renders the filtered tasks, or an empty-state message explaining why
//! nothing is shown.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::filter::EmptyState;
use crate::store::{self, use_app_store};

#[component]
pub fn TaskList() -> impl IntoView {
    let app_store = use_app_store();

    let visible = move || store::store_visible(&app_store);
    let empty_state = move || {
        let total = store::store_stats(&app_store).total;
        EmptyState::for_view(total, visible().len())
    };

    view! {
        <div class="task-list">
            {move || match empty_state() {
                Some(state) => view! {
                    <div class="empty-state">
                        <div class="empty-icon">"🎯"</div>
                        <p>{state.message()}</p>
                    </div>
                }.into_any(),
                None => view! {
                    <For
                        each=visible
                        key=|task| (task.id, task.text.clone(), task.done)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                }.into_any(),
            }}
        </div>
    }
}
