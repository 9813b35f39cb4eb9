//! Filter Tabs Component
//!
//! All / Active / Completed selector.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{self, use_app_store};

#[component]
pub fn FilterTabs() -> impl IntoView {
    let app_store = use_app_store();

    view! {
        <div class="filter-tabs">
            {Filter::ALL.iter().map(|&filter| {
                let is_selected = move || store::store_filter(&app_store) == filter;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store::store_set_filter(&app_store, filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
