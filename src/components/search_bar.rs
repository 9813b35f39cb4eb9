//! Search Bar Component
//!
//! Search input plus the light/dark theme toggle.

use leptos::prelude::*;

use crate::config::SEARCH_PLACEHOLDER;
use crate::store::{self, use_app_store};

#[component]
pub fn SearchBar() -> impl IntoView {
    let app_store = use_app_store();

    view! {
        <div class="search-row">
            <div class="search-box">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    placeholder=SEARCH_PLACEHOLDER
                    prop:value=move || store::store_search(&app_store)
                    on:input=move |ev| store::store_set_search(&app_store, event_target_value(&ev))
                />
            </div>

            <button
                class="theme-toggle"
                title="Toggle theme"
                on:click=move |_| store::store_toggle_theme(&app_store)
            >
                {move || if store::store_theme(&app_store).is_dark() { "☀" } else { "☾" }}
            </button>
        </div>
    }
}
