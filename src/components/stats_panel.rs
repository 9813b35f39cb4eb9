//! Stats Panel Component
//!
//! Total/completed/remaining counters and the progress bar.

use leptos::prelude::*;

use crate::store::{self, use_app_store};

#[component]
pub fn StatsPanel() -> impl IntoView {
    let app_store = use_app_store();
    let stats = move || store::store_stats(&app_store);

    view! {
        <div class="stats-panel">
            <div class="stats-grid">
                <div class="stat total">
                    <div class="stat-value">{move || stats().total}</div>
                    <div class="stat-label">"Total Tasks"</div>
                </div>
                <div class="stat completed">
                    <div class="stat-value">{move || stats().completed}</div>
                    <div class="stat-label">"Completed"</div>
                </div>
                <div class="stat remaining">
                    <div class="stat-value">{move || stats().remaining}</div>
                    <div class="stat-label">"Remaining"</div>
                </div>
            </div>

            // Hidden while the list is empty
            {move || stats().progress_percent().map(|percent| view! {
                <div class="progress">
                    <div class="progress-header">
                        <span>"Progress"</span>
                        <span class="progress-value">{format!("{}%", percent)}</span>
                    </div>
                    <div class="progress-track">
                        <div class="progress-fill" style=format!("width: {}%;", percent)></div>
                    </div>
                </div>
            })}
        </div>
    }
}
