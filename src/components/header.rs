//! Header Component

use leptos::prelude::*;

use crate::config::{APP_TAGLINE, APP_TITLE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>{APP_TITLE}</h1>
            <p class="tagline">{APP_TAGLINE}</p>
        </header>
    }
}
