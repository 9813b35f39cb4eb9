//! Todo Mastery App
//!
//! Root component: restores persisted state, provides the store and mirrors
//! every change back to storage.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterTabs, Header, NewTaskForm, SearchBar, StatsPanel, TaskList};
use crate::config::StorageKeys;
use crate::models::Theme;
use crate::storage::{self, KeyValueStore};
use crate::store::{self, AppState};

#[component]
pub fn App() -> impl IntoView {
    let keys = StorageKeys::default();
    let backend: Rc<dyn KeyValueStore> = Rc::from(storage::open_default());

    // Restore persisted state before the first render
    let todos = storage::load_todos(backend.as_ref(), &keys).unwrap_or_else(|error| {
        tracing::error!(%error, "failed to load tasks, starting empty");
        Vec::new()
    });
    let theme = storage::load_theme(backend.as_ref(), &keys).unwrap_or_else(|error| {
        tracing::warn!(%error, "failed to load theme");
        Theme::default()
    });
    tracing::info!(count = todos.len(), theme = theme.as_str(), "state restored");

    let app_store = Store::new(AppState::new(todos, theme));
    provide_context(app_store);

    // Save tasks on change. The first run only subscribes, so a list that
    // failed to load is not overwritten until the user changes something.
    let todos_backend = Rc::clone(&backend);
    Effect::new(move |prev: Option<()>| {
        let todos = store::store_todos(&app_store);
        if prev.is_none() {
            return;
        }
        if let Err(error) = storage::save_todos(todos_backend.as_ref(), &keys, &todos) {
            tracing::error!(%error, "failed to save tasks");
        }
    });

    // Save theme and apply it to the document root
    let theme_backend = Rc::clone(&backend);
    Effect::new(move |_| {
        let theme = store::store_theme(&app_store);
        if let Err(error) = storage::save_theme(theme_backend.as_ref(), &keys, theme) {
            tracing::error!(%error, "failed to save theme");
        }
        apply_theme_class(theme);
    });

    let root_class = move || {
        if store::store_theme(&app_store).is_dark() {
            "app dark"
        } else {
            "app"
        }
    };

    view! {
        <div class=root_class>
            <div class="container">
                <Header />

                <div class="main-card">
                    <div class="top-controls">
                        <SearchBar />
                        <FilterTabs />
                    </div>

                    <NewTaskForm />

                    <TaskList />

                    <StatsPanel />
                </div>
            </div>
        </div>
    }
}

/// Toggle the `dark` class on `<html>`
fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    if let Err(error) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        tracing::warn!(?error, "failed to apply theme class");
    }
}
