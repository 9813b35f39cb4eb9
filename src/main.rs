//! Todo Mastery Frontend Entry Point

mod models;
mod config;
mod filter;
mod storage;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting Todo Mastery frontend");
    mount_to_body(App);
}
