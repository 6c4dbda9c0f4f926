//! Payment Portal Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod format;
mod models;
mod state;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
