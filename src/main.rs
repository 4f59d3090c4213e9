//! MoHA Portal Frontend Entry Point

mod api;
mod app;
mod carousel;
mod components;
mod config;
mod content;
mod context;
mod error;
mod guard;
mod menu_editor;
mod models;
mod pages;
mod pagination;
mod session;
mod store;
mod tree;

use app::App;
use leptos::prelude::*;

/// Lines kept for the dashboard's recent activity panel
const LOG_CAPACITY: usize = 200;

fn main() {
    console_error_panic_hook::set_once();
    rolling_logger::init(LOG_CAPACITY);
    mount_to_body(App);
}
