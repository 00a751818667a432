//! Pantry Dashboard Frontend Entry Point

mod app;
mod commands;
mod components;
mod console_log;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init();
    mount_to_body(App);
}
