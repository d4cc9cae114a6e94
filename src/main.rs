mod app;
mod commands;
mod components;
mod context;
mod markdown;
mod models;
mod state;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
