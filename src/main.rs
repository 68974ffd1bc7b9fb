//! Greeting Site Entry Point

mod models;
mod config;
mod store;
mod candles;
mod quiz;
mod media;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let config = config::load();
    log::info!("greeting site for {} starting", config.recipient);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
