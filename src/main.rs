//! DSA Tracker Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod models;
mod notice;
mod state;
mod store;
mod tracker;
mod view_model;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    // Only fails if a logger is already installed
    let _ = console_logger::init(config.log_level);
    log::info!("dsa tracker starting, api base `{}`", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
