//! Post Cards Frontend Entry Point

mod app;
mod card_state;
mod components;
mod config;
mod context;
mod dialog;
mod models;
mod outside_click;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::{error, info};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::embedded() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = rolling_logger::init(config.log.to_logger_config()) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into());
    }
    if let Some(e) = config_error {
        error!("[APP] invalid config, using defaults: {}", e);
    }
    info!("[APP] mounting with {} posts", config.seed_posts.len());

    mount_to_body(move || view! { <App config=config /> });
}
