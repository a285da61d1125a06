use std::rc::Rc;

mod app;
mod browser;
mod components;
mod config;
mod date_filter;
mod error;
mod format;
mod gauge;
mod logging;
mod pages;
mod portfolio;
mod preferences;
mod routes;
mod session;
mod table;

#[cfg(test)]
mod tests;

use app::{App, AppProps};
use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("{}; using defaults", e).into());
        AppConfig::default()
    });
    logging::init(config.log_level);
    log::info!("starting dashboard, storage key {:?}", config.storage_key);

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
