use leptos::*;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod utils;

#[cfg(test)]
mod test_support;

pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {}", err).into());
    }
    log::info!("Starting portal frontend (wasm)");

    // Warm the API base URL cache. A login started before this finishes resolves it separately.
    spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    router::mount_app();
}
