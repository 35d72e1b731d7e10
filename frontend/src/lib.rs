use web_sys::console;

pub mod api;
pub mod components;
pub mod config;
pub mod images;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

/// Browser entry point: logging, runtime config, then the app.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        console::warn_1(&"Logger already initialized".into());
    }
    console::log_1(&"Starting Storefront Frontend: initializing runtime config".into());

    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        router::mount_app();
    });
}
