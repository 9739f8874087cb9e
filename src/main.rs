mod app;
mod components;
mod config;
mod hooks;
mod models;
mod pages;
mod services;
mod utils;

use app::App;

fn main() {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🎭 Billetterie Spectacles - démarrage ({})", config::CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
