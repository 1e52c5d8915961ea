//! A small Yew widget library for summarizing numeric trends.
//!
//! The public surface is the [`TrendIndicator`] component plus the pure
//! resolution core in [`trend`], which hosts outside Yew can drive directly
//! to get class tokens, an icon tag and a formatted label for any value.

pub mod components;
pub mod settings;
pub mod trend;

use yew::prelude::*;

pub use components::{TrendIndicator, TrendIndicatorProps};
pub use trend::{resolve, ResolvedTrend, TrendCategory, TrendIcon, TrendSize};

use components::Showcase;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Showcase />
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Trend Indicator Showcase Starting ===");
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
