use yew::prelude::*;

pub mod api_client;
pub mod common;
pub mod components;
pub mod hooks;
pub mod settings;

use common::toast::{ToastContext, ToastProvider};
use components::plot::Plot;

#[function_component(PlotPage)]
fn plot_page() -> Html {
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider is mounted above");
    let url = settings::get_settings().plot_url();

    html! { <Plot url={url} on_report={toast_ctx.reporter()} /> }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <PlotPage />
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Plotview Frontend Starting ===");
    log::debug!("Plot endpoint: {}", settings.plot_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
