use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod router;
pub mod settings;

use crate::common::sidebar::SidebarProvider;
use crate::common::toast::ToastProvider;
use router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <SidebarProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </SidebarProvider>
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

    log::info!("=== BankViewer Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    wasm_bindgen_futures::spawn_local(async {
        match api_client::health_check().await {
            Ok(()) => log::info!("Backend is reachable"),
            Err(err) => log::warn!("Backend health check failed: {}", err),
        }
    });

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
