#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod config;
mod hooks;
mod services;
mod stores;
mod utils;

use components::JokeCard;
use config::WidgetConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting dad joke widget");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(WidgetConfig::default);
    use_effect(move || {
        log::info!(
            "Joke endpoint {} (timeout {:?})",
            config.endpoint,
            config.fetch_timeout
        );
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        main {
            class: "widget-page",
            JokeCard {}
        }
    }
}
