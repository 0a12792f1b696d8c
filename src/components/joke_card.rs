use dioxus::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::config::JOKE_ELEMENT_ID;
use crate::hooks::use_joke_widget;

/// The joke widget: fetch button, joke display, copy button and error banner
#[component]
pub fn JokeCard() -> Element {
    let joke = use_joke_widget();
    let widget = joke.widget.read();

    let display_text = widget.display().text().to_string();
    let opacity = widget.display_opacity();
    let is_loading = widget.is_loading();
    let fetch_enabled = widget.fetch_button_enabled();
    let fetch_label = widget.fetch_button_label();
    let copy_enabled = widget.copy_button_enabled();
    let copy_label = widget.copy_label().text();
    let error_message = widget
        .error_banner_visible()
        .then(|| widget.error().map(|e| e.user_message().to_string()))
        .flatten();
    let retry_enabled = widget.retry_enabled();
    drop(widget);

    rsx! {
        section {
            class: "joke-card",

            h1 {
                class: "joke-card-title",
                "Dad Jokes"
            }

            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !fetch_enabled,
                aria_busy: "{is_loading}",
                onclick: move |_| joke.fetch.call(()),
                "{fetch_label}"
            }

            // Class list is managed by restart_fade_in, keep it static here
            p {
                id: JOKE_ELEMENT_ID,
                class: "joke-text",
                style: "opacity: {opacity}",
                aria_live: "polite",
                "{display_text}"
            }

            button {
                class: "btn btn-secondary",
                r#type: "button",
                disabled: !copy_enabled,
                onclick: move |_| joke.copy.call(()),
                "{copy_label}"
            }

            if let Some(message) = error_message {
                ErrorBanner {
                    message,
                    retry_enabled,
                    on_retry: move |_| joke.fetch.call(()),
                }
            }
        }
    }
}
