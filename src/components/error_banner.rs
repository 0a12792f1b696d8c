use dioxus::prelude::*;

use crate::config::messages;

/// Error banner with a retry control
#[component]
pub fn ErrorBanner(
    /// Classified failure message
    message: String,
    /// Whether the retry button accepts clicks
    retry_enabled: bool,
    /// Handler for the retry button
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            aria_live: "assertive",

            p {
                class: "error-banner-message",
                "{message}"
            }
            button {
                class: "btn btn-danger",
                r#type: "button",
                disabled: !retry_enabled,
                onclick: move |_| on_retry.call(()),
                {messages::RETRY_BTN}
            }
        }
    }
}
