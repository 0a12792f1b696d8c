//! use_joke_widget hook - owns the widget controller and wires its async flows
//!
//! The controller lives in a single signal. Fetch and copy handlers spawn the flows
//! from `stores::widget_actions` with browser timers. On unmount the in-flight request
//! is aborted and Dioxus drops any task still running.

use dioxus::prelude::*;
use std::rc::Rc;

use crate::config::{WidgetConfig, JOKE_ELEMENT_ID};
use crate::services::{IcanhazdadjokeApi, WebClipboard};
use crate::stores::joke_widget::JokeWidgetController;
use crate::stores::widget_actions::{copy_joke, fetch_joke};
use crate::utils::animation::restart_fade_in;
use crate::utils::time::sleep;

/// Return type for the use_joke_widget hook
#[derive(Clone, Copy)]
pub struct UseJokeWidget {
    /// Controller state; read it to render
    pub widget: Signal<JokeWidgetController>,
    /// Fetch a new joke (also used by the retry control)
    pub fetch: EventHandler<()>,
    /// Copy the displayed joke to the clipboard
    pub copy: EventHandler<()>,
}

/// Hook for the joke widget
///
/// Reads `WidgetConfig` from context, falling back to the defaults.
///
/// # Example
/// ```rust
/// let joke = use_joke_widget();
///
/// button {
///     disabled: !joke.widget.read().fetch_button_enabled(),
///     onclick: move |_| joke.fetch.call(()),
///     "{joke.widget.read().fetch_button_label()}"
/// }
/// ```
pub fn use_joke_widget() -> UseJokeWidget {
    let config = try_use_context::<WidgetConfig>().unwrap_or_default();
    let widget = use_signal(JokeWidgetController::new);
    let api = use_hook(|| Rc::new(IcanhazdadjokeApi::from_config(&config)));

    // Abort the browser request if the widget goes away mid-fetch
    use_drop(move || {
        let mut widget = widget;
        if let Ok(mut controller) = widget.try_write() {
            controller.cancel_in_flight();
        };
    });

    // Replay the fade-in whenever the display text changes
    let fade_epoch = use_fade_epoch(widget);
    use_effect(move || {
        if fade_epoch() > 0 {
            restart_fade_in(JOKE_ELEMENT_ID);
        }
    });

    let fetch_timeout = config.fetch_timeout;
    let fetch = use_callback(move |_: ()| {
        if widget.peek().is_loading() {
            return; // Already fetching
        }

        let api = api.clone();
        spawn(async move {
            fetch_joke(widget, &*api, fetch_timeout, sleep).await;
        });
    });

    let copy_reset_delay = config.copy_reset_delay;
    let copy = use_callback(move |_: ()| {
        if !widget.peek().copy_button_enabled() {
            return;
        }

        spawn(async move {
            copy_joke(widget, &WebClipboard, copy_reset_delay, sleep).await;
        });
    });

    UseJokeWidget { widget, fetch, copy }
}

/// Memo over the controller's fade epoch
///
/// Copy-label writes touch the same signal; only a display change moves this value.
fn use_fade_epoch(widget: Signal<JokeWidgetController>) -> Memo<u64> {
    use_memo(move || widget.read().fade_epoch())
}
