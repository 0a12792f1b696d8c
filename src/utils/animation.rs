//! Restartable fade-in for the joke display
//!
//! Re-adding a class that is already present does not replay a CSS animation, so the
//! class is removed, layout is flushed by reading `offsetWidth`, and the class is added
//! back.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::animation::FADE_IN_CLASS;

/// Replay the fade-in animation on the element with `element_id`
///
/// Missing window, document or element is logged and otherwise ignored.
pub fn restart_fade_in(element_id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
    else {
        log::debug!("No #{} element to animate", element_id);
        return;
    };

    let class_list = element.class_list();
    if let Err(e) = class_list.remove_1(FADE_IN_CLASS) {
        log::warn!("Failed to remove {} class: {:?}", FADE_IN_CLASS, e);
        return;
    }

    // Force reflow so the re-added class starts a fresh animation
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.offset_width();
    }

    if let Err(e) = class_list.add_1(FADE_IN_CLASS) {
        log::warn!("Failed to add {} class: {:?}", FADE_IN_CLASS, e);
    }
}
