//! Browser-backed implementations of the page seams.
//!
//! On the server every operation is a no-op so components can hold these
//! values unconditionally.

use crate::core::loading::ScrollLock;
use crate::core::navigation::{SectionId, SectionScroller};

/// Locks page scrolling by toggling `overflow` on `<body>`
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        set_body_overflow("hidden");
    }

    fn unlock(&self) {
        set_body_overflow("auto");
    }
}

#[cfg(feature = "hydrate")]
fn set_body_overflow(value: &str) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if let Err(err) = body.style().set_property("overflow", value) {
        leptos::logging::warn!("could not set body overflow: {:?}", err);
    }
}

#[cfg(not(feature = "hydrate"))]
fn set_body_overflow(_value: &str) {}

/// Smooth-scrolls the document to elements by id
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScroller;

impl SectionScroller for DocumentScroller {
    #[cfg(feature = "hydrate")]
    fn scroll_into_view(&self, anchor: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    #[cfg(not(feature = "hydrate"))]
    fn scroll_into_view(&self, _anchor: &str) -> bool {
        false
    }
}

/// Scroll the page to `target`; missing sections are ignored
pub fn go_to(target: SectionId) {
    if !crate::core::navigation::scroll_to(&DocumentScroller, target) {
        leptos::logging::log!("section #{} not on page", target);
    }
}

/// Current vertical scroll offset in px
#[cfg(feature = "hydrate")]
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// Viewport (width, height) in px
#[cfg(feature = "hydrate")]
pub fn viewport() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}
