//! Thin wrappers over the browser APIs the page needs. Every helper degrades
//! to a no-op when the window or the element is unavailable.

use log::warn;
use shared::dto::feedback::browser_info;
use shared::presentation::{anchor_scroll_top, scroll_progress};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

fn html_element(selector: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Stops the page behind an overlay from scrolling.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = body() else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        warn!("Failed to update body overflow: {:?}", e);
    }
}

/// Smoothly brings a section's top edge into view.
pub fn scroll_into_view(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scrolls to an in-page anchor, leaving room for the sticky navigation.
/// Returns false when there is no such section.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = html_element(&format!("#{}", id)) else {
        return false;
    };
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or_default();
    let nav_height = html_element("nav")
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or_default();

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(
        f64::from(target.offset_top()),
        nav_height,
        viewport_width,
    ));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Current width of the scroll progress bar, in percent.
pub fn current_scroll_progress() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let scroll_y = window.scroll_y().unwrap_or_default();
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let height = body().map(|b| f64::from(b.scroll_height())).unwrap_or_default();
    scroll_progress(scroll_y, height, viewport)
}

/// Browser, screen and viewport line attached to feedback.
pub fn current_browser_info() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let screen = window
        .screen()
        .ok()
        .map(|s| (s.width().unwrap_or_default(), s.height().unwrap_or_default()))
        .unwrap_or_default();
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or_default() as i32
    };
    let viewport = (dimension(window.inner_width()), dimension(window.inner_height()));
    browser_info(&user_agent, screen, viewport)
}

pub fn current_page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}
