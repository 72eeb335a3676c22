//! Thin `web_sys` helpers for the page controllers. Browser only.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::error::DomError;
use crate::state::nav::SectionBounds;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn html_element_by_id(id: &str) -> Result<HtmlElement, DomError> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::MissingElement(format!("#{id}")))
}

/// Attach a listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_window(event: &str, handler: impl FnMut(web_sys::Event) + 'static) -> Result<(), DomError> {
    let window = window()?;
    listen(&window, event, handler)
}

pub fn on_document(event: &str, handler: impl FnMut(web_sys::Event) + 'static) -> Result<(), DomError> {
    let document = document()?;
    listen(&document, event, handler)
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) -> Result<(), DomError> {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Measure every `section[id]` for active-link tracking.
pub fn section_bounds() -> Result<Vec<SectionBounds>, DomError> {
    Ok(query_all("section[id]")?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect())
}

pub fn set_body_style(property: &str, value: &str) -> Result<(), DomError> {
    let body = document()?
        .body()
        .ok_or_else(|| DomError::MissingElement("body".to_owned()))?;
    body.style().set_property(property, value)?;
    Ok(())
}

/// Whether the window `load` event has already fired.
pub fn is_page_loaded() -> bool {
    document()
        .ok()
        .and_then(|doc| js_sys::Reflect::get(&doc, &JsValue::from_str("readyState")).ok())
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "complete")
}

/// Feature-detect a property such as `IntersectionObserver` on `target`.
pub fn supports(target: &JsValue, property: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(property)).unwrap_or(false)
}

/// Best-effort text for a thrown JS value.
pub fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
