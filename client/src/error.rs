//! Errors raised while wiring controllers to the browser.
//!
//! ERROR HANDLING
//! ==============
//! Controller setup returns `Result<(), DomError>`. Failures are logged by
//! `report_init` and never propagate, so one broken section cannot stop the
//! rest of the page from initializing.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(crate::util::dom::describe_js(&value))
    }
}

/// Log a controller setup failure. Returns whether setup succeeded.
pub fn report_init(component: &str, result: Result<(), DomError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::error!("failed to initialize {component}: {e}");
            false
        }
    }
}
