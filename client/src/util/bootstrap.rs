//! Page-wide browser hooks installed before hydration.
//!
//! ERROR HANDLING
//! ==============
//! Global `error` and `unhandledrejection` handlers only log. Service worker
//! registration is best effort: unsupported browsers are skipped and a failed
//! registration is logged.

use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent};

use crate::error::{DomError, report_init};
use crate::util::dom;

pub const SERVICE_WORKER_PATH: &str = "/sw.js";

pub fn install_browser_hooks() {
    report_init("global error handlers", install_global_error_handlers());
    report_init("service worker", schedule_service_worker());
}

fn install_global_error_handlers() -> Result<(), DomError> {
    dom::on_window("error", |event| {
        let detail = event.dyn_ref::<ErrorEvent>().map_or_else(
            || "unknown error".to_owned(),
            |e| {
                let error = e.error();
                if error.is_undefined() || error.is_null() { e.message() } else { dom::describe_js(&error) }
            },
        );
        log::error!("uncaught error: {detail}");
    })?;

    dom::on_window("unhandledrejection", |event| {
        let reason = event
            .dyn_ref::<PromiseRejectionEvent>()
            .map_or_else(|| "unknown reason".to_owned(), |e| dom::describe_js(&e.reason()));
        log::error!("unhandled promise rejection: {reason}");
    })
}

fn schedule_service_worker() -> Result<(), DomError> {
    let window = dom::window()?;
    if !dom::supports(&window.navigator(), "serviceWorker") {
        log::debug!("service workers unsupported; skipping registration");
        return Ok(());
    }
    if dom::is_page_loaded() {
        spawn_registration();
        return Ok(());
    }
    dom::on_window("load", |_| spawn_registration())
}

fn spawn_registration() {
    wasm_bindgen_futures::spawn_local(async {
        match register_service_worker().await {
            Ok(()) => log::info!("service worker registered at {SERVICE_WORKER_PATH}"),
            Err(e) => log::warn!("service worker registration failed: {e}"),
        }
    });
}

async fn register_service_worker() -> Result<(), DomError> {
    let promise = dom::window()?.navigator().service_worker().register(SERVICE_WORKER_PATH);
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}
