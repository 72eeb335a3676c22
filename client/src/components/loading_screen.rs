//! Full-screen loading splash shown until the page is ready.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::loading::LoadingState;

#[cfg(feature = "hydrate")]
use crate::error::{DomError, report_init};
#[cfg(feature = "hydrate")]
use crate::state::loading::LoadingTrigger;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
fn hide(loading: RwSignal<LoadingState>, trigger: LoadingTrigger) {
    let newly_hidden = loading.try_update(|l| l.hide(trigger)).unwrap_or(false);
    if newly_hidden {
        if let Err(e) = dom::set_body_style("overflow", "auto") {
            log::warn!("cannot restore page scrolling: {e}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn wire_loading(loading: RwSignal<LoadingState>, config: SiteConfig) -> Result<(), DomError> {
    use gloo_timers::callback::Timeout;

    Timeout::new(config.loading_duration_ms, move || hide(loading, LoadingTrigger::Timer)).forget();

    let after_load = move || {
        Timeout::new(config.load_grace_ms, move || hide(loading, LoadingTrigger::WindowLoad)).forget();
    };
    if dom::is_page_loaded() {
        after_load();
        Ok(())
    } else {
        dom::on_window("load", move |_| after_load())
    }
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let loading = RwSignal::new(LoadingState::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        report_init("loading screen", wire_loading(loading, config));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <div id="loading-screen" class="loading-screen" class:hidden=move || loading.with(LoadingState::is_hidden)>
            <div class="loader">
                <div class="loader-ring"></div>
                <p class="loader-text">"Cargando..."</p>
            </div>
        </div>
    }
}
