//! Hero banner with parallax scrolling and a typed subtitle.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::{HERO_DESCRIPTION, HERO_GREETING, HERO_SUBTITLE, OWNER_NAME};

#[cfg(feature = "hydrate")]
use crate::error::{DomError, report_init};
#[cfg(feature = "hydrate")]
use crate::state::effects::{Typewriter, parallax_transform};
#[cfg(feature = "hydrate")]
use crate::util::dom;
#[cfg(feature = "hydrate")]
use crate::util::throttle::Throttle;

#[cfg(feature = "hydrate")]
fn type_next(mut writer: Typewriter, subtitle: RwSignal<String>, interval_ms: u32) {
    if !writer.advance() {
        return;
    }
    subtitle.set(writer.visible_text());
    gloo_timers::callback::Timeout::new(interval_ms, move || type_next(writer, subtitle, interval_ms)).forget();
}

#[cfg(feature = "hydrate")]
fn wire_hero(config: SiteConfig, transform: RwSignal<String>, subtitle: RwSignal<String>) -> Result<(), DomError> {
    let mut throttle = Throttle::new(config.scroll_throttle_ms);
    dom::on_window("scroll", move |_| {
        if !throttle.ready(dom::now_ms()) {
            return;
        }
        if let Some(next) = parallax_transform(dom::scroll_y(), dom::viewport_height(), config.parallax_rate) {
            transform.set(next);
        }
    })?;

    // The server renders the full subtitle; retype it once the splash is gone.
    let writer = Typewriter::new(&subtitle.get_untracked());
    subtitle.set(String::new());
    let interval_ms = config.typing_interval_ms;
    gloo_timers::callback::Timeout::new(config.typing_start_delay_ms(), move || {
        type_next(writer, subtitle, interval_ms);
    })
    .forget();
    Ok(())
}

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let transform = RwSignal::new(String::new());
    let subtitle = RwSignal::new(HERO_SUBTITLE.to_owned());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        report_init("hero effects", wire_hero(config, transform, subtitle));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <section id="inicio" class="hero" style:transform=move || transform.get()>
            <div class="hero-container">
                <div class="hero-content">
                    <p class="hero-greeting">{HERO_GREETING}</p>
                    <h1 class="hero-title">{OWNER_NAME}</h1>
                    <h2 class="hero-subtitle">{move || subtitle.get()}</h2>
                    <p class="hero-description">{HERO_DESCRIPTION}</p>
                    <div class="hero-buttons">
                        <a href="#proyectos" class="btn btn-primary">"Ver proyectos"</a>
                        <a href="#contacto" class="btn btn-secondary">"Contáctame"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
