//! Fixed navigation bar with a mobile menu and scroll-driven highlighting.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::{NAV_ENTRIES, OWNER_NAME};
use crate::state::nav::NavState;

#[cfg(feature = "hydrate")]
use crate::error::{DomError, report_init};
#[cfg(feature = "hydrate")]
use crate::util::dom;
#[cfg(feature = "hydrate")]
use crate::util::throttle::{Debounce, Throttle};

/// Smooth-scroll so the section lands just below the navbar.
fn scroll_to_section(section_id: &str, config: SiteConfig) {
    #[cfg(feature = "hydrate")]
    {
        let result = dom::html_element_by_id(section_id).and_then(|section| {
            let top = crate::state::nav::scroll_target(f64::from(section.offset_top()), config.scroll_offset_px);
            dom::smooth_scroll_to(top)
        });
        if let Err(e) = result {
            log::warn!("cannot scroll to #{section_id}: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (section_id, config);
    }
}

#[cfg(feature = "hydrate")]
fn refresh_scroll_state(nav: RwSignal<NavState>, config: SiteConfig) {
    let sections = dom::section_bounds().unwrap_or_default();
    let y = dom::scroll_y();
    nav.update(|n| n.on_scroll(y, &sections, &config));
}

#[cfg(feature = "hydrate")]
fn wire_navigation(
    nav: RwSignal<NavState>,
    config: SiteConfig,
    toggle_ref: NodeRef<leptos::html::Button>,
    menu_ref: NodeRef<leptos::html::Ul>,
) -> Result<(), DomError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;

    dom::on_document("click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = |el: Option<web_sys::Element>| el.is_some_and(|el| el.contains(target.as_ref()));
        let inside_toggle = inside(toggle_ref.get_untracked().map(Into::into));
        let inside_menu = inside(menu_ref.get_untracked().map(Into::into));
        nav.update(|n| n.document_click(inside_toggle, inside_menu));
    })?;

    let mut throttle = Throttle::new(config.scroll_throttle_ms);
    dom::on_window("scroll", move |_| {
        if throttle.ready(dom::now_ms()) {
            refresh_scroll_state(nav, config);
        }
    })?;

    // Layout shifts on resize move section bounds; re-measure once it settles.
    let debounce = Rc::new(RefCell::new(Debounce::new(config.animation_duration_ms)));
    dom::on_window("resize", move |_| {
        debounce.borrow_mut().call(dom::now_ms());
        let debounce = Rc::clone(&debounce);
        let wait = config.animation_duration_ms.saturating_add(1);
        gloo_timers::callback::Timeout::new(wait, move || {
            if debounce.borrow_mut().poll(dom::now_ms()) {
                refresh_scroll_state(nav, config);
            }
        })
        .forget();
    })?;

    refresh_scroll_state(nav, config);
    Ok(())
}

#[component]
pub fn Navbar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let nav = RwSignal::new(NavState::default());
    let toggle_ref = NodeRef::<leptos::html::Button>::new();
    let menu_ref = NodeRef::<leptos::html::Ul>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        report_init("navigation", wire_navigation(nav, config, toggle_ref, menu_ref));
    });

    let menu_open = move || nav.with(|n| n.menu_open);

    view! {
        <nav class="navbar" class:scrolled=move || nav.with(|n| n.scrolled)>
            <div class="nav-container">
                <a
                    href="#inicio"
                    class="nav-logo"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        scroll_to_section("inicio", config);
                    }
                >
                    {OWNER_NAME}
                </a>
                <ul id="nav-menu" class="nav-menu" class:active=menu_open node_ref=menu_ref>
                    {NAV_ENTRIES
                        .iter()
                        .map(|entry| {
                            let id = entry.id;
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=format!("#{id}")
                                        class="nav-link"
                                        class:active=move || nav.with(|n| n.is_active(id))
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            ev.prevent_default();
                                            nav.update(NavState::close_menu);
                                            scroll_to_section(id, config);
                                        }
                                    >
                                        {entry.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    id="nav-toggle"
                    class="nav-toggle"
                    class:active=menu_open
                    aria-label="Abrir menú"
                    aria-controls="nav-menu"
                    aria-expanded=move || if menu_open() { "true" } else { "false" }
                    node_ref=toggle_ref
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
