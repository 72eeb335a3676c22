//! Scroll-triggered fade-in for cards and section titles.

use leptos::prelude::*;

/// Binds the fade-in reveal to every card and section title.
#[component]
pub fn ScrollReveal() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        crate::error::report_init("scroll animations", crate::util::observer::reveal_on_scroll());
    });
}
