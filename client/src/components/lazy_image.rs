//! Deferred images and the controller that loads them on approach.

use leptos::prelude::*;

/// 1x1 transparent GIF shown until the real source loads.
const PLACEHOLDER_SRC: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// An image whose real source waits in `data-src`.
#[component]
pub fn LazyImage(src: &'static str, alt: &'static str) -> impl IntoView {
    view! { <img class="lazy" src=PLACEHOLDER_SRC data-src=src alt=alt/> }
}

/// Binds lazy loading to every deferred image once the page has hydrated.
#[component]
pub fn LazyImages() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        crate::error::report_init("lazy images", crate::util::observer::lazy_load_images());
    });
}
