//! Intersection-observer controllers: scroll reveal and lazy images.
//!
//! Both controllers bind by selector to the server-rendered markup once the
//! page has hydrated, the same way the stylesheet targets it.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[cfg(feature = "hydrate")]
use crate::error::DomError;
#[cfg(feature = "hydrate")]
use crate::util::dom;

/// Elements that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = ".fade-in, .skill-category, .project-card, .service-card, .stat-item";
/// Images whose real source waits in `data-src`.
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserverOptions {
    /// Reveal once 10% is visible, ignoring the bottom 50px of the viewport.
    pub const REVEAL: Self = Self { threshold: 0.1, root_margin: "0px 0px -50px 0px" };
    pub const LAZY: Self = Self { threshold: 0.0, root_margin: "0px" };
}

/// The source to load from a `data-src` value, if it names one.
#[must_use]
pub fn deferred_source(data_src: &str) -> Option<&str> {
    let src = data_src.trim();
    (!src.is_empty()).then_some(src)
}

/// Observe `elements`, calling `on_enter` whenever one starts intersecting.
#[cfg(feature = "hydrate")]
pub fn observe(
    elements: &[Element],
    options: ObserverOptions,
    mut on_enter: impl FnMut(&Element, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, DomError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_enter(&entry.target(), &observer);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for element in elements {
        observer.observe(element);
    }
    Ok(observer)
}

/// Tag every reveal target with `.fade-in` and add `.visible` on first sight.
#[cfg(feature = "hydrate")]
pub fn reveal_on_scroll() -> Result<(), DomError> {
    let elements = dom::query_all(REVEAL_SELECTOR)?;
    for element in &elements {
        element.class_list().add_1("fade-in")?;
    }
    observe(&elements, ObserverOptions::REVEAL, |element, _| {
        if let Err(e) = element.class_list().add_1("visible") {
            log::warn!("cannot reveal element: {}", dom::describe_js(&e));
        }
    })?;
    log::debug!("scroll reveal observing {} elements", elements.len());
    Ok(())
}

/// Swap in each deferred image source when the image nears the viewport.
/// Without intersection observer support every image loads immediately.
#[cfg(feature = "hydrate")]
pub fn lazy_load_images() -> Result<(), DomError> {
    let images = dom::query_all(LAZY_IMAGE_SELECTOR)?;

    let window = dom::window()?;
    if !dom::supports(&window, "IntersectionObserver") {
        for image in &images {
            load_deferred(image)?;
        }
        return Ok(());
    }

    observe(&images, ObserverOptions::LAZY, |image, observer| {
        if let Err(e) = load_deferred(image) {
            log::warn!("lazy image failed to load: {e}");
        }
        observer.unobserve(image);
    })?;
    Ok(())
}

#[cfg(feature = "hydrate")]
fn load_deferred(image: &Element) -> Result<(), DomError> {
    if let Some(data_src) = image.get_attribute("data-src")
        && let Some(src) = deferred_source(&data_src)
    {
        image.set_attribute("src", src)?;
    }
    image.class_list().remove_1("lazy")?;
    Ok(())
}
