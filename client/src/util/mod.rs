//! Utility helpers shared across page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` and `bootstrap` wrap browser APIs and only build with `hydrate`.
//! The rest is plain logic that the components feed with browser inputs.

#[cfg(feature = "hydrate")]
pub mod bootstrap;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod observer;
pub mod throttle;
