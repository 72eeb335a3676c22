//! Page state modules.
//!
//! DESIGN
//! ======
//! State is split by controller (`contact`, `nav`, `loading`, etc.) so each
//! component depends on a small model that can be tested without a browser.

pub mod contact;
pub mod effects;
pub mod loading;
pub mod nav;
pub mod notification;
