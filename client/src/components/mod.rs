//! Page components.
//!
//! ARCHITECTURE
//! ============
//! Each component renders one part of the page and owns its controller.
//! Browser wiring runs in an `Effect` after hydration, so server rendering
//! produces the same markup without touching `web_sys`.

pub mod contact_form;
pub mod hero;
pub mod lazy_image;
pub mod loading_screen;
pub mod navbar;
pub mod notification_stack;
pub mod reveal;
pub mod sections;
