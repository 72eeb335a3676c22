//! Outbound delivery for page controllers.

pub mod submit;
