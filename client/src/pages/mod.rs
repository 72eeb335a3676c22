//! Route-level pages.

pub mod home;
