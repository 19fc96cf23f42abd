//! Pages
//!
//! Top-level page components for routing.

pub mod admin;
pub mod landing;

pub use admin::Admin;
pub use landing::Landing;
