//! State Management
//!
//! Page-wide signals and the admin dashboard handle.

pub mod dashboard;
pub mod global;
