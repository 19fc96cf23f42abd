//! Admin Dashboard
//!
//! Lists contact submissions, shows one in a detail view and deletes it.
//!
//! ## States
//!
//! `Idle -> Loading -> {Populated | Empty | Error}`; `Populated` and `Error`
//! go back to `Loading` on refresh. Only one load runs at a time, a second
//! trigger while loading is dropped.

mod controller;
pub mod render;
mod state;

pub use controller::{Dashboard, DeleteOutcome};
pub use state::{
    DashboardState, DashboardView, Region, DELETE_ERROR_MESSAGE, LOAD_ERROR_MESSAGE,
};
