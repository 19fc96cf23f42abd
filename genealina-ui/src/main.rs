//! Genealina Labs Site
//!
//! Marketing page and contact dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Responsive navigation with active-section highlighting
//! - Technology carousel and reveal-on-scroll animations
//! - Validated contact form
//! - Admin dashboard over the backend's `contacts` resource
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Behaviour lives in the `genealina` crate; this crate binds it
//! to the DOM and talks to the backend with gloo-net.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });

    // Lets the stylesheet fade the page in once it is mounted
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().add_1("loaded");
    }
}
