//! Backend Access

pub mod client;

pub use client::GlooContacts;
