//! UI Components
//!
//! Leptos components for the marketing page and the admin dashboard.

pub mod carousel;
pub mod contact_form;
pub mod loading;
pub mod message_modal;
pub mod nav;
pub mod reveal;
pub mod toast;

pub use carousel::TechCarousel;
pub use contact_form::ContactFormView;
pub use loading::Loading;
pub use message_modal::MessageModal;
pub use nav::Header;
pub use reveal::ScrollReveal;
pub use toast::Toast;
