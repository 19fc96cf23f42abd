//! Marketing Page
//!
//! Behaviour of the public site, independent of the DOM:
//!
//! - [`nav`]: mobile menu, scrolled header, active section link
//! - [`carousel`]: looping technology strip
//! - [`form`]: contact form validation and simulated submission
//! - [`reveal`]: one-shot reveal-on-scroll
//!
//! None of it touches the network.

pub mod carousel;
pub mod form;
pub mod nav;
pub mod reveal;

pub use carousel::{track_items, Technology, TECHNOLOGIES};
pub use form::{ContactForm, FieldError, FormField};
pub use nav::{ActiveLinkTracker, MenuEvent, NavMenu, SectionBounds};
pub use reveal::RevealTracker;

use std::time::Duration;

/// Stand-in for the network round trip of the contact form
pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// How long a banner stays on screen
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient banner shown after a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}
