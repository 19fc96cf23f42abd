//! # Genealina
//!
//! Core of the Genealina Labs website: the contacts API client, the admin
//! dashboard state machine and the marketing page behaviour, shared by the
//! native tools and the Leptos front-end.
//!
//! ## Modules
//!
//! - [`environment`]: Resolves the backend origin from the page location
//! - [`contacts`]: Contact records and the `contacts` REST client
//! - [`dashboard`]: Load/render/error/empty state machine for the admin view
//! - [`site`]: Navigation, carousel, contact form and reveal-on-scroll logic
//! - [`config`]: TOML configuration with environment overrides (native)
//! - [`dev_server`]: In-memory stand-in for the contacts backend (native)
//! - [`logging`]: tracing-subscriber setup for the binaries (native)
//!
//! Everything outside the `native` feature compiles for `wasm32` and is what
//! the `genealina-ui` crate builds on.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genealina::contacts::{ClientConfig, ContactsClient};
//! use genealina::dashboard::Dashboard;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ContactsClient::new(ClientConfig::default())?;
//!     let dashboard = Dashboard::new(client);
//!
//!     dashboard.refresh().await;
//!     println!("{} messages", dashboard.state().count());
//!
//!     Ok(())
//! }
//! ```

pub mod contacts;
pub mod dashboard;
pub mod environment;
pub mod site;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod dev_server;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use environment::{resolve_origin, Endpoints, Location};

pub use contacts::{ContactInput, ContactMessage, ContactsApi, ContactsError, NewContact};

#[cfg(feature = "native")]
pub use contacts::{ClientConfig, ContactsClient};

pub use dashboard::{Dashboard, DashboardState, DashboardView, DeleteOutcome, Region};

pub use site::{
    ActiveLinkTracker, ContactForm, FormField, NavMenu, Notice, NoticeKind, RevealTracker,
    Technology,
};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};

#[cfg(feature = "native")]
pub use dev_server::{build_router, serve, ContactStore, DevServerConfig, DevServerError};
