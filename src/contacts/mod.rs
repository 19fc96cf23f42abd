//! Contacts API
//!
//! Client side of the backend's `contacts` resource.
//!
//! ## Endpoints
//!
//! - `GET /contacts` - List submissions (array, backend order)
//! - `POST /contacts` - Create a submission
//! - `DELETE /contacts/{id}` - Delete a submission
//! - `GET /` - Health check
//!
//! [`ContactsApi`] is the seam between the dashboard and the network. The
//! native build ships [`ContactsClient`] on top of reqwest; the browser build
//! implements the same trait with gloo-net.

mod error;
mod models;

#[cfg(feature = "native")]
mod client;

pub use error::{ContactsError, ContactsResult};
pub use models::{decode_created, decode_list, ContactInput, ContactMessage, NewContact};

#[cfg(feature = "native")]
pub use client::{ClientConfig, ContactsClient};

use async_trait::async_trait;

/// Name of the collection on the backend
pub const RESOURCE: &str = "contacts";

/// Operations against the `contacts` collection
///
/// Futures are not required to be `Send`: the dashboard runs on a single
/// cooperative event loop, and browser fetch futures are `!Send`.
#[async_trait(?Send)]
pub trait ContactsApi {
    /// Origin the next request will be sent to
    fn origin(&self) -> String;

    /// Fetch every submission, in the order the backend returns them
    async fn list(&self) -> ContactsResult<Vec<ContactMessage>>;

    /// Create a submission and return the stored record
    async fn create(&self, input: &ContactInput) -> ContactsResult<ContactMessage>;

    /// Delete a submission by identifier
    async fn delete(&self, id: &str) -> ContactsResult<bool>;

    /// Whether the backend answers on its root; never fails
    async fn health(&self) -> bool;
}

/// `{origin}/contacts`
pub fn collection_url(origin: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), RESOURCE)
}

/// `{origin}/contacts/{id}` with the identifier percent-encoded
pub fn item_url(origin: &str, id: &str) -> String {
    format!("{}/{}", collection_url(origin), urlencoding::encode(id))
}

/// `{origin}/`
pub fn health_url(origin: &str) -> String {
    format!("{}/", origin.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            collection_url("http://localhost:3001"),
            "http://localhost:3001/contacts"
        );
        assert_eq!(
            collection_url("http://localhost:3001/"),
            "http://localhost:3001/contacts"
        );
        assert_eq!(
            item_url("http://localhost:3001", "66b1f0"),
            "http://localhost:3001/contacts/66b1f0"
        );
        assert_eq!(health_url("https://api.example.com"), "https://api.example.com/");
    }

    #[test]
    fn test_item_url_encodes_identifier() {
        assert_eq!(
            item_url("http://localhost:3001", "a/b c"),
            "http://localhost:3001/contacts/a%2Fb%20c"
        );
    }
}
