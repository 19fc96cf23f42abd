//! Contacts REST Client
//!
//! reqwest implementation of [`ContactsApi`] for native tools.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::error::{ContactsError, ContactsResult};
use super::models::{decode_created, decode_list, ContactInput, ContactMessage, NewContact};
use super::{collection_url, health_url, item_url, ContactsApi};
use crate::environment::{Endpoints, Location};

/// Configuration for [`ContactsClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Local/production origin pair
    pub endpoints: Endpoints,
    /// Page location the origin is resolved from
    pub location: Location,
    /// Fixed origin that bypasses resolution (operators, tests)
    pub origin_override: Option<String>,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            location: Location::new("localhost", ""),
            origin_override: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Config that always talks to `origin`
    pub fn fixed(origin: impl Into<String>) -> Self {
        Self {
            origin_override: Some(origin.into()),
            ..Default::default()
        }
    }
}

/// HTTP client for the backend's `contacts` resource
pub struct ContactsClient {
    client: Client,
    config: ClientConfig,
}

impl ContactsClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn connection_error(origin: &str, error: reqwest::Error) -> ContactsError {
        ContactsError::Connection {
            origin: origin.to_string(),
            reason: error.to_string(),
        }
    }

    /// Non-success response carrying the raw body text
    async fn body_error(response: Response) -> ContactsError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        ContactsError::Http {
            status: status.as_u16(),
            message: text,
        }
    }

    async fn read_body(origin: &str, response: Response) -> ContactsResult<String> {
        response
            .text()
            .await
            .map_err(|e| Self::connection_error(origin, e))
    }
}

#[async_trait(?Send)]
impl ContactsApi for ContactsClient {
    /// Recomputed on every call; the location may differ between calls
    fn origin(&self) -> String {
        match &self.config.origin_override {
            Some(origin) => origin.clone(),
            None => self
                .config
                .endpoints
                .resolve(&self.config.location)
                .to_string(),
        }
    }

    async fn list(&self) -> ContactsResult<Vec<ContactMessage>> {
        let origin = self.origin();
        let url = collection_url(&origin);
        tracing::debug!(%url, "GET contacts");

        let response = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%origin, error = %e, "Contacts backend unreachable");
                Self::connection_error(&origin, e)
            })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Contacts list response");

        if !status.is_success() {
            return Err(ContactsError::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = Self::read_body(&origin, response).await?;
        let messages = decode_list(&body)?;
        tracing::info!(count = messages.len(), "Loaded contacts");

        Ok(messages)
    }

    async fn create(&self, input: &ContactInput) -> ContactsResult<ContactMessage> {
        let origin = self.origin();
        let url = collection_url(&origin);
        let body = NewContact::from(input);
        tracing::debug!(%url, email = %body.email, "POST contact");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::connection_error(&origin, e))?;

        if !response.status().is_success() {
            let error = Self::body_error(response).await;
            tracing::warn!(error = %error, "Failed to create contact");
            return Err(error);
        }

        let text = Self::read_body(&origin, response).await?;
        let created = decode_created(&text)?;
        tracing::info!(id = %created.id, "Created contact");

        Ok(created)
    }

    async fn delete(&self, id: &str) -> ContactsResult<bool> {
        let origin = self.origin();
        let url = item_url(&origin, id);
        tracing::debug!(%url, "DELETE contact");

        let response = self
            .client
            .delete(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| Self::connection_error(&origin, e))?;

        if !response.status().is_success() {
            let error = Self::body_error(response).await;
            tracing::warn!(%id, error = %error, "Failed to delete contact");
            return Err(error);
        }

        tracing::info!(%id, "Deleted contact");
        Ok(true)
    }

    async fn health(&self) -> bool {
        let url = health_url(&self.origin());

        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(%url, error = %e, "Health check failed");
                false
            }
        }
    }
}
