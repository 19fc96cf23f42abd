//! Browser Contacts Client
//!
//! gloo-net implementation of [`ContactsApi`]. The origin is resolved from
//! `window.location` on every call.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use genealina::contacts::{
    collection_url, decode_created, decode_list, health_url, item_url, ContactInput,
    ContactMessage, ContactsApi, ContactsError, ContactsResult, NewContact,
};
use genealina::environment::{Endpoints, Location};

/// localStorage key that pins the backend origin (debugging a deployment)
pub const API_URL_KEY: &str = "genealina_api_url";

/// Where the page is served from
pub fn page_location() -> Location {
    web_sys::window()
        .map(|window| {
            let location = window.location();
            Location::new(
                location.hostname().unwrap_or_default(),
                location.port().unwrap_or_default(),
            )
        })
        .unwrap_or_default()
}

fn pinned_origin() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let url = storage.get_item(API_URL_KEY).ok()??;
    let url = url.trim().trim_end_matches('/').to_string();
    (!url.is_empty()).then_some(url)
}

fn log(method: &str, url: &str, status: u16) {
    web_sys::console::log_1(&format!("{} {} -> {}", method, url, status).into());
}

fn connection_error(origin: &str, error: gloo_net::Error) -> ContactsError {
    web_sys::console::error_1(
        &format!("Contacts backend unreachable at {}: {}", origin, error).into(),
    );
    ContactsError::Connection {
        origin: origin.to_string(),
        reason: error.to_string(),
    }
}

/// Non-success response carrying the raw body text
async fn body_error(response: Response) -> ContactsError {
    ContactsError::Http {
        status: response.status(),
        message: response.text().await.unwrap_or_default(),
    }
}

async fn read_body(origin: &str, response: Response) -> ContactsResult<String> {
    response
        .text()
        .await
        .map_err(|e| connection_error(origin, e))
}

/// Contacts client for the browser
#[derive(Debug, Clone, Default)]
pub struct GlooContacts {
    endpoints: Endpoints,
}

impl GlooContacts {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl ContactsApi for GlooContacts {
    fn origin(&self) -> String {
        pinned_origin().unwrap_or_else(|| self.endpoints.resolve(&page_location()).to_string())
    }

    async fn list(&self) -> ContactsResult<Vec<ContactMessage>> {
        let origin = self.origin();
        let url = collection_url(&origin);

        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| connection_error(&origin, e))?;
        log("GET", &url, response.status());

        if !response.ok() {
            return Err(ContactsError::Http {
                status: response.status(),
                message: response.status_text(),
            });
        }

        decode_list(&read_body(&origin, response).await?)
    }

    async fn create(&self, input: &ContactInput) -> ContactsResult<ContactMessage> {
        let origin = self.origin();
        let url = collection_url(&origin);

        let response = Request::post(&url)
            .json(&NewContact::from(input))
            .map_err(|e| ContactsError::Decode(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| connection_error(&origin, e))?;
        log("POST", &url, response.status());

        if !response.ok() {
            return Err(body_error(response).await);
        }

        decode_created(&read_body(&origin, response).await?)
    }

    async fn delete(&self, id: &str) -> ContactsResult<bool> {
        let origin = self.origin();
        let url = item_url(&origin, id);

        let response = Request::delete(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| connection_error(&origin, e))?;
        log("DELETE", &url, response.status());

        if !response.ok() {
            return Err(body_error(response).await);
        }

        Ok(true)
    }

    async fn health(&self) -> bool {
        let url = health_url(&self.origin());
        match Request::get(&url).send().await {
            Ok(response) => {
                log("GET", &url, response.status());
                response.ok()
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genealina::environment::LOCAL_ORIGIN;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_runner_page_is_local() {
        // The test runner serves from localhost
        assert_eq!(GlooContacts::new().origin(), LOCAL_ORIGIN);
    }

    #[wasm_bindgen_test]
    fn test_pinned_origin_wins() {
        let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
        storage.set_item(API_URL_KEY, "https://staging.example.com/").unwrap();

        assert_eq!(GlooContacts::new().origin(), "https://staging.example.com");

        storage.remove_item(API_URL_KEY).unwrap();
    }
}
