//! Development Backend
//!
//! In-memory stand-in for the contacts backend, built with Axum. It serves
//! the same routes the site expects on the local origin, so the dashboard and
//! the CLI can be exercised without the real service.
//!
//! # Endpoints
//!
//! - `GET /` - Health
//! - `GET /contacts` - List submissions
//! - `POST /contacts` - Create a submission
//! - `DELETE /contacts/:id` - Delete a submission
//!
//! # Example
//!
//! ```rust,ignore
//! use genealina::dev_server::{serve, ContactStore, DevServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ContactStore::with_demo_data().await;
//!     serve(store, &DevServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{DevServerError, DevServerResult};
pub use state::ContactStore;

use axum::{
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Development backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DevServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Pre-fill the store with demo submissions
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_seed_demo() -> bool {
    true
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_demo: default_seed_demo(),
        }
    }
}

impl DevServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the router with all routes and middleware
pub fn build_router(store: ContactStore) -> Router {
    Router::new()
        .route("/", get(routes::health))
        .route(
            "/contacts",
            get(routes::list_contacts).post(routes::create_contact),
        )
        .route("/contacts/:id", delete(routes::delete_contact))
        .layer(TraceLayer::new_for_http())
        // Static pages are served from other ports (live-server, trunk)
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Start the development backend
pub async fn serve(store: ContactStore, config: &DevServerConfig) -> Result<(), DevServerError> {
    let router = build_router(store);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Contacts backend listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DevServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Contacts backend shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(ContactStore::new());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["contacts"], 0);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let app = build_router(ContactStore::new());

        let response = app
            .oneshot(Request::builder().uri("/contacts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let store = ContactStore::new();
        let app = build_router(store.clone());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/contacts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"nombre":"Ana","apellido":"Pérez","email":"ana@example.com","celular":"","mensaje":"Hola equipo"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["nombre"], "Ana");
        assert!(created["_id"].as_str().is_some());
        assert!(created.get("celular").is_none());

        let response = app
            .oneshot(Request::builder().uri("/contacts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let list = body_json(response).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_missing_message() {
        let app = build_router(ContactStore::new());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/contacts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"nombre":"Ana","email":"ana@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_unknown() {
        let app = build_router(ContactStore::new());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/contacts/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let store = ContactStore::with_demo_data().await;
        let id = store.list().await[0].id.clone();
        let app = build_router(store.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/contacts/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!(true));
        assert_eq!(store.len().await, 2);
    }
}
