//! Contact Routes
//!
//! - GET / - Health
//! - GET /contacts - List submissions
//! - POST /contacts - Create a submission
//! - DELETE /contacts/:id - Delete a submission

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::{DevServerError, DevServerResult};
use super::state::ContactStore;
use crate::contacts::{ContactMessage, NewContact};

/// Body of `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub contacts: usize,
    pub version: String,
}

/// Body of `POST /contacts`; presence is checked by the handler
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateContactRequest {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub celular: String,
    pub mensaje: String,
}

/// GET /
pub async fn health(State(store): State<ContactStore>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        contacts: store.len().await,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /contacts
pub async fn list_contacts(State(store): State<ContactStore>) -> Json<Vec<ContactMessage>> {
    Json(store.list().await)
}

/// POST /contacts
pub async fn create_contact(
    State(store): State<ContactStore>,
    Json(req): Json<CreateContactRequest>,
) -> DevServerResult<(StatusCode, Json<ContactMessage>)> {
    let contact = validate_create_request(req)?;
    let record = store.insert(contact).await;

    tracing::info!(id = %record.id, email = %record.email, "Stored contact");

    Ok((StatusCode::CREATED, Json(record)))
}

/// DELETE /contacts/:id
pub async fn delete_contact(
    State(store): State<ContactStore>,
    Path(id): Path<String>,
) -> DevServerResult<Json<bool>> {
    if !store.remove(&id).await {
        return Err(DevServerError::NotFound(format!("Contact {} not found", id)));
    }

    tracing::info!(%id, "Deleted contact");
    Ok(Json(true))
}

fn validate_create_request(req: CreateContactRequest) -> DevServerResult<NewContact> {
    let required = [
        ("nombre", &req.nombre),
        ("email", &req.email),
        ("mensaje", &req.mensaje),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(DevServerError::Validation(format!("{} is required", field)));
        }
    }

    Ok(NewContact {
        nombre: req.nombre.trim().to_string(),
        apellido: req.apellido.trim().to_string(),
        email: req.email.trim().to_string(),
        celular: req.celular.trim().to_string(),
        mensaje: req.mensaje.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_core_fields() {
        let req = CreateContactRequest {
            nombre: "Ana".to_string(),
            email: "  ".to_string(),
            mensaje: "Hola".to_string(),
            ..Default::default()
        };
        match validate_create_request(req) {
            Err(DevServerError::Validation(msg)) => assert_eq!(msg, "email is required"),
            other => panic!("expected validation error, got {:?}", other.map(|c| c.email)),
        }
    }

    #[test]
    fn test_validate_trims() {
        let req = CreateContactRequest {
            nombre: " Ana ".to_string(),
            email: "ana@example.com ".to_string(),
            mensaje: "Hola".to_string(),
            ..Default::default()
        };
        let contact = validate_create_request(req).unwrap();
        assert_eq!(contact.nombre, "Ana");
        assert_eq!(contact.email, "ana@example.com");
        assert_eq!(contact.apellido, "");
    }
}
