//! Contact Store
//!
//! In-memory collection shared by all handlers.

use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::contacts::{ContactMessage, NewContact};

/// Shared, insertion-ordered contact collection
#[derive(Clone, Default)]
pub struct ContactStore {
    contacts: Arc<RwLock<Vec<ContactMessage>>>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a few submissions for local UI work
    pub async fn with_demo_data() -> Self {
        let store = Self::new();
        let demo = [
            (
                "Ana",
                "Pérez",
                "ana.perez@example.com",
                "+51 987 654 321",
                "Hola, me interesa una landing page para mi negocio de repostería.",
            ),
            (
                "Luis",
                "Gómez",
                "luis.gomez@example.com",
                "",
                "Necesitamos migrar nuestra tienda a Node.js y MongoDB.\n¿Podemos agendar una llamada?",
            ),
            (
                "María",
                "Torres",
                "maria@example.com",
                "(01) 555-0199",
                "¿Ofrecen mantenimiento mensual para sitios en React?",
            ),
        ];

        for (nombre, apellido, email, celular, mensaje) in demo {
            store
                .insert(NewContact {
                    nombre: nombre.to_string(),
                    apellido: apellido.to_string(),
                    email: email.to_string(),
                    celular: celular.to_string(),
                    mensaje: mensaje.to_string(),
                })
                .await;
        }

        store
    }

    /// Store a submission, assigning its identifier and creation time
    pub async fn insert(&self, contact: NewContact) -> ContactMessage {
        let record = ContactMessage {
            id: uuid::Uuid::new_v4().simple().to_string(),
            first_name: contact.nombre,
            last_name: contact.apellido,
            email: contact.email,
            phone: if contact.celular.is_empty() {
                None
            } else {
                Some(contact.celular)
            },
            message: contact.mensaje,
            created_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        };

        self.contacts.write().await.push(record.clone());
        record
    }

    /// All submissions in creation order
    pub async fn list(&self) -> Vec<ContactMessage> {
        self.contacts.read().await.clone()
    }

    /// Remove a submission; `false` when the identifier is unknown
    pub async fn remove(&self, id: &str) -> bool {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        contacts.len() != before
    }

    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}
