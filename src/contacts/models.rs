//! Contact Records
//!
//! Wire types for the `contacts` resource. The backend speaks Spanish field
//! names; the Rust side uses one canonical English field set.

use serde::{Deserialize, Serialize};

use super::error::ContactsError;

/// A contact submission as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(rename = "nombre")]
    pub first_name: String,

    #[serde(rename = "apellido", default)]
    pub last_name: String,

    pub email: String,

    #[serde(rename = "celular", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(rename = "mensaje")]
    pub message: String,

    /// Raw timestamp as sent by the backend (RFC 3339 when well formed)
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ContactMessage {
    /// First and last name joined by a space
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Input for creating a contact
///
/// Accepts both the English form names and the backend's Spanish names when
/// deserialised. When a payload carries both, a non-empty Spanish value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContactInput")]
pub struct ContactInput {
    pub name: String,
    pub lastname: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Wire shape of [`ContactInput`] with both naming conventions
#[derive(Deserialize)]
struct RawContactInput {
    name: Option<String>,
    nombre: Option<String>,
    lastname: Option<String>,
    apellido: Option<String>,
    email: String,
    phone: Option<String>,
    celular: Option<String>,
    message: Option<String>,
    mensaje: Option<String>,
}

fn prefer_spanish(spanish: Option<String>, english: Option<String>) -> Option<String> {
    match spanish {
        Some(value) if !value.is_empty() => Some(value),
        other => english.or(other),
    }
}

impl TryFrom<RawContactInput> for ContactInput {
    type Error = String;

    fn try_from(raw: RawContactInput) -> Result<Self, Self::Error> {
        Ok(Self {
            name: prefer_spanish(raw.nombre, raw.name)
                .ok_or("missing field `nombre` or `name`")?,
            lastname: prefer_spanish(raw.apellido, raw.lastname),
            email: raw.email,
            phone: prefer_spanish(raw.celular, raw.phone),
            message: prefer_spanish(raw.mensaje, raw.message)
                .ok_or("missing field `mensaje` or `message`")?,
        })
    }
}

/// Request body for `POST /contacts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub celular: String,
    pub mensaje: String,
}

impl From<ContactInput> for NewContact {
    fn from(input: ContactInput) -> Self {
        Self {
            nombre: input.name,
            apellido: input.lastname.unwrap_or_default(),
            email: input.email,
            celular: input.phone.unwrap_or_default(),
            mensaje: input.message,
        }
    }
}

impl From<&ContactInput> for NewContact {
    fn from(input: &ContactInput) -> Self {
        input.clone().into()
    }
}

/// Decode a `GET /contacts` body
///
/// JSON that is not an array is treated as "no messages"; anything that is
/// not JSON at all, or an array of malformed records, is a decode error.
pub fn decode_list(body: &str) -> Result<Vec<ContactMessage>, ContactsError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ContactsError::Decode(format!("response is not JSON: {}", e)))?;

    if !value.is_array() {
        return Ok(Vec::new());
    }

    serde_json::from_value(value)
        .map_err(|e| ContactsError::Decode(format!("invalid contact record: {}", e)))
}

/// Decode a `POST /contacts` body
pub fn decode_created(body: &str) -> Result<ContactMessage, ContactsError> {
    serde_json::from_str(body)
        .map_err(|e| ContactsError::Decode(format!("invalid created contact: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"[
            {
                "_id": "66b1f0",
                "nombre": "Ana",
                "apellido": "Pérez",
                "email": "ana@example.com",
                "celular": "+51 999 888 777",
                "mensaje": "Hola, quisiera una cotización",
                "createdAt": "2024-08-06T10:15:00.000Z"
            },
            {
                "id": "66b1f1",
                "nombre": "Luis",
                "email": "luis@example.com",
                "mensaje": "Sin apellido ni celular"
            }
        ]"#
    }

    #[test]
    fn test_decode_list() {
        let messages = decode_list(sample_json()).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id, "66b1f0");
        assert_eq!(messages[0].full_name(), "Ana Pérez");
        assert_eq!(messages[0].phone.as_deref(), Some("+51 999 888 777"));
        assert_eq!(messages[1].id, "66b1f1");
        assert_eq!(messages[1].last_name, "");
        assert_eq!(messages[1].phone, None);
        assert_eq!(messages[1].created_at, None);
        assert_eq!(messages[1].full_name(), "Luis");
    }

    #[test]
    fn test_decode_list_non_array_is_empty() {
        assert!(decode_list(r#"{"contacts": []}"#).unwrap().is_empty());
        assert!(decode_list("null").unwrap().is_empty());
        assert!(decode_list("42").unwrap().is_empty());
    }

    #[test]
    fn test_decode_list_rejects_garbage() {
        assert!(matches!(
            decode_list("<html>oops</html>"),
            Err(ContactsError::Decode(_))
        ));
        assert!(matches!(
            decode_list(r#"[{"nombre": 3}]"#),
            Err(ContactsError::Decode(_))
        ));
    }

    #[test]
    fn test_input_maps_to_backend_fields() {
        let input = ContactInput {
            name: "A".to_string(),
            lastname: Some("B".to_string()),
            email: "a@b.com".to_string(),
            phone: Some("123".to_string()),
            message: "hi".to_string(),
        };

        let body = serde_json::to_value(NewContact::from(input)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "nombre": "A",
                "apellido": "B",
                "email": "a@b.com",
                "celular": "123",
                "mensaje": "hi"
            })
        );
    }

    #[test]
    fn test_input_accepts_either_naming() {
        let english: ContactInput = serde_json::from_str(
            r#"{"name":"A","lastname":"B","email":"a@b.com","phone":"123","message":"hi"}"#,
        )
        .unwrap();
        let spanish: ContactInput = serde_json::from_str(
            r#"{"nombre":"A","apellido":"B","email":"a@b.com","celular":"123","mensaje":"hi"}"#,
        )
        .unwrap();

        assert_eq!(english, spanish);
    }

    #[test]
    fn test_input_with_both_namings_prefers_spanish() {
        let input: ContactInput = serde_json::from_str(
            r#"{"name":"Ann","nombre":"Ana","email":"a@b.com","message":"hi","mensaje":"hola","celular":""}"#,
        )
        .unwrap();

        assert_eq!(input.name, "Ana");
        assert_eq!(input.message, "hola");
        assert_eq!(input.phone.as_deref(), Some(""));

        let input: ContactInput = serde_json::from_str(
            r#"{"name":"Ann","nombre":"","email":"a@b.com","message":"hi"}"#,
        )
        .unwrap();
        assert_eq!(input.name, "Ann");
    }

    #[test]
    fn test_input_requires_name_and_message() {
        let result: Result<ContactInput, _> =
            serde_json::from_str(r#"{"email":"a@b.com","mensaje":"hola"}"#);
        assert!(result.unwrap_err().to_string().contains("nombre"));
    }

    #[test]
    fn test_missing_optional_fields_become_empty() {
        let input: ContactInput =
            serde_json::from_str(r#"{"name":"A","email":"a@b.com","message":"hi"}"#).unwrap();
        let body = NewContact::from(&input);

        assert_eq!(body.apellido, "");
        assert_eq!(body.celular, "");
    }
}
