//! Contact Form
//!
//! Client-side validation and the submit cycle of the marketing page's
//! contact form. Submission is simulated; nothing here talks to the network.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

use super::Notice;
use crate::contacts::ContactInput;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("valid phone pattern"));

static PHONE_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-()]").expect("valid separator pattern"));

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

pub const SUCCESS_MESSAGE: &str = "Message sent! We will get back to you soon.";
pub const FAILURE_MESSAGE: &str = "There was an error sending your message. Please try again.";

/// Inputs of the contact form, by their `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Lastname,
    Email,
    Phone,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Lastname,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    /// The input's `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Lastname => "lastname",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "First name",
            FormField::Lastname => "Last name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Message => "Message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    InvalidPhone,
    TooShort { min: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "This field is required"),
            FieldError::InvalidEmail => write!(f, "Please enter a valid email"),
            FieldError::InvalidPhone => write!(f, "Please enter a valid phone number"),
            FieldError::TooShort { min } => write!(f, "Must be at least {} characters", min),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Optional `+`, then up to 16 ASCII digits, once spaces, dashes and parentheses
/// are stripped
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&PHONE_SEPARATORS.replace_all(phone, ""))
}

/// Validate one field value (trimmed before checking)
///
/// Minimum lengths count Unicode scalar values, so an emoji is one character
/// rather than two UTF-16 units.
pub fn validate_field(field: FormField, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }

    let chars = value.chars().count();
    match field {
        FormField::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FormField::Phone if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
        FormField::Name | FormField::Lastname if chars < MIN_NAME_CHARS => {
            Err(FieldError::TooShort { min: MIN_NAME_CHARS })
        }
        FormField::Message if chars < MIN_MESSAGE_CHARS => {
            Err(FieldError::TooShort { min: MIN_MESSAGE_CHARS })
        }
        _ => Ok(()),
    }
}

/// State of the contact form: values, per-field errors, submit flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: HashMap<FormField, String>,
    errors: HashMap<FormField, FieldError>,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Typing into a field clears its error
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.remove(&field);
    }

    pub fn error(&self, field: FormField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Validate a field when it loses focus
    pub fn blur(&mut self, field: FormField) -> bool {
        match validate_field(field, self.value(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(e) => {
                self.errors.insert(field, e);
                false
            }
        }
    }

    /// Validate every field, recording all errors
    pub fn validate(&mut self) -> bool {
        FormField::ALL
            .into_iter()
            .fold(true, |valid, field| self.blur(field) && valid)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Trimmed values as a create input
    pub fn input(&self) -> ContactInput {
        let trimmed = |field| self.value(field).trim().to_string();
        ContactInput {
            name: trimmed(FormField::Name),
            lastname: Some(trimmed(FormField::Lastname)),
            email: trimmed(FormField::Email),
            phone: Some(trimmed(FormField::Phone)),
            message: trimmed(FormField::Message),
        }
    }

    /// Validate and enter the submitting state
    ///
    /// Returns the data to submit, or `None` when a field is invalid or a
    /// submission is already running.
    pub fn begin_submit(&mut self) -> Option<ContactInput> {
        if self.submitting || !self.validate() {
            return None;
        }
        self.submitting = true;
        Some(self.input())
    }

    /// Leave the submitting state; the form is cleared on success
    pub fn finish_submit(&mut self, result: Result<(), String>) -> Notice {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.reset();
                Notice::success(SUCCESS_MESSAGE)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact form submission failed");
                Notice::error(FAILURE_MESSAGE)
            }
        }
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::NoticeKind;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(FormField::Name, "Ana");
        form.set(FormField::Lastname, "Pérez");
        form.set(FormField::Email, "ana@example.com");
        form.set(FormField::Phone, "+51 987-654-321");
        form.set(FormField::Message, "Quiero una página web");
        form
    }

    #[test]
    fn test_email() {
        assert!(!is_valid_email("not-an-email"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("+1 234-5678"));
        assert!(is_valid_phone("(51) 555 0199"));
        assert!(!is_valid_phone("(01) 555 0199"));
        assert!(is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("12345678901234567"));
        assert!(!is_valid_phone("0123"));
        assert!(!is_valid_phone("12a4"));
        assert!(!is_valid_phone("++12"));
        assert!(!is_valid_phone("1٢٣٤٥"));
        assert!(!is_valid_phone("１２３４"));
    }

    #[test]
    fn test_message_length() {
        assert_eq!(
            validate_field(FormField::Message, "123456789"),
            Err(FieldError::TooShort { min: 10 })
        );
        assert_eq!(validate_field(FormField::Message, "1234567890"), Ok(()));
    }

    #[test]
    fn test_names_and_required() {
        assert_eq!(
            validate_field(FormField::Name, "A"),
            Err(FieldError::TooShort { min: 2 })
        );
        assert_eq!(validate_field(FormField::Lastname, "Li"), Ok(()));
        assert_eq!(validate_field(FormField::Lastname, "Ñu"), Ok(()));
        assert_eq!(
            validate_field(FormField::Name, "😀"),
            Err(FieldError::TooShort { min: 2 })
        );
        assert_eq!(validate_field(FormField::Phone, "   "), Err(FieldError::Required));
    }

    #[test]
    fn test_values_are_trimmed() {
        assert_eq!(validate_field(FormField::Name, " A "), Err(FieldError::TooShort { min: 2 }));
        assert_eq!(validate_field(FormField::Email, "  a@b.co  "), Ok(()));
    }

    #[test]
    fn test_blur_and_input_cycle() {
        let mut form = ContactForm::new();
        form.set(FormField::Email, "nope");
        assert!(!form.blur(FormField::Email));
        assert_eq!(form.error(FormField::Email), Some(FieldError::InvalidEmail));

        form.set(FormField::Email, "nope@");
        assert_eq!(form.error(FormField::Email), None);
    }

    #[test]
    fn test_submit_requires_every_field() {
        let mut form = filled();
        form.set(FormField::Phone, "");

        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(FormField::Phone), Some(FieldError::Required));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_submit_cycle() {
        let mut form = filled();
        let input = form.begin_submit().unwrap();
        assert_eq!(input.name, "Ana");
        assert_eq!(input.phone.as_deref(), Some("+51 987-654-321"));
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Sending...");

        // No double submission while one is running
        assert!(form.begin_submit().is_none());

        let notice = form.finish_submit(Ok(()));
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(form.value(FormField::Name), "");
        assert_eq!(form.submit_label(), "Send Message");
    }

    #[test]
    fn test_failed_submit_keeps_values() {
        let mut form = filled();
        form.begin_submit();

        let notice = form.finish_submit(Err("timeout".to_string()));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, FAILURE_MESSAGE);
        assert_eq!(form.value(FormField::Name), "Ana");
    }

    #[test]
    fn test_field_names() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("company"), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::TooShort { min: MIN_MESSAGE_CHARS }.to_string(),
            "Must be at least 10 characters"
        );
        assert_eq!(
            FieldError::TooShort { min: MIN_NAME_CHARS }.to_string(),
            "Must be at least 2 characters"
        );
    }
}
