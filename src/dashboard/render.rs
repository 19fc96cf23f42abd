//! Dashboard Rendering Helpers
//!
//! Text shaping for the message list and detail view. Every record field
//! that ends up in markup goes through [`escape_html`].

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

use crate::contacts::ContactMessage;

/// Characters of the message body shown in the list
pub const PREVIEW_CHARS: usize = 150;

/// Shown when a record carries no parseable timestamp
pub const INVALID_DATE: &str = "Invalid date";

/// Escape text for use inside HTML elements and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// List preview: the first 150 characters, with `...` when cut
pub fn preview(message: &str) -> String {
    let mut chars = message.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Detail body as HTML: escaped, then newlines turned into `<br>`
pub fn message_body_html(message: &ContactMessage) -> String {
    escape_html(&message.message).replace('\n', "<br>")
}

/// `06 Aug 2024, 10:15` style date in the viewer's time zone, or
/// [`INVALID_DATE`]
pub fn format_date(raw: Option<&str>) -> String {
    format_date_in(raw, &Local)
}

/// [`format_date`] for an explicit time zone
pub fn format_date_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(tz).format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Phone for the detail view; empty when absent
pub fn phone(message: &ContactMessage) -> &str {
    message.phone.as_deref().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn message(body: &str) -> ContactMessage {
        ContactMessage {
            id: "1".to_string(),
            first_name: "Ana".to_string(),
            last_name: String::new(),
            email: "ana@example.com".to_string(),
            phone: None,
            message: body.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_script_is_rendered_as_text() {
        let html = message_body_html(&message("<script>alert('x')</script>"));
        assert_eq!(html, "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
        assert!(!html.contains('<'));
    }

    #[test]
    fn test_newlines_become_breaks_after_escaping() {
        let html = message_body_html(&message("line 1 <b>\nline 2"));
        assert_eq!(html, "line 1 &lt;b&gt;<br>line 2");
    }

    #[test]
    fn test_escape_attribute_quotes() {
        assert_eq!(escape_html(r#"" onmouseover="x"#), "&quot; onmouseover=&quot;x");
        assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short"), "short");

        let exact = "a".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&exact), exact);

        let long = "ñ".repeat(PREVIEW_CHARS + 1);
        let cut = preview(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_format_date() {
        let lima = FixedOffset::west_opt(5 * 3600).unwrap();
        let raw = Some("2024-08-06T10:15:00.000Z");

        assert_eq!(format_date_in(raw, &Utc), "06 Aug 2024, 10:15");
        assert_eq!(format_date_in(raw, &lima), "06 Aug 2024, 05:15");
        assert_eq!(
            format_date_in(Some("2024-08-06T01:00:00+02:00"), &lima),
            "05 Aug 2024, 18:00"
        );
        assert_eq!(format_date_in(Some("yesterday"), &Utc), INVALID_DATE);
        assert_eq!(format_date_in(None, &lima), INVALID_DATE);
    }

    #[test]
    fn test_format_date_uses_local_zone() {
        assert_ne!(format_date(Some("2024-08-06T10:15:00.000Z")), INVALID_DATE);
        assert_eq!(format_date(Some("not a date")), INVALID_DATE);
    }

    #[test]
    fn test_phone() {
        let mut m = message("hi");
        assert_eq!(phone(&m), "");
        m.phone = Some("+51 1".to_string());
        assert_eq!(phone(&m), "+51 1");
    }
}
