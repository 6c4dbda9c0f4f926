//! Error types shared by the page controllers.

use thiserror::Error;

/// Required inputs of the payment form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    MatricNumber,
    Amount,
    Reason,
    Receipt,
}

impl Field {
    /// Multipart key expected by the creation endpoint
    pub fn form_key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::MatricNumber => "matric_number",
            Field::Amount => "amount",
            Field::Reason => "reason",
            Field::Receipt => "receipt",
        }
    }
}

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingField(Field),

    #[error("Amount must be a whole number.")]
    InvalidAmount,

    #[error("Please enter your matriculation number.")]
    EmptyLookupKey,
}

/// Failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("{0}")]
    Rejected(String),

    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl ApiError {
    /// Message for the notification area.
    ///
    /// Server-provided text wins; transport and parse failures fall back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(message) if !message.is_empty() => message.clone(),
            ApiError::Http { body, .. } => {
                describe_error_body(body).unwrap_or_else(|| fallback.to_string())
            }
            _ => fallback.to_string(),
        }
    }
}

/// Render a JSON error body such as `{"amount": ["A valid integer is required."]}`
/// as `amount: A valid integer is required.`
pub fn describe_error_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    let mut parts = Vec::new();
    for (key, value) in object {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            _ => continue,
        };
        if text.is_empty() {
            continue;
        }
        if key == "detail" || key == "message" {
            parts.push(text);
        } else {
            parts.push(format!("{}: {}", key, text));
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_field_errors() {
        let body = r#"{"amount": ["A valid integer is required."], "receipt": ["No file was submitted."]}"#;
        assert_eq!(
            describe_error_body(body).as_deref(),
            Some("amount: A valid integer is required.; receipt: No file was submitted.")
        );
    }

    #[test]
    fn test_describe_detail_body() {
        assert_eq!(describe_error_body(r#"{"detail": "Not found."}"#).as_deref(), Some("Not found."));
    }

    #[test]
    fn test_describe_non_json_body() {
        assert_eq!(describe_error_body("<html>502 Bad Gateway</html>"), None);
        assert_eq!(describe_error_body("[]"), None);
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let fallback = "Failed to submit. Please try again.";
        assert_eq!(ApiError::Rejected("Payment not found".into()).user_message(fallback), "Payment not found");
        assert_eq!(ApiError::Rejected(String::new()).user_message(fallback), fallback);
        assert_eq!(ApiError::Network("offline".into()).user_message(fallback), fallback);
        let http = ApiError::Http { status: 400, body: r#"{"name": ["This field is required."]}"#.into() };
        assert_eq!(http.user_message(fallback), "name: This field is required.");
        let opaque = ApiError::Http { status: 500, body: "Server Error".into() };
        assert_eq!(opaque.user_message(fallback), fallback);
    }
}
