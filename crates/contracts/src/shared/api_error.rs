use serde_json::Value;
use thiserror::Error;

/// Failure of a call to the institute API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Rejected on the client before any request was made.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Build a status error from a raw response body.
    ///
    /// JSON bodies contribute their `message` (or `error`) string; anything
    /// else leaves the error without a server message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| extract_message(&v))
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    /// Human-readable message carried by the error, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            ApiError::Validation(message) => Some(message.as_str()),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// Message to show the user: the carried message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

fn extract_message(value: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_takes_message_from_body() {
        let err = ApiError::from_status(409, r#"{"message":"Slug already exists"}"#);
        assert_eq!(err.server_message(), Some("Slug already exists"));
        assert_eq!(err.user_message("Failed to create section"), "Slug already exists");
        assert_eq!(err.to_string(), "HTTP 409: Slug already exists");
    }

    #[test]
    fn test_error_key_is_accepted() {
        let err = ApiError::from_status(400, r#"{"error":"Invalid email"}"#);
        assert_eq!(err.server_message(), Some("Invalid email"));
    }

    #[test]
    fn test_missing_message_falls_back() {
        for body in ["", "<html>oops</html>", r#"{"message":""}"#, r#"{"detail":1}"#] {
            let err = ApiError::from_status(500, body);
            assert_eq!(err.server_message(), None, "body {body:?}");
            assert_eq!(err.user_message("Failed to load events"), "Failed to load events");
        }
        assert_eq!(ApiError::from_status(500, "").to_string(), "HTTP 500");
    }

    #[test]
    fn test_transport_errors_use_fallback() {
        let err = ApiError::Network("Failed to fetch".into());
        assert_eq!(err.user_message("Failed to load users"), "Failed to load users");
        let err = ApiError::Decode("missing field `sections`".into());
        assert_eq!(err.user_message("Failed to load sections"), "Failed to load sections");
    }

    #[test]
    fn test_validation_message_is_shown() {
        let err = ApiError::Validation("Name is required".into());
        assert_eq!(err.user_message("ignored"), "Name is required");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::from_status(401, "").is_unauthorized());
        assert!(!ApiError::from_status(404, "").is_unauthorized());
    }
}
