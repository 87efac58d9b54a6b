use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Reply field `{0}` missing from response")]
    MissingField(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ServiceError {
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Timeout(_) | Self::Server { status: 500..=599, .. }
        )
    }

    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Builds a `Server` error from a non-success response, preferring a
    /// JSON `message` (or `error`) field over the raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))?
                    .as_str()
                    .map(String::from)
            })
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty() && trimmed.len() <= 200).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| format!("HTTP {status}"));

        Self::server(status, message)
    }

    pub(crate) fn from_reqwest(err: &reqwest::Error, timeout: Option<Duration>) -> Self {
        if err.is_timeout() {
            return Self::Timeout(timeout.unwrap_or_default());
        }
        if err.is_decode() {
            return Self::Parse(err.to_string());
        }
        Self::Connection(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_transient() {
        assert!(ServiceError::Connection("refused".into()).is_transient());
        assert!(ServiceError::Timeout(Duration::from_secs(5)).is_transient());
        assert!(ServiceError::server(503, "overloaded").is_transient());

        assert!(!ServiceError::server(404, "not found").is_transient());
        assert!(!ServiceError::Parse("bad json".into()).is_transient());
        assert!(!ServiceError::MissingField("response".into()).is_transient());
    }

    #[test]
    fn test_from_status_uses_json_message() {
        let err = ServiceError::from_status(500, r#"{"status": "error", "message": "boom"}"#);
        match err {
            ServiceError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected Server error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_status_plain_body() {
        let err = ServiceError::from_status(404, "Not Found\n");
        assert_eq!(err.to_string(), "Server error (404): Not Found");
    }

    #[test]
    fn test_from_status_empty_body() {
        let err = ServiceError::from_status(502, "");
        assert_eq!(err.to_string(), "Server error (502): HTTP 502");
    }
}
