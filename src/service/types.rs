use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PATH: &str = "/ask";
pub const DEFAULT_INPUT_FIELD: &str = "user_input";
pub const DEFAULT_REPLY_FIELD: &str = "response";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseUrl(Cow<'static, str>);

impl BaseUrl {
    #[must_use]
    pub fn new(url: impl Into<Cow<'static, str>>) -> Self {
        let url = url.into();
        let url = if url.ends_with('/') {
            Cow::Owned(url.trim_end_matches('/').to_string())
        } else {
            url
        };
        Self(url)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins an endpoint path, inserting the separating slash when missing.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Cow::Borrowed(DEFAULT_ENDPOINT))
    }
}

impl From<&str> for BaseUrl {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl From<String> for BaseUrl {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Where and how the answer service is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: BaseUrl,
    pub path: String,
    pub input_field: String,
    pub reply_field: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::default(),
            path: DEFAULT_PATH.to_string(),
            input_field: DEFAULT_INPUT_FIELD.to_string(),
            reply_field: DEFAULT_REPLY_FIELD.to_string(),
        }
    }
}

impl ServiceConfig {
    #[must_use]
    pub fn url(&self) -> String {
        self.base_url.join(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// `HH:MM` label supplied by the service, if any.
    pub timestamp: Option<String>,
}

impl Reply {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: None,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("http://localhost:5000/");
        assert_eq!(url.as_str(), "http://localhost:5000");
        assert_eq!(url.join("/ask"), "http://localhost:5000/ask");
    }

    #[test]
    fn test_base_url_join_without_slash() {
        let url = BaseUrl::from("http://localhost:5000");
        assert_eq!(url.join("ask"), "http://localhost:5000/ask");
    }

    #[test]
    fn test_service_config_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.url(), "http://127.0.0.1:5000/ask");
        assert_eq!(config.input_field, "user_input");
        assert_eq!(config.reply_field, "response");
    }
}
