use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::AnswerService;
use super::error::ServiceError;
use super::http::{HttpClient, HttpConfig};
use super::types::{Reply, ServiceConfig};

const TIMESTAMP_FIELD: &str = "timestamp";

/// Answer service reached with a form-encoded POST and a JSON reply.
#[derive(Debug, Clone)]
pub struct HttpAnswerService {
    http: HttpClient,
    config: ServiceConfig,
}

impl HttpAnswerService {
    pub fn new(config: ServiceConfig, http_config: HttpConfig) -> Result<Self, ServiceError> {
        if config.input_field.is_empty() {
            return Err(ServiceError::Configuration(
                "input field name must not be empty".to_string(),
            ));
        }
        if config.reply_field.is_empty() {
            return Err(ServiceError::Configuration(
                "reply field name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            http: HttpClient::with_config(http_config)?,
            config,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn map_send_error(&self, err: reqwest_middleware::Error) -> ServiceError {
        match err {
            reqwest_middleware::Error::Reqwest(e) => {
                ServiceError::from_reqwest(&e, self.http.config().timeout)
            }
            reqwest_middleware::Error::Middleware(e) => ServiceError::Connection(e.to_string()),
        }
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    fn endpoint(&self) -> String {
        self.config.url()
    }

    async fn ask(&self, text: &str) -> Result<Reply, ServiceError> {
        let url = self.config.url();
        debug!(%url, chars = text.chars().count(), "Posting question");

        let response = self
            .http
            .post(&url)
            // form-urlencoded: spaces go out as `+`, which decoders read as `%20`
            .form(&[(self.config.input_field.as_str(), text)])
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::from_reqwest(&e, self.http.config().timeout))?;

        if !status.is_success() {
            return Err(ServiceError::from_status(status.as_u16(), &body));
        }

        let reply = parse_reply(&body, &self.config.reply_field)?;
        debug!(status = status.as_u16(), "Reply received");
        Ok(reply)
    }
}

/// Extracts the reply text (and the optional `timestamp` label) from a JSON
/// response body.
pub fn parse_reply(body: &str, reply_field: &str) -> Result<Reply, ServiceError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ServiceError::Parse(e.to_string()))?;

    let text = match value.get(reply_field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => {
            return Err(ServiceError::MissingField(reply_field.to_string()));
        }
        Some(other) => other.to_string(),
    };

    let timestamp = value
        .get(TIMESTAMP_FIELD)
        .and_then(Value::as_str)
        .map(String::from);

    Ok(Reply { text, timestamp })
}
