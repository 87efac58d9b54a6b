use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::RetryTransientMiddleware;
use reqwest_retry::policies::ExponentialBackoff;
use std::time::Duration;

use crate::service::error::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    pub max_retries: u32,
    pub retry_min_delay: Duration,
    pub retry_max_delay: Duration,
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            max_retries: 0,
            retry_min_delay: Duration::from_millis(500),
            retry_max_delay: Duration::from_secs(30),
            user_agent: Some(concat!("chatwidget/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl HttpConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub const fn with_retry_delays(mut self, min: Duration, max: Duration) -> Self {
        self.retry_min_delay = min;
        self.retry_max_delay = max;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[derive(Clone)]
pub struct HttpClient {
    inner: ClientWithMiddleware,
    config: HttpConfig,
}

impl HttpClient {
    pub fn new() -> Result<Self, ServiceError> {
        Self::with_config(HttpConfig::default())
    }

    pub fn with_config(config: HttpConfig) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(ref ua) = config.user_agent {
            builder = builder.user_agent(ua);
        }

        let client = builder.build().map_err(|e| {
            ServiceError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        let mut middleware = ClientBuilder::new(client);
        if config.max_retries > 0 {
            let retry_policy = ExponentialBackoff::builder()
                .retry_bounds(config.retry_min_delay, config.retry_max_delay)
                .build_with_max_retries(config.max_retries);
            middleware =
                middleware.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        Ok(Self {
            inner: middleware.build(),
            config,
        })
    }

    #[must_use]
    pub fn post(&self, url: &str) -> reqwest_middleware::RequestBuilder {
        self.inner.post(url)
    }

    #[must_use]
    pub const fn config(&self) -> &HttpConfig {
        &self.config
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
