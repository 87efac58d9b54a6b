//! Client side of the external answer service.

pub mod answer;
pub mod error;
pub mod http;
pub mod mock;
pub mod types;

pub use answer::{HttpAnswerService, parse_reply};
pub use error::ServiceError;
pub use http::{HttpClient, HttpConfig};
pub use mock::{MockAnswerService, MockReply};
pub use types::{BaseUrl, Reply, ServiceConfig};

use async_trait::async_trait;

#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Human-readable location of the service, shown in the header.
    fn endpoint(&self) -> String;

    /// Sends one question and waits for its reply.
    async fn ask(&self, text: &str) -> Result<Reply, ServiceError>;
}
