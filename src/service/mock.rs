use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use super::AnswerService;
use super::error::ServiceError;
use super::types::Reply;

#[derive(Debug, Clone)]
enum Outcome {
    Reply(Reply),
    Fail(String),
    Hang,
}

/// One scripted answer, optionally delayed.
#[derive(Debug, Clone)]
pub struct MockReply {
    outcome: Outcome,
    delay: Option<Duration>,
}

impl MockReply {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Reply(Reply::new(text)),
            delay: None,
        }
    }

    #[must_use]
    pub const fn reply(reply: Reply) -> Self {
        Self {
            outcome: Outcome::Reply(reply),
            delay: None,
        }
    }

    /// Fails with a connection error.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(message.into()),
            delay: None,
        }
    }

    /// Never completes.
    #[must_use]
    pub const fn hang() -> Self {
        Self {
            outcome: Outcome::Hang,
            delay: None,
        }
    }

    #[must_use]
    pub const fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Scripted answer service. Replies registered for a specific question win
/// over the queue; an empty queue fails the request.
#[derive(Clone, Default)]
pub struct MockAnswerService {
    queue: Arc<Mutex<VecDeque<MockReply>>>,
    by_question: Arc<Mutex<HashMap<String, MockReply>>>,
    questions: Arc<Mutex<Vec<String>>>,
}

impl MockAnswerService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reply(self, reply: MockReply) -> Self {
        self.queue.lock().push_back(reply);
        self
    }

    #[must_use]
    pub fn with_reply_for(self, question: impl Into<String>, reply: MockReply) -> Self {
        self.by_question.lock().insert(question.into(), reply);
        self
    }

    #[must_use]
    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().clone()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.lock().len()
    }

    fn next_reply(&self, question: &str) -> Option<MockReply> {
        if let Some(reply) = self.by_question.lock().remove(question) {
            return Some(reply);
        }
        self.queue.lock().pop_front()
    }
}

impl std::fmt::Debug for MockAnswerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockAnswerService")
            .field("queued", &self.queue.lock().len())
            .field("asked", &self.questions.lock().len())
            .finish()
    }
}

#[async_trait]
impl AnswerService for MockAnswerService {
    fn endpoint(&self) -> String {
        "mock://answers".to_string()
    }

    async fn ask(&self, text: &str) -> Result<Reply, ServiceError> {
        self.questions.lock().push(text.to_string());

        let Some(reply) = self.next_reply(text) else {
            return Err(ServiceError::Connection(
                "MockAnswerService: no replies queued".to_string(),
            ));
        };

        if let Some(delay) = reply.delay {
            tokio::time::sleep(delay).await;
        }

        match reply.outcome {
            Outcome::Reply(reply) => Ok(reply),
            Outcome::Fail(message) => Err(ServiceError::Connection(message)),
            Outcome::Hang => futures::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_in_queue_order() {
        let mock = MockAnswerService::new()
            .with_reply(MockReply::text("first"))
            .with_reply(MockReply::text("second"));

        assert_eq!(mock.ask("a").await.expect("reply").text, "first");
        assert_eq!(mock.ask("b").await.expect("reply").text, "second");
        assert_eq!(mock.questions(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn question_specific_reply_wins() {
        let mock = MockAnswerService::new()
            .with_reply(MockReply::text("queued"))
            .with_reply_for("menu", MockReply::text("1. nutrition info"));

        assert_eq!(mock.ask("menu").await.expect("reply").text, "1. nutrition info");
        assert_eq!(mock.ask("other").await.expect("reply").text, "queued");
    }

    #[tokio::test]
    async fn empty_queue_fails() {
        let mock = MockAnswerService::new();
        let err = mock.ask("hello").await.unwrap_err();
        assert!(matches!(err, ServiceError::Connection(_)));
        assert_eq!(mock.question_count(), 1);
    }

    #[tokio::test]
    async fn scripted_failure() {
        let mock = MockAnswerService::new().with_reply(MockReply::fail("connection refused"));
        let err = mock.ask("hello").await.unwrap_err();
        assert_eq!(err.to_string(), "Connection failed: connection refused");
    }

    #[tokio::test]
    async fn hang_never_resolves() {
        let mock = MockAnswerService::new().with_reply(MockReply::hang());
        let result = tokio::time::timeout(Duration::from_millis(20), mock.ask("hi")).await;
        assert!(result.is_err());
    }
}
