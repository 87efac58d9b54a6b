use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::message::{Message, Origin};
use super::policy::FailurePolicy;
use super::trigger::Trigger;
use super::view::{InputField, TranscriptView};
use crate::service::{AnswerService, Reply, ServiceError};

pub type RequestId = u64;

/// A finished request, delivered back to the task that owns the controller.
#[derive(Debug)]
pub struct Completion {
    pub id: RequestId,
    pub outcome: Result<Reply, ServiceError>,
}

pub type CompletionSender = mpsc::UnboundedSender<Completion>;
pub type CompletionReceiver = mpsc::UnboundedReceiver<Completion>;

#[derive(Debug)]
pub struct PendingRequest {
    pub text: String,
    started_at: Instant,
    handle: JoinHandle<()>,
}

impl PendingRequest {
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn cancel(self) {
        self.handle.abort();
    }
}

/// Owns the transcript and the input field, and turns submissions into
/// requests against the answer service.
///
/// Requests run on spawned tasks; their results come back through the
/// [`CompletionReceiver`] returned by [`ChatController::new`] and must be fed
/// to [`ChatController::complete`]. The transcript is therefore only touched
/// by whoever owns the controller.
pub struct ChatController<V, I> {
    view: V,
    input: I,
    service: Arc<dyn AnswerService>,
    policy: FailurePolicy,
    completion_tx: CompletionSender,
    pending: BTreeMap<RequestId, PendingRequest>,
    next_id: RequestId,
}

impl<V: TranscriptView, I: InputField> ChatController<V, I> {
    #[must_use]
    pub fn new(
        view: V,
        input: I,
        service: Arc<dyn AnswerService>,
        policy: FailurePolicy,
    ) -> (Self, CompletionReceiver) {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let controller = Self {
            view,
            input,
            service,
            policy,
            completion_tx,
            pending: BTreeMap::new(),
            next_id: 1,
        };
        (controller, completion_rx)
    }

    /// Submits the trimmed input. Blank input is ignored and left in place.
    pub fn submit_input(&mut self) -> Option<RequestId> {
        let raw = self.input.text();
        let text = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if text.is_empty() {
            return None;
        }

        let text = text.to_string();
        self.render_message(text.clone(), Origin::User);
        self.input.clear();

        Some(self.send_to_service(text))
    }

    pub fn trigger(&mut self, trigger: Trigger) -> Option<RequestId> {
        debug!(?trigger, "Submit triggered");
        self.submit_input()
    }

    /// Starts one request in the background and returns immediately.
    pub fn send_to_service(&mut self, text: String) -> RequestId {
        let id = self.next_id;
        self.next_id += 1;

        let service = Arc::clone(&self.service);
        let tx = self.completion_tx.clone();
        let question = text.clone();

        let handle = tokio::spawn(async move {
            let outcome = service.ask(&question).await;
            let _ = tx.send(Completion { id, outcome });
        });

        debug!(id, pending = self.pending.len() + 1, "Request issued");
        self.pending.insert(
            id,
            PendingRequest {
                text,
                started_at: Instant::now(),
                handle,
            },
        );
        id
    }

    pub fn render_message(&mut self, text: impl Into<String>, origin: Origin) {
        self.render(Message::new(text, origin));
    }

    pub fn complete(&mut self, completion: Completion) {
        let Completion { id, outcome } = completion;

        let Some(request) = self.pending.remove(&id) else {
            debug!(id, "Dropping completion for a request that is no longer pending");
            return;
        };

        match outcome {
            Ok(reply) => {
                debug!(id, elapsed_ms = request.elapsed().as_millis(), "Reply rendered");
                let mut message = Message::bot(reply.text);
                if let Some(timestamp) = reply.timestamp {
                    message = message.with_timestamp(timestamp);
                }
                self.render(message);
            }
            Err(err) => {
                warn!(
                    id,
                    error = %err,
                    transient = err.is_transient(),
                    question = %request.text,
                    "Answer service request failed"
                );
                if self.policy == FailurePolicy::Report {
                    self.render(Message::notice(format!("No reply: {err}")));
                }
            }
        }
    }

    /// Aborts every outstanding request; none of them will render.
    pub fn cancel_pending(&mut self) -> usize {
        let cancelled = self.pending.len();
        for (_, request) in std::mem::take(&mut self.pending) {
            request.cancel();
        }
        if cancelled > 0 {
            debug!(cancelled, "Cancelled pending requests");
        }
        cancelled
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// How long the oldest outstanding request has been waiting.
    #[must_use]
    pub fn longest_wait(&self) -> Option<Duration> {
        self.pending.values().map(PendingRequest::elapsed).max()
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        self.service.endpoint()
    }

    #[must_use]
    pub const fn policy(&self) -> FailurePolicy {
        self.policy
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub const fn input(&self) -> &I {
        &self.input
    }

    pub const fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    fn render(&mut self, message: Message) {
        debug!(class = message.class(), chars = message.text.chars().count(), "Appending entry");
        self.view.append(message);
        self.view.scroll_to_latest();
    }
}

impl<V, I> Drop for ChatController<V, I> {
    fn drop(&mut self) {
        for request in self.pending.values() {
            request.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{MockAnswerService, MockReply};
    use crate::widget::view::{RecordedTranscript, TextInput};

    type TestController = ChatController<RecordedTranscript, TextInput>;

    fn controller(
        mock: &MockAnswerService,
        policy: FailurePolicy,
    ) -> (TestController, CompletionReceiver) {
        ChatController::new(
            RecordedTranscript::new(),
            TextInput::default(),
            Arc::new(mock.clone()),
            policy,
        )
    }

    async fn settle(controller: &mut TestController, rx: &mut CompletionReceiver, count: usize) {
        for _ in 0..count {
            let completion = tokio::time::timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("completion in time")
                .expect("channel open");
            controller.complete(completion);
        }
    }

    #[tokio::test]
    async fn blank_input_renders_nothing_and_sends_nothing() {
        let mock = MockAnswerService::new();
        let (mut ctl, _rx) = controller(&mock, FailurePolicy::Silent);

        for blank in ["", " ", "\t", "  \n\r\n ", "\u{a0}", "\u{feff}", " \u{feff}\t"] {
            ctl.input_mut().set(blank);
            assert_eq!(ctl.submit_input(), None);
            assert_eq!(ctl.input().text(), blank, "blank input is left untouched");
        }

        tokio::task::yield_now().await;
        assert!(ctl.view().messages.is_empty());
        assert_eq!(ctl.pending_count(), 0);
        assert_eq!(mock.question_count(), 0);
    }

    #[tokio::test]
    async fn user_message_is_rendered_trimmed_before_request() {
        let mock = MockAnswerService::new().with_reply(MockReply::text("hello"));
        let (mut ctl, _rx) = controller(&mock, FailurePolicy::Silent);

        ctl.input_mut().set("  apple pie \n");
        assert!(ctl.submit_input().is_some());

        assert_eq!(ctl.view().texts(), vec!["apple pie"]);
        assert_eq!(ctl.view().messages[0].origin, Origin::User);
        assert_eq!(ctl.view().scrolls, 1);
        assert_eq!(mock.question_count(), 0, "request has not run yet");
        assert_eq!(ctl.pending_count(), 1);
    }

    #[tokio::test]
    async fn successful_reply_appends_one_bot_message() {
        let mock = MockAnswerService::new()
            .with_reply(MockReply::reply(Reply::new("hello").with_timestamp("12:34")));
        let (mut ctl, mut rx) = controller(&mock, FailurePolicy::Silent);

        ctl.input_mut().set("hi");
        ctl.submit_input();
        settle(&mut ctl, &mut rx, 1).await;

        let messages = &ctl.view().messages;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].origin, Origin::Bot);
        assert_eq!(messages[1].text, "hello");
        assert_eq!(messages[1].timestamp, "12:34");
        assert_eq!(ctl.view().scrolls, 2);
        assert_eq!(mock.questions(), vec!["hi"]);
        assert_eq!(ctl.pending_count(), 0);
    }

    #[tokio::test]
    async fn input_cleared_even_when_request_fails() {
        let mock = MockAnswerService::new().with_reply(MockReply::fail("refused"));
        let (mut ctl, mut rx) = controller(&mock, FailurePolicy::Silent);

        ctl.input_mut().set("banana");
        ctl.submit_input();
        assert_eq!(ctl.input().text(), "");

        settle(&mut ctl, &mut rx, 1).await;
        assert_eq!(ctl.view().texts(), vec!["banana"]);
        assert_eq!(ctl.pending_count(), 0);
    }

    #[tokio::test]
    async fn report_policy_appends_notice_on_failure() {
        let mock = MockAnswerService::new().with_reply(MockReply::fail("refused"));
        let (mut ctl, mut rx) = controller(&mock, FailurePolicy::Report);

        ctl.input_mut().set("banana");
        ctl.submit_input();
        settle(&mut ctl, &mut rx, 1).await;

        let messages = &ctl.view().messages;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].origin, Origin::Notice);
        assert!(messages[1].text.contains("refused"));
    }

    #[tokio::test]
    async fn controller_keeps_accepting_input_after_failure() {
        let mock = MockAnswerService::new()
            .with_reply(MockReply::fail("refused"))
            .with_reply(MockReply::text("back online"));
        let (mut ctl, mut rx) = controller(&mock, FailurePolicy::Silent);

        ctl.input_mut().set("one");
        ctl.submit_input();
        settle(&mut ctl, &mut rx, 1).await;

        ctl.input_mut().set("two");
        ctl.submit_input();
        settle(&mut ctl, &mut rx, 1).await;

        assert_eq!(ctl.view().texts(), vec!["one", "two", "back online"]);
    }

    #[tokio::test]
    async fn replies_render_in_completion_order() {
        let mock = MockAnswerService::new()
            .with_reply_for("first", MockReply::text("slow reply").after(Duration::from_millis(80)))
            .with_reply_for("second", MockReply::text("fast reply"));
        let (mut ctl, mut rx) = controller(&mock, FailurePolicy::Silent);

        ctl.input_mut().set("first");
        let a = ctl.submit_input().expect("id");
        ctl.input_mut().set("second");
        let b = ctl.submit_input().expect("id");
        assert!(a < b);

        assert_eq!(ctl.view().texts(), vec!["first", "second"]);
        assert_eq!(ctl.pending_count(), 2);

        settle(&mut ctl, &mut rx, 2).await;
        assert_eq!(
            ctl.view().texts(),
            vec!["first", "second", "fast reply", "slow reply"]
        );
    }

    #[tokio::test]
    async fn trigger_with_empty_input_appends_nothing() {
        let mock = MockAnswerService::new();
        let (mut ctl, _rx) = controller(&mock, FailurePolicy::Silent);

        assert_eq!(ctl.trigger(Trigger::EnterKey), None);
        assert_eq!(ctl.trigger(Trigger::SendButton), None);
        assert!(ctl.view().messages.is_empty());
    }

    #[tokio::test]
    async fn cancelled_requests_never_render() {
        let mock = MockAnswerService::new().with_reply(MockReply::hang());
        let (mut ctl, mut rx) = controller(&mock, FailurePolicy::Report);

        ctl.input_mut().set("anyone there?");
        ctl.submit_input();
        assert!(ctl.longest_wait().is_some());

        assert_eq!(ctl.cancel_pending(), 1);
        assert_eq!(ctl.pending_count(), 0);
        assert!(ctl.longest_wait().is_none());

        let waited = tokio::time::timeout(Duration::from_millis(30), rx.recv()).await;
        assert!(waited.is_err());
        assert_eq!(ctl.view().texts(), vec!["anyone there?"]);
    }

    #[tokio::test]
    async fn stale_completion_is_ignored() {
        let mock = MockAnswerService::new();
        let (mut ctl, _rx) = controller(&mock, FailurePolicy::Report);

        ctl.complete(Completion {
            id: 42,
            outcome: Ok(Reply::new("ghost")),
        });
        assert!(ctl.view().messages.is_empty());
    }
}
