//! One-shot mode: a single exchange rendered as plain lines.

use std::io::{self, Write};
use std::sync::Arc;

use crate::error::{ChatError, Result};
use crate::service::AnswerService;
use crate::widget::{ChatController, FailurePolicy, Message, Origin, TextInput, TranscriptView};

/// Writes each transcript entry as soon as it is appended.
pub struct LineTranscript<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> LineTranscript<W> {
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<W: Write> TranscriptView for LineTranscript<W> {
    fn append(&mut self, message: Message) {
        if self.error.is_some() {
            return;
        }
        let line = match message.origin {
            Origin::User => format!("> {}", message.text),
            Origin::Bot => message.text,
            Origin::Notice => format!("[!] {}", message.text),
        };
        if let Err(e) = writeln!(self.out, "{line}") {
            self.error = Some(e);
        }
    }

    fn scroll_to_latest(&mut self) {
        if self.error.is_none()
            && let Err(e) = self.out.flush()
        {
            self.error = Some(e);
        }
    }
}

/// Sends `text` once and waits for its reply. Blank text does nothing.
pub async fn run_ask<W: Write>(
    service: Arc<dyn AnswerService>,
    policy: FailurePolicy,
    text: &str,
    out: W,
) -> Result<()> {
    let (mut controller, mut completions) =
        ChatController::new(LineTranscript::new(out), TextInput::new(text), service, policy);

    if controller.submit_input().is_none() {
        tracing::debug!("Nothing to send");
        return Ok(());
    }

    let completion = completions.recv().await.ok_or_else(|| {
        ChatError::InvalidState("completion channel closed before a reply".to_string())
    })?;
    let failed = completion.outcome.is_err();
    controller.complete(completion);

    if let Some(e) = controller.view_mut().take_error() {
        return Err(e.into());
    }
    if failed {
        return Err(ChatError::NoReply(text.trim().to_string()));
    }
    Ok(())
}
