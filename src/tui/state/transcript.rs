use crate::tui::widgets::ScrollState;
use crate::widget::{Message, TranscriptView};

/// The on-screen transcript: append-only messages plus the pane's scroll.
#[derive(Debug, Clone, Default)]
pub struct TranscriptPane {
    messages: Vec<Message>,
    pub scroll: ScrollState,
}

impl TranscriptPane {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Split borrow for rendering.
    pub fn parts_mut(&mut self) -> (&[Message], &mut ScrollState) {
        (&self.messages, &mut self.scroll)
    }
}

impl TranscriptView for TranscriptPane {
    fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    fn scroll_to_latest(&mut self) {
        self.scroll.follow_latest();
    }
}
