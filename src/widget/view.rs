use super::message::Message;

/// Transcript container of the presentation layer. Append-only.
pub trait TranscriptView {
    fn append(&mut self, message: Message);

    /// Brings the most recent entry into view.
    fn scroll_to_latest(&mut self);
}

/// Text input of the presentation layer.
pub trait InputField {
    fn text(&self) -> String;
    fn clear(&mut self);
}

/// Plain string-backed input, for non-interactive use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl InputField for TextInput {
    fn text(&self) -> String {
        self.value.clone()
    }

    fn clear(&mut self) {
        self.value.clear();
    }
}

/// Transcript that only records what was appended.
#[derive(Debug, Clone, Default)]
pub struct RecordedTranscript {
    pub messages: Vec<Message>,
    pub scrolls: usize,
}

impl RecordedTranscript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.text.as_str()).collect()
    }
}

impl TranscriptView for RecordedTranscript {
    fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    fn scroll_to_latest(&mut self) {
        self.scrolls += 1;
    }
}
