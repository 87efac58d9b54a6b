use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Bot,
    /// Failure reports, only produced under [`FailurePolicy::Report`].
    ///
    /// [`FailurePolicy::Report`]: super::FailurePolicy::Report
    Notice,
}

impl Origin {
    /// Class name of the transcript entry, e.g. `user-message`.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Bot => "bot-message",
            Self::Notice => "notice-message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub origin: Origin,
    pub timestamp: String,
}

impl Message {
    #[must_use]
    pub fn new(text: impl Into<String>, origin: Origin) -> Self {
        Self {
            text: text.into(),
            origin,
            timestamp: now_label(),
        }
    }

    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Origin::User)
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Origin::Bot)
    }

    #[must_use]
    pub fn notice(text: impl Into<String>) -> Self {
        Self::new(text, Origin::Notice)
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    #[must_use]
    pub const fn class(&self) -> &'static str {
        self.origin.class()
    }
}

fn now_label() -> String {
    Local::now().format("%H:%M").to_string()
}
