//! The chat widget controller and the seams it talks to the presentation
//! layer through.

pub mod controller;
pub mod message;
pub mod policy;
pub mod trigger;
pub mod view;

pub use controller::{
    ChatController, Completion, CompletionReceiver, CompletionSender, PendingRequest, RequestId,
};
pub use message::{Message, Origin};
pub use policy::FailurePolicy;
pub use trigger::Trigger;
pub use view::{InputField, RecordedTranscript, TextInput, TranscriptView};
