pub mod chat;
pub mod input;

pub use chat::{ChatWidget, ScrollState, message_lines, transcript_lines};
pub use input::{InputAction, InputWidget, MAX_VISIBLE_LINES};
