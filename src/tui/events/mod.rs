mod loops;

pub use loops::{forward_completions, terminal_event_loop, tick_loop};

use crossterm::event::KeyEvent;
use std::time::Duration;

use crate::widget::Completion;

pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);
pub const TICK_INTERVAL: Duration = Duration::from_millis(33);
pub const SCROLL_DELTA: i16 = 3;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Paste(String),
    MouseScroll(i16),
    MouseClick { column: u16, row: u16 },
    Resize(u16, u16),
    Tick,
    Completion(Completion),
}

impl From<Completion> for AppEvent {
    fn from(completion: Completion) -> Self {
        Self::Completion(completion)
    }
}
