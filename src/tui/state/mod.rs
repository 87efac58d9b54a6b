mod history;
mod transcript;

pub use history::SentHistory;
pub use transcript::TranscriptPane;

use std::time::{Duration, Instant};

const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// UI state that is not owned by the chat controller.
pub struct AppState {
    pub should_quit: bool,
    pub frame: usize,
    pub spinner_frame: usize,
    pub history: SentHistory,

    spinner_last_update: Option<Instant>,
}

impl AppState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            should_quit: false,
            frame: 0,
            spinner_frame: 0,
            history: SentHistory::new(),
            spinner_last_update: None,
        }
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);

        let now = Instant::now();
        match self.spinner_last_update {
            Some(last) if now.duration_since(last) >= SPINNER_INTERVAL => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.spinner_last_update = Some(now);
            }
            None => self.spinner_last_update = Some(now),
            _ => {}
        }
    }

    pub const fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_running() {
        let state = AppState::new();
        assert!(!state.should_quit);
        assert_eq!(state.frame, 0);
        assert!(state.history.is_empty());
    }

    #[test]
    fn tick_advances_frame() {
        let mut state = AppState::new();
        state.tick();
        state.tick();
        assert_eq!(state.frame, 2);
    }

    #[test]
    fn quit_sets_flag() {
        let mut state = AppState::new();
        state.quit();
        assert!(state.should_quit);
    }
}
