use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{InputAction, InputWidget};
use crate::widget::InputField;

impl InputWidget<'_> {
    /// Editing keys. Plain Enter is a submit trigger and is routed to the
    /// controller before reaching here.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => {
                self.textarea.insert_newline();
                InputAction::Continue
            }

            (KeyCode::Up, KeyModifiers::NONE) if self.is_empty() => InputAction::HistoryPrev,
            (KeyCode::Down, KeyModifiers::NONE) if self.is_empty() => InputAction::HistoryNext,

            (KeyCode::Char('k' | 'u'), KeyModifiers::CONTROL) => {
                self.clear();
                InputAction::Clear
            }

            _ => {
                self.textarea.input(key);
                InputAction::Continue
            }
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        for (i, line) in normalized.split('\n').enumerate() {
            if i > 0 {
                self.textarea.insert_newline();
            }
            self.textarea.insert_str(line);
        }
    }
}
