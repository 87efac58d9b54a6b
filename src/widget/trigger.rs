use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions that submit the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    EnterKey,
    SendButton,
}

impl Trigger {
    /// Plain Enter (no modifiers) on key press; Shift+Enter is a newline.
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        let is_enter = key.code == KeyCode::Enter
            && key.modifiers == KeyModifiers::NONE
            && key.kind != KeyEventKind::Release;
        is_enter.then_some(Self::EnterKey)
    }
}
