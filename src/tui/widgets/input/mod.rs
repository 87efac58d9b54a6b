mod action;
mod key_handler;
mod render;

pub use action::InputAction;
pub use render::SEND_LABEL;

use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::ui::theme::Theme;
use crate::widget::InputField;

/// Most lines the input grows to before it scrolls internally.
pub const MAX_VISIBLE_LINES: usize = 4;

pub struct InputWidget<'a> {
    textarea: TextArea<'a>,
}

impl InputWidget<'_> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            textarea: Self::create_textarea(Vec::new()),
        }
    }

    pub fn set_text(&mut self, text: &str) {
        let lines: Vec<String> = text.lines().map(ToString::to_string).collect();
        self.textarea = Self::create_textarea(lines);
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(String::is_empty)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.textarea.lines().len().max(1)
    }

    fn create_textarea(lines: Vec<String>) -> TextArea<'static> {
        let mut textarea = if lines.is_empty() {
            TextArea::default()
        } else {
            TextArea::new(lines)
        };
        textarea.set_placeholder_text("Type a message");
        textarea.set_placeholder_style(Theme::muted());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Theme::user().add_modifier(ratatui::style::Modifier::REVERSED));
        textarea
    }
}

impl InputField for InputWidget<'_> {
    fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    fn clear(&mut self) {
        self.textarea = Self::create_textarea(Vec::new());
    }
}

impl Default for InputWidget<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_text_round_trips_multiline() {
        let mut input = InputWidget::new();
        input.set_text("compare\nrice");
        assert_eq!(input.text(), "compare\nrice");
        assert_eq!(input.line_count(), 2);
        assert!(!input.is_empty());
    }

    #[test]
    fn clear_empties_the_field() {
        let mut input = InputWidget::new();
        input.set_text("apple");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.text(), "");
        assert_eq!(input.line_count(), 1);
    }
}
