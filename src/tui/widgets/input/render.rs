#![allow(clippy::cast_possible_truncation)]

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use super::InputWidget;
use crate::ui::theme::Theme;

pub const SEND_LABEL: &str = "[ send ]";
const PREFIX: &str = "> ";

impl InputWidget<'_> {
    pub fn render(&self, area: Rect, frame: &mut Frame) {
        if area.height < 2 {
            return;
        }

        Self::render_separator(area, frame.buffer_mut());

        let field = Self::field_area(area);
        Paragraph::new(Line::from(Span::styled(PREFIX, Theme::user())))
            .render(Rect { width: 2.min(field.width), height: 1, ..field }, frame.buffer_mut());

        let button = Self::send_button_area(area);
        let button_style = if self.is_empty() {
            Theme::muted()
        } else {
            Theme::button()
        };
        Paragraph::new(Line::from(Span::styled(SEND_LABEL, button_style)))
            .render(button, frame.buffer_mut());

        let text_area = Self::textarea_area(area);
        frame.render_widget(&self.textarea, text_area);

        let (row, col) = self.textarea.cursor();
        let visible_row = row.min(text_area.height.saturating_sub(1) as usize);
        frame.set_cursor_position(Position::new(
            text_area.x + (col as u16).min(text_area.width.saturating_sub(1)),
            text_area.y + visible_row as u16,
        ));
    }

    /// Clickable region of the send button inside the input area.
    #[must_use]
    pub fn send_button_area(area: Rect) -> Rect {
        let field = Self::field_area(area);
        let width = (SEND_LABEL.width() as u16).min(field.width);
        Rect {
            x: field.x + field.width - width,
            y: field.y,
            width,
            height: 1.min(field.height),
        }
    }

    fn render_separator(area: Rect, buf: &mut Buffer) {
        let line = Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Theme::border(),
        ));
        Paragraph::new(line).render(Rect { height: 1, ..area }, buf);
    }

    fn field_area(area: Rect) -> Rect {
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(1),
        }
    }

    fn textarea_area(area: Rect) -> Rect {
        let field = Self::field_area(area);
        let reserved = PREFIX.width() as u16 + SEND_LABEL.width() as u16 + 1;
        Rect {
            x: field.x + PREFIX.width() as u16,
            y: field.y,
            width: field.width.saturating_sub(reserved),
            height: field.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_button_sits_at_right_edge_of_first_field_row() {
        let area = Rect::new(0, 30, 80, 3);
        let button = InputWidget::send_button_area(area);

        assert_eq!(button.y, 31);
        assert_eq!(button.x + button.width, 80);
        assert_eq!(button.width as usize, SEND_LABEL.len());
        assert!(button.contains(Position::new(76, 31)));
        assert!(!button.contains(Position::new(10, 31)));
    }

    #[test]
    fn textarea_leaves_room_for_prefix_and_button() {
        let area = Rect::new(0, 0, 80, 3);
        let text = InputWidget::textarea_area(area);

        assert_eq!(text.x, 2);
        assert!(text.x + text.width < InputWidget::send_button_area(area).x);
    }
}
