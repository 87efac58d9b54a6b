mod render;
mod scroll_state;

pub use render::message_lines;
pub use scroll_state::ScrollState;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;
use crate::widget::Message;

const MARGIN: u16 = 2;

pub struct ChatWidget<'a> {
    messages: &'a [Message],
    scroll: &'a mut ScrollState,
    endpoint: &'a str,
}

impl<'a> ChatWidget<'a> {
    #[must_use]
    pub const fn new(messages: &'a [Message], scroll: &'a mut ScrollState, endpoint: &'a str) -> Self {
        Self {
            messages,
            scroll,
            endpoint,
        }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if self.messages.is_empty() {
            Self::render_welcome(area, buf, self.endpoint);
            return;
        }

        let content_width = area.width.saturating_sub(MARGIN * 2);
        let lines = transcript_lines(self.messages, content_width);

        let viewport = area.height as usize;
        self.scroll.update(lines.len(), viewport);

        let start = self.scroll.offset();
        let end = (start + viewport).min(lines.len());
        for (row, line) in lines[start..end].iter().enumerate() {
            buf.set_line(area.x + MARGIN, area.y + row as u16, line, content_width);
        }

        if !self.scroll.at_bottom() {
            Self::render_more_indicator(area, buf);
        }
    }

    fn render_welcome(area: Rect, buf: &mut Buffer, endpoint: &str) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("Start a conversation", Theme::accent_bold()))
                .alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(
                format!("Messages are sent to {endpoint}"),
                Theme::muted(),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                "Type below and press Enter, or click send",
                Theme::muted(),
            ))
            .alignment(Alignment::Center),
        ];

        Paragraph::new(lines).render(area, buf);
    }

    fn render_more_indicator(area: Rect, buf: &mut Buffer) {
        const LABEL: &str = "↓ newer";
        let width = 9.min(area.width);
        let indicator_area = Rect {
            x: area.x + area.width - width,
            y: area.y + area.height.saturating_sub(1),
            width,
            height: 1,
        };

        Paragraph::new(Line::from(Span::styled(LABEL, Theme::warning()))).render(indicator_area, buf);
    }
}

/// All transcript lines, one blank line between entries.
#[must_use]
pub fn transcript_lines(messages: &[Message], width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (idx, message) in messages.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(message_lines(message, width));
    }

    lines
}
