use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;
use crate::widget::{Message, Origin};

const USER_PREFIX: &str = "> ";
const BOT_PREFIX: &str = "● ";
const NOTICE_PREFIX: &str = "[!] ";

/// Renders one transcript entry as wrapped lines with its origin marker and
/// a trailing time label.
#[must_use]
pub fn message_lines(message: &Message, width: u16) -> Vec<Line<'static>> {
    let (prefix, marker_style, text_style) = match message.origin {
        Origin::User => (USER_PREFIX, Theme::user(), Theme::user()),
        Origin::Bot => (BOT_PREFIX, Theme::bot_marker(), Theme::bot()),
        Origin::Notice => (NOTICE_PREFIX, Theme::notice(), Theme::notice()),
    };

    let mut lines = wrap_with_prefix(&message.text, width, prefix, marker_style, text_style);
    append_time_label(&mut lines, &message.timestamp, width);
    lines
}

fn wrap_with_prefix(
    text: &str,
    width: u16,
    prefix: &'static str,
    marker_style: Style,
    text_style: Style,
) -> Vec<Line<'static>> {
    let indent = prefix.width();
    let available = (width as usize).saturating_sub(indent).max(1);
    let wrapped = textwrap::wrap(text, available);

    if wrapped.is_empty() {
        return vec![Line::from(Span::styled(prefix, marker_style))];
    }

    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 {
                Span::styled(prefix, marker_style)
            } else {
                Span::raw(" ".repeat(indent))
            };
            Line::from(vec![lead, Span::styled(line.into_owned(), text_style)])
        })
        .collect()
}

fn append_time_label(lines: &mut Vec<Line<'static>>, timestamp: &str, width: u16) {
    if timestamp.is_empty() {
        return;
    }

    let label = format!("  {timestamp}");
    let fits = lines
        .first()
        .is_some_and(|first| first.width() + label.width() <= width as usize);

    if fits && let Some(first) = lines.first_mut() {
        first.spans.push(Span::styled(label, Theme::muted()));
    } else {
        lines.push(Line::from(Span::styled(label, Theme::muted())));
    }
}
