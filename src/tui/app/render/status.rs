use crate::ui::theme::{Spinners, Theme};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use std::time::Duration;

const HINTS: &str = "Enter send · Shift+Enter newline · PgUp/PgDn scroll · Ctrl+C quit";

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs > 0 {
        format!("{secs}s")
    } else {
        format!("{}ms", elapsed.as_millis())
    }
}

/// Right-hand status text while replies are outstanding.
#[must_use]
pub fn waiting_label(pending: usize, longest_wait: Option<Duration>) -> Option<String> {
    if pending == 0 {
        return None;
    }
    let noun = if pending == 1 { "reply" } else { "replies" };
    let elapsed = longest_wait
        .map(|d| format!(" {}", format_elapsed(d)))
        .unwrap_or_default();
    Some(format!("Waiting for {pending} {noun}{elapsed}"))
}

#[allow(clippy::cast_possible_truncation)]
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    pending: usize,
    longest_wait: Option<Duration>,
    spinner_frame: usize,
) {
    let left_line = Line::from(vec![Span::raw(" "), Span::styled(HINTS, Theme::muted())]);
    frame
        .buffer_mut()
        .set_line(area.x, area.y, &left_line, area.width);

    if let Some(label) = waiting_label(pending, longest_wait) {
        let frames = Spinners::BRAILLE;
        let frame_char = frames[spinner_frame % frames.len()];

        let right_line = Line::from(vec![
            Span::styled(format!("{frame_char} {label}"), Theme::warning()),
            Span::raw(" "),
        ]);
        let status_len = right_line.width() as u16;
        let status_x = area.x + area.width.saturating_sub(status_len);
        frame
            .buffer_mut()
            .set_line(status_x, area.y, &right_line, status_len);
    }
}
