use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::widgets::MAX_VISIBLE_LINES;

pub struct LayoutAreas {
    pub header: Rect,
    pub chat: Rect,
    pub input: Rect,
    pub status: Rect,
}

/// Splits the screen. The input grows with its content up to
/// [`MAX_VISIBLE_LINES`] rows plus its separator.
#[must_use]
pub fn calculate_layout(area: Rect, input_lines: usize) -> LayoutAreas {
    #[allow(clippy::cast_possible_truncation)]
    let input_height = 1 + input_lines.clamp(1, MAX_VISIBLE_LINES) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(input_height),
            Constraint::Length(1),
        ])
        .split(area);

    LayoutAreas {
        header: chunks[0],
        chat: chunks[1],
        input: chunks[2],
        status: chunks[3],
    }
}
