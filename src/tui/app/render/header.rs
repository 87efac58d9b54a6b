use crate::ui::theme::Theme;
use crate::widget::FailurePolicy;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use std::path::Path;

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    endpoint: &str,
    policy: FailurePolicy,
    log_path: Option<&Path>,
) {
    let title = format!("chatwidget v{}", env!("CARGO_PKG_VERSION"));
    let mut details = format!(" | failures: {policy}");
    if let Some(path) = log_path {
        details.push_str(&format!(" | log: {}", path.display()));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border())
        .border_set(ratatui::symbols::border::ROUNDED);

    let lines = vec![
        Line::from(vec![
            Span::raw("  "),
            Span::styled(title, Theme::accent_bold()),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("Endpoint: ", Theme::muted()),
            Span::styled(endpoint.to_string(), Theme::accent()),
            Span::styled(details, Theme::muted()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
