//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::models::OrderStatus;
use crate::tui::app::App;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let board = &app.board;

    let refresh_label = match board.last_refresh() {
        Some(at) => format!(" refreshed {}s ago ", at.elapsed().as_secs()),
        None => " waiting for first refresh ".to_string(),
    };

    let position = if board.orders().is_empty() {
        String::new()
    } else {
        format!(" {}/{} ", app.selected + 1, board.orders().len())
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} orders ", board.orders().len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" {} pending ", board.count_with(OrderStatus::Pending)),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" {} completed ", board.count_with(OrderStatus::Completed)),
            Style::default().fg(Color::Green),
        ),
        Span::raw("│"),
        Span::styled(refresh_label, Style::default().fg(Color::Cyan)),
    ];

    // Right-align the position in whatever width the left side leaves.
    let used = spans.iter().map(Span::width).sum::<usize>();
    let remaining = usize::from(area.width).saturating_sub(used);
    spans.push(Span::raw(format!("{position:>remaining$}")));

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
