//! "New Order Received!" popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const POPUP_WIDTH: u16 = 36;
const POPUP_HEIGHT: u16 = 6;

/// Draws the alert centered over `area`, clearing what is beneath it.
pub fn render(frame: &mut Frame, area: Rect) {
    let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let lines = vec![
        Line::from(Span::styled(
            "New Order Received!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            " OK ",
            Style::default().fg(Color::White).bg(Color::Blue),
        )),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        popup,
    );
}

/// Returns a `width` × `height` rect centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
