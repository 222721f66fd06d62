//! Scrollable list of recent orders.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::truncate;
use crate::models::{Order, OrderStatus};
use crate::tui::app::App;

const ID_WIDTH: usize = 12;
const TOTAL_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 10;

/// Renders the "Recent Orders" panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Recent Orders ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let orders = app.board.orders();
    let name_width = (inner.width as usize)
        .saturating_sub(ID_WIDTH + TOTAL_WIDTH + STATUS_WIDTH + 4)
        .max(4);

    let mut lines: Vec<Line> = Vec::new();

    // Header
    lines.push(Line::from(Span::styled(
        format!(
            "{:<idw$} {:<nw$} {:>tw$} {:<sw$}",
            "ID",
            "Customer",
            "Total",
            "Status",
            idw = ID_WIDTH,
            nw = name_width,
            tw = TOTAL_WIDTH,
            sw = STATUS_WIDTH,
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    if orders.is_empty() {
        lines.push(Line::from(Span::styled(
            "No orders",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let visible = (inner.height as usize).saturating_sub(1).max(1);
        let offset = app.selected.saturating_sub(visible - 1);

        for (i, order) in orders.iter().enumerate().skip(offset).take(visible) {
            lines.push(row(order, i == app.selected, name_width));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn row(order: &Order, selected: bool, name_width: usize) -> Line<'static> {
    let mut style = match order.status {
        OrderStatus::Completed => Style::default().fg(Color::Green),
        OrderStatus::Pending => Style::default(),
    };
    if selected {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }

    Line::from(Span::styled(
        format!(
            "{:<idw$} {:<nw$} {:>tw$} {:<sw$}",
            truncate(&order.id, ID_WIDTH),
            truncate(&order.customer_name, name_width),
            order.total_label(),
            order.status.as_str(),
            idw = ID_WIDTH,
            nw = name_width,
            tw = TOTAL_WIDTH,
            sw = STATUS_WIDTH,
        ),
        style,
    ))
}
