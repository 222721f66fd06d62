//! Detail panel for the highlighted order.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::models::{Order, OrderStatus};
use crate::tui::app::App;

/// Renders the selected order's customer info, items, and action hint.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(order) = app.selected_order() else {
        let block = Block::default()
            .title(" Order ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let para = Paragraph::new("No order selected")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(para, area);
        return;
    };

    let border_color = match order.status {
        OrderStatus::Completed => Color::Green,
        OrderStatus::Pending => Color::Gray,
    };

    let block = Block::default()
        .title(" Order ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let para = Paragraph::new(detail_lines(order))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}

fn detail_lines(order: &Order) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Order ID: {}", order.id),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Customer: ", label),
            Span::raw(order.customer_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Phone: ", label),
            Span::raw(order.customer_phone.clone()),
        ]),
        Line::from(vec![
            Span::styled("Order Date: ", label),
            Span::raw(order.order_date_label()),
        ]),
        Line::from(Span::styled(
            format!("Total Bill: {}", order.total_label()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Ordered Items:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    if order.items.is_empty() {
        lines.push(Line::from(Span::styled("  (none)", label)));
    }
    for item in &order.items {
        lines.push(Line::raw(format!("  {}", item.summary())));
    }

    let action_color = match order.status {
        OrderStatus::Pending => Color::Green,
        OrderStatus::Completed => Color::Red,
    };
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter] ", label),
        Span::styled(
            order.status.action_label(),
            Style::default()
                .fg(Color::Black)
                .bg(action_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    lines
}
