//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use super::app::App;
use super::components::{alert, order_detail, order_list, status_bar};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Status bar
            Constraint::Min(8),    // Orders
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    render_title(frame, main_layout[0]);
    status_bar::render(frame, main_layout[1], app);

    // Orders: list | detail
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[2]);

    order_list::render(frame, content[0], app);
    order_detail::render(frame, content[1], app);

    render_keybindings(frame, main_layout[3], app);

    if app.board.alert_active() {
        alert::render(frame, area);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let para = Paragraph::new("Restaurant Admin - Orders")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(para, area);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let help = if app.board.alert_active() {
        "[any key]dismiss"
    } else {
        "[j/k]select [Enter]mark/unmark [q]quit"
    };

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
