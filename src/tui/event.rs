//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::warn;

use crate::models::{Order, OrderStatus};

use super::app::App;

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// A poll returned the full order list.
    OrdersFetched(Vec<Order>),
    /// The backend accepted a status write.
    StatusUpdated {
        order_id: String,
        status: OrderStatus,
    },

    /// Request to quit the application.
    Quit,
}

/// Actions that require external handling (e.g., sending HTTP requests).
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Write `status` for the given order.
    ToggleStatus {
        order_id: String,
        status: OrderStatus,
    },
}

/// Spawns the input task: terminal events from crossterm's async
/// [`EventStream`] merged with a redraw tick every `tick`.
///
/// The task ends when the receiver is dropped, when the event stream closes,
/// or on a read error (logged).
pub fn spawn_input(tx: mpsc::UnboundedSender<Message>, tick: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let event = tokio::select! {
                _ = ticker.tick() => Event::Tick,
                next = events.next() => match next {
                    Some(Ok(raw)) => match translate(raw) {
                        Some(event) => event,
                        None => continue,
                    },
                    Some(Err(e)) => {
                        warn!("terminal event stream failed: {e}");
                        break;
                    }
                    None => break,
                },
                _ = tx.closed() => break,
            };

            if tx.send(Message::Input(event)).is_err() {
                break;
            }
        }
    })
}

/// Keeps the terminal events the dashboard reacts to.
fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) => Some(Event::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::OrdersFetched(orders) => {
            app.board.replace_orders(orders);
            app.clamp_selection();
            None
        }
        Message::StatusUpdated { order_id, status } => {
            app.board.apply_status(&order_id, status);
            None
        }
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Key(_) | Event::Resize(_, _) | Event::Tick => None,
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    // The alert overlay eats the key that dismisses it.
    if app.board.alert_active() {
        app.board.dismiss_alert();
        return None;
    }

    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => {
            app.should_quit = true;
            None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            None
        }
        KeyCode::Home => {
            app.selected = 0;
            None
        }
        KeyCode::End => {
            app.selected = app.board.orders().len().saturating_sub(1);
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') => toggle_selected(app),
        _ => None,
    }
}

/// Builds the status write for the highlighted order.
fn toggle_selected(app: &App) -> Option<Action> {
    let order_id = app.selected_order()?.id.clone();
    let status = app.board.toggle_target(&order_id)?;
    Some(Action::ToggleStatus { order_id, status })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer_name: String::new(),
            customer_phone: String::new(),
            order_date: String::new(),
            total_price: None,
            items: Vec::new(),
            status,
        }
    }

    fn key(code: KeyCode) -> Message {
        Message::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn app_with(orders: Vec<Order>) -> App {
        let mut app = App::new();
        update(&mut app, Message::OrdersFetched(orders));
        app.board.dismiss_alert();
        app
    }

    #[test]
    fn fetch_with_more_orders_shows_alert() {
        let mut app = app_with(vec![order("1", OrderStatus::Pending)]);
        update(
            &mut app,
            Message::OrdersFetched(vec![
                order("1", OrderStatus::Pending),
                order("2", OrderStatus::Pending),
            ]),
        );
        assert!(app.board.alert_active());
    }

    #[test]
    fn any_key_dismisses_alert_and_is_swallowed() {
        let mut app = App::new();
        update(
            &mut app,
            Message::OrdersFetched(vec![order("1", OrderStatus::Pending)]),
        );
        assert!(app.board.alert_active());

        let action = update(&mut app, key(KeyCode::Enter));
        assert!(action.is_none());
        assert!(!app.board.alert_active());
        assert!(!app.should_quit);
    }

    #[test]
    fn enter_toggles_selected_order() {
        let mut app = app_with(vec![
            order("a", OrderStatus::Pending),
            order("b", OrderStatus::Completed),
        ]);

        let action = update(&mut app, key(KeyCode::Enter));
        assert_eq!(
            action,
            Some(Action::ToggleStatus {
                order_id: "a".into(),
                status: OrderStatus::Completed,
            })
        );

        update(&mut app, key(KeyCode::Down));
        let action = update(&mut app, key(KeyCode::Char('m')));
        assert_eq!(
            action,
            Some(Action::ToggleStatus {
                order_id: "b".into(),
                status: OrderStatus::Pending,
            })
        );
    }

    #[test]
    fn toggle_does_not_change_local_state_before_confirmation() {
        let mut app = app_with(vec![order("a", OrderStatus::Pending)]);
        update(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.board.orders()[0].status, OrderStatus::Pending);
    }

    #[test]
    fn toggle_on_empty_list_does_nothing() {
        let mut app = App::new();
        assert!(update(&mut app, key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn status_updated_patches_order() {
        let mut app = app_with(vec![
            order("1", OrderStatus::Pending),
            order("2", OrderStatus::Pending),
        ]);
        update(
            &mut app,
            Message::StatusUpdated {
                order_id: "1".into(),
                status: OrderStatus::Completed,
            },
        );
        assert_eq!(app.board.orders()[0].status, OrderStatus::Completed);
        assert_eq!(app.board.orders()[1].status, OrderStatus::Pending);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app_with(vec![
            order("1", OrderStatus::Pending),
            order("2", OrderStatus::Pending),
            order("3", OrderStatus::Pending),
        ]);
        update(&mut app, key(KeyCode::End));
        assert_eq!(app.selected, 2);
        update(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected, 2);

        update(
            &mut app,
            Message::OrdersFetched(vec![order("1", OrderStatus::Pending)]),
        );
        assert_eq!(app.selected, 0);

        update(&mut app, key(KeyCode::Up));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn ctrl_c_quits_even_with_alert_visible() {
        let mut app = App::new();
        update(
            &mut app,
            Message::OrdersFetched(vec![order("1", OrderStatus::Pending)]),
        );
        update(
            &mut app,
            Message::Input(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn only_keys_and_resizes_are_forwarded() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            translate(CrosstermEvent::Key(key)),
            Some(Event::Key(k)) if k.code == KeyCode::Char('j')
        ));
        assert!(matches!(
            translate(CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        ));
        assert!(translate(CrosstermEvent::FocusGained).is_none());
        assert!(translate(CrosstermEvent::Paste("x".into())).is_none());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app_with(vec![order("a", OrderStatus::Pending)]);
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(update(&mut app, Message::Input(Event::Key(release))).is_none());
    }

    #[test]
    fn q_quits() {
        let mut app = App::new();
        update(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
