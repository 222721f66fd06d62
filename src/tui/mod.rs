//! Terminal User Interface for the order dashboard.
//!
//! Provides a Ratatui-based TUI listing recent orders, the selected
//! order's details, and the new-order popup.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message};
pub use terminal::{TerminalSession, Tui};
pub use ui::render;
