//! Application state for the TUI.

use crate::board::OrderBoard;
use crate::models::Order;

/// Central application state container.
pub struct App {
    // -- Order State --
    /// Cached orders and the new-order alert.
    pub board: OrderBoard,

    // -- UI State --
    /// Index of the highlighted order in the list.
    pub selected: usize,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with an empty board.
    pub fn new() -> Self {
        Self {
            board: OrderBoard::new(),
            selected: 0,
            should_quit: false,
        }
    }

    /// Returns the highlighted order, if the list is non-empty.
    pub fn selected_order(&self) -> Option<&Order> {
        self.board.orders().get(self.selected)
    }

    /// Moves the highlight down one row.
    pub fn select_next(&mut self) {
        let len = self.board.orders().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Moves the highlight up one row.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keeps the highlight inside the list after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.board.orders().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
