//! Client-side cache of the order list.
//!
//! [`OrderBoard`] is replaced wholesale by every successful poll and patched
//! in place after a successful status write. It also owns the "new order"
//! alert, which is raised when a poll returns more orders than the previous
//! one did.
//!
//! Detection compares raw counts only, so an equal number of removals and
//! additions between two polls goes unnoticed, and the first poll after
//! start compares against zero.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::models::{Order, OrderStatus};

/// Local order state plus the new-order alert flag.
#[derive(Debug, Default)]
pub struct OrderBoard {
    orders: Vec<Order>,
    previous_count: usize,
    alert: bool,
    last_refresh: Option<Instant>,
}

impl OrderBoard {
    /// Creates an empty board with a zero baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders in the order the server returned them.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Count recorded by the last successful poll.
    pub fn previous_count(&self) -> usize {
        self.previous_count
    }

    /// Whether the "new order" popup should be shown.
    pub fn alert_active(&self) -> bool {
        self.alert
    }

    /// When the last successful poll was applied.
    pub fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    /// Looks up an order by identifier.
    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Number of orders with the given status.
    pub fn count_with(&self, status: OrderStatus) -> usize {
        self.orders.iter().filter(|o| o.status == status).count()
    }

    /// Applies a fetched order list.
    ///
    /// Raises the alert if the list is longer than the previous one, then
    /// replaces the orders and the baseline unconditionally. Returns `true`
    /// when this call raised the alert.
    pub fn replace_orders(&mut self, orders: Vec<Order>) -> bool {
        let raised = orders.len() > self.previous_count;
        if raised {
            info!(
                previous = self.previous_count,
                current = orders.len(),
                "new order received"
            );
            self.alert = true;
        }

        debug!(count = orders.len(), "order list refreshed");
        self.previous_count = orders.len();
        self.orders = orders;
        self.last_refresh = Some(Instant::now());
        raised
    }

    /// Clears the alert flag.
    pub fn dismiss_alert(&mut self) {
        self.alert = false;
    }

    /// Status a toggle of `order_id` should write, or `None` if the order
    /// is not on the board.
    pub fn toggle_target(&self, order_id: &str) -> Option<OrderStatus> {
        match self.get(order_id) {
            Some(order) => Some(order.status.toggled()),
            None => {
                warn!(order_id, "cannot toggle unknown order");
                None
            }
        }
    }

    /// Sets the status of exactly one order after a successful write.
    ///
    /// Returns `false` if the order vanished in the meantime (e.g. a poll
    /// replaced the list while the write was in flight).
    pub fn apply_status(&mut self, order_id: &str, status: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|o| o.id == order_id) {
            Some(order) => {
                order.status = status;
                true
            }
            None => {
                warn!(order_id, %status, "status update for order no longer on board");
                false
            }
        }
    }
}
