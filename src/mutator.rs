//! One-shot status writes triggered from the dashboard.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::client::OrdersClient;
use crate::models::OrderStatus;
use crate::tui::Message;

/// Spawns a task that writes `status` for `order_id`.
///
/// On success the task sends [`Message::StatusUpdated`] so the UI loop can
/// patch its copy of the order. On failure the error is logged and nothing
/// is sent, leaving local state untouched.
pub fn spawn_status_update(
    client: OrdersClient,
    tx: mpsc::UnboundedSender<Message>,
    order_id: String,
    status: OrderStatus,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match client.set_status(&order_id, status).await {
            Ok(()) => {
                info!(order_id, %status, "order status updated");
                let _ = tx.send(Message::StatusUpdated { order_id, status });
            }
            Err(e) => error!(order_id, "Error updating order status: {e}"),
        }
    })
}
