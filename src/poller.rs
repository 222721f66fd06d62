//! Periodic refresh of the order list.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::client::OrdersClient;
use crate::tui::Message;

/// Spawns a task that fetches the order list every `interval` and forwards
/// each successful result as [`Message::OrdersFetched`].
///
/// Unlike a plain fixed-interval timer, whose first callback fires one
/// `interval` after start, the first fetch here happens immediately so the
/// list is not empty for a whole period. Later fetches follow every
/// `interval`. A failed fetch is logged and the cycle skipped; nothing is
/// retried. The task ends once the receiving side of `tx` is dropped.
pub fn spawn_poller(
    client: OrdersClient,
    tx: mpsc::UnboundedSender<Message>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(url = client.base_url(), ?interval, "order poller started");

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }

            match client.fetch_orders().await {
                Ok(orders) => {
                    if tx.send(Message::OrdersFetched(orders)).is_err() {
                        break;
                    }
                }
                Err(e) => warn!("Error fetching orders: {e}"),
            }
        }

        debug!("order poller stopped");
    })
}
