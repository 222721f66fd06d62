//! Wire models for the orders REST API.

pub mod order;

use serde::Serialize;
use tracing::warn;

pub use order::{Order, OrderItem, OrderStatus, SpiceLevel, format_order_date};

/// Body of `PATCH /api/orders/{id}/complete`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Decodes a `GET /api/orders` body record by record.
///
/// Records that do not decode as an [`Order`] are logged and left out; the
/// rest are returned in server order.
///
/// # Errors
///
/// Returns [`OrderDeskError::Json`](crate::OrderDeskError::Json) if the body
/// is not a JSON array.
pub fn decode_orders(body: &[u8]) -> crate::Result<Vec<Order>> {
    let records: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    let total = records.len();

    let orders: Vec<Order> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Order>(record) {
            Ok(order) => Some(order),
            Err(e) => {
                warn!(index, "skipping malformed order: {e}");
                None
            }
        })
        .collect();

    if orders.len() < total {
        warn!(
            kept = orders.len(),
            skipped = total - orders.len(),
            "order list had malformed records"
        );
    }
    Ok(orders)
}
