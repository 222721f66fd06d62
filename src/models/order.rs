//! Order records as served by `GET /api/orders`.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Completion state of an order. The only field this client ever changes.
///
/// A record without a status counts as pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    /// Returns the opposite status (completed ⇄ pending).
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            OrderStatus::Pending => OrderStatus::Completed,
            OrderStatus::Completed => OrderStatus::Pending,
        }
    }

    /// Returns the wire-format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
        }
    }

    /// Label of the action that would flip this status.
    pub fn action_label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Mark as Completed",
            OrderStatus::Completed => "Unmark",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_phone: String,
    /// RFC 3339 timestamp as sent by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_date: String,
    #[serde(default)]
    pub total_price: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: OrderStatus,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub spice_level: Option<SpiceLevel>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: u32,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `2`, `2.0` or `"2"`; anything else reads as zero.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let quantity = match &value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(quantity.and_then(|q| u32::try_from(q).ok()).unwrap_or(0))
}

/// Spice level, sent either as a label (`"Medium"`) or a number (`3`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpiceLevel {
    Level(serde_json::Number),
    Label(String),
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpiceLevel::Level(n) => write!(f, "{n}"),
            SpiceLevel::Label(s) => f.write_str(s),
        }
    }
}

impl OrderItem {
    /// Renders the item the way the dashboard lists it.
    pub fn summary(&self) -> String {
        let spice = self
            .spice_level
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string);
        format!("{} - Spice Level: {} (Qty: {})", self.name, spice, self.quantity)
    }
}

impl Order {
    /// Formats the total as `$12.50`, or `--` when the backend sent none.
    pub fn total_label(&self) -> String {
        match self.total_price {
            Some(total) => format!("${:.2}", total),
            None => "--".to_string(),
        }
    }

    /// Renders `order_date` in local time as `YYYY-MM-DD HH:MM:SS`.
    pub fn order_date_label(&self) -> String {
        format_order_date(&self.order_date, &Local)
    }
}

const DATE_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats an RFC 3339 timestamp in `tz`.
///
/// A timestamp without an offset is taken to be in `tz` already. Text that
/// is not a timestamp is returned unchanged.
pub fn format_order_date<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return at.with_timezone(tz).format(DATE_LABEL_FORMAT).to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => naive.format(DATE_LABEL_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
