//! Deserialization tests for the orders API models.

use rust_decimal_macros::dec;

use orderdesk::models::{Order, OrderStatus, SpiceLevel, UpdateStatusRequest, decode_orders};

const ORDERS_JSON: &str = include_str!("fixtures/orders.json");
const ORDER_MINIMAL_JSON: &str = include_str!("fixtures/order_minimal.json");
const ORDER_BAD_STATUS_JSON: &str = include_str!("fixtures/order_bad_status.json");
const ORDERS_PARTIAL_JSON: &str = include_str!("fixtures/orders_partial.json");

#[test]
fn test_order_list_deserializes() {
    let orders: Vec<Order> =
        serde_json::from_str(ORDERS_JSON).expect("Failed to deserialize order list");

    assert_eq!(orders.len(), 2);

    let first = &orders[0];
    assert_eq!(first.id, "65f1c2a9e4b0a1d2c3f40001");
    assert_eq!(first.customer_name, "Asha Patel");
    assert_eq!(first.customer_phone, "555-0142");
    assert_eq!(first.order_date, "2024-03-09T18:42:07.512Z");
    assert_eq!(first.total_price, Some(dec!(27.5)));
    assert_eq!(first.status, OrderStatus::Pending);

    assert_eq!(first.items.len(), 2);
    assert_eq!(first.items[0].name, "Chicken Tikka");
    assert_eq!(
        first.items[0].spice_level,
        Some(SpiceLevel::Label("Hot".to_string()))
    );
    assert_eq!(first.items[0].quantity, 2);
    assert_eq!(first.items[1].summary(), "Garlic Naan - Spice Level: 0 (Qty: 3)");

    let second = &orders[1];
    assert_eq!(second.total_price, Some(dec!(12)));
    assert_eq!(second.status, OrderStatus::Completed);
    assert_eq!(second.total_label(), "$12.00");
}

#[test]
fn test_missing_display_fields_default() {
    let order: Order =
        serde_json::from_str(ORDER_MINIMAL_JSON).expect("Failed to deserialize minimal order");

    assert_eq!(order.id, "65f1c2a9e4b0a1d2c3f40003");
    assert!(order.customer_name.is_empty());
    assert!(order.total_price.is_none());
    assert!(order.items.is_empty());
    assert_eq!(order.total_label(), "--");
}

#[test]
fn test_unknown_status_is_rejected() {
    let result = serde_json::from_str::<Order>(ORDER_BAD_STATUS_JSON);
    assert!(result.is_err());
}

#[test]
fn test_decode_orders_keeps_good_records_around_bad_ones() {
    let orders = decode_orders(ORDERS_PARTIAL_JSON.as_bytes()).expect("list should decode");

    let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "65f1c2a9e4b0a1d2c3f40011",
            "65f1c2a9e4b0a1d2c3f40012",
            "65f1c2a9e4b0a1d2c3f40013",
        ]
    );

    let nulls = &orders[1];
    assert!(nulls.customer_name.is_empty());
    assert!(nulls.customer_phone.is_empty());
    assert!(nulls.total_price.is_none());
    assert_eq!(nulls.items[0].quantity, 2);
    assert!(nulls.items[0].spice_level.is_none());
    assert_eq!(nulls.status, OrderStatus::Completed);

    let no_status = &orders[2];
    assert_eq!(no_status.status, OrderStatus::Pending);
}

#[test]
fn test_decode_orders_rejects_non_array_body() {
    assert!(decode_orders(br#"{"orders": []}"#).is_err());
    assert!(decode_orders(b"<html>oops</html>").is_err());
    assert!(decode_orders(b"[]").unwrap().is_empty());
}

#[test]
fn test_update_status_request_serializes() {
    let body = serde_json::to_string(&UpdateStatusRequest {
        status: OrderStatus::Completed,
    })
    .unwrap();
    assert_eq!(body, r#"{"status":"completed"}"#);

    let body = serde_json::to_string(&UpdateStatusRequest {
        status: OrderStatus::Pending,
    })
    .unwrap();
    assert_eq!(body, r#"{"status":"pending"}"#);
}
