use super::*;
use crate::net::types::{Dietary, OrderMeta};

fn order(order_id: i64, table_number: u32, statuses: &[OrderStatus]) -> TableOrder {
    TableOrder {
        order: OrderMeta { customer_session: serde_json::json!(1), order_time: "12:00:00.000000".to_owned() },
        order_items: statuses
            .iter()
            .zip(1..)
            .map(|(&status, n)| OrderItem { pk: order_id * 10 + n, order: order_id, menu_item: n, status })
            .collect(),
        table_number,
        order_id,
    }
}

fn menu_item(pk: i64, name: &str, cents: i64, prep: i64) -> MenuItem {
    MenuItem {
        pk,
        name: name.to_owned(),
        description: String::new(),
        price: Price(cents),
        category: Some(1),
        dietary_requirements: Dietary::None,
        preparation_time: prep,
        restaurant: None,
        popular: false,
        image: None,
        position: 1,
    }
}

fn customer_item(menu_item: i64, status: OrderStatus, order_time: &str) -> CustomerOrderItem {
    CustomerOrderItem {
        order_item: OrderItem { pk: 0, order: 1, menu_item, status },
        order_time: order_time.to_owned(),
    }
}

// =============================================================
// Filters
// =============================================================

#[test]
fn completion_ignores_served_and_prepared() {
    assert!(is_completed(&order(1, 1, &[OrderStatus::Prepared, OrderStatus::Served])));
    assert!(!is_completed(&order(2, 1, &[OrderStatus::Served, OrderStatus::OrderSent])));
    assert!(is_completed(&order(3, 1, &[])));
}

#[test]
fn filter_orders_sorts_newest_first() {
    let orders = vec![
        order(1, 1, &[OrderStatus::OrderSent]),
        order(2, 2, &[OrderStatus::Prepared]),
        order(3, 3, &[OrderStatus::OrderSent, OrderStatus::Served]),
    ];
    let ids = |f| filter_orders(&orders, f).iter().map(|o| o.order_id).collect::<Vec<_>>();
    assert_eq!(ids(OrderFilter::All), [3, 2, 1]);
    assert_eq!(ids(OrderFilter::NotCompleted), [3, 1]);
    assert_eq!(ids(OrderFilter::Completed), [2]);
}

#[test]
fn filter_labels_match_board_tabs() {
    let labels: Vec<&str> = OrderFilter::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["ALL ORDERS", "NOT COMPLETED", "COMPLETED"]);
}

#[test]
fn set_orders_drops_missing_selection() {
    let mut state = OrdersState { selected: Some(2), ..OrdersState::default() };
    state.set_orders(vec![order(2, 4, &[OrderStatus::OrderSent])]);
    assert_eq!(state.selected_order().map(|o| o.table_number), Some(4));
    state.set_orders(vec![order(5, 1, &[])]);
    assert_eq!(state.selected, None);
}

// =============================================================
// Item actions
// =============================================================

#[test]
fn ready_to_serve_collects_prepared_items_with_tables() {
    let orders = vec![
        order(1, 7, &[OrderStatus::Prepared, OrderStatus::OrderSent]),
        order(2, 9, &[OrderStatus::Served, OrderStatus::Prepared]),
    ];
    let ready = ready_to_serve(&orders);
    assert_eq!(ready.len(), 2);
    assert_eq!(ready[0].table_number, 7);
    assert_eq!(ready[1].table_number, 9);
    assert!(ready.iter().all(|r| r.item.status == OrderStatus::Prepared));
}

#[test]
fn status_buttons_follow_kitchen_and_waiter_rules() {
    assert!(kitchen_can_change(OrderStatus::OrderSent));
    assert!(kitchen_can_change(OrderStatus::Prepared));
    assert!(!kitchen_can_change(OrderStatus::Served));
    assert!(waiter_can_serve(OrderStatus::Prepared));
    assert!(!waiter_can_serve(OrderStatus::OrderSent));
    assert!(!waiter_can_serve(OrderStatus::Served));
}

// =============================================================
// Times
// =============================================================

#[test]
fn parse_order_time_handles_fractional_seconds() {
    assert_eq!(parse_order_time("01:02:03"), Some(3723));
    assert_eq!(parse_order_time("23:59:59.999999"), Some(86399));
    assert_eq!(parse_order_time("24:00:00"), None);
    assert_eq!(parse_order_time("12:30"), None);
}

#[test]
fn minutes_since_clamps_future_times() {
    assert_eq!(minutes_since("12:00:00", 12 * 3600 + 150), 2);
    assert_eq!(minutes_since("12:05:00", 12 * 3600), 0);
    assert_eq!(minutes_since("garbage", 500), 0);
    assert_eq!(short_time("12:30:01.123456"), "12:30:01");
    assert_eq!(short_time("9:1"), "9:1");
}

// =============================================================
// Customer grouping
// =============================================================

#[test]
fn group_customer_items_counts_matching_rows() {
    let menu = vec![menu_item(1, "Laksa", 1690, 15), menu_item(2, "Cola", 400, 1)];
    let items = vec![
        customer_item(1, OrderStatus::OrderSent, "12:00:00"),
        customer_item(1, OrderStatus::OrderSent, "12:00:20"),
        customer_item(1, OrderStatus::Prepared, "12:00:00"),
        customer_item(2, OrderStatus::OrderSent, "12:00:00"),
        customer_item(99, OrderStatus::OrderSent, "12:00:00"),
    ];
    let lines = group_customer_items(&items, &menu, 12 * 3600 + 5 * 60 + 30);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].name, "Laksa");
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[0].minutes_ago, 5);
    assert_eq!(lines[0].subtotal(), Price(3380));
    assert_eq!(lines[0].estimated_minutes_left(), 10);
    assert_eq!(lines[1].status, OrderStatus::Prepared);
    assert_eq!(lines[2].estimated_minutes_left(), 0);
}

#[test]
fn group_customer_items_splits_by_age() {
    let menu = vec![menu_item(1, "Laksa", 1690, 15)];
    let items = vec![
        customer_item(1, OrderStatus::OrderSent, "12:00:00"),
        customer_item(1, OrderStatus::OrderSent, "12:03:00"),
    ];
    let lines = group_customer_items(&items, &menu, 12 * 3600 + 4 * 60);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].minutes_ago, 4);
    assert_eq!(lines[1].minutes_ago, 1);
}
