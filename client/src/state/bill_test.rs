use super::*;
use crate::net::types::{Dietary, OrderItem, OrderStatus};

fn menu_item(pk: i64, name: &str, cents: i64) -> MenuItem {
    MenuItem {
        pk,
        name: name.to_owned(),
        description: String::new(),
        price: Price(cents),
        category: Some(1),
        dietary_requirements: Dietary::None,
        preparation_time: 5,
        restaurant: None,
        popular: false,
        image: None,
        position: 1,
    }
}

fn ordered(menu_item: i64) -> OrderItem {
    OrderItem { pk: 0, order: 1, menu_item, status: OrderStatus::Served }
}

#[test]
fn summarize_groups_by_dish_in_first_seen_order() {
    let menu = vec![menu_item(1, "Laksa", 1690), menu_item(2, "Cola", 400)];
    let bill = Bill {
        table_number: Some(4),
        order_list: vec![ordered(2), ordered(1), ordered(2), ordered(2)],
        bill_total: Price(2890),
    };
    let summary = summarize(&bill, &menu);
    assert_eq!(summary.table_number, Some(4));
    assert_eq!(summary.lines.len(), 2);
    assert_eq!(summary.lines[0].name, "Cola");
    assert_eq!(summary.lines[0].quantity, 3);
    assert_eq!(summary.lines[0].subtotal(), Price(1200));
    assert_eq!(summary.lines[1].quantity, 1);
    assert_eq!(summary.total, Price(2890));
}

#[test]
fn summarize_skips_unknown_dishes_but_keeps_server_total() {
    let bill = Bill { table_number: None, order_list: vec![ordered(42)], bill_total: Price(1500) };
    let summary = summarize(&bill, &[]);
    assert!(summary.lines.is_empty());
    assert_eq!(summary.total, Price(1500));
}
