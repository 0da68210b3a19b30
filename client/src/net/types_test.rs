use super::*;

// =============================================================
// Price
// =============================================================

#[test]
fn price_parses_whole_and_fractional_amounts() {
    assert_eq!(Price::parse("12"), Some(Price(1200)));
    assert_eq!(Price::parse("12.5"), Some(Price(1250)));
    assert_eq!(Price::parse("12.05"), Some(Price(1205)));
    assert_eq!(Price::parse(" 0.99 "), Some(Price(99)));
}

#[test]
fn price_rejects_malformed_input() {
    for raw in ["", ".5", "12.", "12.345", "-3", "1,50", "abc", "1.x"] {
        assert_eq!(Price::parse(raw), None, "expected rejection for {raw:?}");
    }
}

#[test]
fn price_display_uses_dollars_and_two_decimals() {
    assert_eq!(Price(1250).to_string(), "$12.50");
    assert_eq!(Price(7).to_string(), "$0.07");
    assert_eq!(Price(-150).to_decimal_string(), "-1.50");
}

#[test]
fn price_deserializes_from_string_or_number() {
    let from_str: Price = serde_json::from_value(serde_json::json!("8.40")).unwrap();
    let from_num: Price = serde_json::from_value(serde_json::json!(8.4)).unwrap();
    assert_eq!(from_str, Price(840));
    assert_eq!(from_num, Price(840));
}

#[test]
fn price_serializes_as_decimal_string() {
    assert_eq!(serde_json::to_value(Price(1999)).unwrap(), serde_json::json!("19.99"));
}

#[test]
fn price_arithmetic_sums_line_totals() {
    let total: Price = [Price(250) * 2, Price(1000) * 1].into_iter().sum();
    assert_eq!(total, Price(1500));
}

// =============================================================
// Menu DTOs
// =============================================================

#[test]
fn menu_item_deserializes_backend_shape() {
    let item: MenuItem = serde_json::from_value(serde_json::json!({
        "pk": 4,
        "name": "Laksa",
        "description": "Spicy noodle soup",
        "price": "16.90",
        "category": 2,
        "dietary_requirements": "GF",
        "preparation_time": 15,
        "restaurant": 1,
        "popular": true,
        "image": "http://localhost:8000/media/menu_images/laksa.png",
        "position": 3
    }))
    .unwrap();
    assert_eq!(item.price, Price(1690));
    assert_eq!(item.category, Some(2));
    assert_eq!(item.dietary_requirements, Dietary::GlutenFree);
    assert!(item.popular);
    assert_eq!(item.position, 3);
}

#[test]
fn menu_item_tolerates_missing_optional_fields() {
    let item: MenuItem = serde_json::from_value(serde_json::json!({
        "pk": 1,
        "name": "Water",
        "price": "0.00",
        "category": null,
        "dietary_requirements": "",
        "image": null
    }))
    .unwrap();
    assert_eq!(item.category, None);
    assert_eq!(item.dietary_requirements, Dietary::None);
    assert_eq!(item.image, None);
    assert!(!item.popular);
}

#[test]
fn dietary_codes_map_both_ways() {
    for d in Dietary::ALL {
        assert_eq!(Dietary::from_code(d.code()), Some(d));
    }
    assert_eq!(Dietary::from_code("XX"), None);
}

// =============================================================
// Orders
// =============================================================

#[test]
fn order_status_uses_backend_wire_strings() {
    let status: OrderStatus = serde_json::from_value(serde_json::json!("ORDER SENT")).unwrap();
    assert_eq!(status, OrderStatus::OrderSent);
    assert_eq!(serde_json::to_value(OrderStatus::Prepared).unwrap(), serde_json::json!("PREPARED"));
    assert_eq!(OrderStatus::Served.wire(), "SERVED");
}

#[test]
fn table_order_accepts_string_table_number() {
    let order: TableOrder = serde_json::from_value(serde_json::json!({
        "order": { "customer_session": 9, "order_time": "12:30:01.123456" },
        "order_items": [{ "pk": 1, "order": 5, "menu_item": 3, "status": "PREPARED" }],
        "table_number": "7",
        "order_id": 5
    }))
    .unwrap();
    assert_eq!(order.table_number, 7);
    assert_eq!(order.order_items[0].status, OrderStatus::Prepared);
}

#[test]
fn bill_deserializes_numeric_total() {
    let bill: Bill = serde_json::from_value(serde_json::json!({
        "table_number": 3,
        "order_list": [],
        "bill_total": 42.5
    }))
    .unwrap();
    assert_eq!(bill.table_number, Some(3));
    assert_eq!(bill.bill_total, Price(4250));
}

// =============================================================
// Accounts
// =============================================================

#[test]
fn login_response_parses_role() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "abc",
        "restaurantId": 2,
        "name": "Cafe",
        "location": "Sydney",
        "role": "Kitchen"
    }))
    .unwrap();
    assert_eq!(resp.role, StaffRole::Kitchen);
    assert_eq!(resp.restaurant_id, Some(2));
}

#[test]
fn staff_role_routes_to_role_home() {
    assert_eq!(StaffRole::Manager.home_route(), "/manager");
    assert_eq!(StaffRole::Wait.home_route(), "/waitstaff");
    assert_eq!(StaffRole::Kitchen.home_route(), "/kitchenstaff");
    assert_eq!(StaffRole::from_wire("Wait"), Some(StaffRole::Wait));
    assert_eq!(StaffRole::from_wire("wait"), None);
}

#[test]
fn staff_list_unwraps_response_key() {
    let list: StaffListResponse = serde_json::from_value(serde_json::json!({
        "Response": [{ "pk": 3, "username": "chef@example.com", "role": "Kitchen" }]
    }))
    .unwrap();
    assert_eq!(list.staff.len(), 1);
    assert_eq!(list.staff[0].role, StaffRole::Kitchen);
}

// =============================================================
// Positions
// =============================================================

#[test]
fn position_payloads_use_camel_case_keys() {
    let payload = MenuItemPositions {
        category_id: 2,
        menu_items: vec![MenuItemPosition { menu_item_id: 9, new_position: 1 }],
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "categoryId": 2, "menuItems": [{ "menuItemId": 9, "newPosition": 1 }] })
    );
}
