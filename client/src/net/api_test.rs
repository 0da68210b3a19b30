use super::*;
use crate::net::types::{Dietary, MenuItemPosition, Price};

fn draft() -> MenuItemDraft {
    MenuItemDraft {
        name: "Laksa".to_owned(),
        description: "Spicy noodle soup".to_owned(),
        price: Price(1690),
        category: 2,
        dietary_requirements: Dietary::GlutenFree,
        preparation_time: 15,
        popular: true,
    }
}

// =============================================================
// Auth
// =============================================================

#[test]
fn auth_from_token_prefers_staff_token() {
    assert_eq!(Auth::from_token(Some("abc".to_owned())), Auth::Staff("abc".to_owned()));
    assert_eq!(Auth::from_token(None), Auth::Customer);
}

#[test]
fn token_header_uses_drf_scheme() {
    assert_eq!(token_header("abc123"), "Token abc123");
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn detail_endpoints_keep_trailing_slash() {
    assert_eq!(category_endpoint(4), "/api/categories/4/");
    assert_eq!(menu_item_endpoint(12), "/api/menuitems/12/");
    assert_eq!(order_item_endpoint(7), "/api/orderitems/7/");
}

#[test]
fn table_query_endpoints_embed_table_number() {
    assert_eq!(table_orders_endpoint(3), "/api/orders/?table_number=3");
    assert_eq!(staff_bill_endpoint(11), "/api/staffbill/?table_number=11");
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn login_payload_sends_email_as_username() {
    assert_eq!(
        login_payload("a@b.co", "pw"),
        serde_json::json!({ "username": "a@b.co", "password": "pw" })
    );
}

#[test]
fn register_payload_starts_with_no_tables() {
    let form = Registration {
        email: "m@r.co".to_owned(),
        password: "Secret1!".to_owned(),
        name: "Cafe".to_owned(),
        location: "Sydney".to_owned(),
    };
    let payload = register_payload(&form);
    assert_eq!(payload["table_numbers"], serde_json::json!({}));
    assert_eq!(payload["name"], "Cafe");
}

#[test]
fn staff_register_payload_uses_role_wire_name() {
    let payload = staff_register_payload("w@r.co", "Secret1!", StaffRole::Wait);
    assert_eq!(payload["user_role"], "Wait");
}

#[test]
fn customer_session_payload_names_restaurant() {
    assert_eq!(
        customer_session_payload(5, 2),
        serde_json::json!({ "table_number": 5, "restaurant": 2 })
    );
}

#[test]
fn place_order_payload_wraps_lines() {
    let lines = [OrderLine { menu_item: 3, quantity: 2 }];
    assert_eq!(
        place_order_payload(&lines),
        serde_json::json!({ "order_items": [{ "menu_item": 3, "quantity": 2 }] })
    );
}

#[test]
fn table_update_payload_carries_bulk_flag() {
    assert_eq!(table_update_payload(4, false), serde_json::json!({ "num": 4, "list": false }));
    assert_eq!(table_update_payload(10, true), serde_json::json!({ "num": 10, "list": true }));
}

#[test]
fn status_payload_uses_wire_status() {
    assert_eq!(status_payload(OrderStatus::OrderSent), serde_json::json!({ "status": "ORDER SENT" }));
    assert_eq!(table_number_payload(8), serde_json::json!({ "table_number": 8 }));
}

#[test]
fn category_positions_payload_wraps_categories() {
    let positions = [CategoryPosition { category_id: 9, new_position: 1 }];
    assert_eq!(
        category_positions_payload(&positions),
        serde_json::json!({ "categories": [{ "categoryId": 9, "newPosition": 1 }] })
    );
    let items = MenuItemPositions {
        category_id: 9,
        menu_items: vec![MenuItemPosition { menu_item_id: 1, new_position: 2 }],
    };
    assert_eq!(serde_json::to_value(&items).unwrap()["menuItems"][0]["newPosition"], 2);
}

#[test]
fn menu_item_form_fields_encode_backend_values() {
    let fields = menu_item_form_fields(&draft());
    assert!(fields.contains(&("price", "16.90".to_owned())));
    assert!(fields.contains(&("dietary_requirements", "GF".to_owned())));
    assert!(fields.contains(&("popular", "true".to_owned())));
    assert!(fields.contains(&("category", "2".to_owned())));
}

#[test]
fn fill_form_stops_at_first_rejected_field() {
    let mut appended = Vec::new();
    let result = fill_form(&draft(), |key, _| {
        if key == "price" {
            return Err("append refused");
        }
        appended.push(key.to_owned());
        Ok(())
    });
    assert!(matches!(result, Err(ApiError::Network(msg)) if msg.contains("price")));
    assert_eq!(appended, vec!["name".to_owned(), "description".to_owned()]);
}

#[test]
fn fill_form_appends_every_field() {
    let mut count = 0;
    let result = fill_form(&draft(), |_, _| {
        count += 1;
        Ok::<(), ()>(())
    });
    assert_eq!(result, Ok(()));
    assert_eq!(count, menu_item_form_fields(&draft()).len());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn check_draft_accepts_valid_item() {
    assert_eq!(check_draft(&draft()), Ok(()));
}

#[test]
fn check_draft_rejects_bad_fields() {
    let mut d = draft();
    d.price = Price(0);
    assert!(matches!(check_draft(&d), Err(ApiError::Invalid(_))));

    let mut d = draft();
    d.preparation_time = 0;
    assert!(matches!(check_draft(&d), Err(ApiError::Invalid(_))));

    let mut d = draft();
    d.category = -1;
    assert!(matches!(check_draft(&d), Err(ApiError::Invalid(_))));

    let mut d = draft();
    d.name = "   ".to_owned();
    assert!(matches!(check_draft(&d), Err(ApiError::Invalid(_))));
}

#[test]
fn check_id_rejects_negative_ids() {
    assert_eq!(check_id(0, "category"), Ok(()));
    assert_eq!(
        check_id(-3, "menu item"),
        Err(ApiError::Invalid("Expecting a valid menu item id.".to_owned()))
    );
}

// =============================================================
// Assistance
// =============================================================

#[test]
fn assistance_status_distinguishes_new_calls() {
    assert_eq!(AssistanceRequest::from_status(201), AssistanceRequest::Sent);
    assert_eq!(AssistanceRequest::from_status(200), AssistanceRequest::AlreadyPending);
    assert!(AssistanceRequest::AlreadyPending.message().contains("already"));
}
