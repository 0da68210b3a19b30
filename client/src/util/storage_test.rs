#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_string_is_none_without_browser() {
    assert_eq!(load_string("token"), None);
}

#[test]
fn load_json_is_none_without_browser() {
    assert_eq!(load_json::<Vec<u32>>("cart"), None);
}

#[test]
fn writes_are_noops_without_browser() {
    save_string("token", "abc");
    save_json("cart", &vec![1, 2, 3]);
    remove("token");
    assert_eq!(load_string("token"), None);
}
