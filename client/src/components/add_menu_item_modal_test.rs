use super::*;

fn category(pk: i64, name: &str) -> Category {
    Category { pk, name: name.to_owned(), restaurant: Some(1), num_menu_items: 0, position: pk }
}

#[test]
fn new_category_name_is_trimmed() {
    assert_eq!(check_new_category("  Desserts ", &[]), Ok("Desserts".to_owned()));
}

#[test]
fn new_category_rejects_blank() {
    assert_eq!(check_new_category(" ", &[]), Err("Category name cannot be empty!"));
}

#[test]
fn new_category_rejects_existing_name_ignoring_case() {
    let existing = [category(1, "Mains"), category(2, "Drinks")];
    assert_eq!(
        check_new_category("drinks", &existing),
        Err("A category with that name already exists.")
    );
    assert!(check_new_category("Sides", &existing).is_ok());
}
