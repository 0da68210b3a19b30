use super::*;

#[test]
fn rename_trims_new_name() {
    assert_eq!(check_category_rename("  Drinks ", "Beverages"), Ok("Drinks".to_owned()));
}

#[test]
fn rename_rejects_empty_name() {
    assert_eq!(check_category_rename("   ", "Mains"), Err("Category name cannot be empty!"));
}

#[test]
fn rename_rejects_unchanged_name() {
    assert_eq!(
        check_category_rename("Mains ", "Mains"),
        Err("New category name is the same as the old one!")
    );
}
