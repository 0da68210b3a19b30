use super::*;
use crate::net::types::{Dietary, Price};

fn category(pk: i64, name: &str, position: i64) -> Category {
    Category { pk, name: name.to_owned(), restaurant: Some(1), num_menu_items: 0, position }
}

fn item(pk: i64, name: &str, category: Option<i64>, position: i64) -> MenuItem {
    MenuItem {
        pk,
        name: name.to_owned(),
        description: format!("{name} description"),
        price: Price(1000),
        category,
        dietary_requirements: Dietary::None,
        preparation_time: 10,
        restaurant: Some(1),
        popular: false,
        image: None,
        position,
    }
}

// =============================================================
// build_sections
// =============================================================

#[test]
fn sections_follow_category_then_item_position() {
    let categories = vec![category(1, "Mains", 2), category(2, "Starters", 1)];
    let items = vec![
        item(10, "Steak", Some(1), 2),
        item(11, "Pasta", Some(1), 1),
        item(12, "Bread", Some(2), 1),
    ];
    let sections = build_sections(&categories, &items);
    assert_eq!(sections[0].category.name, "Starters");
    assert_eq!(sections[1].category.name, "Mains");
    let mains: Vec<&str> = sections[1].items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(mains, ["Pasta", "Steak"]);
}

#[test]
fn sections_skip_uncategorized_items_and_keep_empty_categories() {
    let categories = vec![category(1, "Drinks", 1), category(2, "Desserts", 2)];
    let items = vec![item(10, "Cola", Some(1), 1), item(11, "Orphan", None, 1)];
    let sections = build_sections(&categories, &items);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].items.len(), 1);
    assert!(sections[1].items.is_empty());
}

#[test]
fn equal_positions_fall_back_to_pk() {
    let categories = vec![category(5, "B", 0), category(3, "A", 0)];
    let sections = build_sections(&categories, &[]);
    assert_eq!(sections[0].category.pk, 3);
}

// =============================================================
// specials / search / lookup
// =============================================================

#[test]
fn specials_need_popular_flag_and_category() {
    let mut popular = item(1, "Laksa", Some(1), 1);
    popular.popular = true;
    let mut orphan = item(2, "Ghost", None, 1);
    orphan.popular = true;
    let plain = item(3, "Rice", Some(1), 2);
    let specials = specials(&[popular, orphan, plain]);
    assert_eq!(specials.len(), 1);
    assert_eq!(specials[0].name, "Laksa");
}

#[test]
fn search_matches_name_or_description_case_insensitively() {
    let categories = vec![category(1, "Mains", 1), category(2, "Drinks", 2)];
    let mut soup = item(10, "Laksa", Some(1), 1);
    soup.description = "Spicy coconut soup".to_owned();
    let items = vec![soup, item(11, "Steak", Some(1), 2), item(12, "Cola", Some(2), 1)];
    let sections = build_sections(&categories, &items);

    let hits = search(&sections, "COCONUT");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].items[0].name, "Laksa");

    assert!(search(&sections, "nothing like this").is_empty());
    assert_eq!(search(&sections, "  ").len(), 2);
}

#[test]
fn state_helpers_look_up_names_and_bump_refresh() {
    let mut state = MenuState::default();
    state.set_loaded(vec![category(1, "Mains", 1)], vec![item(10, "Steak", Some(1), 1)]);
    assert_eq!(state.item_name(10), Some("Steak"));
    assert_eq!(state.item_name(99), None);
    state.refresh();
    state.refresh();
    assert_eq!(state.refresh_seq, 2);
    state.query = "steak".to_owned();
    assert_eq!(state.visible_sections().len(), 1);
    assert_eq!(section_anchor(7), "category-7");
}
