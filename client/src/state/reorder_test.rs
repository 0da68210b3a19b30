use super::*;
use crate::net::types::{Category, Dietary, MenuItem, Price};

fn section(pk: i64, item_pks: &[i64]) -> MenuSection {
    MenuSection {
        category: Category { pk, name: format!("cat {pk}"), restaurant: None, num_menu_items: 0, position: 0 },
        items: item_pks
            .iter()
            .map(|&item_pk| MenuItem {
                pk: item_pk,
                name: format!("item {item_pk}"),
                description: String::new(),
                price: Price(100),
                category: Some(pk),
                dietary_requirements: Dietary::None,
                preparation_time: 5,
                restaurant: None,
                popular: false,
                image: None,
                position: 0,
            })
            .collect(),
    }
}

fn loaded() -> ReorderState {
    let mut state = ReorderState::default();
    state.load(vec![section(1, &[10, 11, 12]), section(2, &[20, 21]), section(3, &[])]);
    state
}

fn category_order(state: &ReorderState) -> Vec<i64> {
    state.sections.iter().map(|s| s.category.pk).collect()
}

fn item_order(state: &ReorderState, category: usize) -> Vec<i64> {
    state.sections[category].items.iter().map(|i| i.pk).collect()
}

// =============================================================
// Category drags
// =============================================================

#[test]
fn category_moves_on_drag_end() {
    let mut state = loaded();
    state.start_category_drag(0);
    state.enter_category(1);
    state.enter_category(2);
    assert_eq!(category_order(&state), [1, 2, 3]);
    state.end_category_drag();
    assert_eq!(category_order(&state), [2, 3, 1]);
    assert!(state.categories_dirty);
    assert!(!state.items_dirty);
    assert_eq!(state.dragged_category(), None);
}

#[test]
fn category_drag_onto_itself_is_noop() {
    let mut state = loaded();
    state.start_category_drag(1);
    state.enter_category(1);
    state.end_category_drag();
    assert_eq!(category_order(&state), [1, 2, 3]);
    assert!(!state.categories_dirty);
}

#[test]
fn category_drag_without_enter_or_out_of_range_is_noop() {
    let mut state = loaded();
    state.start_category_drag(0);
    state.end_category_drag();
    state.start_category_drag(0);
    state.enter_category(9);
    state.end_category_drag();
    assert_eq!(category_order(&state), [1, 2, 3]);
    assert!(!state.is_dirty());
}

#[test]
fn enter_category_without_drag_is_ignored() {
    let mut state = loaded();
    state.enter_category(2);
    state.end_category_drag();
    assert_eq!(category_order(&state), [1, 2, 3]);
}

// =============================================================
// Item drags
// =============================================================

#[test]
fn item_moves_live_and_source_follows() {
    let mut state = loaded();
    state.start_item_drag(0, 0);
    state.enter_item(0, 1);
    assert_eq!(item_order(&state, 0), [11, 10, 12]);
    state.enter_item(0, 2);
    assert_eq!(item_order(&state, 0), [11, 12, 10]);
    assert_eq!(state.dragged_item(), Some((0, 2)));
    state.end_item_drag();
    assert!(state.items_dirty);
    assert_eq!(state.dragged_item(), None);
}

#[test]
fn item_cannot_cross_categories() {
    let mut state = loaded();
    state.start_item_drag(0, 0);
    state.enter_item(1, 0);
    state.end_item_drag();
    assert_eq!(item_order(&state, 0), [10, 11, 12]);
    assert_eq!(item_order(&state, 1), [20, 21]);
    assert!(!state.items_dirty);
}

#[test]
fn item_drag_without_move_stays_clean() {
    let mut state = loaded();
    state.start_item_drag(1, 1);
    state.enter_item(1, 1);
    state.end_item_drag();
    assert!(!state.items_dirty);
}

#[test]
fn item_enter_out_of_range_is_ignored() {
    let mut state = loaded();
    state.start_item_drag(1, 0);
    state.enter_item(1, 5);
    assert_eq!(item_order(&state, 1), [20, 21]);
}

// =============================================================
// Positions
// =============================================================

#[test]
fn positions_are_one_based_in_current_order() {
    let mut state = loaded();
    state.start_category_drag(2);
    state.enter_category(0);
    state.end_category_drag();
    state.start_item_drag(1, 1);
    state.enter_item(1, 0);
    state.end_item_drag();

    let categories = state.category_positions();
    assert_eq!(
        categories,
        vec![
            CategoryPosition { category_id: 3, new_position: 1 },
            CategoryPosition { category_id: 1, new_position: 2 },
            CategoryPosition { category_id: 2, new_position: 3 },
        ]
    );

    let items = state.item_positions();
    assert_eq!(items.len(), 3);
    assert!(items[0].menu_items.is_empty());
    assert_eq!(items[1].category_id, 1);
    assert_eq!(items[1].menu_items[0], MenuItemPosition { menu_item_id: 11, new_position: 1 });
    assert_eq!(items[1].menu_items[1], MenuItemPosition { menu_item_id: 10, new_position: 2 });
}

#[test]
fn load_resets_flags_and_drags() {
    let mut state = loaded();
    state.start_category_drag(0);
    state.enter_category(1);
    state.end_category_drag();
    state.start_item_drag(0, 0);
    state.error = Some("boom".to_owned());
    state.load(vec![section(4, &[40])]);
    assert!(!state.is_dirty());
    assert_eq!(state.dragged_item(), None);
    assert_eq!(state.error, None);
    assert_eq!(category_order(&state), [4]);
}

#[test]
fn indexes_follow_moves() {
    let mut state = loaded();
    assert_eq!(state.category_index(3), Some(2));
    assert_eq!(state.item_index(11), Some((0, 1)));

    state.start_category_drag(2);
    state.enter_category(0);
    state.end_category_drag();
    assert_eq!(state.category_index(3), Some(0));
    assert_eq!(state.item_index(11), Some((1, 1)));
    assert_eq!(state.category_index(99), None);
    assert_eq!(state.item_index(99), None);
}

// =============================================================
// Save
// =============================================================

fn dirty_both() -> ReorderState {
    let mut state = loaded();
    state.start_category_drag(0);
    state.enter_category(1);
    state.end_category_drag();
    state.start_item_drag(1, 0);
    state.enter_item(1, 1);
    state.end_item_drag();
    assert!(state.categories_dirty && state.items_dirty);
    state
}

#[test]
fn failed_item_save_keeps_order_and_item_flag() {
    use std::cell::RefCell;

    let snapshot = dirty_both();
    let live = RefCell::new(snapshot.clone());
    let item_calls = RefCell::new(Vec::new());

    let result = futures::executor::block_on(save_with(
        &snapshot,
        |_| std::future::ready(Ok(())),
        |positions: MenuItemPositions| {
            item_calls.borrow_mut().push(positions.category_id);
            let outcome = if item_calls.borrow().len() == 2 { Err("rejected") } else { Ok(()) };
            std::future::ready(outcome)
        },
        |part| live.borrow_mut().mark_saved(part),
    ));

    assert_eq!(result, Err("rejected"));
    assert_eq!(item_calls.borrow().len(), 2);
    let live = live.into_inner();
    assert!(!live.categories_dirty);
    assert!(live.items_dirty);
    assert_eq!(live.sections, snapshot.sections);
}

#[test]
fn failed_category_save_sends_no_items() {
    let snapshot = dirty_both();
    let mut saved = Vec::new();
    let mut item_calls = 0;

    let result = futures::executor::block_on(save_with(
        &snapshot,
        |_| std::future::ready(Err("down")),
        |_| {
            item_calls += 1;
            std::future::ready(Ok(()))
        },
        |part| saved.push(part),
    ));

    assert_eq!(result, Err("down"));
    assert_eq!(item_calls, 0);
    assert!(saved.is_empty());
}

#[test]
fn save_sends_only_dirty_parts() {
    let mut snapshot = loaded();
    snapshot.items_dirty = true;
    let mut categories_sent = false;
    let mut saved = Vec::new();

    let result: Result<(), ()> = futures::executor::block_on(save_with(
        &snapshot,
        |_| {
            categories_sent = true;
            std::future::ready(Ok(()))
        },
        |_| std::future::ready(Ok(())),
        |part| saved.push(part),
    ));

    assert_eq!(result, Ok(()));
    assert!(!categories_sent);
    assert_eq!(saved, vec![SavedPart::Items]);
}
