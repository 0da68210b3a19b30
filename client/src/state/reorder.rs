//! Working copy of the menu while a manager drags categories and items.
//!
//! DESIGN
//! ======
//! Drags mutate only this copy; nothing reaches the backend until save.
//! Categories move once, when the drag ends over another category. Items
//! move live while the pointer enters other cells of the same category, and
//! the drag source follows the moved item so consecutive enters keep
//! working. Dirty flags record which position lists need to be sent and are
//! cleared only once the backend accepts them.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

use std::future::Future;

use crate::net::types::{CategoryPosition, MenuItemPosition, MenuItemPositions};
use crate::state::menu::MenuSection;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReorderState {
    pub sections: Vec<MenuSection>,
    category_drag: Option<usize>,
    category_over: Option<usize>,
    /// (category index, item index) of the dragged item.
    item_drag: Option<(usize, usize)>,
    item_moved: bool,
    pub categories_dirty: bool,
    pub items_dirty: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl ReorderState {
    /// Replace the working copy and forget any drag or pending change.
    pub fn load(&mut self, sections: Vec<MenuSection>) {
        *self = Self { sections, ..Self::default() };
    }

    pub fn start_category_drag(&mut self, index: usize) {
        self.category_drag = Some(index);
        self.category_over = None;
    }

    pub fn enter_category(&mut self, index: usize) {
        if self.category_drag.is_some() {
            self.category_over = Some(index);
        }
    }

    /// Move the dragged category to the last entered slot.
    pub fn end_category_drag(&mut self) {
        let from = self.category_drag.take();
        let to = self.category_over.take();
        let (Some(from), Some(to)) = (from, to) else {
            return;
        };
        let len = self.sections.len();
        if from == to || from >= len || to >= len {
            return;
        }
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        self.categories_dirty = true;
    }

    pub fn start_item_drag(&mut self, category: usize, index: usize) {
        self.item_drag = Some((category, index));
        self.item_moved = false;
    }

    /// Live reorder within the dragged item's category.
    pub fn enter_item(&mut self, category: usize, index: usize) {
        let Some((drag_category, drag_index)) = self.item_drag else {
            return;
        };
        if category != drag_category || index == drag_index {
            return;
        }
        let Some(items) = self.sections.get_mut(category).map(|s| &mut s.items) else {
            return;
        };
        if drag_index >= items.len() || index >= items.len() {
            return;
        }
        let item = items.remove(drag_index);
        items.insert(index, item);
        self.item_drag = Some((category, index));
        self.item_moved = true;
    }

    pub fn end_item_drag(&mut self) {
        if self.item_drag.take().is_some() && self.item_moved {
            self.items_dirty = true;
        }
        self.item_moved = false;
    }

    /// Index of the item currently being dragged, for highlighting.
    pub fn dragged_item(&self) -> Option<(usize, usize)> {
        self.item_drag
    }

    pub fn dragged_category(&self) -> Option<usize> {
        self.category_drag
    }

    /// Current index of a category. Rows look this up at event time since
    /// keyed rows outlive their position.
    pub fn category_index(&self, category_pk: i64) -> Option<usize> {
        self.sections.iter().position(|s| s.category.pk == category_pk)
    }

    /// Current (category index, item index) of a menu item.
    pub fn item_index(&self, item_pk: i64) -> Option<(usize, usize)> {
        self.sections
            .iter()
            .enumerate()
            .find_map(|(ci, s)| s.items.iter().position(|i| i.pk == item_pk).map(|ii| (ci, ii)))
    }

    /// Clear the dirty flag of a part the backend accepted.
    pub fn mark_saved(&mut self, part: SavedPart) {
        match part {
            SavedPart::Categories => self.categories_dirty = false,
            SavedPart::Items => self.items_dirty = false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.categories_dirty || self.items_dirty
    }

    /// 1-based category positions in the current order.
    pub fn category_positions(&self) -> Vec<CategoryPosition> {
        self.sections
            .iter()
            .zip(1..)
            .map(|(section, new_position)| CategoryPosition { category_id: section.category.pk, new_position })
            .collect()
    }

    /// 1-based item positions, one payload per category.
    pub fn item_positions(&self) -> Vec<MenuItemPositions> {
        self.sections
            .iter()
            .map(|section| MenuItemPositions {
                category_id: section.category.pk,
                menu_items: section
                    .items
                    .iter()
                    .zip(1..)
                    .map(|(item, new_position)| MenuItemPosition { menu_item_id: item.pk, new_position })
                    .collect(),
            })
            .collect()
    }
}

/// Position list accepted by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SavedPart {
    Categories,
    Items,
}

/// Send category positions, then one item-position request per category.
///
/// `saved` runs as soon as each part is accepted, so a failure leaves the
/// local order alone and keeps the flag of whatever was not sent. Item
/// payloads stop at the first rejected category.
///
/// # Errors
///
/// The first error returned by either sender.
pub async fn save_with<E, C, CFut, I, IFut>(
    snapshot: &ReorderState,
    send_categories: C,
    mut send_items: I,
    mut saved: impl FnMut(SavedPart),
) -> Result<(), E>
where
    C: FnOnce(Vec<CategoryPosition>) -> CFut,
    CFut: Future<Output = Result<(), E>>,
    I: FnMut(MenuItemPositions) -> IFut,
    IFut: Future<Output = Result<(), E>>,
{
    if snapshot.categories_dirty {
        send_categories(snapshot.category_positions()).await?;
        saved(SavedPart::Categories);
    }
    if snapshot.items_dirty {
        for positions in snapshot.item_positions() {
            send_items(positions).await?;
        }
        saved(SavedPart::Items);
    }
    Ok(())
}
