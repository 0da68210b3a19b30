//! Menu state: categories, items and the derived per-category sections.
//!
//! DESIGN
//! ======
//! Raw category and item lists are stored as fetched; sections are derived
//! on demand so a re-fetch never leaves stale groupings behind. Bumping
//! `refresh_seq` asks the menu view to fetch again.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::net::types::{Category, MenuItem};

/// A category with its items in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuSection {
    pub category: Category,
    pub items: Vec<MenuItem>,
}

#[derive(Clone, Debug, Default)]
pub struct MenuState {
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
    pub loading: bool,
    pub error: Option<String>,
    /// Incremented to request a re-fetch.
    pub refresh_seq: u64,
    /// Customer search box contents.
    pub query: String,
}

impl MenuState {
    pub fn set_loaded(&mut self, categories: Vec<Category>, items: Vec<MenuItem>) {
        self.categories = categories;
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn refresh(&mut self) {
        self.refresh_seq = self.refresh_seq.wrapping_add(1);
    }

    pub fn sections(&self) -> Vec<MenuSection> {
        build_sections(&self.categories, &self.items)
    }

    /// Sections narrowed by the current search query.
    pub fn visible_sections(&self) -> Vec<MenuSection> {
        search(&self.sections(), &self.query)
    }

    pub fn item(&self, pk: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.pk == pk)
    }

    pub fn item_name(&self, pk: i64) -> Option<&str> {
        item_name(&self.items, pk)
    }
}

/// Group items under their categories.
///
/// Categories are ordered by `position` then pk; items by `position` then
/// pk. Items without a category, or whose category is missing, are left out.
pub fn build_sections(categories: &[Category], items: &[MenuItem]) -> Vec<MenuSection> {
    let mut categories: Vec<&Category> = categories.iter().collect();
    categories.sort_by_key(|c| (c.position, c.pk));
    categories
        .into_iter()
        .map(|category| {
            let mut section_items: Vec<MenuItem> = items
                .iter()
                .filter(|item| item.category == Some(category.pk))
                .cloned()
                .collect();
            section_items.sort_by_key(|item| (item.position, item.pk));
            MenuSection { category: category.clone(), items: section_items }
        })
        .collect()
}

/// Popular items that sit in a category, shown in the specials strip.
pub fn specials(items: &[MenuItem]) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| item.popular && item.category.is_some())
        .cloned()
        .collect()
}

/// Case-insensitive filter on item name and description.
///
/// A blank query returns every section unchanged; otherwise sections with no
/// matching items are dropped.
pub fn search(sections: &[MenuSection], query: &str) -> Vec<MenuSection> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return sections.to_vec();
    }
    sections
        .iter()
        .filter_map(|section| {
            let items: Vec<MenuItem> = section
                .items
                .iter()
                .filter(|item| {
                    item.name.to_lowercase().contains(&needle) || item.description.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
            (!items.is_empty()).then(|| MenuSection { category: section.category.clone(), items })
        })
        .collect()
}

pub fn item_name(items: &[MenuItem], pk: i64) -> Option<&str> {
    items.iter().find(|item| item.pk == pk).map(|item| item.name.as_str())
}

/// DOM id for a category heading, used by the sidebar to scroll to it.
pub fn section_anchor(category_pk: i64) -> String {
    format!("category-{category_pk}")
}
