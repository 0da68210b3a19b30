//! Customer cart.
//!
//! DESIGN
//! ======
//! One line per menu item; adding the same dish again merges amounts. The
//! cart is persisted to `localStorage` by the menu page so a reload does not
//! lose an unsent order.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{MenuItem, OrderLine, Price};

pub const STORAGE_KEY: &str = "quenify_cart";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item: i64,
    pub name: String,
    pub unit_price: Price,
    pub amount: u32,
}

impl CartLine {
    pub fn for_item(item: &MenuItem, amount: u32) -> Self {
        Self { menu_item: item.pk, name: item.name.clone(), unit_price: item.price, amount }
    }

    pub fn subtotal(&self) -> Price {
        self.unit_price * self.amount
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// Merge into the existing line for the same dish, else append.
    pub fn add(&mut self, line: CartLine) {
        if line.amount == 0 {
            return;
        }
        match self.lines.iter_mut().find(|l| l.menu_item == line.menu_item) {
            Some(existing) => existing.amount = existing.amount.saturating_add(line.amount),
            None => self.lines.push(line),
        }
    }

    /// Replace a line's amount; zero removes it.
    pub fn set_amount(&mut self, menu_item: i64, amount: u32) {
        if amount == 0 {
            self.remove(menu_item);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item == menu_item) {
            line.amount = amount;
        }
    }

    pub fn remove(&mut self, menu_item: i64) {
        self.lines.retain(|l| l.menu_item != menu_item);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of dishes across all lines.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.amount).sum()
    }

    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn order_payload(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|l| OrderLine { menu_item: l.menu_item, quantity: l.amount })
            .collect()
    }
}
