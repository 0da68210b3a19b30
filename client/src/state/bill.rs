//! Bill summary shown to customers and to staff handling a table.

#[cfg(test)]
#[path = "bill_test.rs"]
mod bill_test;

use crate::net::types::{Bill, MenuItem, Price};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillLine {
    pub menu_item: i64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
}

impl BillLine {
    pub fn subtotal(&self) -> Price {
        self.unit_price * self.quantity
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillSummary {
    pub table_number: Option<u32>,
    pub lines: Vec<BillLine>,
    /// Server-computed total; not re-derived from `lines`.
    pub total: Price,
}

/// Collapse the bill's order items into one line per dish.
///
/// Dishes no longer on the menu are left out of the lines but still count
/// toward the server total.
pub fn summarize(bill: &Bill, menu: &[MenuItem]) -> BillSummary {
    let mut lines: Vec<BillLine> = Vec::new();
    for entry in &bill.order_list {
        let Some(item) = menu.iter().find(|m| m.pk == entry.menu_item) else {
            continue;
        };
        match lines.iter_mut().find(|l| l.menu_item == item.pk) {
            Some(line) => line.quantity += 1,
            None => lines.push(BillLine { menu_item: item.pk, name: item.name.clone(), quantity: 1, unit_price: item.price }),
        }
    }
    BillSummary { table_number: bill.table_number, lines, total: bill.bill_total }
}
