//! Restaurant tables, the focused table and the assistance queue.
//!
//! DESIGN
//! ======
//! The focused table is an `Option` rather than a sentinel number; losing
//! the table (deleted by another manager) clears the focus on the next poll.

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;

use crate::net::types::{Table, TableOrder, TablesResponse};

#[derive(Clone, Debug, Default)]
pub struct TablesState {
    pub tables: Vec<Table>,
    pub focused: Option<u32>,
    pub focused_orders: Vec<TableOrder>,
    /// Table numbers waiting for a waiter, ascending.
    pub assistance: Vec<u32>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TablesState {
    pub fn set_tables(&mut self, tables: Vec<Table>) {
        if let Some(n) = self.focused {
            if !tables.iter().any(|t| t.number == n) {
                self.clear_focus();
            }
        }
        self.tables = tables;
        self.loading = false;
    }

    pub fn focus(&mut self, number: u32) {
        if self.focused != Some(number) {
            self.focused_orders.clear();
        }
        self.focused = Some(number);
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
        self.focused_orders.clear();
    }

    pub fn set_assistance(&mut self, mut tables: Vec<u32>) {
        tables.sort_unstable();
        tables.dedup();
        self.assistance = tables;
    }

    pub fn needs_assistance(&self, number: u32) -> bool {
        self.assistance.binary_search(&number).is_ok()
    }

    pub fn occupied_count(&self) -> usize {
        self.tables.iter().filter(|t| t.occupied).count()
    }

    /// Suggested number for the "add table" field.
    pub fn next_table_number(&self) -> u32 {
        self.tables.iter().map(|t| t.number).max().map_or(1, |n| n.saturating_add(1))
    }
}

/// Numerically sorted tables from the backend's string-keyed map.
/// Keys that are not table numbers are dropped.
pub fn tables_from_response(resp: TablesResponse) -> Vec<Table> {
    let mut tables: Vec<Table> = resp
        .table_numbers
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, occupied)| key.trim().parse().ok().map(|number| Table { number, occupied }))
        .collect();
    tables.sort_by_key(|t| t.number);
    tables
}

/// Parse the table number typed by a manager or customer.
///
/// # Errors
///
/// Returns the message shown under the input.
pub fn parse_table_number(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("Please enter a valid table number."),
    }
}
