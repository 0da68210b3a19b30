//! Order board state and the pure views derived from backend orders.
//!
//! SYSTEM CONTEXT
//! ==============
//! The manager and kitchen boards list whole orders; the wait-staff view
//! works item by item (ready to serve); customers see their own dishes
//! grouped. All of them are recomputed from the latest poll.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use crate::net::types::{CustomerOrderItem, MenuItem, OrderItem, OrderStatus, Price, TableOrder};

/// Order board tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderFilter {
    #[default]
    All,
    NotCompleted,
    Completed,
}

impl OrderFilter {
    pub const ALL: [OrderFilter; 3] = [OrderFilter::All, OrderFilter::NotCompleted, OrderFilter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            OrderFilter::All => "ALL ORDERS",
            OrderFilter::NotCompleted => "NOT COMPLETED",
            OrderFilter::Completed => "COMPLETED",
        }
    }

    fn accepts(self, order: &TableOrder) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::NotCompleted => !is_completed(order),
            OrderFilter::Completed => is_completed(order),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct OrdersState {
    pub orders: Vec<TableOrder>,
    pub filter: OrderFilter,
    /// `order_id` shown in the detail pane.
    pub selected: Option<i64>,
    pub loading: bool,
    pub error: Option<String>,
}

impl OrdersState {
    /// Store a fresh poll result. The selection is dropped if its order is gone.
    pub fn set_orders(&mut self, orders: Vec<TableOrder>) {
        if let Some(id) = self.selected {
            if !orders.iter().any(|o| o.order_id == id) {
                self.selected = None;
            }
        }
        self.orders = orders;
        self.loading = false;
        self.error = None;
    }

    pub fn visible(&self) -> Vec<TableOrder> {
        filter_orders(&self.orders, self.filter)
    }

    pub fn selected_order(&self) -> Option<&TableOrder> {
        let id = self.selected?;
        self.orders.iter().find(|o| o.order_id == id)
    }
}

/// An order is complete once nothing in it is still cooking.
pub fn is_completed(order: &TableOrder) -> bool {
    order.order_items.iter().all(|item| item.status != OrderStatus::OrderSent)
}

/// Orders passing `filter`, newest first.
pub fn filter_orders(orders: &[TableOrder], filter: OrderFilter) -> Vec<TableOrder> {
    let mut out: Vec<TableOrder> = orders.iter().filter(|o| filter.accepts(o)).cloned().collect();
    out.sort_by(|a, b| b.order_id.cmp(&a.order_id));
    out
}

/// A prepared dish waiting for a waiter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadyItem {
    pub table_number: u32,
    pub item: OrderItem,
}

pub fn ready_to_serve(orders: &[TableOrder]) -> Vec<ReadyItem> {
    orders
        .iter()
        .flat_map(|order| {
            order
                .order_items
                .iter()
                .filter(|item| item.status == OrderStatus::Prepared)
                .map(|item| ReadyItem { table_number: order.table_number, item: item.clone() })
        })
        .collect()
}

/// Kitchen "Mark Ready" / "Mark Cooking" are locked once served.
pub fn kitchen_can_change(status: OrderStatus) -> bool {
    status != OrderStatus::Served
}

pub fn waiter_can_serve(status: OrderStatus) -> bool {
    status == OrderStatus::Prepared
}

/// `HH:MM:SS[.ffffff]` to seconds since midnight.
pub fn parse_order_time(raw: &str) -> Option<u32> {
    let mut parts = raw.trim().splitn(3, ':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    let seconds = parts.next()?;
    let seconds: u32 = seconds.split('.').next()?.parse().ok()?;
    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }
    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Whole minutes between the order time and `now_secs`, both seconds since
/// midnight in the backend's time zone. Future times count as zero.
pub fn minutes_since(order_time: &str, now_secs: u32) -> u32 {
    parse_order_time(order_time).map_or(0, |then| now_secs.saturating_sub(then) / 60)
}

/// `HH:MM:SS` for display.
pub fn short_time(order_time: &str) -> &str {
    order_time.get(..8).unwrap_or(order_time)
}

/// One row of the customer's "your orders" list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerOrderLine {
    pub name: String,
    pub status: OrderStatus,
    pub minutes_ago: u32,
    pub quantity: u32,
    pub unit_price: Price,
    pub preparation_time: i64,
}

impl CustomerOrderLine {
    pub fn subtotal(&self) -> Price {
        self.unit_price * self.quantity
    }

    /// Minutes until the dish should be ready, never negative.
    pub fn estimated_minutes_left(&self) -> i64 {
        (self.preparation_time - i64::from(self.minutes_ago)).max(0)
    }
}

/// Group the customer's dishes by name, status and age in minutes.
///
/// Rows keep the order of their first dish; dishes whose menu item is no
/// longer on the menu are skipped.
pub fn group_customer_items(items: &[CustomerOrderItem], menu: &[MenuItem], now_secs: u32) -> Vec<CustomerOrderLine> {
    let mut lines: Vec<CustomerOrderLine> = Vec::new();
    for entry in items {
        let Some(menu_item) = menu.iter().find(|m| m.pk == entry.order_item.menu_item) else {
            continue;
        };
        let status = entry.order_item.status;
        let minutes_ago = minutes_since(&entry.order_time, now_secs);
        match lines
            .iter_mut()
            .find(|l| l.name == menu_item.name && l.status == status && l.minutes_ago == minutes_ago)
        {
            Some(line) => line.quantity += 1,
            None => lines.push(CustomerOrderLine {
                name: menu_item.name.clone(),
                status,
                minutes_ago,
                quantity: 1,
                unit_price: menu_item.price,
                preparation_time: menu_item.preparation_time,
            }),
        }
    }
    lines
}
