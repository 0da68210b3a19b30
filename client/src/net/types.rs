//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON shapes. Fields the backend sends
//! inconsistently (prices as strings or numbers, table numbers as strings or
//! integers) are normalized on deserialize so the rest of the client works
//! with one representation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A menu category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub pk: i64,
    pub name: String,
    #[serde(default)]
    pub restaurant: Option<i64>,
    #[serde(default)]
    pub num_menu_items: i64,
    /// 1-based display order within the restaurant.
    #[serde(default)]
    pub position: i64,
}

/// A dish on the menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub pk: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    /// Owning category; uncategorized items are hidden from the menu.
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub dietary_requirements: Dietary,
    /// Preparation time in minutes.
    #[serde(default)]
    pub preparation_time: i64,
    #[serde(default)]
    pub restaurant: Option<i64>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub image: Option<String>,
    /// 1-based display order within the category.
    #[serde(default)]
    pub position: i64,
}

/// Dietary tag attached to a menu item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dietary {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "DF")]
    DairyFree,
    #[serde(rename = "GF")]
    GlutenFree,
    #[serde(rename = "V")]
    Vegetarian,
    #[serde(rename = "VG")]
    Vegan,
}

impl Dietary {
    pub const ALL: [Dietary; 5] = [
        Dietary::None,
        Dietary::DairyFree,
        Dietary::GlutenFree,
        Dietary::Vegetarian,
        Dietary::Vegan,
    ];

    /// Wire code (`""`, `"DF"`, ...).
    pub fn code(self) -> &'static str {
        match self {
            Dietary::None => "",
            Dietary::DairyFree => "DF",
            Dietary::GlutenFree => "GF",
            Dietary::Vegetarian => "V",
            Dietary::Vegan => "VG",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Dietary::None => "None",
            Dietary::DairyFree => "Dairy Free",
            Dietary::GlutenFree => "Gluten Free",
            Dietary::Vegetarian => "Vegetarian",
            Dietary::Vegan => "Vegan",
        }
    }
}

/// Money amount in integer cents.
///
/// The backend sends menu prices as decimal strings (`"12.50"`) and bill
/// totals as JSON numbers; both deserialize here. Serialization always
/// produces a two-decimal string, which is what the menu item endpoints
/// accept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(pub i64);

impl Price {
    pub fn cents(self) -> i64 {
        self.0
    }

    /// Parse `"12"`, `"12.5"` or `"12.50"`. More than two decimals, signs and
    /// empty input are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (whole, frac) = match raw.split_once('.') {
            Some((w, f)) => (w, f),
            None => (raw, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if raw.contains('.') && frac.is_empty() {
            return None;
        }
        let whole: i64 = whole.parse().ok()?;
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            _ => frac.parse().ok()?,
        };
        whole.checked_mul(100)?.checked_add(frac_cents).map(Price)
    }

    /// Decimal string without a currency symbol, e.g. `"12.50"`.
    pub fn to_decimal_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Price((value * 100.0).round() as i64))
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl std::ops::Mul<u32> for Price {
    type Output = Price;

    fn mul(self, rhs: u32) -> Price {
        Price(self.0 * i64::from(rhs))
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::default(), |acc, p| acc + p)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_decimal_string())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::String(s) => {
                Price::parse(s).ok_or_else(|| D::Error::custom(format!("invalid price: {s:?}")))
            }
            serde_json::Value::Number(n) => n
                .as_f64()
                .and_then(Price::from_f64)
                .ok_or_else(|| D::Error::custom(format!("invalid price: {n}"))),
            other => Err(D::Error::custom(format!("expected price, got {other}"))),
        }
    }
}

/// Kitchen progress of a single ordered dish.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "ORDER SENT")]
    OrderSent,
    #[serde(rename = "PREPARED")]
    Prepared,
    #[serde(rename = "SERVED")]
    Served,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::OrderSent => "Cooking",
            OrderStatus::Prepared => "Ready to serve",
            OrderStatus::Served => "Served",
        }
    }

    pub fn wire(self) -> &'static str {
        match self {
            OrderStatus::OrderSent => "ORDER SENT",
            OrderStatus::Prepared => "PREPARED",
            OrderStatus::Served => "SERVED",
        }
    }
}

/// One ordered dish. Each unit ordered is a separate item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub pk: i64,
    pub order: i64,
    pub menu_item: i64,
    #[serde(default)]
    pub status: OrderStatus,
}

/// Order header as serialized by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderMeta {
    #[serde(default)]
    pub customer_session: serde_json::Value,
    /// Wall-clock time the order was placed, `HH:MM:SS[.ffffff]`.
    pub order_time: String,
}

/// Staff view of an order with its items and table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableOrder {
    pub order: OrderMeta,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    #[serde(deserialize_with = "deserialize_table_number")]
    pub table_number: u32,
    #[serde(default)]
    pub order_id: i64,
}

/// Customer view of an ordered dish (`/api/orderitems/`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerOrderItem {
    pub order_item: OrderItem,
    pub order_time: String,
}

/// Bill for one table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    #[serde(deserialize_with = "deserialize_optional_table_number", default)]
    pub table_number: Option<u32>,
    #[serde(default)]
    pub order_list: Vec<OrderItem>,
    pub bill_total: Price,
}

/// `/api/updatetables/` response: table number (as string key) -> occupied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesResponse {
    #[serde(default)]
    pub table_numbers: Option<BTreeMap<String, bool>>,
}

/// A restaurant table and whether a customer session holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table {
    pub number: u32,
    pub occupied: bool,
}

/// Restaurant account roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    #[serde(rename = "manager")]
    Manager,
    #[serde(rename = "Wait")]
    Wait,
    #[serde(rename = "Kitchen")]
    Kitchen,
}

impl StaffRole {
    pub fn wire(self) -> &'static str {
        match self {
            StaffRole::Manager => "manager",
            StaffRole::Wait => "Wait",
            StaffRole::Kitchen => "Kitchen",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "manager" => Some(StaffRole::Manager),
            "Wait" => Some(StaffRole::Wait),
            "Kitchen" => Some(StaffRole::Kitchen),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StaffRole::Manager => "Manager",
            StaffRole::Wait => "Wait Staff",
            StaffRole::Kitchen => "Kitchen Staff",
        }
    }

    /// Landing route after sign-in.
    pub fn home_route(self) -> &'static str {
        match self {
            StaffRole::Manager => "/manager",
            StaffRole::Wait => "/waitstaff",
            StaffRole::Kitchen => "/kitchenstaff",
        }
    }
}

/// `/api/login/` success body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "restaurantId", default)]
    pub restaurant_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub role: StaffRole,
}

/// `/api/register/` success body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    #[serde(rename = "restaurantId", default)]
    pub restaurant_id: Option<i64>,
}

/// A kitchen or wait staff account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub pk: i64,
    pub username: String,
    pub role: StaffRole,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct StaffListResponse {
    #[serde(rename = "Response", default)]
    pub staff: Vec<StaffMember>,
}

/// Restaurant shown in the customer navbar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantDetails {
    pub name: String,
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_optional_table_number")]
    pub table_number: Option<u32>,
}

/// New position for one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPosition {
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    #[serde(rename = "newPosition")]
    pub new_position: i64,
}

/// New position for one menu item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemPosition {
    #[serde(rename = "menuItemId")]
    pub menu_item_id: i64,
    #[serde(rename = "newPosition")]
    pub new_position: i64,
}

/// New item order for one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemPositions {
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    #[serde(rename = "menuItems")]
    pub menu_items: Vec<MenuItemPosition>,
}

/// One cart line as sent to `/api/placeorder/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item: i64,
    pub quantity: u32,
}

/// Fields for creating or replacing a menu item.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: i64,
    pub dietary_requirements: Dietary,
    pub preparation_time: i64,
    pub popular: bool,
}

/// Manager + restaurant registration form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    /// Restaurant name.
    pub name: String,
    pub location: String,
}

fn table_number_from_value(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn deserialize_table_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    table_number_from_value(&value).ok_or_else(|| D::Error::custom(format!("invalid table number: {value}")))
}

fn deserialize_optional_table_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    table_number_from_value(&value)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid table number: {value}")))
}
