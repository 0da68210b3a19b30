//! REST API helpers for communicating with the restaurant backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! Staff endpoints authenticate with `Authorization: Token <token>`.
//! Customer endpoints ride on the backend session cookie, which the browser
//! sends automatically because the host forwards `/api/*` on the same origin.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; non-success statuses are mapped
//! through `ApiError::from_status` so pages can branch on conflicts and auth
//! failures without inspecting raw responses.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::StaffListResponse;
use super::types::{
    Bill, Category, CategoryPosition, CustomerOrderItem, LoginResponse, MenuItem, MenuItemDraft, MenuItemPositions,
    OrderLine, OrderStatus, RegisterResponse, Registration, RestaurantDetails, StaffMember, StaffRole, Table,
    TableOrder,
};
#[cfg(feature = "hydrate")]
use super::types::TablesResponse;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::validate;

/// Credential used for endpoints shared by customers and staff.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Auth {
    /// Staff token from sign-in.
    Staff(String),
    /// Customer session cookie.
    Customer,
}

impl Auth {
    /// Staff token if present, else the customer session.
    pub fn from_token(token: Option<String>) -> Self {
        token.map_or(Auth::Customer, Auth::Staff)
    }
}

// =============================================================
// Endpoint and payload helpers
// =============================================================

#[cfg(any(test, feature = "hydrate"))]
fn token_header(token: &str) -> String {
    format!("Token {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn category_endpoint(pk: i64) -> String {
    format!("/api/categories/{pk}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn menu_item_endpoint(pk: i64) -> String {
    format!("/api/menuitems/{pk}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn order_item_endpoint(pk: i64) -> String {
    format!("/api/orderitems/{pk}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn table_orders_endpoint(table: u32) -> String {
    format!("/api/orders/?table_number={table}")
}

#[cfg(any(test, feature = "hydrate"))]
fn staff_bill_endpoint(table: u32) -> String {
    format!("/api/staffbill/?table_number={table}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn register_payload(form: &Registration) -> serde_json::Value {
    serde_json::json!({
        "email": form.email,
        "password": form.password,
        "name": form.name,
        "location": form.location,
        "table_numbers": {},
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn staff_register_payload(email: &str, password: &str, role: StaffRole) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password, "user_role": role.wire() })
}

#[cfg(any(test, feature = "hydrate"))]
fn customer_session_payload(table: u32, restaurant_id: i64) -> serde_json::Value {
    serde_json::json!({ "table_number": table, "restaurant": restaurant_id })
}

#[cfg(any(test, feature = "hydrate"))]
fn place_order_payload(lines: &[OrderLine]) -> serde_json::Value {
    serde_json::json!({ "order_items": lines })
}

#[cfg(any(test, feature = "hydrate"))]
fn table_update_payload(num: u32, bulk: bool) -> serde_json::Value {
    serde_json::json!({ "num": num, "list": bulk })
}

#[cfg(any(test, feature = "hydrate"))]
fn table_number_payload(table: u32) -> serde_json::Value {
    serde_json::json!({ "table_number": table })
}

#[cfg(any(test, feature = "hydrate"))]
fn status_payload(status: OrderStatus) -> serde_json::Value {
    serde_json::json!({ "status": status.wire() })
}

#[cfg(any(test, feature = "hydrate"))]
fn category_positions_payload(positions: &[CategoryPosition]) -> serde_json::Value {
    serde_json::json!({ "categories": positions })
}

/// Multipart fields for a new menu item, in the order the backend form
/// expects. The image part is appended separately.
#[cfg(any(test, feature = "hydrate"))]
fn menu_item_form_fields(draft: &MenuItemDraft) -> Vec<(&'static str, String)> {
    vec![
        ("name", draft.name.clone()),
        ("description", draft.description.clone()),
        ("price", draft.price.to_decimal_string()),
        ("category", draft.category.to_string()),
        ("dietary_requirements", draft.dietary_requirements.code().to_owned()),
        ("preparation_time", draft.preparation_time.to_string()),
        ("popular", draft.popular.to_string()),
    ]
}

/// Append every draft field through `append`, stopping at the first
/// rejected part so an incomplete form is never sent.
#[cfg(any(test, feature = "hydrate"))]
fn fill_form<E: std::fmt::Debug>(
    draft: &MenuItemDraft,
    mut append: impl FnMut(&str, &str) -> Result<(), E>,
) -> Result<(), ApiError> {
    for (key, value) in menu_item_form_fields(draft) {
        append(key, &value).map_err(|e| ApiError::Network(format!("form field {key}: {e:?}")))?;
    }
    Ok(())
}

/// Reject drafts the backend would refuse.
#[cfg(any(test, feature = "hydrate"))]
fn check_draft(draft: &MenuItemDraft) -> Result<(), ApiError> {
    if draft.name.trim().is_empty() {
        return Err(ApiError::Invalid("Menu item name cannot be empty.".to_owned()));
    }
    if !validate::is_valid_id(draft.category) {
        return Err(ApiError::Invalid("Expecting a valid category id.".to_owned()));
    }
    if draft.price.cents() <= 0 {
        return Err(ApiError::Invalid(
            "Expecting a two decimal place positive number for price.".to_owned(),
        ));
    }
    if !validate::is_valid_preparation_time(draft.preparation_time) {
        return Err(ApiError::Invalid(
            "Expecting a whole positive number for preparation time.".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(any(test, feature = "hydrate"))]
fn check_id(pk: i64, what: &str) -> Result<(), ApiError> {
    if validate::is_valid_id(pk) {
        Ok(())
    } else {
        Err(ApiError::Invalid(format!("Expecting a valid {what} id.")))
    }
}

// =============================================================
// Transport
// =============================================================

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{Auth, token_header};
    use crate::net::error::ApiError;

    pub(super) fn with_token(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &token_header(token))
    }

    pub(super) fn with_auth(builder: RequestBuilder, auth: &Auth) -> RequestBuilder {
        match auth {
            Auth::Staff(token) => with_token(builder, token),
            Auth::Customer => builder,
        }
    }

    pub(super) fn build_error(e: gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }

    /// Send and fail on any non-2xx status.
    pub(super) async fn send(req: Request) -> Result<Response, ApiError> {
        let method = req.method();
        let url = req.url();
        let resp = req.send().await.map_err(|e| {
            leptos::logging::warn!("{method:?} {url} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        leptos::logging::warn!("{method:?} {url} -> {status}");
        Err(ApiError::from_status(status, &body))
    }

    pub(super) async fn send_builder(builder: RequestBuilder) -> Result<Response, ApiError> {
        send(builder.build().map_err(build_error)?).await
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// =============================================================
// Accounts
// =============================================================

/// Sign in a manager or staff member via `POST /api/login/`.
///
/// # Errors
///
/// `ApiError::Unauthorized` for bad credentials; other failures as mapped.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post("/api/login/")
            .json(&login_payload(email, password))
            .map_err(http::build_error)?;
        let resp = http::send(req).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Invalidate a staff token via `POST /api/logout/`.
///
/// # Errors
///
/// Returns the mapped failure; callers still clear the local token.
pub async fn logout(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::with_token(gloo_net::http::Request::post("/api/logout/"), token);
        http::send_builder(builder).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Register a manager account and its restaurant via `POST /api/register/`.
///
/// # Errors
///
/// Returns the backend's validation message on 400.
pub async fn register_manager(form: &Registration) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post("/api/register/")
            .json(&register_payload(form))
            .map_err(http::build_error)?;
        let resp = http::send(req).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Unavailable)
    }
}

/// Create a kitchen or wait staff account via `POST /api/staffregister/`.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the token is not a manager's.
pub async fn register_staff(token: &str, email: &str, password: &str, role: StaffRole) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = http::with_token(gloo_net::http::Request::post("/api/staffregister/"), token)
            .json(&staff_register_payload(email, password, role))
            .map_err(http::build_error)?;
        http::send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, email, password, role);
        Err(ApiError::Unavailable)
    }
}

/// List non-manager staff via `GET /api/listallstaff/`.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the token is not a manager's.
pub async fn list_staff(token: &str) -> Result<Vec<StaffMember>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::with_token(gloo_net::http::Request::get("/api/listallstaff/"), token);
        let resp = http::send_builder(builder).await?;
        let body: StaffListResponse = http::decode(resp).await?;
        Ok(body.staff)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Request a password reset email via `POST /api/password_reset/`.
///
/// # Errors
///
/// Returns the mapped failure (unknown email is a 400).
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new().map_err(|_| ApiError::Network("form encoding".to_owned()))?;
        params.append("email", email);
        let body: String = params.to_string().into();
        let req = gloo_net::http::Request::post("/api/password_reset/")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(http::build_error)?;
        http::send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Customer session
// =============================================================

/// Resolve a restaurant by name and location via `GET /api/valid-restaurant/`.
///
/// # Errors
///
/// `ApiError::NotFound` when no restaurant matches.
pub async fn find_restaurant(name: &str, location: &str) -> Result<i64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct ValidRestaurant {
            restaurant_id: i64,
        }
        let builder = gloo_net::http::Request::get("/api/valid-restaurant/")
            .query([("name", name), ("location", location)]);
        let resp = http::send_builder(builder).await?;
        let body: ValidRestaurant = http::decode(resp).await?;
        Ok(body.restaurant_id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, location);
        Err(ApiError::Unavailable)
    }
}

/// Claim a table for this browser via `POST /api/customer/`.
///
/// # Errors
///
/// `ApiError::Conflict` when the table is already taken,
/// `ApiError::NotFound` when the restaurant has no such table.
pub async fn start_customer_session(table: u32, restaurant_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post("/api/customer/")
            .json(&customer_session_payload(table, restaurant_id))
            .map_err(http::build_error)?;
        http::send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (table, restaurant_id);
        Err(ApiError::Unavailable)
    }
}

/// Whether this browser already holds a customer session (`GET /api/customer/`).
pub async fn customer_session_exists() -> bool {
    #[cfg(feature = "hydrate")]
    {
        gloo_net::http::Request::get("/api/customer/")
            .send()
            .await
            .is_ok_and(|resp| resp.status() == 200)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Leave the current table via `DELETE /api/customer/`.
///
/// # Errors
///
/// Returns the mapped failure (no session is a 400).
pub async fn end_own_session() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::send_builder(gloo_net::http::Request::delete("/api/customer/"))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Restaurant name, location and (for customers) table number.
///
/// # Errors
///
/// `ApiError::NotFound` when the customer session has ended.
pub async fn restaurant_details(auth: &Auth) -> Result<RestaurantDetails, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::with_auth(gloo_net::http::Request::get("/api/restaurant_details/"), auth);
        let resp = http::send_builder(builder).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Categories
// =============================================================

/// List the restaurant's categories via `GET /api/categories/`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn list_categories(auth: &Auth) -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::with_auth(gloo_net::http::Request::get("/api/categories/"), auth);
        let resp = http::send_builder(builder).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(ApiError::Unavailable)
    }
}

/// Create a category via `POST /api/categories/`.
///
/// # Errors
///
/// `ApiError::Invalid` for an empty name; otherwise the mapped failure.
pub async fn create_category(token: &str, name: &str) -> Result<Category, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        if name.trim().is_empty() {
            return Err(ApiError::Invalid("Category name cannot be empty!".to_owned()));
        }
        let req = http::with_token(gloo_net::http::Request::post("/api/categories/"), token)
            .json(&serde_json::json!({ "name": name.trim() }))
            .map_err(http::build_error)?;
        let resp = http::send(req).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, name);
        Err(ApiError::Unavailable)
    }
}

/// Rename a category via `PATCH /api/categories/{pk}/`.
///
/// # Errors
///
/// `ApiError::Invalid` for a bad id or empty name.
pub async fn rename_category(token: &str, pk: i64, name: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        check_id(pk, "category")?;
        if name.trim().is_empty() {
            return Err(ApiError::Invalid("Category name cannot be empty!".to_owned()));
        }
        let req = http::with_token(gloo_net::http::Request::patch(&category_endpoint(pk)), token)
            .json(&serde_json::json!({ "name": name.trim() }))
            .map_err(http::build_error)?;
        http::send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, pk, name);
        Err(ApiError::Unavailable)
    }
}

/// Delete a category via `DELETE /api/categories/{pk}/`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn delete_category(token: &str, pk: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        check_id(pk, "category")?;
        let builder = http::with_token(gloo_net::http::Request::delete(&category_endpoint(pk)), token);
        http::send_builder(builder).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, pk);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Menu items
// =============================================================

/// List all menu items via `GET /api/menuitems/`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn list_menu_items(auth: &Auth) -> Result<Vec<MenuItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::with_auth(gloo_net::http::Request::get("/api/menuitems/"), auth);
        let resp = http::send_builder(builder).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one menu item via `GET /api/menuitems/{pk}/`.
///
/// # Errors
///
/// `ApiError::NotFound` when the item was deleted.
pub async fn get_menu_item(auth: &Auth, pk: i64) -> Result<MenuItem, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        check_id(pk, "menu item")?;
        let builder = http::with_auth(gloo_net::http::Request::get(&menu_item_endpoint(pk)), auth);
        let resp = http::send_builder(builder).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, pk);
        Err(ApiError::Unavailable)
    }
}

/// Create a menu item via multipart `POST /api/menuitems/`.
///
/// Browser-only: the optional image is a `File` from an `<input type=file>`.
///
/// # Errors
///
/// `ApiError::Invalid` when the draft fails validation.
#[cfg(feature = "hydrate")]
pub async fn create_menu_item(
    token: &str,
    draft: &MenuItemDraft,
    image: Option<web_sys::File>,
) -> Result<MenuItem, ApiError> {
    check_draft(draft)?;
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data".to_owned()))?;
    fill_form(draft, |key, value| form.append_with_str(key, value))?;
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", &file, &file.name())
            .map_err(|e| ApiError::Network(format!("form image: {e:?}")))?;
    }
    let req = http::with_token(gloo_net::http::Request::post("/api/menuitems/"), token)
        .body(form)
        .map_err(http::build_error)?;
    let resp = http::send(req).await?;
    http::decode(resp).await
}

/// Replace a menu item's fields via `PUT /api/menuitems/{pk}/`.
///
/// # Errors
///
/// `ApiError::Invalid` when the id or draft fails validation.
pub async fn update_menu_item(token: &str, pk: i64, draft: &MenuItemDraft) -> Result<MenuItem, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        check_id(pk, "menu item")?;
        check_draft(draft)?;
        let req = http::with_token(gloo_net::http::Request::put(&menu_item_endpoint(pk)), token)
            .json(draft)
            .map_err(http::build_error)?;
        let resp = http::send(req).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, pk, draft);
        Err(ApiError::Unavailable)
    }
}

/// Delete a menu item via `DELETE /api/menuitems/{pk}/`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn delete_menu_item(token: &str, pk: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        check_id(pk, "menu item")?;
        let builder = http::with_token(gloo_net::http::Request::delete(&menu_item_endpoint(pk)), token);
        http::send_builder(builder).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, pk);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Positions
// =============================================================

/// Persist category order via `POST /api/position/category/`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn update_category_positions(token: &str, positions: &[CategoryPosition]) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = http::with_token(gloo_net::http::Request::post("/api/position/category/"), token)
            .json(&category_positions_payload(positions))
            .map_err(http::build_error)?;
        http::send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, positions);
        Err(ApiError::Unavailable)
    }
}

/// Persist item order for one category via `POST /api/position/menuitem/`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn update_menu_item_positions(token: &str, positions: &MenuItemPositions) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = http::with_token(gloo_net::http::Request::post("/api/position/menuitem/"), token)
            .json(positions)
            .map_err(http::build_error)?;
        http::send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, positions);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Orders
// =============================================================

/// Submit the cart via `POST /api/placeorder/`.
///
/// # Errors
///
/// `ApiError::Invalid` for an empty cart; `ApiError::Unauthorized` without a
/// customer session.
pub async fn place_order(lines: &[OrderLine]) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        if lines.is_empty() {
            return Err(ApiError::Invalid("Your cart is empty.".to_owned()));
        }
        let req = gloo_net::http::Request::post("/api/placeorder/")
            .json(&place_order_payload(lines))
            .map_err(http::build_error)?;
        http::send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lines;
        Err(ApiError::Unavailable)
    }
}

/// The customer's ordered dishes via `GET /api/orderitems/`.
///
/// # Errors
///
/// `ApiError::NotFound` when the customer session has ended.
pub async fn customer_order_items() -> Result<Vec<CustomerOrderItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_builder(gloo_net::http::Request::get("/api/orderitems/")).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Orders for one table via `GET /api/orders/?table_number=`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn table_orders(token: &str, table: u32) -> Result<Vec<TableOrder>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::with_token(gloo_net::http::Request::get(&table_orders_endpoint(table)), token);
        let resp = http::send_builder(builder).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, table);
        Err(ApiError::Unavailable)
    }
}

/// Every order in the restaurant, oldest first, via `GET /api/allorders/`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn all_orders(token: &str) -> Result<Vec<TableOrder>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::with_token(gloo_net::http::Request::get("/api/allorders/"), token);
        let resp = http::send_builder(builder).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Move a dish through the kitchen via `PATCH /api/orderitems/{pk}/`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn set_order_item_status(token: &str, pk: i64, status: OrderStatus) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        check_id(pk, "order item")?;
        let req = http::with_token(gloo_net::http::Request::patch(&order_item_endpoint(pk)), token)
            .json(&status_payload(status))
            .map_err(http::build_error)?;
        http::send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, pk, status);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Bills
// =============================================================

/// The customer's bill via `GET /api/bill/`.
///
/// # Errors
///
/// Returns the mapped failure (no orders is a 400).
pub async fn customer_bill() -> Result<Bill, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_builder(gloo_net::http::Request::get("/api/bill/")).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// A table's bill for staff via `GET /api/staffbill/?table_number=`.
///
/// # Errors
///
/// Returns the mapped failure (no orders is a 400).
pub async fn staff_bill(token: &str, table: u32) -> Result<Bill, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::with_token(gloo_net::http::Request::get(&staff_bill_endpoint(table)), token);
        let resp = http::send_builder(builder).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, table);
        Err(ApiError::Unavailable)
    }
}

/// Close a table's customer session via `DELETE /api/staff-ending-customer/`.
///
/// # Errors
///
/// `ApiError::NotFound` when the table has no session.
pub async fn end_customer_session(token: &str, table: u32) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = http::with_token(gloo_net::http::Request::delete("/api/staff-ending-customer/"), token)
            .json(&table_number_payload(table))
            .map_err(http::build_error)?;
        http::send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, table);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Tables
// =============================================================

/// The restaurant's tables, sorted by number, via `GET /api/updatetables/`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn list_tables(token: &str) -> Result<Vec<Table>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::with_token(gloo_net::http::Request::get("/api/updatetables/"), token);
        let resp = http::send_builder(builder).await?;
        let body: TablesResponse = http::decode(resp).await?;
        Ok(crate::state::tables::tables_from_response(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Add table `number` (or, with `bulk`, `number` new tables) via
/// `POST /api/updatetables/`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn add_table(token: &str, number: u32, bulk: bool) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = http::with_token(gloo_net::http::Request::post("/api/updatetables/"), token)
            .json(&table_update_payload(number, bulk))
            .map_err(http::build_error)?;
        http::send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, number, bulk);
        Err(ApiError::Unavailable)
    }
}

/// Remove a table via `DELETE /api/updatetables/`.
///
/// # Errors
///
/// Occupied or unknown tables come back as a 400 `ApiError::Status`.
pub async fn remove_table(token: &str, number: u32) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = http::with_token(gloo_net::http::Request::delete("/api/updatetables/"), token)
            .json(&table_update_payload(number, false))
            .map_err(http::build_error)?;
        http::send(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, number);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Assistance
// =============================================================

/// Outcome of a customer's call for assistance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssistanceRequest {
    /// A new call was registered (201).
    Sent,
    /// A call was already pending (200).
    AlreadyPending,
}

impl AssistanceRequest {
    #[cfg(any(test, feature = "hydrate"))]
    fn from_status(status: u16) -> Self {
        if status == 201 { Self::Sent } else { Self::AlreadyPending }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Sent => "Your call for assistance has been sent. We'll be with you shortly.",
            Self::AlreadyPending => "You already have a call for assistance in progress. We'll be with you shortly.",
        }
    }
}

/// Call a waiter via `POST /api/tableassistancewithoutparams/`.
///
/// # Errors
///
/// `ApiError::Unauthorized` without a customer session.
pub async fn request_assistance() -> Result<AssistanceRequest, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_builder(gloo_net::http::Request::post("/api/tableassistancewithoutparams/")).await?;
        Ok(AssistanceRequest::from_status(resp.status()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Mark a table as assisted via `DELETE /api/tableassistancewithoutparams/`.
///
/// # Errors
///
/// `ApiError::NotFound` when the table no longer needs assistance.
pub async fn resolve_assistance(token: &str, table: u32) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = http::with_token(gloo_net::http::Request::delete("/api/tableassistancewithoutparams/"), token)
            .json(&table_number_payload(table))
            .map_err(http::build_error)?;
        let resp = http::send(req).await?;
        if resp.status() == 204 {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: resp.status(),
                message: "Couldn't signal that the table has been assisted.".to_owned(),
            })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, table);
        Err(ApiError::Unavailable)
    }
}

/// Table numbers waiting for a waiter via `GET /api/stafftableassistance/`.
///
/// # Errors
///
/// Returns the mapped failure.
pub async fn tables_needing_assistance(token: &str) -> Result<Vec<u32>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::with_token(gloo_net::http::Request::get("/api/stafftableassistance/"), token);
        let resp = http::send_builder(builder).await?;
        let mut tables: Vec<u32> = http::decode(resp).await?;
        tables.sort_unstable();
        tables.dedup();
        Ok(tables)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}
