//! Order board used by the manager's Orders tab and the kitchen page.
//!
//! The list polls every `ORDER_BOARD_INTERVAL`. Status buttons send the
//! change and then refetch, so the board always shows what the backend
//! accepted.

#[cfg(test)]
#[path = "order_board_test.rs"]
mod order_board_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::{OrderItem, OrderStatus, TableOrder};
use crate::state::auth::AuthState;
use crate::state::menu::MenuState;
use crate::state::orders::{self, OrderFilter, OrdersState};
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::poll::InFlightGuard;
use crate::util::poll::{InFlight, ORDER_BOARD_INTERVAL, spawn_poll};

/// Fetch every order for the restaurant, again for each refresh queued
/// while the fetch ran.
#[cfg(feature = "hydrate")]
async fn refresh_orders(auth: RwSignal<AuthState>, board: RwSignal<OrdersState>, guard: InFlightGuard) {
    loop {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        match crate::net::api::all_orders(&token).await {
            Ok(list) => board.update(|b| b.set_orders(list)),
            Err(e) => {
                leptos::logging::warn!("order poll failed: {e}");
                board.update(|b| {
                    b.loading = false;
                    b.error = Some(e.user_message());
                });
            }
        }
        if !guard.rerun() {
            return;
        }
    }
}

/// Banner text for a rejected status change. It goes to the notice banner
/// because the refetch that follows replaces `OrdersState::error`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn status_change_failure(pk: i64, error: &ApiError) -> String {
    format!("Could not update order item #{pk}: {}", error.user_message())
}

#[component]
pub fn OrderBoard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let board = expect_context::<RwSignal<OrdersState>>();
    let in_flight = InFlight::new();

    let first_load = in_flight.clone();
    Effect::new(move || {
        let ready = auth.with(|a| !a.loading && a.token.is_some());
        if !ready {
            return;
        }
        board.update(|b| b.loading = true);
        if let Some(guard) = first_load.request() {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(refresh_orders(auth, board, guard));
            #[cfg(not(feature = "hydrate"))]
            drop(guard);
        }
    });

    let poll_flag = in_flight.clone();
    spawn_poll(ORDER_BOARD_INTERVAL, move || {
        let claim = poll_flag.try_begin();
        async move {
            #[cfg(feature = "hydrate")]
            if let Some(guard) = claim {
                refresh_orders(auth, board, guard).await;
            }
            #[cfg(not(feature = "hydrate"))]
            drop(claim);
        }
    });

    // A change made during a poll is refetched once that poll finishes.
    let on_changed = Callback::new(move |()| {
        if let Some(guard) = in_flight.request() {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(refresh_orders(auth, board, guard));
            #[cfg(not(feature = "hydrate"))]
            drop(guard);
        }
    });

    view! {
        <div class="order-board" class:order-board--focused=move || board.get().selected.is_some()>
            <section class="order-board__list">
                <div class="order-board__tabs">
                    {OrderFilter::ALL
                        .into_iter()
                        .map(|filter| {
                            view! {
                                <button
                                    class="order-board__tab"
                                    class:order-board__tab--active=move || board.get().filter == filter
                                    on:click=move |_| board.update(|b| b.filter = filter)
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <Show when=move || board.get().error.is_some()>
                    <p class="order-board__error">{move || board.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="order-board__orders">
                    {move || {
                        board
                            .get()
                            .visible()
                            .into_iter()
                            .map(|order| view! { <OrderRow order=order/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
            <section class="order-board__detail">
                {move || match board.get().selected_order().cloned() {
                    Some(order) => view! { <OrderDetail order=order on_changed=on_changed/> }.into_any(),
                    None => {
                        view! {
                            <div class="order-board__placeholder">
                                <h2>"Ready to handle order?"</h2>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}

#[component]
fn OrderRow(order: TableOrder) -> impl IntoView {
    let board = expect_context::<RwSignal<OrdersState>>();
    let id = order.order_id;
    let completed = orders::is_completed(&order);
    view! {
        <div
            class="order-row"
            class:order-row--selected=move || board.get().selected == Some(id)
            on:click=move |_| board.update(|b| b.selected = Some(id))
        >
            <div class="order-row__main">
                <span class="order-row__id">{format!("Order #{id}")}</span>
                <span class="order-row__table">{format!("Table Number: {}", order.table_number)}</span>
                <span class="order-row__status" class:order-row__status--done=completed>
                    {if completed { "COMPLETED" } else { "NOT COMPLETED" }}
                </span>
            </div>
            <span class="order-row__time">{orders::short_time(&order.order.order_time).to_owned()}</span>
        </div>
    }
}

#[component]
fn OrderDetail(order: TableOrder, on_changed: Callback<()>) -> impl IntoView {
    let board = expect_context::<RwSignal<OrdersState>>();
    view! {
        <div class="order-detail">
            <button class="btn btn--small order-detail__back" on:click=move |_| board.update(|b| b.selected = None)>
                "Back"
            </button>
            <h2>{format!("Order #{}", order.order_id)}</h2>
            <p>{format!("Table Number {}", order.table_number)}</p>
            <p class="order-detail__time">{orders::short_time(&order.order.order_time).to_owned()}</p>
            {order
                .order_items
                .into_iter()
                .map(|item| view! { <OrderItemRow item=item on_changed=on_changed/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn OrderItemRow(item: OrderItem, on_changed: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pk = item.pk;
    let menu_item = item.menu_item;
    let locked = !orders::kitchen_can_change(item.status);

    let set_status = move |status: OrderStatus| {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::set_order_item_status(&token, pk, status).await {
                ui.update(|u| u.error(status_change_failure(pk, &e)));
            }
            on_changed.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, status, ui, on_changed);
    };

    view! {
        <div class="order-item">
            <div class="order-item__header">
                <span class="order-item__name">
                    {move || menu.with(|m| m.item_name(menu_item).map(str::to_owned)).unwrap_or_else(|| format!("Item #{menu_item}"))}
                </span>
                <span class="order-item__status">{item.status.label()}</span>
            </div>
            <div class="order-item__actions">
                <button class="btn btn--primary" disabled=locked on:click=move |_| set_status(OrderStatus::Prepared)>
                    "Mark Ready"
                </button>
                <button class="btn btn--warning" disabled=locked on:click=move |_| set_status(OrderStatus::OrderSent)>
                    "Mark Cooking"
                </button>
            </div>
        </div>
    }
}
