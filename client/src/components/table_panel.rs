//! Table view shared by the manager's Tables tab and the wait-staff page.
//!
//! Three panes: dishes ready to serve, the table list with add and delete,
//! and the focused table's orders. Everything (assistance flags included)
//! refreshes together every `WAIT_STAFF_INTERVAL`, except while the
//! assistance dialog is open and polling on its own.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::assistance_list::AssistanceList;
use crate::net::types::{OrderStatus, Table, TableOrder};
use crate::state::auth::AuthState;
use crate::state::menu::MenuState;
use crate::state::orders::{self, ReadyItem};
use crate::state::tables::{self, TablesState};
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::poll::InFlightGuard;
use crate::util::poll::{InFlight, WAIT_STAFF_INTERVAL, spawn_poll};

/// Refetch tables, ready dishes and the focused table's orders, again for
/// each refresh queued while the fetch ran.
#[cfg(feature = "hydrate")]
async fn refresh_tables(
    auth: RwSignal<AuthState>,
    state: RwSignal<TablesState>,
    ready: RwSignal<Vec<ReadyItem>>,
    guard: InFlightGuard,
) {
    loop {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        fetch_tables(&token, state, ready).await;
        if !guard.rerun() {
            return;
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_tables(token: &str, state: RwSignal<TablesState>, ready: RwSignal<Vec<ReadyItem>>) {
    use crate::net::api;

    match api::list_tables(token).await {
        Ok(list) => state.update(|t| {
            t.set_tables(list);
            t.error = None;
        }),
        Err(e) => state.update(|t| {
            t.loading = false;
            t.error = Some(e.user_message());
        }),
    }
    match api::tables_needing_assistance(token).await {
        Ok(list) => state.update(|t| t.set_assistance(list)),
        Err(e) => leptos::logging::warn!("assistance poll failed: {e}"),
    }
    match api::all_orders(token).await {
        Ok(all) => ready.set(orders::ready_to_serve(&all)),
        Err(e) => leptos::logging::warn!("ready-to-serve poll failed: {e}"),
    }
    if let Some(table) = state.get_untracked().focused {
        match api::table_orders(token, table).await {
            Ok(list) => state.update(|t| {
                if t.focused == Some(table) {
                    t.focused_orders = list;
                }
            }),
            Err(e) => leptos::logging::warn!("table {table} orders failed: {e}"),
        }
    }
}

#[component]
pub fn TablePanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = expect_context::<RwSignal<TablesState>>();
    let ready = RwSignal::new(Vec::<ReadyItem>::new());
    let assistance_open = RwSignal::new(false);
    let add_open = RwSignal::new(false);
    let in_flight = InFlight::new();

    let refresh = {
        let in_flight = in_flight.clone();
        // Queued behind a running poll rather than skipped.
        Callback::new(move |()| {
            if let Some(guard) = in_flight.request() {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(refresh_tables(auth, state, ready, guard));
                #[cfg(not(feature = "hydrate"))]
                drop(guard);
            }
        })
    };

    let signed_in = Memo::new(move |_| auth.with(|a| !a.loading && a.token.is_some()));
    let focused = Memo::new(move |_| state.with(|t| t.focused));

    Effect::new(move || {
        focused.track();
        if signed_in.get() {
            refresh.run(());
        }
    });

    spawn_poll(WAIT_STAFF_INTERVAL, move || {
        let claim = if assistance_open.get_untracked() { None } else { in_flight.try_begin() };
        async move {
            #[cfg(feature = "hydrate")]
            if let Some(guard) = claim {
                refresh_tables(auth, state, ready, guard).await;
            }
            #[cfg(not(feature = "hydrate"))]
            drop(claim);
        }
    });

    view! {
        <div class="tables">
            <ReadyToServe ready=ready refresh=refresh/>
            <section class="tables__list">
                <div class="tables__toolbar">
                    <span class="tables__summary">
                        {move || {
                            let t = state.get();
                            format!("{} tables, {} occupied", t.tables.len(), t.occupied_count())
                        }}
                    </span>
                    <button class="btn btn--small" on:click=move |_| add_open.set(true)>"Add Table"</button>
                    <button class="btn btn--small" on:click=move |_| assistance_open.set(true)>
                        {move || {
                            let waiting = state.get().assistance.len();
                            if waiting == 0 { "Assistance".to_owned() } else { format!("Assistance ({waiting})") }
                        }}
                    </button>
                </div>
                <Show when=move || state.get().error.is_some()>
                    <p class="tables__error">{move || state.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="tables__header">
                    <span>"Table Number"</span>
                    <span>"Status"</span>
                    <span>"Delete"</span>
                </div>
                {move || {
                    state
                        .get()
                        .tables
                        .into_iter()
                        .map(|table| view! { <TableRow table=table refresh=refresh/> })
                        .collect::<Vec<_>>()
                }}
            </section>
            <section class="tables__detail">
                {move || match state.get().focused {
                    Some(number) => view! { <TableDetail number=number/> }.into_any(),
                    None => view! { <p class="tables__placeholder">"Tap on the table to see its details"</p> }.into_any(),
                }}
            </section>
        </div>
        <Show when=move || add_open.get()>
            <AddTableDialog on_close=Callback::new(move |()| add_open.set(false)) refresh=refresh/>
        </Show>
        <Show when=move || assistance_open.get()>
            <div class="dialog-backdrop" on:click=move |_| assistance_open.set(false)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Tables that need assistance:"</h2>
                    <AssistanceList/>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| assistance_open.set(false)>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ReadyToServe(ready: RwSignal<Vec<ReadyItem>>, refresh: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_served = move |pk: i64, status: OrderStatus| {
        if !orders::waiter_can_serve(status) {
            return;
        }
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::set_order_item_status(&token, pk, OrderStatus::Served).await {
                ui.update(|u| u.error(e.user_message()));
            }
            refresh.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, pk, ui, refresh);
    };

    view! {
        <section class="tables__ready">
            <h3>"Orders ready to be served:"</h3>
            <Show
                when=move || !ready.get().is_empty()
                fallback=|| view! { <p class="tables__empty">"Looks like no orders are ready to be served."</p> }
            >
                {move || {
                    ready
                        .get()
                        .into_iter()
                        .map(|entry| {
                            let menu_item = entry.item.menu_item;
                            let pk = entry.item.pk;
                            let status = entry.item.status;
                            view! {
                                <div class="ready-row">
                                    <div class="ready-row__main">
                                        <span>
                                            {move || {
                                                menu.with(|m| m.item_name(menu_item).map(str::to_owned))
                                                    .unwrap_or_else(|| format!("Item #{menu_item}"))
                                            }}
                                        </span>
                                        <span class="ready-row__meta">{format!("Order #{}", entry.item.order)}</span>
                                        <span class="ready-row__meta">
                                            {format!("Table Number: {}", entry.table_number)}
                                        </span>
                                    </div>
                                    <button class="btn btn--primary" on:click=move |_| on_served(pk, status)>
                                        "Mark served"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </section>
    }
}

#[component]
fn TableRow(table: Table, refresh: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = expect_context::<RwSignal<TablesState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let number = table.number;

    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::remove_table(&token, number).await {
                Ok(()) => {
                    state.update(|t| {
                        if t.focused == Some(number) {
                            t.clear_focus();
                        }
                    });
                    ui.update(|u| u.info(format!("Table {number} removed.")));
                }
                Err(e) => ui.update(|u| u.error(e.user_message())),
            }
            refresh.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, ui, refresh);
    };

    view! {
        <div
            class="table-row"
            class:table-row--focused=move || state.get().focused == Some(number)
            class:table-row--assist=move || state.get().needs_assistance(number)
            on:click=move |_| state.update(|t| t.focus(number))
        >
            <span class="table-row__number">{format!("Table {number}")}</span>
            <span class="table-row__status">{if table.occupied { "occupied" } else { "available" }}</span>
            <button class="btn btn--small btn--danger" on:click=on_delete title="Delete table">
                "Delete"
            </button>
        </div>
    }
}

#[component]
fn TableDetail(number: u32) -> impl IntoView {
    let state = expect_context::<RwSignal<TablesState>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let navigate = use_navigate();

    let on_bill = move |_| {
        state.update(TablesState::clear_focus);
        navigate(&format!("/bill?table={number}"), NavigateOptions::default());
    };

    let order_card = move |order: TableOrder| {
        let rows = order
            .order_items
            .into_iter()
            .map(|item| {
                let menu_item = item.menu_item;
                view! {
                    <div class="table-order__item">
                        <span>
                            {move || {
                                menu.with(|m| m.item_name(menu_item).map(str::to_owned))
                                    .unwrap_or_else(|| format!("Item #{menu_item}"))
                            }}
                        </span>
                        <span class="tag">{item.status.label()}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="table-order">
                <div class="table-order__meta">{format!("Order Number: {}", order.order_id)}</div>
                <div class="table-order__meta">
                    {format!("Order Time: {}", orders::short_time(&order.order.order_time))}
                </div>
                {rows}
            </div>
        }
    };

    view! {
        <div class="table-detail">
            <div class="table-detail__header">
                <button class="btn btn--small" on:click=move |_| state.update(TablesState::clear_focus)>
                    "Back to tables"
                </button>
                <h2>{format!("Table {number} Info")}</h2>
                <button class="btn btn--primary" on:click=on_bill>"Handle Billing"</button>
            </div>
            {move || {
                let list = state.get().focused_orders;
                if list.is_empty() {
                    view! { <p class="tables__empty">{format!("Table {number} does not have any orders yet.")}</p> }
                        .into_any()
                } else {
                    list.into_iter().map(order_card).collect::<Vec<_>>().into_any()
                }
            }}
        </div>
    }
}

#[component]
fn AddTableDialog(on_close: Callback<()>, refresh: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = expect_context::<RwSignal<TablesState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let raw = RwSignal::new(state.get_untracked().next_table_number().to_string());
    let error = RwSignal::new(None::<String>);

    let on_add = move |_| {
        let number = match tables::parse_table_number(&raw.get_untracked()) {
            Ok(n) => n,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        if state.with_untracked(|t| t.tables.iter().any(|table| table.number == number)) {
            error.set(Some(format!("Table {number} already exists.")));
            return;
        }
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_table(&token, number, false).await {
                Ok(()) => {
                    ui.update(|u| u.info(format!("Table {number} added.")));
                    refresh.run(());
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, ui, refresh);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Table"</h2>
                <label class="dialog__label">
                    "Insert table number"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        prop:value=move || raw.get()
                        on:input=move |ev| raw.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=on_add>"Add table"</button>
                </div>
            </div>
        </div>
    }
}
