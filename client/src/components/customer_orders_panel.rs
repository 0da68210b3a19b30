//! Customer drawer listing what the table has ordered so far.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::menu::MenuState;
use crate::state::orders::CustomerOrderLine;
use crate::state::ui::{CustomerDrawer, UiState};

/// Seconds since UTC midnight; order times are stored in UTC.
#[cfg(feature = "hydrate")]
fn utc_seconds_of_day() -> u32 {
    let now = js_sys::Date::new_0();
    now.get_utc_hours() * 3600 + now.get_utc_minutes() * 60 + now.get_utc_seconds()
}

#[component]
pub fn CustomerOrdersPanel() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let lines = RwSignal::new(Vec::<CustomerOrderLine>::new());
    let loading = RwSignal::new(true);

    let refresh_seq = Memo::new(move |_| ui.with(|u| u.orders_refresh_seq));
    let items = Memo::new(move |_| menu.with(|m| m.items.clone()));

    Effect::new(move || {
        refresh_seq.track();
        let items = items.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::customer_order_items().await {
                Ok(ordered) => {
                    let grouped = crate::state::orders::group_customer_items(&ordered, &items, utc_seconds_of_day());
                    lines.set(grouped);
                }
                Err(e) => ui.update(|u| u.error(e.user_message())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = items;
    });

    let on_bill = move |_| {
        ui.update(|u| u.drawer = CustomerDrawer::Closed);
        navigate("/bill", NavigateOptions::default());
    };

    view! {
        <aside class="drawer">
            <div class="drawer__header">
                <h2>"Your Orders"</h2>
                <button class="btn btn--small" on:click=move |_| ui.update(UiState::refresh_customer_orders)>
                    "Refresh"
                </button>
                <button class="btn btn--small" on:click=move |_| ui.update(|u| u.drawer = CustomerDrawer::Closed)>
                    "Close"
                </button>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p class="drawer__empty">"LOADING..."</p> }>
                <Show
                    when=move || !lines.get().is_empty()
                    fallback=|| view! { <p class="drawer__empty">"You have not placed any order"</p> }
                >
                    <ul class="drawer__list">
                        {move || {
                            lines
                                .get()
                                .into_iter()
                                .map(|line| {
                                    view! {
                                        <li class="drawer__row">
                                            <div class="drawer__row-main">
                                                <span class="drawer__row-name">
                                                    {format!("{} × {}", line.name, line.quantity)}
                                                </span>
                                                <span class="drawer__row-price">{line.subtotal().to_string()}</span>
                                            </div>
                                            <div class="drawer__row-meta">
                                                <span class="tag">{line.status.label()}</span>
                                                <span>{format!("ordered {} min ago", line.minutes_ago)}</span>
                                                <span>
                                                    {format!("about {} min left", line.estimated_minutes_left())}
                                                </span>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
            <button class="btn btn--primary drawer__action" on:click=on_bill>
                "Request Bill"
            </button>
        </aside>
    }
}
