//! Customer menu page: restaurant header, assistance call, cart and order
//! drawers over the shared menu view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::cart_panel::CartPanel;
use crate::components::customer_orders_panel::CustomerOrdersPanel;
use crate::components::menu_view::{MenuView, install_menu_loader};
use crate::components::navbar::DarkModeToggle;
use crate::components::notice_banner::NoticeBanner;
use crate::net::types::RestaurantDetails;
use crate::state::cart::CartState;
use crate::state::ui::{CustomerDrawer, UiState};

#[component]
pub fn CustomerMenuPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let details = RwSignal::new(None::<RestaurantDetails>);
    let confirm_leave = RwSignal::new(false);

    install_menu_loader(false);

    // Without a session cookie the backend answers 401; send the diner back
    // to pick a restaurant.
    let to_start = navigate.clone();
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let to_start = to_start.clone();
            leptos::task::spawn_local(async move {
                use crate::net::api::{self, Auth};
                use crate::net::error::ApiError;

                match api::restaurant_details(&Auth::Customer).await {
                    Ok(found) => details.set(Some(found)),
                    Err(ApiError::Unauthorized(_)) => to_start("/readytodinein", NavigateOptions::default()),
                    Err(e) => leptos::logging::warn!("restaurant details failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &to_start;
    });

    let on_assist = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_assistance().await {
                Ok(outcome) => ui.update(|u| u.info(outcome.message())),
                Err(e) => ui.update(|u| u.error(e.user_message())),
            }
        });
    };

    // The dialog only raises the flag; navigation happens here, outside the
    // `Show` children.
    let leave_requested = RwSignal::new(false);
    Effect::new(move || {
        if !leave_requested.get() {
            return;
        }
        leave_requested.set(false);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::end_own_session().await {
                    Ok(()) => {
                        cart.update(CartState::clear);
                        ui.update(|u| u.drawer = CustomerDrawer::Closed);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => ui.update(|u| u.error(e.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    });

    view! {
        <div class="customer">
            <header class="navbar navbar--customer">
                <a class="navbar__brand" href="/readytodinein">"QUENIFY"</a>
                <span class="navbar__title">
                    {move || {
                        details
                            .get()
                            .map(|d| match d.table_number {
                                Some(table) => format!("{} ({}) · Table {table}", d.name, d.location),
                                None => format!("{} ({})", d.name, d.location),
                            })
                            .unwrap_or_default()
                    }}
                </span>
                <span class="navbar__spacer"></span>
                <button class="btn" on:click=on_assist>"Need Assistance"</button>
                <button class="btn" on:click=move |_| ui.update(|u| u.toggle_drawer(CustomerDrawer::Orders))>
                    "Orders"
                </button>
                <button class="btn btn--primary" on:click=move |_| ui.update(|u| u.toggle_drawer(CustomerDrawer::Cart))>
                    {move || {
                        let count = cart.get().count();
                        if count == 0 { "Cart".to_owned() } else { format!("Cart ({count})") }
                    }}
                </button>
                <button class="btn btn--danger" on:click=move |_| confirm_leave.set(true)>"Leave table"</button>
                <DarkModeToggle/>
            </header>
            <NoticeBanner/>
            <MenuView/>
            {move || match ui.get().drawer {
                CustomerDrawer::Cart => view! { <CartPanel/> }.into_any(),
                CustomerDrawer::Orders => view! { <CustomerOrdersPanel/> }.into_any(),
                CustomerDrawer::Closed => ().into_any(),
            }}
            <Show when=move || confirm_leave.get()>
                <div class="dialog-backdrop" on:click=move |_| confirm_leave.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Leave this table?"</h2>
                        <p>"Your cart will be emptied and the table freed for other diners."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| confirm_leave.set(false)>"Stay"</button>
                            <button
                                class="btn btn--danger"
                                on:click=move |_| {
                                    confirm_leave.set(false);
                                    leave_requested.set(true);
                                }
                            >
                                "Leave"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
