//! Customer cart drawer: amounts, total and order placement.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::ui::{CustomerDrawer, UiState};

#[component]
pub fn CartPanel() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let placing = RwSignal::new(false);

    let on_place = move |_| {
        let lines = cart.get_untracked().order_payload();
        if lines.is_empty() || placing.get_untracked() {
            return;
        }
        placing.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::place_order(&lines).await {
                Ok(()) => {
                    cart.update(CartState::clear);
                    ui.update(|u| {
                        u.info("Your order has been placed.");
                        u.refresh_customer_orders();
                        u.drawer = CustomerDrawer::Orders;
                    });
                }
                Err(e) => {
                    leptos::logging::warn!("place order failed: {e}");
                    ui.update(|u| u.error(e.user_message()));
                }
            }
            placing.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (lines, ui);
    };

    view! {
        <aside class="drawer">
            <div class="drawer__header">
                <h2>"Cart"</h2>
                <button class="btn btn--small" on:click=move |_| ui.update(|u| u.drawer = CustomerDrawer::Closed)>
                    "Close"
                </button>
            </div>
            <Show
                when=move || !cart.get().is_empty()
                fallback=|| view! { <p class="drawer__empty">"No items in the cart"</p> }
            >
                <ul class="drawer__list">
                    {move || {
                        cart.get()
                            .lines
                            .into_iter()
                            .map(|line| {
                                let pk = line.menu_item;
                                let amount = line.amount;
                                view! {
                                    <li class="drawer__row">
                                        <div class="drawer__row-main">
                                            <span class="drawer__row-name">{line.name.clone()}</span>
                                            <span class="drawer__row-price">{line.subtotal().to_string()}</span>
                                        </div>
                                        <div class="drawer__counter">
                                            <button
                                                class="btn btn--small"
                                                on:click=move |_| cart.update(|c| c.set_amount(pk, amount.saturating_sub(1)))
                                            >
                                                "−"
                                            </button>
                                            <span>{amount}</span>
                                            <button
                                                class="btn btn--small"
                                                on:click=move |_| cart.update(|c| c.set_amount(pk, amount + 1))
                                            >
                                                "+"
                                            </button>
                                            <button class="btn btn--small btn--danger" on:click=move |_| cart.update(|c| c.remove(pk))>
                                                "Remove"
                                            </button>
                                        </div>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <div class="drawer__total">
                    <span>"Total"</span>
                    <span>{move || cart.get().total().to_string()}</span>
                </div>
            </Show>
            <button
                class="btn btn--primary drawer__action"
                disabled=move || cart.get().is_empty() || placing.get()
                on:click=on_place
            >
                "Place Order"
            </button>
        </aside>
    }
}
