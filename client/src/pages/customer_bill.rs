//! Bill page. Customers see their own bill; staff open `/bill?table=N` and
//! can close the table with "Handle Billing".

#[cfg(test)]
#[path = "customer_bill_test.rs"]
mod customer_bill_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::menu_view::install_menu_loader;
use crate::net::types::{Bill, StaffRole};
use crate::state::auth::AuthState;
use crate::state::bill::{self, BillSummary};
use crate::state::menu::MenuState;

/// Table number from the `table` query parameter, if it is a valid one.
pub fn table_from_query(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|r| r.trim().parse::<u32>().ok()).filter(|n| *n > 0)
}

/// Where "Back" goes: staff return to their home page, diners to the menu.
pub fn back_route(table: Option<u32>, role: Option<StaffRole>) -> &'static str {
    match (table, role) {
        (Some(_), Some(role)) => role.home_route(),
        (Some(_), None) => "/signin",
        (None, _) => "/customermenu",
    }
}

#[component]
pub fn CustomerBillPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let table = Memo::new(move |_| query.with(|q| table_from_query(q.get("table").as_deref())));
    let raw_bill = RwSignal::new(None::<Bill>);
    let error = RwSignal::new(None::<String>);
    let closing = RwSignal::new(false);

    install_menu_loader(table.get_untracked().is_some());

    Effect::new(move || {
        let table = table.get();
        let state = auth.get();
        if table.is_some() && (state.loading || state.token.is_none()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;
            let result = match (table, state.token) {
                (Some(n), Some(token)) => api::staff_bill(&token, n).await,
                _ => api::customer_bill().await,
            };
            match result {
                Ok(found) => {
                    raw_bill.set(Some(found));
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (table, state);
    });

    let summary = Memo::new(move |_| {
        raw_bill.with(|b| b.as_ref().map(|b| menu.with(|m| bill::summarize(b, &m.items))))
    });

    let back_nav = navigate.clone();
    let on_back = move |_| {
        let target = back_route(table.get_untracked(), auth.get_untracked().role);
        back_nav(target, NavigateOptions::default());
    };

    // "Handle Billing" lives inside `Show`, so it only raises this flag.
    let close_requested = RwSignal::new(false);
    Effect::new(move || {
        if !close_requested.get() {
            return;
        }
        close_requested.set(false);
        let (Some(n), Some(token)) = (table.get_untracked(), auth.get_untracked().token) else {
            return;
        };
        closing.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::end_customer_session(&token, n).await {
                    Ok(()) => {
                        let target = back_route(Some(n), auth.get_untracked().role);
                        navigate(target, NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                closing.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, n, token);
    });

    view! {
        <div class="bill-page">
            <button class="btn bill-page__back" on:click=on_back>"‹ Back"</button>
            <Show when=move || error.get().is_some()>
                <p class="bill-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || match summary.get() {
                None => view! { <p class="bill-page__loading">"LOADING..."</p> }.into_any(),
                Some(summary) => view! { <BillCard summary=summary/> }.into_any(),
            }}
            <Show when=move || table.get().is_some()>
                <button
                    class="btn btn--primary bill-page__close"
                    disabled=move || closing.get()
                    on:click=move |_| close_requested.set(true)
                >
                    "Handle Billing"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn BillCard(summary: BillSummary) -> impl IntoView {
    let heading = match summary.table_number {
        Some(n) => format!("Order Summary for Table {n}"),
        None => "Nothing on this table".to_owned(),
    };
    let empty = summary.lines.is_empty();
    view! {
        <section class="bill">
            <h1 class="bill__heading">{heading}</h1>
            <div class="bill__lines">
                {empty.then(|| view! { <p class="bill__empty">"No dishes ordered yet."</p> })}
                {summary
                    .lines
                    .into_iter()
                    .map(|line| {
                        view! {
                            <div class="bill__line">
                                <span class="bill__name">{format!("{} × {}", line.name, line.quantity)}</span>
                                <span class="bill__unit">{line.unit_price.to_string()}</span>
                                <span class="bill__subtotal">{line.subtotal().to_string()}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="bill__total">
                <span>"Total"</span>
                <span>{summary.total.to_string()}</span>
            </div>
        </section>
    }
}
