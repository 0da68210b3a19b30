//! Tables waiting for a waiter, polled every `ASSISTANCE_INTERVAL`.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::tables::TablesState;
#[cfg(feature = "hydrate")]
use crate::util::poll::InFlightGuard;
use crate::util::poll::{ASSISTANCE_INTERVAL, InFlight, spawn_poll};

#[cfg(feature = "hydrate")]
async fn refresh_assistance(auth: RwSignal<AuthState>, tables: RwSignal<TablesState>, guard: InFlightGuard) {
    loop {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        match crate::net::api::tables_needing_assistance(&token).await {
            Ok(list) => tables.update(|t| t.set_assistance(list)),
            Err(e) => leptos::logging::warn!("assistance poll failed: {e}"),
        }
        if !guard.rerun() {
            return;
        }
    }
}

#[component]
pub fn AssistanceList() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tables = expect_context::<RwSignal<TablesState>>();
    let in_flight = InFlight::new();
    let error = RwSignal::new(None::<String>);

    let first = in_flight.clone();
    Effect::new(move || {
        if auth.with(|a| a.loading || a.token.is_none()) {
            return;
        }
        if let Some(guard) = first.request() {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(refresh_assistance(auth, tables, guard));
            #[cfg(not(feature = "hydrate"))]
            drop(guard);
        }
    });

    let poll_flag = in_flight.clone();
    spawn_poll(ASSISTANCE_INTERVAL, move || {
        let claim = poll_flag.try_begin();
        async move {
            #[cfg(feature = "hydrate")]
            if let Some(guard) = claim {
                refresh_assistance(auth, tables, guard).await;
            }
            #[cfg(not(feature = "hydrate"))]
            drop(claim);
        }
    });

    let on_assist = Callback::new(move |table: u32| {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let in_flight = in_flight.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::resolve_assistance(&token, table).await {
                    Ok(()) => error.set(None),
                    Err(e) => error.set(Some(e.user_message())),
                }
                if let Some(guard) = in_flight.request() {
                    refresh_assistance(auth, tables, guard).await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, table, &in_flight);
    });

    view! {
        <div class="assistance">
            <Show when=move || error.get().is_some()>
                <p class="assistance__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !tables.get().assistance.is_empty()
                fallback=|| view! { <p class="assistance__empty">"No tables need assistance right now."</p> }
            >
                {move || {
                    tables
                        .get()
                        .assistance
                        .into_iter()
                        .map(|table| {
                            view! {
                                <div class="assistance__row">
                                    <span>{format!("Table {table}")}</span>
                                    <button class="btn btn--primary" on:click=move |_| on_assist.run(table)>
                                        "Assist Now"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </div>
    }
}
