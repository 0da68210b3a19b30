//! Second customer step: claim a table at the chosen restaurant.

#[cfg(test)]
#[path = "table_number_test.rs"]
mod table_number_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::LandingNavbar;
use crate::net::error::ApiError;
use crate::state::tables::parse_table_number;

pub fn claim_error(err: &ApiError) -> String {
    match err {
        ApiError::Conflict(_) => "Sorry but that table is taken.".to_owned(),
        ApiError::NotFound(_) => "That table does not exist at this restaurant.".to_owned(),
        _ => err.user_message(),
    }
}

#[component]
pub fn TableNumberPage() -> impl IntoView {
    let navigate = use_navigate();
    let raw = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    // Without a chosen restaurant there is nothing to claim.
    let back = navigate.clone();
    Effect::new(move || {
        if crate::util::auth::load_restaurant_id().is_none() {
            #[cfg(feature = "hydrate")]
            back("/readytodinein", NavigateOptions::default());
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &back;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let table = match parse_table_number(&raw.get_untracked()) {
            Ok(n) => n,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        let Some(restaurant) = crate::util::auth::load_restaurant_id() else {
            error.set(Some("Please choose a restaurant first.".to_owned()));
            return;
        };
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::start_customer_session(table, restaurant).await {
                    Ok(()) => {
                        crate::util::auth::clear_restaurant_id();
                        navigate("/customermenu", NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(claim_error(&e))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, table, restaurant);
    };

    view! {
        <div class="auth-page">
            <LandingNavbar/>
            <div class="auth-card">
                <h1>"Please enter your table number"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Table Number"
                        <input
                            class="auth-form__input"
                            type="number"
                            min="1"
                            required
                            prop:value=move || raw.get()
                            on:input=move |ev| raw.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit">"Submit"</button>
                </form>
            </div>
        </div>
    }
}
