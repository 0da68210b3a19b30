//! First customer step: choose a restaurant by name and location.

#[cfg(test)]
#[path = "ready_to_dine_in_test.rs"]
mod ready_to_dine_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::LandingNavbar;

pub const NOT_FOUND: &str = "We could not find that restaurant at that location.";

/// Trimmed (name, location), both required.
pub fn restaurant_query(name: &str, location: &str) -> Option<(String, String)> {
    let (name, location) = (name.trim(), location.trim());
    (!name.is_empty() && !location.is_empty()).then(|| (name.to_owned(), location.to_owned()))
}

#[component]
pub fn ReadyToDineInPage() -> impl IntoView {
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    // A browser that already holds a table goes straight to the menu.
    let resume = navigate.clone();
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let resume = resume.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::customer_session_exists().await {
                    resume("/customermenu", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &resume;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((name_value, location_value)) = restaurant_query(&name.get_untracked(), &location.get_untracked())
        else {
            error.set(Some("Please fill in all the fields."));
            return;
        };
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::find_restaurant(&name_value, &location_value).await {
                    Ok(id) => {
                        crate::util::auth::save_restaurant_id(id);
                        navigate("/tablenumber", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("restaurant lookup failed: {e}");
                        error.set(Some(NOT_FOUND));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, name_value, location_value);
    };

    view! {
        <div class="auth-page">
            <LandingNavbar/>
            <div class="auth-card">
                <h1>"Ready to dine in?"</h1>
                <h2>"Please choose a restaurant and its location"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Restaurant"
                        <input
                            class="auth-form__input"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Location"
                        <input
                            class="auth-form__input"
                            type="text"
                            required
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
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
