//! Staff sign-in. Routes each role to its home page.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::LandingNavbar;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::util::validate;

/// Message for a failed login.
pub fn sign_in_error(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized(_) | ApiError::Status { status: 400, .. } => "Invalid credentials".to_owned(),
        ApiError::Network(_) => err.user_message(),
        _ => "Something went wrong".to_owned(),
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(msg) = validate::check_sign_in(&email_value, &password_value) {
            error.set(Some(msg.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(resp) => {
                        crate::util::auth::persist_session(&resp.token, resp.role);
                        auth.update(|a| a.sign_in(resp.token, resp.role));
                        navigate(resp.role.home_route(), NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        error.set(Some(sign_in_error(&e)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, auth, email_value, password_value);
    };

    view! {
        <div class="auth-page">
            <LandingNavbar/>
            <div class="auth-card">
                <h1>"Sign in to your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email address"
                        <input
                            class="auth-form__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        <span class="auth-form__row">
                            "Password"
                            <a class="auth-form__link" href="/passwordreset">"Forgot password?"</a>
                        </span>
                        <input
                            class="auth-form__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Do not have an account yet? " <a href="/signup">"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
