//! Manager and restaurant registration.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::LandingNavbar;
use crate::net::error::ApiError;
use crate::net::types::{Registration, StaffRole};
use crate::state::auth::AuthState;
use crate::util::validate;

/// Validate the form and build the request body.
///
/// # Errors
///
/// The first failed check's message.
pub fn build_registration(
    email: &str,
    password: &str,
    confirm: &str,
    name: &str,
    location: &str,
) -> Result<Registration, &'static str> {
    let (email, name, location) = (email.trim(), name.trim(), location.trim());
    validate::check_account_form(email, password, confirm, &[name, location])?;
    Ok(Registration {
        email: email.to_owned(),
        password: password.to_owned(),
        name: name.to_owned(),
        location: location.to_owned(),
    })
}

pub fn sign_up_error(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 400, .. } | ApiError::Conflict(_) => {
            "There was an error with your registration, please check that you are not using the same email as an existing user."
                .to_owned()
        }
        _ => err.user_message(),
    }
}

/// Password requirements list shown beside password fields.
#[component]
pub fn PasswordRules() -> impl IntoView {
    view! {
        <div class="auth-form__rules">
            <p>"Please ensure your password:"</p>
            <ul>
                {validate::PASSWORD_RULES.into_iter().map(|rule| view! { <li>{rule}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = match build_registration(
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
            &name.get_untracked(),
            &location.get_untracked(),
        ) {
            Ok(form) => form,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register_manager(&form).await {
                    Ok(resp) => {
                        crate::util::auth::persist_session(&resp.token, StaffRole::Manager);
                        auth.update(|a| a.sign_in(resp.token, StaffRole::Manager));
                        navigate(StaffRole::Manager.home_route(), NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(sign_up_error(&e))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, auth, form);
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="auth-form__label">
                {label}
                <input
                    class="auth-form__input"
                    type=kind
                    required
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <LandingNavbar/>
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {field("Email address", "email", email)}
                    {field("Restaurant Name", "text", name)}
                    {field("Restaurant Location", "text", location)}
                    <PasswordRules/>
                    {field("Password", "password", password)}
                    {field("Confirm Password", "password", confirm)}
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/signin">"Sign In"</a>
                </p>
            </div>
        </div>
    }
}
