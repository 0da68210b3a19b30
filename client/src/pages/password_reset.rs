//! Request a password reset email.

use leptos::prelude::*;

use crate::components::navbar::LandingNavbar;
use crate::util::validate;

#[component]
pub fn PasswordResetPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked().trim().to_owned();
        if value.is_empty() || !validate::is_valid_email(&value) {
            error.set(Some("Invalid email!".to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&value).await {
                Ok(()) => sent.set(true),
                Err(e) => {
                    leptos::logging::warn!("password reset failed: {e}");
                    error.set(Some("Please enter registered email".to_owned()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = value;
    };

    view! {
        <div class="auth-page">
            <LandingNavbar/>
            <div class="auth-card">
                <h1>"Password Recovery"</h1>
                <Show
                    when=move || sent.get()
                    fallback=move || {
                        view! {
                            <p>"You will receive an email once you submit the form."</p>
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
                                <Show when=move || error.get().is_some()>
                                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                                </Show>
                                <button
                                    class="btn btn--primary auth-form__submit"
                                    type="submit"
                                    disabled=move || busy.get()
                                >
                                    {move || if busy.get() { "Sending..." } else { "Submit" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <p class="auth-card__success">"Email sent"</p>
                    <p>"Please check the link within the email and reset your password there."</p>
                </Show>
                <p class="auth-card__footer">
                    <a href="/signin">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
