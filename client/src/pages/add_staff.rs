//! Manager-only form creating a wait or kitchen account.

#[cfg(test)]
#[path = "add_staff_test.rs"]
mod add_staff_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::navbar::StaffHeader;
use crate::net::error::ApiError;
use crate::net::types::StaffRole;
use crate::pages::sign_up::PasswordRules;
use crate::state::auth::AuthState;
use crate::state::ui::{ManagerTab, UiState};
use crate::util::auth::install_staff_redirect;
use crate::util::validate;

/// Only wait and kitchen accounts can be created here.
pub fn role_from_query(raw: Option<&str>) -> Option<StaffRole> {
    match raw.and_then(StaffRole::from_wire) {
        Some(role @ (StaffRole::Wait | StaffRole::Kitchen)) => Some(role),
        _ => None,
    }
}

pub fn add_staff_error(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 400, .. } | ApiError::Conflict(_) => {
            "Could not create the account. That email may already be registered.".to_owned()
        }
        _ => err.user_message(),
    }
}

#[component]
pub fn AddStaffPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    install_staff_redirect(auth, StaffRole::Manager, navigate.clone());

    let query = use_query_map();
    let role = Memo::new(move |_| query.with(|q| role_from_query(q.get("role").as_deref())));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let back = {
        let navigate = navigate.clone();
        move || {
            ui.update(|u| u.manager_tab = ManagerTab::Staff);
            navigate(StaffRole::Manager.home_route(), NavigateOptions::default());
        }
    };

    let on_submit = {
        let back = back.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let Some(role) = role.get_untracked() else {
                error.set(Some("Unknown staff role.".to_owned()));
                return;
            };
            let (email_v, password_v, confirm_v) =
                (email.get_untracked().trim().to_owned(), password.get_untracked(), confirm.get_untracked());
            if let Err(msg) = validate::check_account_form(&email_v, &password_v, &confirm_v, &[]) {
                error.set(Some(msg.to_owned()));
                return;
            }
            let Some(token) = auth.with_untracked(|a| a.token.clone()) else {
                return;
            };
            error.set(None);
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let back = back.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::register_staff(&token, &email_v, &password_v, role).await {
                        Ok(()) => {
                            ui.update(|u| u.info(format!("{} account created for {email_v}", role.label())));
                            back();
                        }
                        Err(e) => error.set(Some(add_staff_error(&e))),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&back, token, role, email_v, password_v);
        }
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
        <div class="staff-page">
            <StaffHeader title="Add Staff"/>
            <div class="auth-card">
                <h1>
                    {move || match role.get() {
                        Some(r) => format!("Create a {} account", r.label()),
                        None => "Unknown staff role".to_owned(),
                    }}
                </h1>
                <form class="auth-form" on:submit=on_submit>
                    {field("Email address", "email", email)}
                    <PasswordRules/>
                    {field("Password", "password", password)}
                    {field("Confirm Password", "password", confirm)}
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="auth-form__actions">
                        <button class="btn" type="button" on:click=move |_| back()>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || busy.get() || role.get().is_none()
                        >
                            "Create"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
