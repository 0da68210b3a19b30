//! Manager's Staff tab: accounts grouped by role with links to add more.

#[cfg(test)]
#[path = "staff_list_test.rs"]
mod staff_list_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{StaffMember, StaffRole};
use crate::state::auth::AuthState;

/// Members with `role`, sorted by username.
pub fn staff_with_role(staff: &[StaffMember], role: StaffRole) -> Vec<StaffMember> {
    let mut out: Vec<StaffMember> = staff.iter().filter(|m| m.role == role).cloned().collect();
    out.sort_by(|a, b| a.username.cmp(&b.username));
    out
}

/// `/addstaff` link for a role.
pub fn add_staff_route(role: StaffRole) -> String {
    format!("/addstaff?role={}", role.wire())
}

#[component]
pub fn StaffList() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let staff = RwSignal::new(Vec::<StaffMember>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let Some(token) = auth.with(|a| if a.loading { None } else { a.token.clone() }) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_staff(&token).await {
                Ok(list) => {
                    staff.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    view! {
        <div class="staff">
            <Show when=move || error.get().is_some()>
                <p class="staff__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <StaffGroup title="Kitchen Staff" role=StaffRole::Kitchen staff=staff/>
                <StaffGroup title="Wait Staff" role=StaffRole::Wait staff=staff/>
            </Show>
        </div>
    }
}

#[component]
fn StaffGroup(title: &'static str, role: StaffRole, staff: RwSignal<Vec<StaffMember>>) -> impl IntoView {
    let navigate = use_navigate();
    let on_add = move |_| navigate(&add_staff_route(role), NavigateOptions::default());

    view! {
        <section class="staff__group">
            <div class="staff__group-header">
                <h2>{title}</h2>
                <button class="btn btn--primary" on:click=on_add>{format!("Add {}", role.label())}</button>
            </div>
            {move || {
                let members = staff.with(|s| staff_with_role(s, role));
                if members.is_empty() {
                    return view! { <p class="staff__empty">"No accounts yet."</p> }.into_any();
                }
                members
                    .into_iter()
                    .map(|m| {
                        view! {
                            <div class="staff-card">
                                <span class="staff-card__name">{m.username}</span>
                                <span class="tag">{m.role.label()}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </section>
    }
}
