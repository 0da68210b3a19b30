//! Top bars: the public landing bar and the staff header.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Theme toggle shared by every bar.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <button
            class="btn navbar__dark-toggle"
            on:click=move |_| {
                let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                ui.update(|u| u.dark_mode = next);
            }
            title="Toggle dark mode"
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}

/// Navbar for the landing, sign-in and help pages.
#[component]
pub fn LandingNavbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"QUENIFY"</a>
            <span class="navbar__spacer"></span>
            <a class="navbar__link" href="/help">"Help"</a>
            <a class="navbar__link" href="/signin">"Sign In"</a>
            <a class="btn btn--primary navbar__link" href="/signup">"Sign Up"</a>
            <DarkModeToggle/>
        </header>
    }
}

/// Header for staff pages with an optional slot (manager tabs) and logout.
#[component]
pub fn StaffHeader(title: &'static str, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let token = auth.get_untracked().token;
        crate::util::auth::clear_session();
        auth.update(AuthState::sign_out);
        navigate("/", NavigateOptions::default());

        #[cfg(feature = "hydrate")]
        if let Some(token) = token {
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::logout(&token).await {
                    leptos::logging::warn!("logout failed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    view! {
        <header class="navbar navbar--staff">
            <span class="navbar__brand">"QUENIFY"</span>
            <span class="navbar__title">{title}</span>
            <span class="navbar__spacer"></span>
            {children.map(|c| c())}
            <span class="navbar__spacer"></span>
            <DarkModeToggle/>
            <button class="btn navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
