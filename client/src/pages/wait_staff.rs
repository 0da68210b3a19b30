//! Wait staff page: ready dishes, tables and assistance calls.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::menu_view::install_menu_loader;
use crate::components::navbar::StaffHeader;
use crate::components::notice_banner::NoticeBanner;
use crate::components::table_panel::TablePanel;
use crate::net::types::StaffRole;
use crate::state::auth::AuthState;
use crate::util::auth::install_staff_redirect;

#[component]
pub fn WaitStaffPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_staff_redirect(auth, StaffRole::Wait, use_navigate());
    install_menu_loader(true);

    view! {
        <div class="staff-page">
            <StaffHeader title="Wait Staff"/>
            <NoticeBanner/>
            <main class="staff-page__body">
                <TablePanel/>
            </main>
        </div>
    }
}
