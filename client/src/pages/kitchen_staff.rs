//! Kitchen page: the live order board.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::menu_view::install_menu_loader;
use crate::components::navbar::StaffHeader;
use crate::components::notice_banner::NoticeBanner;
use crate::components::order_board::OrderBoard;
use crate::net::types::StaffRole;
use crate::state::auth::AuthState;
use crate::util::auth::install_staff_redirect;

#[component]
pub fn KitchenStaffPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_staff_redirect(auth, StaffRole::Kitchen, use_navigate());
    install_menu_loader(true);

    view! {
        <div class="staff-page">
            <StaffHeader title="Kitchen"/>
            <NoticeBanner/>
            <main class="staff-page__body">
                <OrderBoard/>
            </main>
        </div>
    }
}
