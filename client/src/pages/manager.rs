//! Manager console with Menu, Orders, Tables and Staff tabs.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::menu_view::{MenuView, install_menu_loader};
use crate::components::navbar::StaffHeader;
use crate::components::notice_banner::NoticeBanner;
use crate::components::order_board::OrderBoard;
use crate::components::staff_list::StaffList;
use crate::components::table_panel::TablePanel;
use crate::net::types::StaffRole;
use crate::state::auth::AuthState;
use crate::state::ui::{ManagerTab, UiState};
use crate::util::auth::install_staff_redirect;

#[component]
pub fn ManagerPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_staff_redirect(auth, StaffRole::Manager, use_navigate());
    install_menu_loader(true);

    view! {
        <div class="staff-page">
            <StaffHeader title="Manager">
                <nav class="tabs">
                    {ManagerTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || ui.get().manager_tab == tab
                                    on:click=move |_| ui.update(|u| u.manager_tab = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </StaffHeader>
            <NoticeBanner/>
            <main class="staff-page__body">
                {move || match ui.get().manager_tab {
                    ManagerTab::Menu => view! { <MenuView for_manager=true/> }.into_any(),
                    ManagerTab::Orders => view! { <OrderBoard/> }.into_any(),
                    ManagerTab::Tables => view! { <TablePanel/> }.into_any(),
                    ManagerTab::Staff => view! { <StaffList/> }.into_any(),
                }}
            </main>
        </div>
    }
}
