//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    add_staff::AddStaffPage, customer_bill::CustomerBillPage, customer_menu::CustomerMenuPage, help::HelpPage,
    kitchen_staff::KitchenStaffPage, landing::LandingPage, manager::ManagerPage, password_reset::PasswordResetPage,
    ready_to_dine_in::ReadyToDineInPage, sign_in::SignInPage, sign_up::SignUpPage, table_number::TableNumberPage,
    wait_staff::WaitStaffPage,
};
use crate::state::{
    auth::AuthState,
    cart::{self, CartState},
    menu::MenuState,
    orders::OrdersState,
    reorder::ReorderState,
    tables::TablesState,
    ui::UiState,
};
use crate::util::{auth as session, dark_mode, storage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let menu = RwSignal::new(MenuState::default());
    let cart = RwSignal::new(CartState::default());
    let orders = RwSignal::new(OrdersState::default());
    let tables = RwSignal::new(TablesState::default());
    let reorder = RwSignal::new(ReorderState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(menu);
    provide_context(cart);
    provide_context(orders);
    provide_context(tables);
    provide_context(reorder);

    // Effects only run after hydration, so storage is read in the browser.
    Effect::new(move || {
        auth.set(session::load_session());
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        if let Some(saved) = storage::load_json::<CartState>(cart::STORAGE_KEY) {
            cart.set(saved);
        }
    });

    Effect::new(move |first: Option<()>| {
        let current = cart.get();
        if first.is_some() {
            storage::save_json(cart::STORAGE_KEY, &current);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/quenify.css"/>
        <Title text="Quenify"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("passwordreset") view=PasswordResetPage/>
                <Route path=StaticSegment("readytodinein") view=ReadyToDineInPage/>
                <Route path=StaticSegment("tablenumber") view=TableNumberPage/>
                <Route path=StaticSegment("customermenu") view=CustomerMenuPage/>
                <Route path=StaticSegment("bill") view=CustomerBillPage/>
                <Route path=StaticSegment("manager") view=ManagerPage/>
                <Route path=StaticSegment("waitstaff") view=WaitStaffPage/>
                <Route path=StaticSegment("kitchenstaff") view=KitchenStaffPage/>
                <Route path=StaticSegment("addstaff") view=AddStaffPage/>
                <Route path=StaticSegment("help") view=HelpPage/>
            </Routes>
        </Router>
    }
}
