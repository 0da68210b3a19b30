//! Menu body shared by the customer menu and the manager's menu tab:
//! sidebar anchors, search, specials strip and one section per category.

#[cfg(test)]
#[path = "menu_view_test.rs"]
mod menu_view_test;

use leptos::prelude::*;

use super::add_menu_item_modal::AddMenuItemButton;
use super::category_section::CategorySection;
use super::edit_menu_position::EditMenuPositionButton;
use super::menu_item_card::MenuItemCard;
use crate::net::api::Auth;
use crate::state::auth::AuthState;
use crate::state::menu::{self, MenuState, section_anchor};

/// Fetch categories and items into `MenuState`.
#[cfg(feature = "hydrate")]
pub async fn load_menu(auth: Auth, menu: RwSignal<MenuState>) {
    use crate::net::api;

    menu.update(|m| m.loading = true);
    let (categories, items) = futures::join!(api::list_categories(&auth), api::list_menu_items(&auth));
    match (categories, items) {
        (Ok(categories), Ok(items)) => menu.update(|m| m.set_loaded(categories, items)),
        (Err(e), _) | (_, Err(e)) => {
            leptos::logging::warn!("menu load failed: {e}");
            menu.update(|m| {
                m.loading = false;
                m.error = Some(e.user_message());
            });
        }
    }
}

/// Credentials for a menu fetch, or `None` while a manager's session is
/// still loading or missing. Diners always fetch anonymously.
pub(crate) fn loader_auth(for_manager: bool, loading: bool, token: Option<String>) -> Option<Auth> {
    if !for_manager {
        return Some(Auth::Customer);
    }
    if loading {
        return None;
    }
    token.map(Auth::Staff)
}

/// Reload the menu whenever `MenuState::refresh` is called.
///
/// Managers wait for the stored session before fetching with their token.
/// The diner loader never reads `AuthState`, so session changes do not
/// refetch their menu.
pub fn install_menu_loader(for_manager: bool) {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu = expect_context::<RwSignal<MenuState>>();

    let refresh_seq = Memo::new(move |_| menu.with(|m| m.refresh_seq));
    let session = Memo::new(move |_| {
        if for_manager { auth.with(|a| (a.loading, a.token.clone())) } else { (false, None) }
    });

    Effect::new(move || {
        refresh_seq.track();
        let (loading, token) = session.get();
        let Some(api_auth) = loader_auth(for_manager, loading, token) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_menu(api_auth, menu));
        #[cfg(not(feature = "hydrate"))]
        let _ = api_auth;
    });
}

/// Menu body. The page installs the loader with `install_menu_loader`.
#[component]
pub fn MenuView(#[prop(optional)] for_manager: bool) -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    let specials = move || menu::specials(&menu.get().items);

    view! {
        <div class="menu-layout">
            <MenuSidebar/>
            <div class="menu-main">
                <input
                    class="menu-search"
                    type="search"
                    placeholder="Search the menu"
                    prop:value=move || menu.get().query
                    on:input=move |ev| menu.update(|m| m.query = event_target_value(&ev))
                />
                <Show when=move || menu.get().loading>
                    <p class="menu-main__status">"Loading..."</p>
                </Show>
                <Show when=move || menu.get().error.is_some()>
                    <p class="menu-main__status menu-main__status--error">
                        {move || menu.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || !specials().is_empty() && menu.get().query.trim().is_empty()>
                    <h2 class="menu-specials__title">"Special Menu Items"</h2>
                    <div class="menu-specials">
                        {move || {
                            specials()
                                .into_iter()
                                .map(|item| view! { <MenuItemCard item=item editable=for_manager/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
                {move || {
                    let sections = menu.get().visible_sections();
                    if sections.is_empty() && !menu.get().loading {
                        return view! { <p class="menu-main__empty">"No menu item found"</p> }.into_any();
                    }
                    sections
                        .into_iter()
                        .map(|section| view! { <CategorySection section=section for_manager=for_manager/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
            {for_manager
                .then(|| {
                    view! {
                        <AddMenuItemButton/>
                        <EditMenuPositionButton/>
                    }
                })}
        </div>
    }
}

/// Category list that scrolls to the matching section.
#[component]
fn MenuSidebar() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    view! {
        <nav class="menu-sidebar">
            {move || {
                menu.get()
                    .sections()
                    .into_iter()
                    .map(|section| {
                        let href = format!("#{}", section_anchor(section.category.pk));
                        view! {
                            <a class="menu-sidebar__link" href=href>
                                {section.category.name}
                                <span class="menu-sidebar__count">{section.items.len()}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
