//! Dialog for one menu item: add-to-cart for diners, edit form for managers.

use leptos::prelude::*;

use super::menu_item_form::{MenuItemFields, MenuItemFormFields};
use crate::net::types::MenuItem;
use crate::state::auth::AuthState;
use crate::state::cart::{CartLine, CartState};
use crate::state::menu::MenuState;
use crate::state::ui::UiState;

#[component]
pub fn ItemDetailModal(item: MenuItem, editable: bool, on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let body = if editable {
        view! { <EditItemBody item=item on_close=on_close/> }.into_any()
    } else {
        view! { <OrderItemBody item=item on_close=on_close/> }.into_any()
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--item"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                {body}
            </div>
        </div>
    }
}

#[component]
fn OrderItemBody(item: MenuItem, on_close: Callback<()>) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let amount = RwSignal::new(1_u32);

    let name = item.name.clone();
    let summary = item.clone();
    let on_add = move |_| {
        let line = CartLine::for_item(&item, amount.get_untracked());
        cart.update(|c| c.add(line));
        ui.update(|u| u.info(format!("Added {} to your cart.", item.name)));
        on_close.run(());
    };

    view! {
        <ItemSummary item=summary/>
        <div class="dialog__counter">
            <button
                class="btn"
                disabled=move || amount.get() <= 1
                on:click=move |_| amount.update(|a| *a = a.saturating_sub(1).max(1))
            >
                "−"
            </button>
            <span class="dialog__counter-value">{move || amount.get()}</span>
            <button class="btn" on:click=move |_| amount.update(|a| *a += 1)>
                "+"
            </button>
        </div>
        <div class="dialog__actions">
            <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
            <button class="btn btn--primary" on:click=on_add title=format!("Add {name}")>
                "Add to Cart"
            </button>
        </div>
    }
}

#[component]
fn EditItemBody(item: MenuItem, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let fields = RwSignal::new(MenuItemFields::from_item(&item));
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let categories = Signal::derive(move || menu.get().categories);
    let pk = item.pk;

    // The list entry may be stale; start the form from the stored item.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let api_auth = auth.get_untracked().api_auth();
            leptos::task::spawn_local(async move {
                match crate::net::api::get_menu_item(&api_auth, pk).await {
                    Ok(fresh) => fields.set(MenuItemFields::from_item(&fresh)),
                    Err(crate::net::error::ApiError::NotFound(_)) => {
                        error.set(Some("This menu item no longer exists.".to_owned()));
                        menu.update(MenuState::refresh);
                    }
                    Err(e) => leptos::logging::warn!("menu item reload failed: {e}"),
                }
            });
        }
    });

    let on_save = move |_| {
        let draft = match fields.get_untracked().to_draft() {
            Ok(draft) => draft,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        let Some(token) = auth.get_untracked().token else {
            error.set(Some("Please sign in again.".to_owned()));
            return;
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_menu_item(&token, pk, &draft).await {
                Ok(_) => {
                    menu.update(MenuState::refresh);
                    ui.update(|u| u.info("Menu item updated."));
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, draft);
    };

    let on_delete = move |_| {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_menu_item(&token, pk).await {
                Ok(()) => {
                    menu.update(MenuState::refresh);
                    ui.update(|u| u.info("Menu item deleted."));
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    view! {
        <h2>{format!("Edit {}", item.name)}</h2>
        <MenuItemFormFields fields=fields categories=categories/>
        <Show when=move || error.get().is_some()>
            <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <div class="dialog__actions">
            <Show
                when=move || confirm_delete.get()
                fallback=move || {
                    view! {
                        <button class="btn btn--danger" on:click=move |_| confirm_delete.set(true)>
                            "Delete"
                        </button>
                    }
                }
            >
                <span class="dialog__confirm">"Delete this item?"</span>
                <button class="btn btn--danger" disabled=move || busy.get() on:click=on_delete>
                    "Yes, delete"
                </button>
                <button class="btn" on:click=move |_| confirm_delete.set(false)>"Keep"</button>
            </Show>
            <span class="dialog__spacer"></span>
            <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
            <button class="btn btn--primary" disabled=move || busy.get() on:click=on_save>
                "Save"
            </button>
        </div>
    }
}

/// Image, description and tags shared by both dialog bodies.
#[component]
pub fn ItemSummary(item: MenuItem) -> impl IntoView {
    let dietary = item.dietary_requirements;
    view! {
        <h2>{item.name.clone()}</h2>
        {item.image.clone().map(|src| view! { <img class="dialog__image" src=src alt=item.name.clone()/> })}
        <p class="dialog__description">{item.description.clone()}</p>
        <div class="dialog__tags">
            <span class="tag tag--price">{item.price.to_string()}</span>
            <span class="tag">{format!("{} min", item.preparation_time)}</span>
            {(dietary != crate::net::types::Dietary::None)
                .then(|| view! { <span class="tag tag--dietary">{dietary.label()}</span> })}
            {item.popular.then(|| view! { <span class="tag tag--popular">"Popular"</span> })}
        </div>
    }
}
