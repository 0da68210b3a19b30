//! Manager dialog for adding a menu item or a new category.

#[cfg(test)]
#[path = "add_menu_item_modal_test.rs"]
mod add_menu_item_modal_test;

use leptos::html::Input;
use leptos::prelude::*;

use super::menu_item_form::{MenuItemFields, MenuItemFormFields};
use crate::net::types::Category;
use crate::state::auth::AuthState;
use crate::state::menu::MenuState;
use crate::state::ui::UiState;

/// Which form the dialog shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddMode {
    Item,
    Category,
}

/// Trimmed category name, or why it cannot be created. Names compare
/// case-insensitively against existing categories.
pub fn check_new_category(name: &str, existing: &[Category]) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Category name cannot be empty!");
    }
    if existing.iter().any(|c| c.name.eq_ignore_ascii_case(name)) {
        return Err("A category with that name already exists.");
    }
    Ok(name.to_owned())
}

/// Floating "Add new menu" button that owns the dialog.
#[component]
pub fn AddMenuItemButton() -> impl IntoView {
    let open = RwSignal::new(false);
    view! {
        <button class="btn btn--primary btn--floating" on:click=move |_| open.set(true)>
            "Add new menu"
        </button>
        <Show when=move || open.get()>
            <AddMenuItemModal on_close=Callback::new(move |()| open.set(false))/>
        </Show>
    }
}

#[component]
pub fn AddMenuItemModal(on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let mode = RwSignal::new(AddMode::Item);
    let fields = RwSignal::new(MenuItemFields::default());
    let category_name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let image_ref = NodeRef::<Input>::new();
    let categories = Signal::derive(move || menu.get().categories);

    let switch_mode = move |next: AddMode| {
        error.set(None);
        mode.set(next);
    };

    let on_add_category = move |_| {
        let name = match check_new_category(&category_name.get_untracked(), &menu.get_untracked().categories) {
            Ok(n) => n,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_category(&token, &name).await {
                Ok(created) => {
                    let pk = created.pk.to_string();
                    menu.update(MenuState::refresh);
                    fields.update(|f| f.category = pk);
                    category_name.set(String::new());
                    error.set(None);
                    mode.set(AddMode::Item);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, name);
    };

    let on_add_item = move |_| {
        let draft = match fields.get_untracked().to_draft() {
            Ok(d) => d,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let image = image_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            leptos::task::spawn_local(async move {
                match crate::net::api::create_menu_item(&token, &draft, image).await {
                    Ok(item) => {
                        menu.update(MenuState::refresh);
                        ui.update(|u| u.info(format!("Added {}.", item.name)));
                        on_close.run(());
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, draft, ui);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--item" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>
                        {move || match mode.get() {
                            AddMode::Item => "Add new menu",
                            AddMode::Category => "Add new category",
                        }}
                    </h2>
                    {move || match mode.get() {
                        AddMode::Item => {
                            view! {
                                <button class="btn btn--small" on:click=move |_| switch_mode(AddMode::Category)>
                                    "+ Category"
                                </button>
                            }
                                .into_any()
                        }
                        AddMode::Category => {
                            view! {
                                <button class="btn btn--small" on:click=move |_| switch_mode(AddMode::Item)>
                                    "+ Menu"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>

                <Show
                    when=move || mode.get() == AddMode::Item
                    fallback=move || {
                        view! {
                            <label class="dialog__label">
                                "Category name"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || category_name.get()
                                    on:input=move |ev| category_name.set(event_target_value(&ev))
                                />
                            </label>
                        }
                    }
                >
                    <MenuItemFormFields fields=fields categories=categories/>
                    <label class="dialog__label">
                        "Image"
                        <input class="dialog__input" type="file" accept="image/*" node_ref=image_ref/>
                    </label>
                </Show>

                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <Show
                        when=move || mode.get() == AddMode::Item
                        fallback=move || {
                            view! {
                                <button class="btn btn--primary" disabled=move || busy.get() on:click=on_add_category>
                                    "Add category"
                                </button>
                            }
                        }
                    >
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=on_add_item>
                            "Add item"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
