//! One category heading plus its item grid, with the manager's
//! rename/delete dialog.

#[cfg(test)]
#[path = "category_section_test.rs"]
mod category_section_test;

use leptos::prelude::*;

use super::menu_item_card::MenuItemCard;
use crate::state::auth::AuthState;
use crate::state::menu::{MenuSection, MenuState, section_anchor};
use crate::state::ui::UiState;

/// Trimmed new name, or why the rename would be refused.
pub fn check_category_rename(new_name: &str, old_name: &str) -> Result<String, &'static str> {
    let name = new_name.trim();
    if name.is_empty() {
        return Err("Category name cannot be empty!");
    }
    if name == old_name {
        return Err("New category name is the same as the old one!");
    }
    Ok(name.to_owned())
}

#[component]
pub fn CategorySection(section: MenuSection, for_manager: bool) -> impl IntoView {
    let editing = RwSignal::new(false);
    let category = section.category.clone();
    let empty = section.items.is_empty();

    let cards = section
        .items
        .into_iter()
        .map(|item| view! { <MenuItemCard item=item editable=for_manager/> })
        .collect::<Vec<_>>();

    view! {
        <section class="menu-section" id=section_anchor(category.pk)>
            <div class="menu-section__header">
                <h2 class="menu-section__title">{category.name.clone()}</h2>
                {for_manager
                    .then(|| {
                        view! {
                            <button class="btn btn--small" on:click=move |_| editing.set(true)>
                                "Edit"
                            </button>
                        }
                    })}
            </div>
            {empty.then(|| view! { <p class="menu-section__empty">"No items yet."</p> })}
            <div class="menu-grid">{cards}</div>
        </section>
        <Show when=move || editing.get()>
            <EditCategoryDialog
                pk=category.pk
                name=category.name.clone()
                on_close=Callback::new(move |()| editing.set(false))
            />
        </Show>
    }
}

#[component]
fn EditCategoryDialog(pk: i64, name: String, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let draft = RwSignal::new(name.clone());
    let error = RwSignal::new(None::<String>);

    let on_save = move |_| {
        let new_name = match check_category_rename(&draft.get_untracked(), &name) {
            Ok(n) => n,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        let Some(token) = auth.get_untracked().token else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::rename_category(&token, pk, &new_name).await {
                Ok(()) => {
                    menu.update(MenuState::refresh);
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, new_name);
    };

    let on_delete = move |_| {
        let Some(token) = auth.get_untracked().token else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_category(&token, pk).await {
                Ok(()) => {
                    menu.update(MenuState::refresh);
                    ui.update(|u| u.info("Category deleted."));
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Category"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn btn--danger" on:click=on_delete>"Delete Category"</button>
                    <span class="dialog__spacer"></span>
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=on_save>"Save changes"</button>
                </div>
            </div>
        </div>
    }
}
