//! Drag-and-drop dialog for reordering categories and the items inside them.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::menu::MenuState;
#[cfg(feature = "hydrate")]
use crate::state::reorder::save_with;
use crate::state::reorder::ReorderState;
use crate::state::ui::UiState;

#[component]
pub fn EditMenuPositionButton() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let reorder = expect_context::<RwSignal<ReorderState>>();
    let open = RwSignal::new(false);

    let on_open = move |_| {
        let sections = menu.get_untracked().sections();
        reorder.update(|r| r.load(sections));
        open.set(true);
    };

    view! {
        <button class="btn btn--floating btn--floating-secondary" on:click=on_open>
            "Edit menu position"
        </button>
        <Show when=move || open.get()>
            <EditMenuPosition on_close=Callback::new(move |()| open.set(false))/>
        </Show>
    }
}

#[component]
pub fn EditMenuPosition(on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let reorder = expect_context::<RwSignal<ReorderState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_save = move |_| {
        let state = reorder.get_untracked();
        if !state.is_dirty() {
            on_close.run(());
            return;
        }
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        reorder.update(|r| {
            r.saving = true;
            r.error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = save_positions(&token, &state, reorder).await;
            reorder.update(|r| r.saving = false);
            match result {
                Ok(()) => {
                    menu.update(MenuState::refresh);
                    ui.update(|u| u.info("Menu positions saved."));
                    on_close.run(());
                }
                Err(e) => reorder.update(|r| r.error = Some(e.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, state, menu, ui);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--reorder" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit menu position"</h2>
                <p class="dialog__hint">"Drag categories and items into the order diners should see."</p>
                <ol class="reorder">
                    <For
                        each=move || reorder.with(|r| r.sections.iter().map(|s| (s.category.pk, s.category.name.clone())).collect::<Vec<_>>())
                        key=|(pk, _)| *pk
                        children=move |(pk, name)| view! { <ReorderCategoryRow category_pk=pk name=name/> }
                    />
                </ol>
                <Show when=move || reorder.get().error.is_some()>
                    <p class="dialog__error">{move || reorder.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        disabled=move || reorder.get().saving
                        on:click=on_save
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Rows are keyed by pk and survive moves, so indexes are looked up when
/// each event fires.
#[component]
fn ReorderCategoryRow(category_pk: i64, name: String) -> impl IntoView {
    let reorder = expect_context::<RwSignal<ReorderState>>();
    let index = move || reorder.with_untracked(|r| r.category_index(category_pk));
    let items = move || {
        reorder.with(|r| {
            r.sections
                .iter()
                .find(|s| s.category.pk == category_pk)
                .map(|s| s.items.iter().map(|i| (i.pk, i.name.clone())).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <li
            class="reorder__category"
            class:reorder__category--dragging=move || {
                reorder.with(|r| r.dragged_category().is_some() && r.dragged_category() == r.category_index(category_pk))
            }
            draggable="true"
            on:dragstart=move |_| {
                if let Some(ci) = index() {
                    reorder.update(|r| r.start_category_drag(ci));
                }
            }
            on:dragenter=move |_| {
                if let Some(ci) = index() {
                    reorder.update(|r| r.enter_category(ci));
                }
            }
            on:dragover=move |ev| ev.prevent_default()
            on:dragend=move |_| reorder.update(ReorderState::end_category_drag)
        >
            <span class="reorder__handle">"⠿"</span>
            <span class="reorder__name">{name}</span>
            <ol class="reorder__items">
                <For
                    each=items
                    key=|(pk, _)| *pk
                    children=move |(pk, name)| view! { <ReorderItemRow item_pk=pk name=name/> }
                />
            </ol>
        </li>
    }
}

/// Item rows stop propagation so dragging an item never starts a category drag.
#[component]
fn ReorderItemRow(item_pk: i64, name: String) -> impl IntoView {
    let reorder = expect_context::<RwSignal<ReorderState>>();
    let index = move || reorder.with_untracked(|r| r.item_index(item_pk));
    view! {
        <li
            class="reorder__item"
            class:reorder__item--dragging=move || {
                reorder.with(|r| r.dragged_item().is_some() && r.dragged_item() == r.item_index(item_pk))
            }
            draggable="true"
            on:dragstart=move |ev| {
                ev.stop_propagation();
                if let Some((ci, ii)) = index() {
                    reorder.update(|r| r.start_item_drag(ci, ii));
                }
            }
            on:dragenter=move |ev| {
                ev.stop_propagation();
                if let Some((ci, ii)) = index() {
                    reorder.update(|r| r.enter_item(ci, ii));
                }
            }
            on:dragover=move |ev| ev.prevent_default()
            on:dragend=move |ev| {
                ev.stop_propagation();
                reorder.update(ReorderState::end_item_drag);
            }
        >
            {name}
        </li>
    }
}

/// Save through the REST client, clearing each dirty flag on the live
/// working copy as its part is accepted.
#[cfg(feature = "hydrate")]
async fn save_positions(
    token: &str,
    state: &ReorderState,
    reorder: RwSignal<ReorderState>,
) -> Result<(), crate::net::error::ApiError> {
    use crate::net::api;

    save_with(
        state,
        |positions| async move { api::update_category_positions(token, &positions).await },
        |positions| async move { api::update_menu_item_positions(token, &positions).await },
        |part| reorder.update(|r| r.mark_saved(part)),
    )
    .await
}
