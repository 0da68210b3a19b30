//! Card for one menu item in the menu grid or specials strip.

use leptos::prelude::*;

use super::item_detail_modal::ItemDetailModal;
use crate::net::types::{Dietary, MenuItem};

/// Clicking the card opens `ItemDetailModal`; `editable` selects the
/// manager edit form over the add-to-cart body.
#[component]
pub fn MenuItemCard(item: MenuItem, #[prop(optional)] editable: bool) -> impl IntoView {
    let open = RwSignal::new(false);
    let on_close = Callback::new(move |()| open.set(false));

    let dietary = item.dietary_requirements;
    let modal_item = item.clone();

    view! {
        <article class="menu-card" class:menu-card--popular=item.popular on:click=move |_| open.set(true)>
            {item
                .image
                .clone()
                .map(|src| view! { <img class="menu-card__image" src=src alt=item.name.clone() loading="lazy"/> })}
            <div class="menu-card__body">
                <h3 class="menu-card__name">{item.name.clone()}</h3>
                <p class="menu-card__description">{item.description.clone()}</p>
                <div class="menu-card__footer">
                    <span class="menu-card__price">{item.price.to_string()}</span>
                    {(dietary != Dietary::None)
                        .then(|| view! { <span class="tag tag--dietary">{dietary.code()}</span> })}
                </div>
            </div>
        </article>
        <Show when=move || open.get()>
            <ItemDetailModal item=modal_item.clone() editable=editable on_close=on_close/>
        </Show>
    }
}
