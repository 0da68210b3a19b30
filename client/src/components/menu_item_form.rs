//! Shared fields for the add and edit menu item dialogs.

#[cfg(test)]
#[path = "menu_item_form_test.rs"]
mod menu_item_form_test;

use leptos::prelude::*;

use crate::net::types::{Category, Dietary, MenuItem, MenuItemDraft};
use crate::util::validate;

/// Raw text of every field, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuItemFields {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub dietary: String,
    pub preparation_time: String,
    pub popular: bool,
}

impl MenuItemFields {
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_decimal_string(),
            category: item.category.map(|c| c.to_string()).unwrap_or_default(),
            dietary: item.dietary_requirements.code().to_owned(),
            preparation_time: item.preparation_time.to_string(),
            popular: item.popular,
        }
    }

    /// Validate and convert to a request body.
    ///
    /// # Errors
    ///
    /// Returns the first message to show under the form.
    pub fn to_draft(&self) -> Result<MenuItemDraft, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Menu item name cannot be empty.");
        }
        let category: i64 = self
            .category
            .trim()
            .parse()
            .ok()
            .filter(|c| validate::is_valid_id(*c))
            .ok_or("Please choose a category.")?;
        let price = validate::parse_price(&self.price)?;
        let preparation_time = validate::parse_preparation_time(&self.preparation_time)?;
        let dietary_requirements = Dietary::from_code(&self.dietary).unwrap_or_default();
        Ok(MenuItemDraft {
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
            price,
            category,
            dietary_requirements,
            preparation_time,
            popular: self.popular,
        })
    }
}

/// Inputs bound to a `MenuItemFields` signal.
#[component]
pub fn MenuItemFormFields(fields: RwSignal<MenuItemFields>, categories: Signal<Vec<Category>>) -> impl IntoView {
    view! {
        <label class="dialog__label">
            "Name"
            <input
                class="dialog__input"
                type="text"
                prop:value=move || fields.get().name
                on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
            />
        </label>
        <label class="dialog__label">
            "Description"
            <textarea
                class="dialog__input dialog__input--area"
                prop:value=move || fields.get().description
                on:input=move |ev| fields.update(|f| f.description = event_target_value(&ev))
            ></textarea>
        </label>
        <label class="dialog__label">
            "Price ($)"
            <input
                class="dialog__input"
                type="text"
                inputmode="decimal"
                placeholder="12.50"
                prop:value=move || fields.get().price
                on:input=move |ev| fields.update(|f| f.price = event_target_value(&ev))
            />
        </label>
        <label class="dialog__label">
            "Category"
            <select
                class="dialog__input"
                prop:value=move || fields.get().category
                on:change=move |ev| fields.update(|f| f.category = event_target_value(&ev))
            >
                <option value="">"Choose a category"</option>
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|c| view! { <option value=c.pk.to_string()>{c.name}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
        <label class="dialog__label">
            "Dietary requirement"
            <select
                class="dialog__input"
                prop:value=move || fields.get().dietary
                on:change=move |ev| fields.update(|f| f.dietary = event_target_value(&ev))
            >
                {Dietary::ALL
                    .into_iter()
                    .map(|d| view! { <option value=d.code()>{d.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
        <label class="dialog__label">
            "Preparation time (minutes)"
            <input
                class="dialog__input"
                type="number"
                min="1"
                prop:value=move || fields.get().preparation_time
                on:input=move |ev| fields.update(|f| f.preparation_time = event_target_value(&ev))
            />
        </label>
        <label class="dialog__label dialog__label--inline">
            <input
                type="checkbox"
                prop:checked=move || fields.get().popular
                on:change=move |ev| fields.update(|f| f.popular = event_target_checked(&ev))
            />
            "Popular (show in specials)"
        </label>
    }
}
