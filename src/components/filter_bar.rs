//! Filter Bar Component
//!
//! Search box and the difficulty/platform/category selects. Writes only
//! the filter state; the list derives its view from it.

use leptos::prelude::*;

use crate::filter::{self, select_value};
use crate::models::Difficulty;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    // Options come from whatever is in the cache
    let platforms = Memo::new(move |_| filter::platforms(store.cache().read().records()));
    let categories = Memo::new(move |_| filter::categories(store.cache().read().records()));

    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Search problems..."
                prop:value=move || store.filter().read().query.clone()
                on:input=move |ev| store.filter().write().query = event_target_value(&ev)
            />

            <select
                class="filter-select"
                prop:value=move || {
                    store.filter().read().difficulty.map(|d| d.as_str()).unwrap_or_default().to_string()
                }
                on:change=move |ev| {
                    store.filter().write().difficulty = Difficulty::parse(&event_target_value(&ev));
                }
            >
                <option value="">"All Difficulties"</option>
                {Difficulty::ALL.iter().map(|d| view! {
                    <option value=d.as_str()>{d.label()}</option>
                }).collect_view()}
            </select>

            <select
                class="filter-select"
                prop:value=move || store.filter().read().platform.clone().unwrap_or_default()
                on:change=move |ev| store.filter().write().platform = select_value(event_target_value(&ev))
            >
                <option value="">"All Platforms"</option>
                <For
                    each=move || platforms.get()
                    key=|p| p.clone()
                    children=|p| view! { <option value=p.clone()>{p.clone()}</option> }
                />
            </select>

            <select
                class="filter-select"
                prop:value=move || store.filter().read().category.clone().unwrap_or_default()
                on:change=move |ev| store.filter().write().category = select_value(event_target_value(&ev))
            >
                <option value="">"All Categories"</option>
                <For
                    each=move || categories.get()
                    key=|c| c.clone()
                    children=|c| view! { <option value=c.clone()>{c.clone()}</option> }
                />
            </select>
        </div>
    }
}
