//! Problem List Component
//!
//! Filtered view over the cache, or the empty state.

use leptos::prelude::*;

use crate::components::{FilterBar, ProblemCardItem};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::{count_label, ListView, EMPTY_HINT, EMPTY_TITLE};

#[component]
pub fn ProblemList() -> impl IntoView {
    let store = use_app_store();

    // Re-derived whenever the cache is replaced or the filter changes
    let list = Memo::new(move |_| {
        let filter = store.filter().read();
        ListView::build(&filter.apply(store.cache().read().records()))
    });

    let count = Memo::new(move |_| {
        let cache = store.cache().read();
        if !cache.is_loaded() || cache.is_empty() {
            return None;
        }
        let filter = store.filter().read();
        let shown = cache.records().iter().filter(|p| filter.matches(p)).count();
        Some(count_label(shown, cache.len(), filter.is_active()))
    });

    view! {
        <div class="problems-section">
            <FilterBar />
            {move || count.get().map(|label| view! { <p class="problem-count">{label}</p> })}
            <div class="problems-list">
                {move || match list.get() {
                    ListView::Empty => view! {
                        <div class="empty-state">
                            <h3>{EMPTY_TITLE}</h3>
                            <p>{EMPTY_HINT}</p>
                        </div>
                    }.into_any(),
                    ListView::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <ProblemCardItem card=card /> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}
