//! Keyed count list (categories, platforms).

use leptos::prelude::*;

use crate::view_model::BreakdownRow;

#[component]
pub fn BreakdownList(#[prop(into)] title: String, #[prop(into)] rows: Signal<Vec<BreakdownRow>>) -> impl IntoView {
    view! {
        <div class="stats-section">
            <h3>{title}</h3>
            <div class="stat-list">
                <For
                    each=move || rows.get()
                    key=|row| (row.name.clone(), row.count)
                    children=|row| {
                        view! {
                            <div class="stat-item">
                                <span class="stat-name">{row.name}</span>
                                <span class="stat-count">{row.count}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
