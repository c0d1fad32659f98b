//! Statistics card component.

use leptos::prelude::*;

/// One big number with a caption
#[component]
pub fn StatCard(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] label: String,
    /// Extra class, e.g. `easy` / `medium` / `hard`
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", class)>
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
