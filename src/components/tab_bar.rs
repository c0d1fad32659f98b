//! Tab Bar Component
//!
//! Switches between the dashboard, problem list, add form and settings.

use leptos::prelude::*;

use crate::context::{AppContext, Tab};

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav-tabs">
            {Tab::ALL.iter().map(|&tab| {
                let tab_class = move || {
                    if ctx.tab.get() == tab { "nav-tab active" } else { "nav-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.select_tab(tab)>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
