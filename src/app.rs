//! DSA Tracker Frontend App
//!
//! Main application component: header, tabs and the four panels.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpBackend;
use crate::components::{DashboardPanel, DataTransfer, GithubSettings, NoticeBar, ProblemForm, ProblemList, TabBar};
use crate::config::AppConfig;
use crate::context::{AppContext, Tab};
use crate::store::AppState;
use crate::tracker::Tracker;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let tracker = Tracker::new(HttpBackend::new(config.api_base.clone()));
    let ctx = AppContext::new(store, tracker, &config, signal(Tab::Dashboard));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Initial load of both views
    Effect::new(move |_| {
        ctx.load_stats();
        ctx.load_problems();
    });

    // Panels stay mounted so form input survives tab switches
    let panel_class = move |tab: Tab| {
        if ctx.tab.get() == tab { "tab-content active" } else { "tab-content" }
    };

    view! {
        <div class="container">
            <NoticeBar />

            <header class="header">
                <h1>"DSA Problem Tracker"</h1>
                <p>"Track solved problems and sync them to GitHub"</p>
            </header>

            <TabBar />

            <section class=move || panel_class(Tab::Dashboard)>
                <DashboardPanel />
            </section>
            <section class=move || panel_class(Tab::Problems)>
                <ProblemList />
            </section>
            <section class=move || panel_class(Tab::Add)>
                <ProblemForm />
            </section>
            <section class=move || panel_class(Tab::Settings)>
                <GithubSettings />
                <DataTransfer />
            </section>
        </div>
    }
}
