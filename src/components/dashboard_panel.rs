//! Dashboard Panel Component
//!
//! Renders the server's stats snapshot. No counting happens here.

use leptos::prelude::*;

use crate::components::{BreakdownList, StatCard};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::{breakdown, Counters, ProblemCard};

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let store = use_app_store();

    let counters = Memo::new(move |_| Counters::from(&*store.stats().read()));
    let categories = Signal::derive(move || breakdown(&store.stats().read().categories));
    let platforms = Signal::derive(move || breakdown(&store.stats().read().platforms));
    let recent = Memo::new(move |_| {
        store.stats().read().recent_problems.iter().map(ProblemCard::from).collect::<Vec<_>>()
    });

    view! {
        <div class="dashboard">
            <div class="stats-grid">
                <StatCard value=Signal::derive(move || counters.get().total) label="Total Solved" />
                <StatCard value=Signal::derive(move || counters.get().easy) label="Easy" class="easy" />
                <StatCard value=Signal::derive(move || counters.get().medium) label="Medium" class="medium" />
                <StatCard value=Signal::derive(move || counters.get().hard) label="Hard" class="hard" />
            </div>

            <div class="breakdowns">
                <BreakdownList title="By Category" rows=categories />
                <BreakdownList title="By Platform" rows=platforms />
            </div>

            <Show when=move || !recent.get().is_empty()>
                <div class="stats-section recent">
                    <h3>"Recently Solved"</h3>
                    <For
                        each=move || recent.get()
                        key=|card| card.key()
                        children=|card| {
                            view! {
                                <div class="recent-item">
                                    <span class="problem-name">{card.name}</span>
                                    <span class="problem-platform">{card.platform}</span>
                                    <span class=card.badge_class>{card.badge_label}</span>
                                    <span class="problem-date">{card.date_label}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
