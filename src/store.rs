//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::ProblemFilter;
use crate::models::{Problem, StatsSnapshot};
use crate::notice::{NoticeKind, NoticeSlot};
use crate::state::ProblemCache;
use crate::tracker::Refresh;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last successful `GET /api/problems`
    pub cache: ProblemCache,
    /// Last successful `GET /api/stats`
    pub stats: StatsSnapshot,
    /// Search box and filter selects of the problem list
    pub filter: ProblemFilter,
    /// The one visible notification
    pub notice: NoticeSlot,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cached list with a fresh server response
pub fn store_replace_problems(store: &AppStore, problems: Vec<Problem>) {
    store.cache().write().replace(problems);
}

/// Replace the stats snapshot
pub fn store_set_stats(store: &AppStore, stats: StatsSnapshot) {
    *store.stats().write() = stats;
}

/// Show a notification, replacing the current one; returns its id
pub fn store_show_notice(store: &AppStore, kind: NoticeKind, text: String) -> u64 {
    store.notice().write().show(kind, text)
}

/// Drop notification `id` if it is still showing
pub fn store_expire_notice(store: &AppStore, id: u64) {
    store.notice().write().expire(id);
}

/// Store whatever reloaded successfully; returns the notice for what did not
pub fn store_apply_refresh(store: &AppStore, refresh: Refresh) -> Option<&'static str> {
    let failure = refresh.error_notice();
    if let Ok(problems) = refresh.problems {
        store_replace_problems(store, problems);
    }
    if let Ok(stats) = refresh.stats {
        store_set_stats(store, stats);
    }
    failure
}
