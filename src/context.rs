//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpBackend;
use crate::config::AppConfig;
use crate::error::Error;
use crate::notice::{text, NoticeKind};
use crate::store::{
    store_apply_refresh, store_expire_notice, store_replace_problems, store_set_stats,
    store_show_notice, AppStore,
};
use crate::tracker::{Refresh, Tracker};

pub type AppTracker = Tracker<HttpBackend>;

/// In-page tabs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Problems,
    Add,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Problems, Tab::Add, Tab::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Problems => "Problems",
            Tab::Add => "Add Problem",
            Tab::Settings => "Settings",
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    tracker: StoredValue<AppTracker>,
    notice_ttl_ms: u32,
    /// Selected tab - read
    pub tab: ReadSignal<Tab>,
    /// Selected tab - write
    set_tab: WriteSignal<Tab>,
}

impl AppContext {
    pub fn new(
        store: AppStore,
        tracker: AppTracker,
        config: &AppConfig,
        tab: (ReadSignal<Tab>, WriteSignal<Tab>),
    ) -> Self {
        Self {
            store,
            tracker: StoredValue::new(tracker),
            notice_ttl_ms: config.notice_ttl_ms,
            tab: tab.0,
            set_tab: tab.1,
        }
    }

    pub fn tracker(&self) -> AppTracker {
        self.tracker.get_value()
    }

    /// Show a notification and schedule its removal
    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let id = store_show_notice(&self.store, kind, message.into());
        let store = self.store;
        Timeout::new(self.notice_ttl_ms, move || store_expire_notice(&store, id)).forget();
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Success, message);
    }

    /// Server `error` field if any, else `fallback`
    pub fn notify_error(&self, err: &Error, fallback: &str) {
        self.notify(NoticeKind::Error, err.user_message(fallback));
    }

    /// Fetch the stats snapshot; on failure the old numbers stay up
    pub fn load_stats(&self) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.tracker().load_stats().await {
                Ok(stats) => store_set_stats(&ctx.store, stats),
                Err(_) => ctx.notify(NoticeKind::Error, text::STATS_LOAD_FAILED),
            }
        });
    }

    /// Fetch the full list into the cache
    pub fn load_problems(&self) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.tracker().load_problems().await {
                Ok(problems) => store_replace_problems(&ctx.store, problems),
                Err(_) => ctx.notify(NoticeKind::Error, text::PROBLEMS_LOAD_FAILED),
            }
        });
    }

    /// Store whatever reloaded successfully; report what did not
    pub fn apply_refresh(&self, refresh: Refresh) {
        if let Some(message) = store_apply_refresh(&self.store, refresh) {
            self.notify(NoticeKind::Error, message);
        }
    }

    /// Switch tabs; the dashboard and list tabs refetch their data
    pub fn select_tab(&self, tab: Tab) {
        self.set_tab.set(tab);
        match tab {
            Tab::Dashboard => self.load_stats(),
            Tab::Problems => self.load_problems(),
            Tab::Add | Tab::Settings => {}
        }
    }
}
