//! Notification area (one message at a time).

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();
    let current = move || store.notice().read().current().cloned();

    view! {
        {move || current().map(|notice| view! {
            <div class=notice.kind.class() role="status">{notice.text}</div>
        })}
    }
}
