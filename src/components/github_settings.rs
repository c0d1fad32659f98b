//! GitHub Settings Component
//!
//! Credential form plus the sync trigger. Both are pass-through requests.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::GithubCredentials;
use crate::notice::text;

#[component]
pub fn GithubSettings() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (token, set_token) = signal(String::new());
    let (repo, set_repo) = signal(String::new());

    let save = move |_| {
        let credentials = GithubCredentials {
            username: username.get(),
            token: token.get(),
            repo: repo.get(),
        };
        spawn_local(async move {
            match ctx.tracker().save_github(&credentials).await {
                Ok(message) => ctx.notify_success(message),
                Err(e) => ctx.notify_error(&e, text::GITHUB_SAVE_FAILED),
            }
        });
    };

    let sync = move |_| {
        ctx.notify_success(text::GITHUB_SYNCING);
        spawn_local(async move {
            match ctx.tracker().sync_github().await {
                Ok(message) => ctx.notify_success(message),
                Err(e) => ctx.notify_error(&e, text::GITHUB_SYNC_FAILED),
            }
        });
    };

    view! {
        <div class="settings-section">
            <h3>"GitHub Sync"</h3>
            <div class="form-group">
                <label for="githubUsername">"Username"</label>
                <input
                    id="githubUsername"
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="githubToken">"Personal Access Token"</label>
                <input
                    id="githubToken"
                    type="password"
                    autocomplete="off"
                    prop:value=move || token.get()
                    on:input=move |ev| set_token.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="githubRepo">"Repository"</label>
                <input
                    id="githubRepo"
                    type="text"
                    placeholder="dsa-solutions"
                    prop:value=move || repo.get()
                    on:input=move |ev| set_repo.set(event_target_value(&ev))
                />
            </div>
            <div class="button-row">
                <button class="btn-primary" on:click=save>"Save Configuration"</button>
                <button class="btn-secondary" on:click=sync>"Sync to GitHub"</button>
            </div>
        </div>
    }
}
