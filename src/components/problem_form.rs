//! Problem Form Component
//!
//! Form for recording a newly solved problem.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::filter;
use crate::models::{Difficulty, NewProblem};
use crate::notice::text;
use crate::store::AppStateStoreFields;

/// Form for creating new problem records
#[component]
pub fn ProblemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let (name, set_name) = signal(String::new());
    let (platform, set_platform) = signal(String::new());
    let (difficulty, set_difficulty) = signal(Difficulty::Easy);
    let (category, set_category) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    // Suggestions for the free-text fields
    let known_platforms = Memo::new(move |_| filter::platforms(store.cache().read().records()));
    let known_categories = Memo::new(move |_| filter::categories(store.cache().read().records()));

    let reset = move || {
        set_name.set(String::new());
        set_platform.set(String::new());
        set_difficulty.set(Difficulty::Easy);
        set_category.set(String::new());
        set_notes.set(String::new());
    };

    let add_problem = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let problem = NewProblem {
            name: name.get(),
            platform: platform.get(),
            difficulty: difficulty.get(),
            category: category.get(),
            notes: notes.get(),
        };

        spawn_local(async move {
            match ctx.tracker().add_problem(&problem).await {
                Ok(refresh) => {
                    ctx.notify_success(text::PROBLEM_ADDED);
                    reset();
                    ctx.apply_refresh(refresh);
                }
                Err(e) => ctx.notify_error(&e, text::PROBLEM_ADD_FAILED),
            }
        });
    };

    view! {
        <form class="problem-form" on:submit=add_problem>
            <div class="form-group">
                <label for="problemName">"Problem Name"</label>
                <input
                    id="problemName"
                    type="text"
                    required
                    placeholder="e.g. Two Sum"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="platform">"Platform"</label>
                    <input
                        id="platform"
                        type="text"
                        required
                        list="platform-options"
                        placeholder="e.g. LeetCode"
                        prop:value=move || platform.get()
                        on:input=move |ev| set_platform.set(event_target_value(&ev))
                    />
                    <datalist id="platform-options">
                        <For
                            each=move || known_platforms.get()
                            key=|p| p.clone()
                            children=|p| view! { <option value=p></option> }
                        />
                    </datalist>
                </div>

                <div class="form-group">
                    <label for="difficulty">"Difficulty"</label>
                    <select
                        id="difficulty"
                        prop:value=move || difficulty.get().as_str()
                        on:change=move |ev| {
                            if let Some(d) = Difficulty::parse(&event_target_value(&ev)) {
                                set_difficulty.set(d);
                            }
                        }
                    >
                        {Difficulty::ALL.iter().map(|d| view! {
                            <option value=d.as_str()>{d.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="category">"Category"</label>
                    <input
                        id="category"
                        type="text"
                        required
                        list="category-options"
                        placeholder="e.g. Arrays"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                    <datalist id="category-options">
                        <For
                            each=move || known_categories.get()
                            key=|c| c.clone()
                            children=|c| view! { <option value=c></option> }
                        />
                    </datalist>
                </div>
            </div>

            <div class="form-group">
                <label for="notes">"Notes"</label>
                <textarea
                    id="notes"
                    placeholder="Approach, complexity, gotchas..."
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                ></textarea>
            </div>

            <button type="submit" class="btn-primary">"Add Problem"</button>
        </form>
    }
}
