//! Problem Card Component
//!
//! One record with its delete action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::notice::text;
use crate::view_model::ProblemCard;

#[component]
pub fn ProblemCardItem(card: ProblemCard) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = card.id;

    let delete = move |_: ()| {
        spawn_local(async move {
            match ctx.tracker().delete_problem(id).await {
                Ok(refresh) => {
                    ctx.notify_success(text::PROBLEM_DELETED);
                    ctx.apply_refresh(refresh);
                }
                Err(e) => ctx.notify_error(&e, text::PROBLEM_DELETE_FAILED),
            }
        });
    };

    view! {
        <div class="problem-item">
            <div class="problem-header">
                <h4 class="problem-name">{card.name}</h4>
                <div class="problem-actions">
                    <span class="problem-platform">{card.platform}</span>
                    <DeleteConfirmButton button_class="delete-btn" on_confirm=Callback::new(delete) />
                </div>
            </div>
            <div class="problem-details">
                <span class=card.badge_class>{card.badge_label}</span>
                <span class="problem-category">{card.category}</span>
                <span class="problem-date">{card.date_label}</span>
            </div>
            {card.notes.map(|notes| view! {
                <div class="problem-notes">"\u{201c}" {notes} "\u{201d}"</div>
            })}
        </div>
    }
}
