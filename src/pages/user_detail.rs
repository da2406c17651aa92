//! Profile-completion page, reached right after signup (and from the
//! profile page while the profile is still incomplete).
//!
//! Submits the editable fields and moves on; the session snapshot keeps
//! its completeness flag until the next login, which re-derives it from
//! the server's payload.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_stack::notify;
use crate::net::types::ProfileDetails;
use crate::state::session::SessionState;
use crate::state::toast::{ToastLevel, ToastState};

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(
        session
            .with_untracked(|s| s.user.as_ref().and_then(|u| u.name.clone()))
            .unwrap_or_default(),
    );
    let course = RwSignal::new(String::new());
    let branch = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        if name.get_untracked().trim().is_empty() {
            notify(toasts, ToastLevel::Error, "Please enter your name.");
            return;
        }
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                pending.set(true);
                let details = ProfileDetails {
                    name: name.get_untracked().trim().to_owned(),
                    course: course.get_untracked(),
                    branch: branch.get_untracked(),
                };
                let result = crate::net::api::update_profile(&details).await;
                pending.set(false);
                match result {
                    Ok(message) => {
                        notify(toasts, ToastLevel::Success, message);
                        navigate("/dashboard/profile", NavigateOptions::default());
                    }
                    Err(err) => notify(toasts, ToastLevel::Error, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&navigate, course, branch);
    };

    view! {
        <Title text="Complete your profile"/>
        <div class="user-detail-page">
            <h1>"Complete your profile"</h1>
            <p class="user-detail-page__hint">
                "A few details before you can start collecting points."
            </p>
            <form class="user-detail-form" on:submit=on_submit>
                <label class="user-detail-form__label" for="name">
                    "Name"
                </label>
                <input
                    id="name"
                    class="user-detail-form__input"
                    type="text"
                    prop:value=name
                    on:input=move |ev| name.set(event_target_value(&ev))
                />

                <label class="user-detail-form__label" for="course">
                    "Course"
                </label>
                <input
                    id="course"
                    class="user-detail-form__input"
                    type="text"
                    prop:value=course
                    on:input=move |ev| course.set(event_target_value(&ev))
                />

                <label class="user-detail-form__label" for="branch">
                    "Branch"
                </label>
                <input
                    id="branch"
                    class="user-detail-form__input"
                    type="text"
                    prop:value=branch
                    on:input=move |ev| branch.set(event_target_value(&ev))
                />

                <button class="user-detail-form__submit" type="submit" disabled=pending>
                    {move || if pending.get() { "Saving..." } else { "Save and continue" }}
                </button>
            </form>
        </div>
    }
}
