//! Route guards: decide per navigation whether a view may render.
//!
//! The predicates read only the in-memory session snapshot, so a decision
//! is synchronous with the navigation event. The wrapper components
//! redirect on violation; the original destination is discarded (no
//! return-to deep-link).

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Protected views render only for an authenticated session.
pub const fn can_enter_protected(session: &SessionState) -> bool {
    session.is_authenticated()
}

/// Login/signup views are unreachable once authenticated.
pub const fn can_enter_public_only(session: &SessionState) -> bool {
    !session.is_authenticated()
}

/// Gate for protected views: renders children while authenticated,
/// otherwise redirects to the login view.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !can_enter_protected(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || can_enter_protected(&session.get())>
            {children()}
        </Show>
    }
}

/// Gate for public-only views: renders children while signed out,
/// otherwise redirects to the authenticated landing view.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !can_enter_public_only(&session.get()) {
            navigate("/dashboard/profile", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || can_enter_public_only(&session.get())>
            {children()}
        </Show>
    }
}
