//! Transient notification display and the `notify` helper.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DISMISS_MS: u64 = 3000;

/// Push one toast and schedule its auto-dismissal. The timer only runs in
/// the browser; natively the toast just stays queued.
pub fn notify(toasts: RwSignal<ToastState>, level: ToastLevel, message: impl Into<String>) {
    let message = message.into();
    let mut id = 0;
    toasts.update(|state| id = state.push(level, message));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Fixed-position stack rendering the live toast queue, newest last.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .items()
                    .iter()
                    .cloned()
                    .map(|toast| {
                        let class = match toast.level {
                            ToastLevel::Success => "toast toast--success",
                            ToastLevel::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
