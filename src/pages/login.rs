//! Login page: one shared form with a login/signup mode toggle.
//!
//! The mode toggle is pure UI; only one submission path is reachable at
//! a time. The form's own pending flag suppresses re-submission while a
//! call is in flight; there is no cancellation, a response that arrives
//! after navigating away is simply ignored.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_stack::notify;
use crate::state::session::SessionState;
use crate::state::toast::{ToastLevel, ToastState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let signup_mode = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                pending.set(true);
                let result = if signup_mode.get_untracked() {
                    crate::auth::submit_signup(
                        session,
                        &email.get_untracked(),
                        &password.get_untracked(),
                        &confirm_password.get_untracked(),
                    )
                    .await
                } else {
                    crate::auth::submit_login(
                        session,
                        &email.get_untracked(),
                        &password.get_untracked(),
                    )
                    .await
                };
                pending.set(false);
                match result {
                    Ok(outcome) => {
                        notify(toasts, ToastLevel::Success, outcome.message);
                        navigate(
                            outcome.destination.path(),
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(err) => notify(toasts, ToastLevel::Error, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&navigate, session, toasts);
    };

    let password_type = move || if show_password.get() { "text" } else { "password" };
    let submit_label = move || {
        if pending.get() {
            "Please wait..."
        } else if signup_mode.get() {
            "Signup"
        } else {
            "Login"
        }
    };

    view! {
        <Title text="Login"/>
        <div class="login-page">
            <div class="login-page__panel">
                <div class="login-page__mode-toggle">
                    <button
                        class=move || {
                            if signup_mode.get() {
                                "login-page__mode"
                            } else {
                                "login-page__mode login-page__mode--active"
                            }
                        }
                        on:click=move |_| signup_mode.set(false)
                    >
                        "Login"
                    </button>
                    <button
                        class=move || {
                            if signup_mode.get() {
                                "login-page__mode login-page__mode--active"
                            } else {
                                "login-page__mode"
                            }
                        }
                        on:click=move |_| signup_mode.set(true)
                    >
                        "Signup"
                    </button>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="email">
                        "Email Address"
                    </label>
                    <input
                        id="email"
                        class="auth-form__input"
                        type="text"
                        placeholder="example@gmail.com"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />

                    <label class="auth-form__label" for="password">
                        "Password"
                    </label>
                    <div class="auth-form__password-wrap">
                        <input
                            id="password"
                            class="auth-form__input"
                            type=password_type
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="auth-form__show-password"
                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>

                    <Show when=move || signup_mode.get()>
                        <label class="auth-form__label" for="confirm-password">
                            "Confirm Password"
                        </label>
                        <input
                            id="confirm-password"
                            class="auth-form__input"
                            type=password_type
                            prop:value=confirm_password
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </Show>

                    {move || {
                        session
                            .get()
                            .error
                            .map(|message| view! { <p class="auth-form__error">{message}</p> })
                    }}

                    <button class="auth-form__submit" type="submit" disabled=pending>
                        {submit_label}
                    </button>
                </form>

                <Show when=move || !signup_mode.get()>
                    <p class="login-page__switch">
                        "Not a member? "
                        <button class="login-page__switch-link" on:click=move |_| signup_mode.set(true)>
                            "Signup now"
                        </button>
                    </p>
                </Show>
            </div>
        </div>
    }
}
