//! Sticky site header: brand, public nav, and the account area.
//!
//! Signed out it shows a login button; signed in it shows the user chip
//! with a dropdown (profile, projects, team, logout). Sign-out is one
//! best-effort remote call followed unconditionally by the local
//! sign-out transition; a failed logout request never leaves the user
//! half signed in on this client.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_stack::notify;
use crate::state::session::SessionState;
use crate::state::toast::{ToastLevel, ToastState};
use crate::state::ui::UiState;

const NAV_LINKS: [(&str, &str); 3] = [
    ("Home", "/"),
    ("Leaderboard", "/leaderboard"),
    ("Events", "/event"),
];

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Callback rather than a plain closure: it is Copy, so the nested
    // Show children can capture it freely.
    let on_logout = Callback::new(move |()| {
        ui.update(UiState::close_all);
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::logout().await;
                session.update(SessionState::sign_out);
                match result {
                    Ok(message) => notify(toasts, ToastLevel::Success, message),
                    Err(err) => {
                        leptos::logging::warn!("logout request failed: {err}");
                        notify(toasts, ToastLevel::Success, "Signed out.");
                    }
                }
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&navigate, toasts, session);
    });

    let display_name = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.name.clone())
                .unwrap_or_else(|| "Anonymous".to_owned())
        })
    };

    view! {
        <header class="header">
            <a class="header__brand" href="/">
                <span class="header__brand-accent">"Cyber"</span>
                " Hunter"
            </a>

            <nav class="header__nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <a class="header__link" href=href>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="header__account">
                <Show
                    when=move || session.with(SessionState::is_authenticated)
                    fallback=|| {
                        view! {
                            <a class="header__auth-button" href="/login">
                                "Login"
                            </a>
                        }
                    }
                >
                    <button
                        class="header__user-chip"
                        on:click=move |_| ui.update(UiState::toggle_dropdown)
                    >
                        {display_name}
                    </button>
                    <Show when=move || ui.get().dropdown_open>
                        <div class="header__dropdown">
                            <div class="header__dropdown-title">"My Account"</div>
                            <a
                                class="header__dropdown-item"
                                href="/dashboard/profile"
                                on:click=move |_| ui.update(UiState::close_all)
                            >
                                "Profile"
                            </a>
                            <a
                                class="header__dropdown-item"
                                href="/dashboard/project"
                                on:click=move |_| ui.update(UiState::close_all)
                            >
                                "Projects"
                            </a>
                            <a
                                class="header__dropdown-item"
                                href="/dashboard/team"
                                on:click=move |_| ui.update(UiState::close_all)
                            >
                                "Team"
                            </a>
                            <button
                                class="header__dropdown-item header__dropdown-item--danger"
                                on:click=move |_| on_logout.run(())
                            >
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </Show>

                <button
                    class="header__menu-button"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || if ui.get().menu_open { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || ui.get().menu_open>
                <nav class="header__mobile-menu">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    class="header__mobile-link"
                                    href=href
                                    on:click=move |_| ui.update(UiState::close_all)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <Show
                        when=move || session.with(SessionState::is_authenticated)
                        fallback=|| {
                            view! {
                                <a class="header__mobile-link" href="/login">
                                    "Login"
                                </a>
                            }
                        }
                    >
                        <button
                            class="header__mobile-link header__mobile-link--danger"
                            on:click=move |_| on_logout.run(())
                        >
                            "Logout"
                        </button>
                    </Show>
                </nav>
            </Show>
        </header>
    }
}
