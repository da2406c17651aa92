//! Profile dashboard, the default authenticated landing view.
//!
//! Issues independent fetches for the user's projects and tech stack on
//! activation. Each resource is discarded when the page unmounts; a late
//! response is a no-op, not an error.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::project_card::ProjectCard;
use crate::net::api;
use crate::state::session::SessionState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let projects = LocalResource::new(|| api::fetch_projects());
    let tech = LocalResource::new(move || {
        let user_id = session
            .with_untracked(|s| s.user.as_ref().map(|u| u.id.clone()))
            .unwrap_or_default();
        async move {
            if user_id.is_empty() {
                Ok(Vec::new())
            } else {
                api::fetch_tech_stack(&user_id).await
            }
        }
    });

    let title = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.name.clone())
                .map_or_else(|| "Profile".to_owned(), |name| format!("{name}'s Profile"))
        })
    };

    view! {
        <Title text=title/>
        <div class="profile-page">
            <section class="profile-page__identity">
                {move || {
                    session
                        .get()
                        .user
                        .map(|user| {
                            let complete = user.is_profile_complete;
                            view! {
                                <div class="profile-page__card">
                                    {user
                                        .profile_picture
                                        .map(|src| {
                                            view! {
                                                <img class="profile-page__picture" src=src alt="Profile"/>
                                            }
                                        })}
                                    <h1>{user.name.unwrap_or_else(|| "Anonymous".to_owned())}</h1>
                                    <p class="profile-page__email">{user.email}</p>
                                    <p class="profile-page__points">
                                        {format!("Points: {}", user.points)}
                                    </p>
                                    <Show when=move || !complete>
                                        <a class="profile-page__complete-link" href="/auth/userdetails">
                                            "Complete your profile"
                                        </a>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </section>

            <section class="profile-page__projects">
                <h2>"Projects"</h2>
                <Suspense fallback=move || view! { <p>"Loading projects..."</p> }>
                    {move || {
                        projects
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    if list.is_empty() {
                                        view! {
                                            <p class="profile-page__empty">
                                                "No projects yet. Add your first one!"
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="profile-page__project-grid">
                                                {list
                                                    .into_iter()
                                                    .map(|project| view! { <ProjectCard project=project/> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(err) => {
                                    view! {
                                        <p class="profile-page__error">
                                            {format!("Couldn't load projects: {err}")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="profile-page__tech">
                <h2>"Tech Stack"</h2>
                <Suspense fallback=move || view! { <p>"Loading tech stack..."</p> }>
                    {move || {
                        tech.get()
                            .map(|result| match result {
                                Ok(items) => {
                                    view! {
                                        <ul class="profile-page__tech-list">
                                            {items
                                                .into_iter()
                                                .map(|item| view! { <li>{item.name}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <p class="profile-page__error">
                                            {format!("Couldn't load tech stack: {err}")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
