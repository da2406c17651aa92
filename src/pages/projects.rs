//! Protected project list for the signed-in user.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::project_card::ProjectCard;
use crate::net::api;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = LocalResource::new(|| api::fetch_projects());

    view! {
        <Title text="Projects"/>
        <div class="projects-page">
            <h1>"Your Projects"</h1>
            <Suspense fallback=move || view! { <p>"Loading projects..."</p> }>
                {move || {
                    projects
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <p class="projects-page__empty">"Nothing here yet."</p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="projects-page__grid">
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
                                    <p class="projects-page__error">
                                        {format!("Couldn't load projects: {err}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
