//! Single project view. Reads the project id from the route parameter.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::net::api;

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();

    let detail = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move { api::fetch_project(&id).await }
    });

    view! {
        <Title text="Project"/>
        <div class="project-detail-page">
            <Suspense fallback=move || view! { <p>"Loading project..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result {
                            Ok(detail) => {
                                let project = detail.project;
                                view! {
                                    <article class="project-detail">
                                        {project
                                            .project_thumbnail
                                            .map(|src| {
                                                view! {
                                                    <img
                                                        class="project-detail__thumb"
                                                        src=src
                                                        alt=project.project_name.clone()
                                                    />
                                                }
                                            })}
                                        <h1>{project.project_name}</h1>
                                        {project
                                            .status
                                            .map(|status| {
                                                view! {
                                                    <span class="project-detail__status">{status}</span>
                                                }
                                            })}
                                        {project
                                            .project_description
                                            .map(|text| view! { <p>{text}</p> })}
                                        {detail
                                            .user_detail
                                            .map(|owner| {
                                                view! {
                                                    <p class="project-detail__owner">
                                                        "By "
                                                        {owner
                                                            .name
                                                            .unwrap_or_else(|| "Anonymous".to_owned())}
                                                    </p>
                                                }
                                            })}
                                    </article>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <p class="project-detail-page__error">
                                        {format!("Couldn't load the project: {err}")}
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
