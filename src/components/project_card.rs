//! Reusable card component for project list items.

use leptos::prelude::*;

use crate::net::types::ProjectSummary;

/// A clickable card representing one project.
#[component]
pub fn ProjectCard(project: ProjectSummary) -> impl IntoView {
    let href = format!("/dashboard/project/{}", project.id);

    view! {
        <a class="project-card" href=href>
            {project
                .project_thumbnail
                .map(|src| view! { <img class="project-card__thumb" src=src alt=""/> })}
            <span class="project-card__name">{project.project_name}</span>
            {project
                .project_description
                .map(|text| view! { <p class="project-card__description">{text}</p> })}
            {project
                .status
                .map(|status| view! { <span class="project-card__status">{status}</span> })}
        </a>
    }
}
