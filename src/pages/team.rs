//! Protected team view: the signed-in user's team, or an empty state.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::api;

#[component]
pub fn TeamPage() -> impl IntoView {
    let team = LocalResource::new(|| api::fetch_team());

    view! {
        <Title text="Team"/>
        <div class="team-page">
            <h1>"Your Team"</h1>
            <Suspense fallback=move || view! { <p>"Loading team..."</p> }>
                {move || {
                    team.get()
                        .map(|result| match result {
                            Ok(Some(team)) => {
                                view! {
                                    <div class="team-page__card">
                                        <h2>{team.team_name}</h2>
                                        <p class="team-page__points">
                                            {format!("Points: {}", team.points)}
                                        </p>
                                        <h3>"Members"</h3>
                                        <ul class="team-page__members">
                                            {team
                                                .members
                                                .into_iter()
                                                .map(|member| view! { <li>{member}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(None) => {
                                view! {
                                    <p class="team-page__empty">
                                        "You are not part of a team yet."
                                    </p>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <p class="team-page__error">
                                        {format!("Couldn't load your team: {err}")}
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
