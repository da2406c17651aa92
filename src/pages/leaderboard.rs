//! Public leaderboard with a client-side name filter.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::api;
use crate::net::types::LeaderboardEntry;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let entries = LocalResource::new(|| api::fetch_leaderboard());
    let filter = RwSignal::new(String::new());

    let matches = move |entry: &LeaderboardEntry| {
        let needle = filter.get();
        needle.is_empty() || entry.name.to_lowercase().contains(&needle.to_lowercase())
    };

    view! {
        <Title text="Leaderboard"/>
        <div class="leaderboard-page">
            <header class="leaderboard-page__header">
                <h1>"Leaderboard"</h1>
                <input
                    class="leaderboard-page__filter"
                    type="search"
                    placeholder="Search by name"
                    prop:value=filter
                    on:input=move |ev| filter.set(event_target_value(&ev))
                />
            </header>

            <Suspense fallback=move || view! { <p>"Loading leaderboard..."</p> }>
                {move || {
                    entries
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let rows: Vec<_> = list.into_iter().filter(matches).collect();
                                if rows.is_empty() {
                                    view! { <p class="leaderboard-page__empty">"No entries."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <table class="leaderboard-page__table">
                                            <thead>
                                                <tr>
                                                    <th>"Rank"</th>
                                                    <th>"Name"</th>
                                                    <th>"Team"</th>
                                                    <th>"Points"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {rows
                                                    .into_iter()
                                                    .map(|entry| {
                                                        view! {
                                                            <tr>
                                                                <td>{entry.rank}</td>
                                                                <td>{entry.name}</td>
                                                                <td>{entry.team.unwrap_or_default()}</td>
                                                                <td>{entry.points}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! {
                                    <p class="leaderboard-page__error">
                                        {format!("Couldn't load the leaderboard: {err}")}
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
