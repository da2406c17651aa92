//! Public events listing.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::api;

#[component]
pub fn EventsPage() -> impl IntoView {
    let events = LocalResource::new(|| api::fetch_events());

    view! {
        <Title text="Events"/>
        <div class="events-page">
            <h1>"Events"</h1>
            <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                {move || {
                    events
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! { <p class="events-page__empty">"No upcoming events."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="events-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|event| {
                                                    view! {
                                                        <article class="event-card">
                                                            <h2>{event.title}</h2>
                                                            <p class="event-card__meta">
                                                                {event.date.unwrap_or_default()}
                                                                " · "
                                                                {event.location.unwrap_or_default()}
                                                            </p>
                                                            {event
                                                                .description
                                                                .map(|text| view! { <p>{text}</p> })}
                                                        </article>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! {
                                    <p class="events-page__error">
                                        {format!("Couldn't load events: {err}")}
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
