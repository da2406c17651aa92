//! Public landing page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::state::session::SessionState;

/// Landing page: hero banner plus entry points into the platform.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Title text="CyberHunter"/>
        <div class="home-page">
            <section class="home-page__hero">
                <h1>
                    <span class="home-page__brand-accent">"Cyber"</span>
                    " Hunter"
                </h1>
                <p>"Build projects, join a team, climb the leaderboard."</p>
                <div class="home-page__actions">
                    <Show
                        when=move || session.with(SessionState::is_authenticated)
                        fallback=|| {
                            view! {
                                <a class="btn btn--primary" href="/login">
                                    "Get started"
                                </a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href="/dashboard/profile">
                            "Go to your dashboard"
                        </a>
                    </Show>
                    <a class="btn" href="/leaderboard">
                        "View leaderboard"
                    </a>
                </div>
            </section>

            <section class="home-page__features">
                <div class="home-page__feature">
                    <h2>"Projects"</h2>
                    <p>"Showcase what you build and collect points for it."</p>
                </div>
                <div class="home-page__feature">
                    <h2>"Teams"</h2>
                    <p>"Team up with other students for competitions."</p>
                </div>
                <div class="home-page__feature">
                    <h2>"Events"</h2>
                    <p>"Hackathons and workshops, all in one place."</p>
                </div>
            </section>
        </div>
    }
}
