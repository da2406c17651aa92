//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::guard::{PublicOnly, RequireAuth};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::toast_stack::ToastStack;
use crate::pages::events::EventsPage;
use crate::pages::home::HomePage;
use crate::pages::leaderboard::LeaderboardPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::project_detail::ProjectDetailPage;
use crate::pages::projects::ProjectsPage;
use crate::pages::team::TeamPage;
use crate::pages::user_detail::UserDetailPage;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Restores the session from durable storage, provides all shared state
/// contexts, and sets up client-side routing. The guard components decide
/// per navigation whether a protected or public-only view may render.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(toasts);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/cyberhunter-client.css"/>
        <Title text="CyberHunter"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("leaderboard") view=LeaderboardPage/>
                    <Route path=StaticSegment("event") view=EventsPage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| {
                            view! {
                                <PublicOnly>
                                    <LoginPage/>
                                </PublicOnly>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("userdetails"))
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <UserDetailPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("profile"))
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <ProfilePage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("project"))
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <ProjectsPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("project"),
                            ParamSegment("id"),
                        )
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <ProjectDetailPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("team"))
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <TeamPage/>
                                </RequireAuth>
                            }
                        }
                    />
                </Routes>
            </main>
            <Footer/>
            <ToastStack/>
        </Router>
    }
}
