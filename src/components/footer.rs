//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__brand">"CyberHunter"</span>
            <nav class="footer__links">
                <a href="/leaderboard">"Leaderboard"</a>
                <a href="/event">"Events"</a>
            </nav>
            <span class="footer__note">"Built by students, for students."</span>
        </footer>
    }
}
