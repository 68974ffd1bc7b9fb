//! Landing Page Component

use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn LandingPage() -> impl IntoView {
    let recipient = expect_context::<SiteConfig>().recipient;

    view! {
        <section class="section landing">
            <p class="landing-kicker">"It's your day!"</p>
            <h1 class="landing-title">{format!("Happy Birthday, {}! 🐼👯‍♀️", recipient)}</h1>
            <p class="landing-subtitle">"Scroll down for a few surprises ✨"</p>
            <div class="scroll-hint">"↓"</div>
        </section>
    }
}
