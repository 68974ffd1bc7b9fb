//! Welcome Overlay Component
//!
//! Sealed envelope covering the page until it is opened.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::SiteConfig;
use crate::store::{store_close_welcome, use_site_store};

/// Flap animation length before the overlay goes away
const OPEN_DELAY_MS: u32 = 1200;

#[component]
pub fn WelcomeOverlay(
    /// Fired on the opening click, while the browser still counts it as a user gesture
    #[prop(into)] on_open: Callback<()>,
) -> impl IntoView {
    let store = use_site_store();
    let recipient = expect_context::<SiteConfig>().recipient;
    let (opening, set_opening) = signal(false);

    let open = move |_| {
        if opening.get_untracked() {
            return;
        }
        set_opening.set(true);
        on_open.run(());
        spawn_local(async move {
            TimeoutFuture::new(OPEN_DELAY_MS).await;
            store_close_welcome(&store);
        });
    };

    view! {
        <div class=move || if opening.get() { "welcome-overlay opening" } else { "welcome-overlay" }>
            <div class="envelope" on:click=open>
                <div class="envelope-flap"></div>
                <div class="envelope-body">
                    <p class="envelope-to">{format!("For {} 💌", recipient)}</p>
                    <p class="envelope-hint">"Tap to open"</p>
                </div>
            </div>
        </div>
    }
}
