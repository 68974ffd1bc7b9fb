//! Vibe Switch Component
//!
//! Floating button flipping between the cream theme and party mode.

use leptos::prelude::*;

use crate::store::{store_toggle_party_mode, use_site_store, SiteStateStoreFields};

#[component]
pub fn VibeSwitch() -> impl IntoView {
    let store = use_site_store();
    let party = move || store.party_mode().get();

    let toggle = move |_| {
        let on = store_toggle_party_mode(&store);
        log::info!("party mode {}", if on { "on" } else { "off" });
    };

    view! {
        <div class="vibe-switch">
            <button
                class=move || if party() { "vibe-button party" } else { "vibe-button" }
                title=move || if party() { "Back to calm" } else { "Party mode!" }
                on:click=toggle
            >
                {move || if party() { "🎉" } else { "✨" }}
            </button>
            <span class="vibe-label">{move || if party() { "Party" } else { "Chill" }}</span>
        </div>
    }
}
