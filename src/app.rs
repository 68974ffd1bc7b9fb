//! Greeting Site App
//!
//! Root component: provides the store and config, then stacks the sections.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;
use web_sys::ScrollRestoration;

use crate::config::SiteConfig;
use crate::store::{store_track_pointer, SiteState, SiteStateStoreFields};
use crate::components::{
    start_music, BirthdayWishes, CakeCeremony, CustomCursor, JourneyTimeline, LandingPage, MusicToggle,
    PackingGame, ScrollProgress, TwinQuiz, VibeSwitch, WelcomeOverlay,
};

/// Elements the custom cursor reacts to
const CURSOR_TARGETS: &str = "button, a, .polaroid, .candle, .cake-layer, .draggable-item";

/// Always open at the envelope, even after a reload mid-page
fn reset_scroll() {
    let Some(window) = web_sys::window() else { return };
    if let Ok(history) = window.history() {
        let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

fn over_cursor_target(ev: &web_sys::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(CURSOR_TARGETS).ok().flatten())
        .is_some()
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let store = Store::new(SiteState::new());
    let music_src = config.music_src.clone();

    // Provide state to all children
    provide_context(store);
    provide_context(config);

    let audio_ref = NodeRef::<html::Audio>::new();

    reset_scroll();

    // Lives as long as the page
    let _pointer = window_event_listener(ev::mousemove, move |ev| {
        store_track_pointer(&store, ev.client_x(), ev.client_y(), over_cursor_target(&ev));
    });

    let welcome_open = move || store.welcome_open().get();

    view! {
        <audio node_ref=audio_ref src=music_src preload="auto"></audio>

        <CustomCursor />

        <Show when=welcome_open>
            <WelcomeOverlay on_open=move |_| start_music(store, audio_ref) />
        </Show>

        <Show when=move || !welcome_open()>
            <MusicToggle audio=audio_ref />
            <ScrollProgress />
        </Show>

        <div class=move || if store.party_mode().get() { "site party" } else { "site" }>
            <VibeSwitch />
            <LandingPage />
            <CakeCeremony />
            <JourneyTimeline />
            <PackingGame />
            <BirthdayWishes />
            <TwinQuiz />
            <footer class="site-footer">"Made with 💗 for the best twin ever"</footer>
        </div>
    }
}
