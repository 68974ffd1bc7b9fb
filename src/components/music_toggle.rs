//! Music Toggle Component
//!
//! Fixed button pausing and resuming the background track.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlMediaElement;

use crate::media;
use crate::store::{store_set_music_playing, use_site_store, SiteStateStoreFields, SiteStore};

/// Start the looping background track
pub fn start_music(store: SiteStore, audio: NodeRef<html::Audio>) {
    let Some(el) = audio.get_untracked() else {
        log::warn!("audio element not mounted");
        return;
    };
    let media: HtmlMediaElement = el.into();
    media.set_loop(true);
    spawn_local(async move {
        match media::play(media).await {
            Ok(()) => store_set_music_playing(&store, true),
            Err(e) => log::warn!("audio play failed: {:?}", e),
        }
    });
}

#[component]
pub fn MusicToggle(audio: NodeRef<html::Audio>) -> impl IntoView {
    let store = use_site_store();
    let playing = move || store.music_playing().get();

    let toggle = move |_| {
        if store.music_playing().get_untracked() {
            if let Some(el) = audio.get_untracked() {
                media::pause(&el);
            }
            store_set_music_playing(&store, false);
        } else {
            start_music(store, audio);
        }
    };

    view! {
        <button
            class="music-toggle"
            title=move || if playing() { "Pause Music" } else { "Play Music" }
            on:click=toggle
        >
            {move || if playing() { "🔊" } else { "🔇" }}
        </button>
    }
}
