//! Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Every page-wide flag lives here instead of in scattered globals.

use leptos::prelude::*;
use reactive_stores::Store;

/// Page-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Envelope overlay still covering the page
    pub welcome_open: bool,
    /// Party theme instead of the cream one
    pub party_mode: bool,
    pub music_playing: bool,
    /// Last known pointer position in viewport pixels
    pub pointer: (i32, i32),
    /// Pointer is over something clickable
    pub pointer_on_target: bool,
}

impl SiteState {
    pub fn new() -> Self {
        Self {
            welcome_open: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip the theme; returns the new value
pub fn store_toggle_party_mode(store: &SiteStore) -> bool {
    store.party_mode().update(|on| *on = !*on);
    store.party_mode().get_untracked()
}

pub fn store_set_music_playing(store: &SiteStore, playing: bool) {
    store.music_playing().set(playing);
}

pub fn store_track_pointer(store: &SiteStore, x: i32, y: i32, on_target: bool) {
    store.pointer().set((x, y));
    store.pointer_on_target().set(on_target);
}

pub fn store_close_welcome(store: &SiteStore) {
    store.welcome_open().set(false);
}
