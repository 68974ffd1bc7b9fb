//! Custom Cursor Component
//!
//! A heart that follows the pointer and grows over clickable things.

use leptos::prelude::*;

use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn CustomCursor() -> impl IntoView {
    let store = use_site_store();

    view! {
        <div
            class=move || if store.pointer_on_target().get() { "custom-cursor hovering" } else { "custom-cursor" }
            style:transform=move || {
                let (x, y) = store.pointer().get();
                format!("translate({}px, {}px)", x, y)
            }
        >
            "💗"
        </div>
    }
}
