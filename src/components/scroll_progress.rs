//! Scroll Progress Component
//!
//! Thin bar across the top showing how far down the page the reader is.

use leptos::ev;
use leptos::prelude::*;

/// Fraction of the scrollable distance covered, clamped to 0..=1
fn scroll_fraction(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

fn read_scroll_fraction() -> Option<f64> {
    let window = web_sys::window()?;
    let top = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let height = window.document()?.document_element()?.scroll_height();
    Some(scroll_fraction(top, f64::from(height), viewport))
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (progress, set_progress) = signal(read_scroll_fraction().unwrap_or(0.0));

    let handle = window_event_listener(ev::scroll, move |_| {
        if let Some(fraction) = read_scroll_fraction() {
            set_progress.set(fraction);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="scroll-progress">
            <div
                class="scroll-progress-bar"
                style:width=move || format!("{:.2}%", progress.get() * 100.0)
            ></div>
        </div>
    }
}
