//! Cake Ceremony Component
//!
//! Blow into the microphone (or tap the candles) to make a wish.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::candles::{BlowDetector, Candles, MicPermission, WishReveal};
use crate::config::SiteConfig;
use crate::media::MicrophoneGuard;

/// Pause between the last candle going out and the wish appearing
const WISH_DELAY_MS: u32 = 500;

#[component]
pub fn CakeCeremony() -> impl IntoView {
    let settings = expect_context::<SiteConfig>().candles;
    let candles = RwSignal::new(Candles::new(settings.count));
    let (permission, set_permission) = signal(MicPermission::Unknown);
    let wish = RwSignal::new(WishReveal::Hidden);
    let mic = StoredValue::new_local(None::<MicrophoneGuard>);
    let sampler = StoredValue::new(None::<IntervalHandle>);

    let release_mic = move || {
        if let Some(handle) = sampler.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        let _ = mic.try_update_value(Option::take);
    };

    let all_out = move || {
        release_mic();
        spawn_local(async move {
            TimeoutFuture::new(WISH_DELAY_MS).await;
            wish.try_update(WishReveal::show);
        });
    };

    spawn_local(async move {
        let guard = match MicrophoneGuard::acquire().await {
            Ok(guard) => guard,
            Err(e) => {
                log::warn!("microphone unavailable, falling back to taps: {:?}", e);
                set_permission.set(MicPermission::Denied);
                return;
            }
        };
        // Unmounted, or candles tapped out while the prompt was open
        if !candles.try_with_untracked(Candles::any_lit).unwrap_or(false) {
            return;
        }
        if mic.try_set_value(Some(guard)).is_some() {
            return;
        }
        set_permission.set(MicPermission::Granted);

        let detector = BlowDetector::new(settings.blow_threshold);
        let listen = move || {
            let blowing = mic
                .try_update_value(|m| m.as_mut().map(|g| detector.is_blowing(g.sample())))
                .flatten()
                .unwrap_or(false);
            if blowing && candles.try_update(Candles::blow_out).unwrap_or(false) {
                log::info!("candles blown out by microphone");
                all_out();
            }
        };
        match set_interval_with_handle(listen, Duration::from_millis(settings.sample_interval_ms)) {
            Ok(handle) => sampler.set_value(Some(handle)),
            Err(e) => {
                log::warn!("microphone sampling not started: {:?}", e);
                release_mic();
                set_permission.set(MicPermission::Denied);
            }
        }
    });

    on_cleanup(move || release_mic());

    let candle_views = (0..settings.count)
        .map(|i| {
            let on_click = move |_| {
                if candles.try_update(|c| c.snuff(i)).unwrap_or(false) {
                    all_out();
                }
            };
            let on_dblclick = move |_| {
                if candles.try_update(Candles::blow_out).unwrap_or(false) {
                    all_out();
                }
            };
            view! {
                <div
                    class=move || if candles.with(|c| c.is_lit(i)) { "candle lit" } else { "candle" }
                    on:click=on_click
                    on:dblclick=on_dblclick
                >
                    <span class="flame">"🔥"</span>
                    <span class="wick"></span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="section cake-ceremony">
            <h2 class="section-title">"Make a Wish! 🕯️"</h2>

            <Show when=move || permission.get() == MicPermission::Denied>
                <p class="hint">"Tap the candles to blow them out! (Double-tap for all at once) 🎂"</p>
            </Show>
            <Show when=move || permission.get() == MicPermission::Granted && candles.with(Candles::any_lit)>
                <p class="hint">"Blow into your microphone... 🌬️"</p>
            </Show>

            <div class="cake">
                <div class="candles">{candle_views}</div>
                <div class="cake-layer top"></div>
                <div class="cake-layer middle"></div>
                <div class="cake-layer bottom"></div>
            </div>

            <Show when=move || wish.with(WishReveal::is_visible)>
                <div class="wish-reveal" on:click=move |_| wish.update(WishReveal::dismiss)>
                    <h3>"Your wish is on its way! ✨"</h3>
                    <p>"May this year bring you everything you're hoping for."</p>
                    <p class="hint">"(tap to close)"</p>
                </div>
            </Show>
        </section>
    }
}
