//! Journey Timeline Component
//!
//! Polaroid photos alternating on both sides of a vertical line.

use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn JourneyTimeline() -> impl IntoView {
    let memories = expect_context::<SiteConfig>().memories;

    view! {
        <section class="section timeline">
            <h2 class="section-title">"Our Journey 📸"</h2>
            <div class="timeline-track">
                {memories
                    .into_iter()
                    .map(|memory| view! {
                        <div class=format!("timeline-entry {}", memory.side.as_str())>
                            <span class="timeline-year">{memory.year}</span>
                            <figure
                                class="polaroid"
                                style:transform=format!("rotate({}deg)", memory.tilt_deg)
                            >
                                <img src=memory.image alt=memory.caption.clone() />
                                <figcaption class="handwritten-caption">{memory.caption}</figcaption>
                            </figure>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
