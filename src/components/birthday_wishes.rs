//! Birthday Wishes Component

use leptos::prelude::*;

use crate::config::SiteConfig;

/// Card backgrounds, cycled
const CARD_TINTS: [&str; 4] = ["pink", "purple", "orange", "blue"];

#[component]
pub fn BirthdayWishes() -> impl IntoView {
    let wishes = expect_context::<SiteConfig>().wishes;

    view! {
        <section class="section wishes">
            <h2 class="section-title">"Birthday Wishes 💌"</h2>
            <div class="wish-grid">
                {wishes
                    .into_iter()
                    .enumerate()
                    .map(|(i, wish)| view! {
                        <div class=format!("wish-card tint-{}", CARD_TINTS[i % CARD_TINTS.len()])>
                            <span class="wish-emoji">{wish.emoji}</span>
                            <p>{wish.message}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
