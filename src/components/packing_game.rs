//! Packing Game Component
//!
//! "The Shifting Chaos": drag your own things into the suitcase before the
//! clock runs out, and leave the roommate's things alone.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{bind_document_listeners, create_drag_signals, make_on_pointerdown, DragSignals};
use packing_game::{
    drop_lands_in, Command, GameSession, Item, LossReason, Placement, Point, Region, Status, Tally,
};

use crate::config::SiteConfig;
use crate::media::vibrate;

/// Grid spacing of items scattered around the room
const SLOT_COLUMNS: usize = 4;
const SLOT_WIDTH_PX: f64 = 80.0;
const SLOT_HEIGHT_PX: f64 = 100.0;
const SLOT_MARGIN_PX: f64 = 20.0;

/// Where the item with configured index `slot` rests in the room
fn slot_position(slot: usize) -> (f64, f64) {
    (
        (slot % SLOT_COLUMNS) as f64 * SLOT_WIDTH_PX + SLOT_MARGIN_PX,
        (slot / SLOT_COLUMNS) as f64 * SLOT_HEIGHT_PX + SLOT_MARGIN_PX,
    )
}

fn progress_label(tally: Tally) -> String {
    let mark = if tally.correct_packed == tally.total_should_pack { "🎉" } else { "📦" };
    format!("{} / {} correct! {}", tally.correct_packed, tally.total_should_pack, mark)
}

/// Headline and detail line for the end-of-game card
fn loss_message(session: &GameSession) -> (&'static str, String) {
    match session.loss_reason() {
        Some(LossReason::WrongItems(ids)) => {
            let packed = ids
                .iter()
                .filter_map(|id| session.item(*id))
                .map(|item| item.emoji.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            ("Oops! Wrong Item!", format!("You packed: {}", packed))
        }
        _ => ("Time's Up!", "But we always had fun shifting anyway! 😄".to_string()),
    }
}

/// Vibration pulse for a drop, in milliseconds. A finishing drop buzzes longer.
fn haptic_ms(placement: Placement, status: Status) -> Option<u32> {
    match (placement, status) {
        (Placement::Packed, Status::Won | Status::Lost) => Some(200),
        (Placement::Packed, _) => Some(40),
        _ => None,
    }
}

fn element_region(el: &web_sys::Element) -> Region {
    let rect = el.get_bounding_client_rect();
    Region::new(rect.left(), rect.top(), rect.right(), rect.bottom())
}

#[component]
pub fn PackingGame() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let session = match config.game.new_session() {
        Ok(session) => session,
        Err(e) => {
            log::warn!("packing game disabled: {}", e);
            return view! { <section class="section packing-game"></section> }.into_any();
        }
    };

    let session = RwSignal::new(session);
    let status = Memo::new(move |_| session.with(GameSession::status));
    let suitcase_ref = NodeRef::<html::Div>::new();
    let (over_suitcase, set_over_suitcase) = signal(false);
    let ticker = StoredValue::new(None::<IntervalHandle>);
    let drag = create_drag_signals();

    // Suitcase bounds move with scroll and resize, so measure on every use
    let measure = move || suitcase_ref.get_untracked().map(|el| element_region(&el));

    let dispatch = move |command: Command| session.try_update(|s| s.apply(command)).flatten();

    let stop_ticker = move || {
        if let Some(handle) = ticker.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    // The countdown only exists while the game runs
    Effect::new(move |_| {
        let running = status.get() == Status::Running;
        stop_ticker();
        if running {
            match set_interval_with_handle(move || { dispatch(Command::Tick); }, Duration::from_secs(1)) {
                Ok(handle) => ticker.set_value(Some(handle)),
                Err(e) => log::warn!("countdown not started: {:?}", e),
            }
        }
    });

    let listeners = StoredValue::new_local(Some(bind_document_listeners(
        drag,
        move |_, p| set_over_suitcase.set(drop_lands_in(measure(), Point::new(p.x, p.y))),
        move |id, p| {
            set_over_suitcase.set(false);
            let placement = dispatch(Command::Place { id, point: Point::new(p.x, p.y), target: measure() });
            let status = session.try_with_untracked(GameSession::status);
            if let Some(ms) = placement.zip(status).and_then(|(placed, now)| haptic_ms(placed, now)) {
                vibrate(ms);
            }
        },
        move || set_over_suitcase.set(false),
    )));

    on_cleanup(move || {
        stop_ticker();
        let _ = listeners.try_update_value(Option::take);
    });

    let start = move |_| {
        dispatch(Command::Start);
    };

    view! {
        <section class="section packing-game">
            <h2 class="section-title">"The Shifting Chaos 📦"</h2>
            <p class="section-intro">
                "Remember our hostel shifting days? Help pack before the warden comes!"
            </p>

            <Show
                when=move || status.get() != Status::NotStarted
                fallback=move || view! {
                    <div class="game-intro">
                        <div class="room preview">"📚 👕 ☕ 🧦 📖 👖"</div>
                        <button class="start-button" on:click=start>"Start Packing! 🎒"</button>
                    </div>
                }
            >
                <PackingList session=session />
                <div class="timer">
                    {move || format!("Time Left: {}s ⏰", session.with(GameSession::seconds_remaining))}
                </div>
                <div class="game-board">
                    <Room session=session drag=drag />
                    <div
                        id="suitcase"
                        class=move || if over_suitcase.get() { "suitcase drag-over" } else { "suitcase" }
                        node_ref=suitcase_ref
                    >
                        <h3>"Suitcase 🧳"</h3>
                        <div class="suitcase-contents">
                            <For
                                each=move || session.with(|s| s.packed().cloned().collect::<Vec<_>>())
                                key=|item| item.id
                                children=move |item: Item| view! {
                                    <span class="packed-item">{item.emoji}</span>
                                }
                            />
                        </div>
                        <Show when=move || session.with(|s| s.packed().next().is_some())>
                            <p class="progress">{move || progress_label(session.with(GameSession::tally))}</p>
                        </Show>
                    </div>
                </div>
            </Show>

            <Show when=move || status.get() == Status::Won>
                <div class="modal-backdrop">
                    <div class="modal win">
                        <h3>"All Packed! 🎉"</h3>
                        <p>{move || format!("With {}s to spare. Just like old times!", session.with(GameSession::seconds_remaining))}</p>
                        <button on:click=start>"Play Again"</button>
                    </div>
                </div>
            </Show>

            <Show when=move || status.get() == Status::Lost>
                <div class="modal-backdrop">
                    <div class="modal lose">
                        {move || {
                            let (title, detail) = session.with(loss_message);
                            view! {
                                <h3>{title}</h3>
                                <p>{detail}</p>
                            }
                        }}
                        <Show when=move || session.with(|s| matches!(s.loss_reason(), Some(LossReason::WrongItems(_))))>
                            <p class="hint">"That's your roommate's stuff! 😄 Only pack items from the list!"</p>
                        </Show>
                        <button on:click=start>"Try Again"</button>
                    </div>
                </div>
            </Show>
        </section>
    }
    .into_any()
}

/// The list of things that belong in the suitcase, struck through once packed
#[component]
fn PackingList(session: RwSignal<GameSession>) -> impl IntoView {
    let roommate = move || {
        session.with(|s| {
            s.items()
                .iter()
                .filter(|item| !item.should_pack())
                .map(|item| item.emoji.as_str())
                .collect::<String>()
        })
    };

    view! {
        <div class="packing-list">
            <h3>"📋 Packing List (Pack ONLY these!)"</h3>
            <div class="packing-list-items">
                {move || session.with(|s| {
                    s.packing_list()
                        .map(|item| {
                            let class = if item.is_packed() { "list-item packed" } else { "list-item" };
                            view! { <span class=class>{format!("{} {}", item.emoji, item.label)}</span> }
                        })
                        .collect_view()
                })}
            </div>
            <p class="warning">{move || format!("⚠️ Don't pack roommate's stuff! ({})", roommate())}</p>
        </div>
    }
}

/// The messy room holding every unpacked item
#[component]
fn Room(session: RwSignal<GameSession>, drag: DragSignals) -> impl IntoView {
    let unpacked = move || {
        session.with(|s| {
            s.items()
                .iter()
                .enumerate()
                .filter(|(_, item)| !item.is_packed())
                .map(|(slot, item)| (slot, item.clone()))
                .collect::<Vec<_>>()
        })
    };
    let untouched = move || session.with(|s| s.packed().next().is_none());

    view! {
        <div class="room">
            <h3>"Messy Room 🌪️"</h3>
            <Show when=untouched>
                <div class="room-hint">"👆 Find YOUR stuff in the mess! →"</div>
            </Show>
            <div class="room-floor">
                <For
                    each=unpacked
                    key=|(_, item)| item.id
                    children=move |(slot, item): (usize, Item)| {
                        let id = item.id;
                        let (x, y) = slot_position(slot);
                        let roommate = !item.should_pack();
                        view! {
                            <div
                                class=move || {
                                    let mut c = "draggable-item".to_string();
                                    if roommate { c.push_str(" roommate"); }
                                    if drag.is_dragging(id) { c.push_str(" dragging"); }
                                    c
                                }
                                style:left=format!("{}px", x)
                                style:top=format!("{}px", y)
                                style:transform=move || {
                                    let (dx, dy) = drag.offset_for(id);
                                    format!("translate({}px, {}px)", dx, dy)
                                }
                                title=item.label.clone()
                                on:pointerdown=make_on_pointerdown(drag, id)
                            >
                                {item.emoji.clone()}
                                {roommate.then(|| view! { <div class="roommate-tag">"Roommate's!"</div> })}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packing_game::ItemSpec;

    fn session() -> GameSession {
        let specs = vec![
            ItemSpec { id: 1, label: "Shirt".into(), emoji: "👕".into(), should_pack: true },
            ItemSpec { id: 7, label: "Plant".into(), emoji: "🪴".into(), should_pack: false },
            ItemSpec { id: 8, label: "Frame".into(), emoji: "🖼️".into(), should_pack: false },
        ];
        let mut s = GameSession::new(&specs, 45).unwrap();
        s.start();
        s
    }

    #[test]
    fn test_slot_grid() {
        assert_eq!(slot_position(0), (20.0, 20.0));
        assert_eq!(slot_position(3), (260.0, 20.0));
        assert_eq!(slot_position(4), (20.0, 120.0));
        assert_eq!(slot_position(9), (100.0, 220.0));
    }

    #[test]
    fn test_progress_label() {
        let partial = Tally { correct_packed: 2, incorrect_packed: 0, total_should_pack: 6 };
        assert_eq!(progress_label(partial), "2 / 6 correct! 📦");
        let full = Tally { correct_packed: 6, incorrect_packed: 0, total_should_pack: 6 };
        assert_eq!(progress_label(full), "6 / 6 correct! 🎉");
    }

    #[test]
    fn test_loss_message_names_wrong_item() {
        let mut s = session();
        let suitcase = Region::new(0.0, 0.0, 10.0, 10.0);
        s.place_item(7, Point::new(5.0, 5.0), Some(suitcase));
        let (title, detail) = loss_message(&s);
        assert_eq!(title, "Oops! Wrong Item!");
        assert_eq!(detail, "You packed: 🪴");
    }

    #[test]
    fn test_haptics_only_for_packed_items() {
        assert_eq!(haptic_ms(Placement::Packed, Status::Running), Some(40));
        assert_eq!(haptic_ms(Placement::Packed, Status::Won), Some(200));
        assert_eq!(haptic_ms(Placement::Packed, Status::Lost), Some(200));
        assert_eq!(haptic_ms(Placement::Missed, Status::Running), None);
        assert_eq!(haptic_ms(Placement::Ignored, Status::Won), None);
    }

    #[test]
    fn test_loss_message_time_up() {
        let mut s = session();
        for _ in 0..45 {
            s.tick();
        }
        assert_eq!(loss_message(&s).0, "Time's Up!");
    }
}
