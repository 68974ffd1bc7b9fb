//! UI Components
//!
//! One module per page section, plus the floating controls.

mod welcome_overlay;
mod landing_page;
mod cake_ceremony;
mod journey_timeline;
mod packing_game;
mod birthday_wishes;
mod twin_quiz;
mod vibe_switch;
mod music_toggle;
mod custom_cursor;
mod scroll_progress;

pub use welcome_overlay::WelcomeOverlay;
pub use landing_page::LandingPage;
pub use cake_ceremony::CakeCeremony;
pub use journey_timeline::JourneyTimeline;
pub use packing_game::PackingGame;
pub use birthday_wishes::BirthdayWishes;
pub use twin_quiz::TwinQuiz;
pub use vibe_switch::VibeSwitch;
pub use music_toggle::{start_music, MusicToggle};
pub use custom_cursor::CustomCursor;
pub use scroll_progress::ScrollProgress;
