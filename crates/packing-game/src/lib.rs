//! Packing Game
//!
//! The suitcase packing mini-game, free of any browser dependency.
//! The UI turns drag releases and timer ticks into [`Command`]s and
//! feeds them to a [`GameSession`].

mod item;
mod region;
mod outcome;
mod session;
mod tests;

pub use item::{Item, ItemSpec};
pub use region::{drop_lands_in, Point, Region};
pub use outcome::{evaluate, Outcome, Tally};
pub use session::{
    Command, GameSession, LossReason, Placement, SessionError, Status, DEFAULT_TIME_BUDGET_SECS,
};
