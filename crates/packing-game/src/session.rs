//! Game Session
//!
//! One play-through of the packing game, from start to Won/Lost.
//! State only changes through [`GameSession::apply`] or the helper
//! methods it dispatches to.

use std::collections::HashSet;
use std::fmt;

use crate::item::{Item, ItemSpec};
use crate::outcome::{evaluate, Outcome, Tally};
use crate::region::{drop_lands_in, Point, Region};

/// Seconds on the clock at start
pub const DEFAULT_TIME_BUDGET_SECS: u32 = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    NotStarted,
    Running,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LossReason {
    /// Ids of the items packed by mistake
    WrongItems(Vec<u32>),
    TimeUp,
}

/// Result of a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Item landed in the suitcase
    Packed,
    /// Released outside the suitcase, or the suitcase was not measured
    Missed,
    /// Unknown id, already packed, or the game is not running
    Ignored,
}

/// One external trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Start,
    Tick,
    Place {
        id: u32,
        point: Point,
        target: Option<Region>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    DuplicateItemId(u32),
    /// No item is marked `should_pack`, so the game could never be won
    EmptyPackingList,
    /// A zero-second clock would start and finish in the same instant
    ZeroTimeBudget,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::DuplicateItemId(id) => write!(f, "duplicate item id {}", id),
            SessionError::EmptyPackingList => write!(f, "no item belongs in the suitcase"),
            SessionError::ZeroTimeBudget => write!(f, "time budget must be at least one second"),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    items: Vec<Item>,
    time_budget: u32,
    seconds_remaining: u32,
    status: Status,
    loss: Option<LossReason>,
}

impl GameSession {
    pub fn new(specs: &[ItemSpec], time_budget: u32) -> Result<Self, SessionError> {
        if time_budget == 0 {
            return Err(SessionError::ZeroTimeBudget);
        }
        let mut seen = HashSet::new();
        for spec in specs {
            if !seen.insert(spec.id) {
                return Err(SessionError::DuplicateItemId(spec.id));
            }
        }
        if !specs.iter().any(|s| s.should_pack) {
            return Err(SessionError::EmptyPackingList);
        }

        Ok(Self {
            items: specs.iter().map(Item::new).collect(),
            time_budget,
            seconds_remaining: time_budget,
            status: Status::NotStarted,
            loss: None,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn loss_reason(&self) -> Option<&LossReason> {
        self.loss.as_ref()
    }

    pub fn tally(&self) -> Tally {
        Tally::of(&self.items)
    }

    /// Items on the packing list, in configured order
    pub fn packing_list(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.should_pack())
    }

    pub fn unpacked(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| !item.is_packed())
    }

    pub fn packed(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_packed())
    }

    /// Dispatch one command. Only `Place` produces a [`Placement`].
    pub fn apply(&mut self, command: Command) -> Option<Placement> {
        match command {
            Command::Start => {
                self.start();
                None
            }
            Command::Tick => {
                self.tick();
                None
            }
            Command::Place { id, point, target } => Some(self.place_item(id, point, target)),
        }
    }

    /// Begin, or restart from any status
    pub fn start(&mut self) {
        for item in &mut self.items {
            item.set_packed(false);
        }
        self.seconds_remaining = self.time_budget;
        self.status = Status::Running;
        self.loss = None;
        log::info!("packing game started with {}s on the clock", self.time_budget);
    }

    pub fn tick(&mut self) {
        if self.status != Status::Running {
            return;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.status = Status::Lost;
            self.loss = Some(LossReason::TimeUp);
            log::info!("packing game lost: time up");
        }
    }

    pub fn place_item(&mut self, id: u32, point: Point, target: Option<Region>) -> Placement {
        if self.status != Status::Running {
            return Placement::Ignored;
        }
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            log::debug!("drop for unknown item {} ignored", id);
            return Placement::Ignored;
        };
        if item.is_packed() {
            return Placement::Ignored;
        }
        if !drop_lands_in(target, point) {
            log::debug!("item {} released outside the suitcase at {:?}", id, point);
            return Placement::Missed;
        }

        item.set_packed(true);
        log::debug!("item {} packed", id);
        self.settle();
        Placement::Packed
    }

    fn settle(&mut self) {
        match evaluate(&self.items) {
            Outcome::Undecided => {}
            Outcome::Won => {
                self.status = Status::Won;
                log::info!("packing game won with {}s left", self.seconds_remaining);
            }
            Outcome::Lost(wrong) => {
                log::info!("packing game lost: wrong items {:?}", wrong);
                self.status = Status::Lost;
                self.loss = Some(LossReason::WrongItems(wrong));
            }
        }
    }
}
