//! Outcome Evaluation
//!
//! Decides win/lose from the packed state of the items.

use crate::item::Item;

/// Counts over the current item set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub correct_packed: usize,
    pub incorrect_packed: usize,
    pub total_should_pack: usize,
}

impl Tally {
    pub fn of(items: &[Item]) -> Self {
        items.iter().fold(Tally::default(), |mut t, item| {
            if item.should_pack() {
                t.total_should_pack += 1;
                if item.is_packed() {
                    t.correct_packed += 1;
                }
            } else if item.is_packed() {
                t.incorrect_packed += 1;
            }
            t
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep playing
    Undecided,
    Won,
    /// Ids of the items that should not have been packed
    Lost(Vec<u32>),
}

/// Lose is checked before win: one wrong item ends the game even when
/// every correct item is already packed.
pub fn evaluate(items: &[Item]) -> Outcome {
    let tally = Tally::of(items);
    if tally.incorrect_packed > 0 {
        let wrong = items
            .iter()
            .filter(|item| item.is_wrongly_packed())
            .map(|item| item.id)
            .collect();
        return Outcome::Lost(wrong);
    }
    if tally.correct_packed == tally.total_should_pack {
        return Outcome::Won;
    }
    Outcome::Undecided
}
