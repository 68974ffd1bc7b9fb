//! Quiz Progress
//!
//! Answering shows feedback, then `advance` moves on after a pause.

use crate::models::QuizQuestion;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizState {
    pub current: usize,
    pub score: usize,
    /// Option picked for the current question, while its feedback is shown
    pub selected: Option<usize>,
    pub complete: bool,
}

impl QuizState {
    /// Record an answer. Ignored while feedback is already showing.
    /// Returns whether the answer was correct.
    pub fn answer(&mut self, questions: &[QuizQuestion], option: usize) -> Option<bool> {
        if self.complete || self.selected.is_some() {
            return None;
        }
        let question = questions.get(self.current)?;
        self.selected = Some(option);
        let correct = option == question.correct;
        if correct {
            self.score += 1;
        }
        Some(correct)
    }

    /// Leave the feedback view: next question, or finish after the last
    pub fn advance(&mut self, questions: &[QuizQuestion]) {
        if self.selected.is_none() {
            return;
        }
        if self.current + 1 < questions.len() {
            self.current += 1;
            self.selected = None;
        } else {
            self.complete = true;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
