//! Number-guessing game rules.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
    Correct,
}

/// A game in progress: the hidden target plus the number of counted guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessGame {
    target: i64,
    attempts: u32,
}

impl GuessGame {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            attempts: 0,
        }
    }

    /// Score one guess. Every call counts as an attempt.
    pub fn guess(&mut self, value: i64) -> Hint {
        self.attempts += 1;
        match value.cmp(&self.target) {
            Ordering::Less => Hint::TooLow,
            Ordering::Greater => Hint::TooHigh,
            Ordering::Equal => Hint::Correct,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}
