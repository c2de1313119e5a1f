//! Rock, paper, scissors rules.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move {0:?}")]
pub struct UnknownMove(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        })
    }
}

impl FromStr for Move {
    type Err = UnknownMove;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err(UnknownMove(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Tie,
    Win,
    Lose,
}

impl RoundResult {
    pub fn message(self) -> &'static str {
        match self {
            Self::Tie => "It's a tie!",
            Self::Win => "You win!",
            Self::Lose => "You lose!",
        }
    }
}

/// Outcome from the player's point of view.
pub fn play(player: Move, computer: Move) -> RoundResult {
    if player == computer {
        RoundResult::Tie
    } else if player.beats() == computer {
        RoundResult::Win
    } else {
        RoundResult::Lose
    }
}
