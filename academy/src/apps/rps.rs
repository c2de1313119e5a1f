//! Rock, paper, scissors against a random opponent.

use anyhow::{Context, Result};

use crate::core::rps::{Move, play};
use crate::io::console::Console;
use crate::io::random::RandomSource;

pub const INVALID_MOVE: &str = "Invalid move. Please choose 'rock', 'paper', or 'scissors'.";
pub const FAREWELL: &str = "Thanks for playing!";

/// Play rounds until the player types `exit`.
pub fn run(console: &mut dyn Console, random: &mut dyn RandomSource) -> Result<()> {
    loop {
        console.write_line("")?;
        let raw = console.read_line("Enter rock, paper, or scissors (or 'exit' to quit): ")?;
        if raw.trim().eq_ignore_ascii_case("exit") {
            return console.write_line(FAREWELL);
        }
        let Ok(player) = raw.parse::<Move>() else {
            console.write_line(INVALID_MOVE)?;
            continue;
        };
        let computer = random_move(random)?;
        console.write_line(&format!("Computer chose: {computer}"))?;
        console.write_line(play(player, computer).message())?;
    }
}

fn random_move(random: &mut dyn RandomSource) -> Result<Move> {
    let last = i64::try_from(Move::ALL.len() - 1).context("move count")?;
    let index = random.random_integer(0, last);
    usize::try_from(index)
        .ok()
        .and_then(|index| Move::ALL.get(index).copied())
        .with_context(|| format!("random move index {index} out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedConsole, SequenceRandom};

    #[test]
    fn plays_rounds_until_exit() {
        // Computer plays scissors, then rock.
        let mut console = ScriptedConsole::new(["Rock", "lizard", "paper", " EXIT "]);
        let mut random = SequenceRandom::new(vec![2, 0]);
        run(&mut console, &mut random).expect("run");
        assert_eq!(
            console.output(),
            [
                "",
                "Computer chose: scissors",
                "You win!",
                "",
                INVALID_MOVE,
                "",
                "Computer chose: rock",
                "You win!",
                "",
                FAREWELL,
            ]
        );
    }

    #[test]
    fn tie_and_loss_are_reported() {
        let mut console = ScriptedConsole::new(["rock", "rock", "exit"]);
        let mut random = SequenceRandom::new(vec![0, 1]);
        run(&mut console, &mut random).expect("run");
        assert!(console.printed("It's a tie!"));
        assert!(console.printed("You lose!"));
    }
}
