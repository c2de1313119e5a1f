//! Guess-the-number game.

use anyhow::Result;
use tracing::debug;

use crate::core::guess::{GuessGame, Hint};
use crate::core::parse::parse_integer;
use crate::io::config::GuessConfig;
use crate::io::console::Console;
use crate::io::random::RandomSource;

pub const NOT_AN_INTEGER: &str = "Please enter a valid integer.";

/// Play until the target is found. Returns the number of counted attempts;
/// lines that are not integers are not counted.
pub fn run(
    console: &mut dyn Console,
    random: &mut dyn RandomSource,
    range: &GuessConfig,
) -> Result<u32> {
    let target = random.random_integer(range.low, range.high);
    debug!(low = range.low, high = range.high, "target drawn");
    console.write_line(&format!(
        "I have selected a number between {} and {}. Try to guess it!",
        range.low, range.high
    ))?;

    let mut game = GuessGame::new(target);
    loop {
        let raw = console.read_line("Enter your guess: ")?;
        let Ok(value) = parse_integer(&raw) else {
            console.write_line(NOT_AN_INTEGER)?;
            continue;
        };
        match game.guess(value) {
            Hint::TooLow => console.write_line("Too low! Try again.")?,
            Hint::TooHigh => console.write_line("Too high! Try again.")?,
            Hint::Correct => {
                console.write_line(&format!(
                    "Congratulations! You guessed the number in {} attempts.",
                    game.attempts()
                ))?;
                return Ok(game.attempts());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::console::is_end_of_input;
    use crate::test_support::{ScriptedConsole, SequenceRandom};

    #[test]
    fn counts_only_integer_guesses() {
        let mut console = ScriptedConsole::new(["50", "seven", "20", "30"]);
        let mut random = SequenceRandom::new(vec![30]);
        let attempts = run(&mut console, &mut random, &GuessConfig::default()).expect("run");
        assert_eq!(attempts, 3);
        assert!(console.printed("Too high! Try again."));
        assert!(console.printed(NOT_AN_INTEGER));
        assert!(console.printed("Too low! Try again."));
        assert!(console.printed("Congratulations! You guessed the number in 3 attempts."));
    }

    #[test]
    fn oversized_guesses_count_as_too_high_or_too_low() {
        let mut console =
            ScriptedConsole::new(["99999999999999999999", "-99999999999999999999", "5"]);
        let mut random = SequenceRandom::new(vec![5]);
        let attempts = run(&mut console, &mut random, &GuessConfig::default()).expect("run");
        assert_eq!(attempts, 3);
        assert!(console.printed("Too high! Try again."));
        assert!(console.printed("Too low! Try again."));
        assert!(!console.printed(NOT_AN_INTEGER));
    }

    #[test]
    fn announces_configured_range() {
        let mut console = ScriptedConsole::new(["5"]);
        let mut random = SequenceRandom::new(vec![5]);
        run(&mut console, &mut random, &GuessConfig { low: 5, high: 6 }).expect("run");
        assert!(console.printed("I have selected a number between 5 and 6. Try to guess it!"));
    }

    #[test]
    fn end_of_input_ends_game() {
        let mut console = ScriptedConsole::new(["1"]);
        let mut random = SequenceRandom::new(vec![99]);
        let err = run(&mut console, &mut random, &GuessConfig::default()).expect_err("eof");
        assert!(is_end_of_input(&err));
    }
}
