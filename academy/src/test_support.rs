//! Scripted doubles for console and randomness, shared by unit and
//! integration tests.

use std::collections::VecDeque;

use anyhow::Result;

use crate::io::console::{Console, EndOfInput};
use crate::io::random::RandomSource;

/// Console that replays canned input lines and records everything written.
///
/// Once the script is exhausted every read fails with [`EndOfInput`].
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Lines written with `write_line`, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Prompts passed to `read_line`, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Input lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// True if some output line equals `line`.
    pub fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|l| l == line)
    }

    /// Index of the first output line equal to `line`.
    pub fn position_of(&self, line: &str) -> Option<usize> {
        self.output.iter().position(|l| l == line)
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.input.pop_front().ok_or_else(|| EndOfInput.into())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

/// Random source that replays fixed values, clamped into the requested range.
///
/// Cycles through the sequence when it runs out.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<i64>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<i64>) -> Self {
        assert!(!values.is_empty(), "SequenceRandom needs at least one value");
        Self { values, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn random_integer(&mut self, low: i64, high: i64) -> i64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(low, high)
    }
}
