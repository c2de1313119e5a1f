//! The console examples bundled behind the launcher menu.
//!
//! Collection examples (`todo`, `contacts`) are [`Session`](crate::session::Session)s
//! over a store; the others are short scripted exchanges. Every example reads
//! through the injected [`Console`] and lets [`EndOfInput`](crate::io::console::EndOfInput)
//! propagate so the caller can end the program cleanly.

pub mod calculator;
pub mod contacts;
pub mod guess;
pub mod hello;
pub mod launcher;
pub mod rps;
pub mod todo;

use anyhow::Result;
use clap::ValueEnum;
use tracing::info;

use crate::io::config::AcademyConfig;
use crate::io::console::Console;
use crate::io::random::RandomSource;

/// Capabilities and settings shared by every example in one program run.
pub struct Academy {
    pub config: AcademyConfig,
    pub random: Box<dyn RandomSource>,
}

impl Academy {
    pub fn new(config: AcademyConfig, random: Box<dyn RandomSource>) -> Self {
        Self { config, random }
    }
}

/// Examples in launcher order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Example {
    Hello,
    Calculator,
    Guess,
    Todo,
    Rps,
    Contacts,
}

impl Example {
    pub const ALL: [Example; 6] = [
        Example::Hello,
        Example::Calculator,
        Example::Guess,
        Example::Todo,
        Example::Rps,
        Example::Contacts,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Hello => "Chapter 1: Hello, World and Basic I/O",
            Self::Calculator => "Chapter 2: Simple Calculator",
            Self::Guess => "Chapter 3: Guess the Number Game",
            Self::Todo => "Chapter 4: To-Do List CLI App",
            Self::Rps => "Chapter 5: Rock, Paper, Scissors Game",
            Self::Contacts => "Chapter 6: Simple Contact Manager",
        }
    }

    /// Print the banner and run the example to completion.
    ///
    /// Fails with `EndOfInput` if input runs out before the example finishes.
    pub fn run(self, academy: &mut Academy, console: &mut dyn Console) -> Result<()> {
        info!(example = ?self, "running example");
        console.write_line("")?;
        console.write_line(&format!("--- {} ---", self.title()))?;
        match self {
            Self::Hello => hello::run(console),
            Self::Calculator => calculator::run(console),
            Self::Guess => {
                guess::run(console, academy.random.as_mut(), &academy.config.guess).map(|_| ())
            }
            Self::Todo => todo::session(&academy.config.todo)
                .run(console)?
                .into_parent(),
            Self::Rps => rps::run(console, academy.random.as_mut()),
            Self::Contacts => contacts::session(&academy.config.contacts)
                .run(console)?
                .into_parent(),
        }
    }
}
