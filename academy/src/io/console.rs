//! Line-oriented console abstraction.
//!
//! The [`Console`] trait decouples sessions from the real terminal. Tests use
//! a scripted console (see `test_support`) that replays canned input lines and
//! records every prompt and output line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;

/// Input stream is exhausted.
///
/// Not a crash: sessions treat it as a normal way to terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("end of input")]
pub struct EndOfInput;

/// Returns true if `err` is (or wraps) [`EndOfInput`].
pub fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<EndOfInput>().is_some()
}

/// Abstraction over interactive line I/O.
pub trait Console {
    /// Write `prompt` (no trailing newline) and read one line of input.
    ///
    /// The line terminator is stripped. Fails with [`EndOfInput`] when no
    /// more input is available.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Console over any buffered reader and writer; [`StdConsole::stdio`] wires
/// it to the process streams.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl StdConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if !prompt.is_empty() {
            self.output
                .write_all(prompt.as_bytes())
                .context("write prompt")?;
            self.output.flush().context("flush prompt")?;
        }
        let mut buf = String::new();
        let read = self.input.read_line(&mut buf).context("read stdin")?;
        if read == 0 {
            return Err(EndOfInput.into());
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(line.to_string())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("write stdout")
    }
}
