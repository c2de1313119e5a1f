//! Greeting example.

use anyhow::Result;

use crate::io::console::Console;

pub fn run(console: &mut dyn Console) -> Result<()> {
    console.write_line("Hello, World!")?;
    let name = console.read_line("What's your name? ")?;
    console.write_line(&format!("Hello, {name}!"))
}
