//! Console calculator: two operands, one of four operations.

use anyhow::Result;
use tracing::warn;

use crate::core::calculator::{Operation, format_equation};
use crate::core::parse::parse_number;
use crate::io::console::Console;

pub const INVALID_OPERAND: &str = "Invalid input! Please enter numeric values.";
pub const INVALID_OPERATION: &str = "Invalid operation selected.";
pub const DIVISION_BY_ZERO: &str = "Error: Division by zero!";

pub fn run(console: &mut dyn Console) -> Result<()> {
    console.write_line("Welcome to the Simple Calculator!")?;
    let Ok(lhs) = parse_number(&console.read_line("Enter the first number: ")?) else {
        warn!("first operand not numeric");
        return console.write_line(INVALID_OPERAND);
    };
    let Ok(rhs) = parse_number(&console.read_line("Enter the second number: ")?) else {
        warn!("second operand not numeric");
        return console.write_line(INVALID_OPERAND);
    };

    console.write_line("")?;
    console.write_line("Select an operation:")?;
    for (index, op) in Operation::ALL.iter().enumerate() {
        console.write_line(&format!("{}. {} ({})", index + 1, op.name(), op.symbol()))?;
    }
    let choice = console.read_line("Enter your choice (1/2/3/4): ")?;
    let Some(op) = Operation::from_code(&choice) else {
        return console.write_line(INVALID_OPERATION);
    };
    match op.apply(lhs, rhs) {
        Ok(result) => {
            console.write_line("")?;
            console.write_line(&format!(
                "Result: {}",
                format_equation(lhs, op, rhs, result)
            ))
        }
        Err(err) => {
            warn!(%err, "calculation rejected");
            console.write_line(DIVISION_BY_ZERO)
        }
    }
}
