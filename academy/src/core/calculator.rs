//! Four-function arithmetic for the calculator example.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Menu order; position `i` is selected by code `i + 1`.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Resolve a menu code (`"1"`..`"4"`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Subtract),
            "3" => Some(Self::Multiply),
            "4" => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

/// `"{lhs} {op} {rhs} = {result}"` with operands rendered by [`format_float`].
pub fn format_equation(lhs: f64, op: Operation, rhs: f64, result: f64) -> String {
    format!(
        "{} {} {} = {}",
        format_float(lhs),
        op.symbol(),
        format_float(rhs),
        format_float(result)
    )
}

/// Shortest round-trip form with a decimal point (`3.0`); exponents carry a
/// sign and at least two digits (`1e+16`, `2.5e-05`), NaN prints as `nan`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}
