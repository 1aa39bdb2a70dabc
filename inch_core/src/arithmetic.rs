//! # Arithmetic Operations
//!
//! The four operations on two measurements. All of them are exact rational
//! arithmetic with no rounding; display-time rounding is
//! [`crate::format::format`]'s job.
//!
//! Multiply and divide treat both operands as plain inch magnitudes and the
//! result is again rendered as inches. That is the calculator's historical
//! behavior (multiplying two lengths does not produce an area here), kept
//! intentionally.
//!
//! ## Example
//!
//! ```rust
//! use inch_core::{apply, parse, Operation};
//!
//! let a = parse("1", "0", "").unwrap();
//! let b = parse("0", "11", "1/2").unwrap();
//!
//! let sum = apply(Operation::Add, &a, &b).unwrap();
//! assert_eq!(sum.to_string(), "1' 11 1/2\"");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{MeasureError, MeasureResult};
use crate::measurement::Measurement;

/// Operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in button order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The operator symbol used in log lines.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// The operation's selector name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Accepts selector names (`add`, `subtract`, `multiply`, `divide`, any case)
/// and the operator symbols (`+ - * /`, plus `x` for multiply). Anything else
/// is [`MeasureError::InvalidOperation`].
impl FromStr for Operation {
    type Err = MeasureError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "-" => Ok(Operation::Subtract),
            "multiply" | "*" | "x" => Ok(Operation::Multiply),
            "divide" | "/" => Ok(Operation::Divide),
            other => Err(MeasureError::invalid_operation(other)),
        }
    }
}

/// Apply an operation to two measurements.
///
/// Pure and exact. Division checks the divisor for zero before any rational
/// arithmetic happens and reports [`MeasureError::DivideByZero`].
pub fn apply(op: Operation, a: &Measurement, b: &Measurement) -> MeasureResult<Measurement> {
    match op {
        Operation::Add => Ok(a + b),
        Operation::Subtract => Ok(a - b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide => a.checked_div(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn test_add_then_subtract_round_trips() {
        let a = parse("3", "7", "5/16").unwrap();
        let b = parse("1", "11", "3/8").unwrap();

        let sum = apply(Operation::Add, &a, &b).unwrap();
        let back = apply(Operation::Subtract, &sum, &b).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_multiply_magnitudes() {
        // 2" * 6" = 12" = 1 foot of raw magnitude
        let a = Measurement::from_inches(2);
        let b = Measurement::from_inches(6);
        let product = apply(Operation::Multiply, &a, &b).unwrap();
        assert_eq!(product, Measurement::from_inches(12));
        assert_eq!(product.to_string(), "1' 0\"");
    }

    #[test]
    fn test_divide() {
        let a = parse("1", "0", "").unwrap();
        let b = parse("0", "6", "").unwrap();
        let quotient = apply(Operation::Divide, &a, &b).unwrap();
        assert_eq!(quotient, Measurement::from_inches(2));
    }

    #[test]
    fn test_divide_by_zero() {
        let zero = parse("", "", "").unwrap();
        for dividend in [
            Measurement::zero(),
            Measurement::from_inches(1),
            parse("5", "3", "1/2").unwrap(),
            -Measurement::from_inches(7),
        ] {
            assert_eq!(
                apply(Operation::Divide, &dividend, &zero),
                Err(MeasureError::DivideByZero)
            );
        }
    }

    #[test]
    fn test_subtraction_goes_negative() {
        let a = parse("0", "6", "").unwrap();
        let b = parse("1", "0", "").unwrap();
        let difference = apply(Operation::Subtract, &a, &b).unwrap();
        assert!(difference.is_negative());
        assert_eq!(difference, Measurement::from_inches(-6));
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("SUBTRACT".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("*".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("x".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("/".parse::<Operation>().unwrap(), Operation::Divide);

        let err = "modulo".parse::<Operation>().unwrap_err();
        assert_eq!(err, MeasureError::invalid_operation("modulo"));
    }

    #[test]
    fn test_symbols() {
        let symbols: Vec<&str> = Operation::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!["+", "-", "*", "/"]);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Operation::Divide).unwrap();
        assert_eq!(json, "\"Divide\"");
        let roundtrip: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Operation::Divide);
    }
}
