//! # Calculation History
//!
//! The log the calculator keeps of every successful calculation: one record
//! per operation, holding the formatted operands and result. The caller
//! decides how to display the log; this module only owns the data and the
//! line rendering.
//!
//! ## Example
//!
//! ```rust
//! use inch_core::{parse, apply, CalculationLog, FractionSet, Operation};
//!
//! let a = parse("1", "0", "").unwrap();
//! let b = parse("0", "11", "1/2").unwrap();
//! let result = apply(Operation::Add, &a, &b).unwrap();
//!
//! let mut log = CalculationLog::new();
//! let record = log.record(Operation::Add, &a, &b, &result, &FractionSet::standard());
//!
//! assert_eq!(record.to_string(), "1' 0\" + 0' 11 1/2\" = 1' 11 1/2\"");
//! assert_eq!(log.len(), 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arithmetic::Operation;
use crate::format::{format, FractionSet};
use crate::measurement::Measurement;

/// One logged calculation: formatted operands, operator, formatted result.
///
/// Operands are captured in their formatted form so the log reads exactly
/// like what the user saw, even if the fraction set changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// The operation performed
    pub operation: Operation,
    /// Left operand, formatted
    pub lhs: String,
    /// Right operand, formatted
    pub rhs: String,
    /// Result, formatted
    pub result: String,
}

impl CalculationRecord {
    /// Build a record by formatting both operands and the result with the
    /// same fraction set.
    pub fn new(
        operation: Operation,
        a: &Measurement,
        b: &Measurement,
        result: &Measurement,
        set: &FractionSet,
    ) -> Self {
        CalculationRecord {
            operation,
            lhs: format(a, set).to_string(),
            rhs: format(b, set).to_string(),
            result: format(result, set).to_string(),
        }
    }
}

/// Renders the log line, e.g. `1' 0" + 0' 11 1/2" = 1' 11 1/2"`.
impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            self.result
        )
    }
}

/// Append-only calculation log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationLog {
    entries: Vec<CalculationRecord>,
}

impl CalculationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        CalculationLog::default()
    }

    /// Format a calculation and append it, returning the new record.
    pub fn record(
        &mut self,
        operation: Operation,
        a: &Measurement,
        b: &Measurement,
        result: &Measurement,
        set: &FractionSet,
    ) -> &CalculationRecord {
        self.entries
            .push(CalculationRecord::new(operation, a, b, result, set));
        // just pushed, so the log is non-empty
        &self.entries[self.entries.len() - 1]
    }

    /// Append an already-built record.
    pub fn push(&mut self, record: CalculationRecord) {
        self.entries.push(record);
    }

    /// The logged records, oldest first.
    pub fn entries(&self) -> &[CalculationRecord] {
        &self.entries
    }

    /// Number of logged calculations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard all records (the calculator's "Reset All").
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
