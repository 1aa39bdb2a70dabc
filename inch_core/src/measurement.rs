//! # Measurement Type
//!
//! The core value type: an exact rational number of inches. A newtype over
//! [`BigRational`] rather than an `f64` wrapper because chained calculations
//! must round-trip exactly; the only rounding anywhere in the engine happens
//! at display time, in [`crate::format::format`].
//!
//! Arbitrary numerator/denominator magnitude is supported, so repeated
//! multiply/divide never loses precision.
//!
//! ## Example
//!
//! ```rust
//! use inch_core::Measurement;
//!
//! let a = Measurement::from_inches(30);
//! let b = Measurement::from_inches(8);
//! let total = &a + &b;
//!
//! assert_eq!(total.to_string(), "3' 2\"");
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::{MeasureError, MeasureResult};
use crate::format::FractionSet;

/// Inches per foot
pub const INCHES_PER_FOOT: i64 = 12;

/// An exact rational length in inches.
///
/// Value semantics: created per calculation, never mutated, discarded after
/// formatting. May be negative (subtraction) or zero.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Measurement(BigRational);

impl Measurement {
    /// The zero-length measurement.
    pub fn zero() -> Self {
        Measurement(BigRational::zero())
    }

    /// Build a measurement from its feet / whole-inch / fraction parts.
    ///
    /// Computes `feet * 12 + inches + fraction`. No sign constraints: feet and
    /// inches may independently be negative, and the fraction need not lie in
    /// [0, 1).
    pub fn from_parts(feet: BigInt, inches: BigInt, fraction: BigRational) -> Self {
        let whole = feet * BigInt::from(INCHES_PER_FOOT) + inches;
        Measurement(BigRational::from_integer(whole) + fraction)
    }

    /// Build a measurement from a whole number of inches.
    pub fn from_inches(inches: i64) -> Self {
        Measurement(BigRational::from_integer(BigInt::from(inches)))
    }

    /// Wrap an exact rational total-inches value.
    pub fn from_ratio(total_inches: BigRational) -> Self {
        Measurement(total_inches)
    }

    /// The exact total-inches value.
    pub fn total_inches(&self) -> &BigRational {
        &self.0
    }

    /// Consume self, returning the exact total-inches value.
    pub fn into_total_inches(self) -> BigRational {
        self.0
    }

    /// True if the measurement is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True if the measurement is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Magnitude of the measurement.
    pub fn abs(&self) -> Self {
        Measurement(self.0.abs())
    }

    /// Divide, rejecting a zero divisor.
    ///
    /// The zero check happens before any rational arithmetic, so a zero
    /// divisor is reported as [`MeasureError::DivideByZero`] rather than
    /// reaching the underlying primitive.
    pub fn checked_div(&self, divisor: &Measurement) -> MeasureResult<Measurement> {
        if divisor.is_zero() {
            return Err(MeasureError::DivideByZero);
        }
        Ok(Measurement(&self.0 / &divisor.0))
    }
}

macro_rules! impl_measurement_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Measurement {
            type Output = Measurement;
            fn $method(self, rhs: Measurement) -> Self::Output {
                Measurement(self.0 $op rhs.0)
            }
        }

        impl $trait for &Measurement {
            type Output = Measurement;
            fn $method(self, rhs: &Measurement) -> Self::Output {
                Measurement(&self.0 $op &rhs.0)
            }
        }
    };
}

impl_measurement_op!(Add, add, +);
impl_measurement_op!(Sub, sub, -);
impl_measurement_op!(Mul, mul, *);

// Div panics on a zero divisor, like integer division does. Checked paths are
// `Measurement::checked_div` and `arithmetic::apply`.
impl_measurement_op!(Div, div, /);

impl Neg for Measurement {
    type Output = Measurement;
    fn neg(self) -> Self::Output {
        Measurement(-self.0)
    }
}

impl Neg for &Measurement {
    type Output = Measurement;
    fn neg(self) -> Self::Output {
        Measurement(-&self.0)
    }
}

/// Renders with the standard denominator set, e.g. `5' 3 1/2"`.
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = crate::format::format(self, &FractionSet::standard());
        fmt::Display::fmt(&formatted, f)
    }
}

/// Parses a whole-string inch expression such as `1 3/8`, `3/16`, or `2.25`.
///
/// See [`crate::parse::parse_inches`].
impl FromStr for Measurement {
    type Err = MeasureError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_inches(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let m = Measurement::from_parts(
            BigInt::from(5),
            BigInt::from(3),
            BigRational::new(BigInt::from(1), BigInt::from(2)),
        );
        // 5*12 + 3 + 1/2 = 127/2
        assert_eq!(
            m.total_inches(),
            &BigRational::new(BigInt::from(127), BigInt::from(2))
        );
    }

    #[test]
    fn test_arithmetic_is_exact() {
        let third = Measurement::from_ratio(BigRational::new(BigInt::from(1), BigInt::from(3)));
        let mut total = Measurement::zero();
        for _ in 0..3 {
            total = total + third.clone();
        }
        assert_eq!(total, Measurement::from_inches(1));
    }

    #[test]
    fn test_checked_div_rejects_zero() {
        let a = Measurement::from_inches(7);
        assert_eq!(
            a.checked_div(&Measurement::zero()),
            Err(MeasureError::DivideByZero)
        );
        assert_eq!(
            a.checked_div(&Measurement::from_inches(2)).unwrap(),
            Measurement::from_ratio(BigRational::new(BigInt::from(7), BigInt::from(2)))
        );
    }

    #[test]
    fn test_negation_and_abs() {
        let a = Measurement::from_inches(4);
        let neg = -&a;
        assert!(neg.is_negative());
        assert_eq!(neg.abs(), a);
    }

    #[test]
    fn test_serialization() {
        let m = Measurement::from_parts(
            BigInt::from(1),
            BigInt::from(11),
            BigRational::new(BigInt::from(1), BigInt::from(2)),
        );
        let json = serde_json::to_string(&m).unwrap();
        let roundtrip: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
