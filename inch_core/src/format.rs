//! # Measurement Formatting
//!
//! Converts an exact rational total back into the feet / whole-inch /
//! nearest-fraction form users expect, e.g. `5' 3 1/2"`.
//!
//! The fractional inch is snapped to the nearest displayable fraction by a
//! linear scan over a small ascending set of denominators ([`FractionSet`]).
//! The set is tiny and fixed, so no search structure is warranted.
//!
//! Rounding is half-away-from-zero. Ties between denominators keep the first
//! (smallest-denominator) candidate: the scan only replaces the best match on
//! a strict improvement.
//!
//! ## Example
//!
//! ```rust
//! use inch_core::{format, parse, FractionSet};
//!
//! let m = parse("5", "3", "1/2").unwrap();
//! let formatted = format(&m, &FractionSet::standard());
//!
//! assert_eq!(formatted.to_string(), "5' 3 1/2\"");
//! assert_eq!(formatted.inches, 3);
//! ```

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::{MeasureError, MeasureResult};
use crate::measurement::{Measurement, INCHES_PER_FOOT};

/// An ascending set of allowed fraction denominators.
///
/// Determines display granularity: the formatter never shows a denominator
/// outside the set. Constructors validate that the set is non-empty, strictly
/// ascending, and free of zeros; deserialization goes through the same check.
///
/// Serializes as a plain array, e.g. `[2,4,8,16]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct FractionSet {
    denominators: Vec<u32>,
}

impl FractionSet {
    /// The standard tape-measure set: halves down to 1/256.
    pub fn standard() -> Self {
        FractionSet {
            denominators: vec![2, 4, 8, 16, 32, 64, 128, 256],
        }
    }

    /// The coarse set: halves down to 1/16.
    pub fn coarse() -> Self {
        FractionSet {
            denominators: vec![2, 4, 8, 16],
        }
    }

    /// Build a custom set.
    ///
    /// # Errors
    ///
    /// [`MeasureError::InvalidFractionSet`] if the set is empty, contains a
    /// zero, or is not strictly ascending.
    pub fn new(denominators: Vec<u32>) -> MeasureResult<Self> {
        if denominators.is_empty() {
            return Err(MeasureError::invalid_fraction_set(
                "must contain at least one denominator",
            ));
        }
        if denominators.contains(&0) {
            return Err(MeasureError::invalid_fraction_set(
                "denominators must be nonzero",
            ));
        }
        if denominators.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(MeasureError::invalid_fraction_set(
                "denominators must be strictly ascending",
            ));
        }
        Ok(FractionSet { denominators })
    }

    /// The denominators, ascending.
    pub fn denominators(&self) -> &[u32] {
        &self.denominators
    }
}

impl Default for FractionSet {
    fn default() -> Self {
        FractionSet::standard()
    }
}

impl TryFrom<Vec<u32>> for FractionSet {
    type Error = MeasureError;

    fn try_from(denominators: Vec<u32>) -> Result<Self, Self::Error> {
        FractionSet::new(denominators)
    }
}

impl From<FractionSet> for Vec<u32> {
    fn from(set: FractionSet) -> Self {
        set.denominators
    }
}

/// A measurement split into its display parts.
///
/// Invariants: `inches` in [0, 12), `numerator` in [0, `denominator`) with the
/// fraction in lowest terms (`0/1` when there is no fractional inch). The
/// sign lives in `negative`; `feet` is the magnitude's foot count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedMeasurement {
    /// True when the original total was negative
    pub negative: bool,
    /// Whole feet of the magnitude
    pub feet: BigInt,
    /// Whole inches past the last foot
    pub inches: u32,
    /// Fraction numerator, lowest terms
    pub numerator: u32,
    /// Fraction denominator, lowest terms
    pub denominator: u32,
}

/// Renders `{feet}' {inches} {numerator}/{denominator}"`, omitting the
/// fraction when the numerator is 0 and prefixing `-` for negative totals.
impl fmt::Display for FormattedMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}' {}", self.feet, self.inches)?;
        if self.numerator != 0 {
            write!(f, " {}/{}", self.numerator, self.denominator)?;
        }
        write!(f, "\"")
    }
}

/// Format a measurement against a denominator set.
///
/// Sign handling is sign-then-magnitude: the magnitude is split into feet,
/// whole inches, and nearest fraction, and the sign is carried separately. A
/// fraction that rounds up to a whole inch carries into `inches`, and twelve
/// inches carry into `feet`, so the output never shows `8/8` or `12"`.
pub fn format(total: &Measurement, set: &FractionSet) -> FormattedMeasurement {
    let negative = total.is_negative();
    let magnitude = total.total_inches().abs();

    let foot = BigRational::from_integer(BigInt::from(INCHES_PER_FOOT));
    let mut feet = (&magnitude / &foot).floor().to_integer();
    let remainder = &magnitude - BigRational::from_integer(&feet * BigInt::from(INCHES_PER_FOOT));

    let whole = remainder.floor().to_integer();
    let fractional = &remainder - BigRational::from_integer(whole.clone());
    // floor of the sub-foot remainder, always 0..=11
    let mut inches = whole.to_u32().unwrap_or(0);

    let nearest = nearest_fraction(&fractional, set);

    let (numerator, denominator) = if nearest.is_one() {
        // rounded up to a whole inch
        inches += 1;
        (0, 1)
    } else if nearest.is_zero() {
        (0, 1)
    } else {
        // nearest is in (0, 1) and already reduced; both parts fit in u32
        (
            nearest.numer().to_u32().unwrap_or(0),
            nearest.denom().to_u32().unwrap_or(1),
        )
    };

    if inches as i64 == INCHES_PER_FOOT {
        feet += BigInt::one();
        inches = 0;
    }

    FormattedMeasurement {
        negative,
        feet,
        inches,
        numerator,
        denominator,
    }
}

/// Nearest representable fraction to a fractional part in [0, 1).
///
/// Scans the denominators in ascending order; for each, the candidate is
/// `round(fractional * d) / d` with half-away-from-zero rounding. The best
/// candidate is replaced only on a strict improvement, so ties keep the
/// smallest denominator. May return exactly 1 (the caller carries it).
fn nearest_fraction(fractional: &BigRational, set: &FractionSet) -> BigRational {
    let mut best: Option<(BigRational, BigRational)> = None;

    for &denominator in set.denominators() {
        let d = BigRational::from_integer(BigInt::from(denominator));
        let candidate = (fractional * &d).round() / &d;
        let diff = (fractional - &candidate).abs();

        let improves = match &best {
            None => true,
            Some((_, best_diff)) => diff < *best_diff,
        };
        if improves {
            best = Some((candidate, diff));
        }
    }

    // the set is never empty (FractionSet constructors enforce it)
    best.map(|(candidate, _)| candidate)
        .unwrap_or_else(BigRational::zero)
}
