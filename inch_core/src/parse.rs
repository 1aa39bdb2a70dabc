//! # Measurement Parsing
//!
//! Converts raw feet/inches/fraction text into an exact [`Measurement`].
//! Validation is eager: each field is checked as it is read and the first
//! problem comes back as a typed [`MeasureError`], so there is no notion of a
//! partially-valid input.
//!
//! Field conventions match the entry boxes they come from:
//!
//! - empty (or whitespace-only) feet/inches text means 0
//! - empty fraction text means `0/1`
//! - fraction text may be `<integer>/<integer>`, a bare integer, or an exact
//!   decimal such as `0.375`
//!
//! ## Example
//!
//! ```rust
//! use inch_core::parse;
//!
//! let m = parse("5", "3", "1/2").unwrap();
//! assert_eq!(m.to_string(), "5' 3 1/2\"");
//!
//! // Empty fields default to zero
//! assert!(parse("", "", "").unwrap().is_zero());
//! ```

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::errors::{MeasureError, MeasureResult};
use crate::measurement::Measurement;

/// Parse the three entry fields of one measurement.
///
/// Returns `feet*12 + inches + fraction` as an exact rational. Feet and
/// inches accept an optional sign and arbitrary magnitude.
///
/// # Errors
///
/// [`MeasureError::InvalidInteger`] if the feet or inches text is not a whole
/// number, [`MeasureError::InvalidFraction`] if the fraction text is malformed
/// or has a zero denominator.
pub fn parse(feet_text: &str, inches_text: &str, fraction_text: &str) -> MeasureResult<Measurement> {
    let feet = parse_integer_field("feet", feet_text)?;
    let inches = parse_integer_field("inches", inches_text)?;
    let fraction = parse_fraction(fraction_text)?;
    Ok(Measurement::from_parts(feet, inches, fraction))
}

/// Parse a whole-string inch expression.
///
/// Accepts the forms a tape-measure user writes down: `1 3/8`, `3/16`,
/// `2.25`, or `7`, with an optional leading sign. In the mixed form the sign
/// applies to the whole value, so `-1 3/8` is −(1 + 3/8) inches.
///
/// This is also the [`std::str::FromStr`] impl for [`Measurement`].
pub fn parse_inches(text: &str) -> MeasureResult<Measurement> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    match parts.as_slice() {
        [single] => Ok(Measurement::from_ratio(parse_fraction(single)?)),
        [whole_text, fraction_text] => {
            let whole = parse_integer_field("inches", whole_text)?;
            let fraction = parse_fraction(fraction_text)?;
            if fraction.is_negative() {
                return Err(MeasureError::invalid_fraction(
                    *fraction_text,
                    "fraction part of a mixed number cannot be negative",
                ));
            }
            let magnitude = BigRational::from_integer(whole.abs()) + fraction;
            Ok(Measurement::from_ratio(if whole.is_negative() {
                -magnitude
            } else {
                magnitude
            }))
        }
        _ => Err(MeasureError::invalid_fraction(
            text.trim(),
            "expected an inch value like '1 3/8', '3/16', or '2.25'",
        )),
    }
}

/// Parse fraction text into an exact rational.
///
/// Empty text is `0/1`. A denominator of zero is rejected here, before any
/// rational is constructed, so it surfaces as a typed error rather than an
/// arithmetic fault.
pub fn parse_fraction(text: &str) -> MeasureResult<BigRational> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(BigRational::zero());
    }

    if let Some((numer_text, denom_text)) = trimmed.split_once('/') {
        let numer = parse_big_int(numer_text).ok_or_else(|| {
            MeasureError::invalid_fraction(trimmed, "numerator must be a whole number")
        })?;
        let denom = parse_big_int(denom_text).ok_or_else(|| {
            MeasureError::invalid_fraction(trimmed, "denominator must be a whole number")
        })?;
        if denom.is_zero() {
            return Err(MeasureError::invalid_fraction(
                trimmed,
                "denominator cannot be zero",
            ));
        }
        return Ok(BigRational::new(numer, denom));
    }

    if trimmed.contains('.') {
        return parse_decimal(trimmed);
    }

    match parse_big_int(trimmed) {
        Some(value) => Ok(BigRational::from_integer(value)),
        None => Err(MeasureError::invalid_fraction(
            trimmed,
            "expected a fraction like '1/2', a whole number, or a decimal",
        )),
    }
}

fn parse_integer_field(field: &str, text: &str) -> MeasureResult<BigInt> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(BigInt::zero());
    }
    parse_big_int(trimmed).ok_or_else(|| MeasureError::invalid_integer(field, trimmed))
}

fn parse_big_int(text: &str) -> Option<BigInt> {
    text.trim().parse::<BigInt>().ok()
}

/// Exact decimal conversion: `0.375` becomes 375/1000, reduced. Never goes
/// through floating point.
fn parse_decimal(text: &str) -> MeasureResult<BigRational> {
    let malformed =
        || MeasureError::invalid_fraction(text, "expected a decimal like '0.375' or '.5'");

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (int_digits, frac_digits) = unsigned.split_once('.').ok_or_else(malformed)?;
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(malformed());
    }
    if !int_digits.chars().all(|c| c.is_ascii_digit())
        || !frac_digits.chars().all(|c| c.is_ascii_digit())
    {
        return Err(malformed());
    }

    let digits = format!("{int_digits}{frac_digits}");
    let numer = digits.parse::<BigInt>().map_err(|_| malformed())?;
    let denom = num_traits::pow(BigInt::from(10), frac_digits.len());

    let value = BigRational::new(numer, denom);
    Ok(if negative { -value } else { value })
}
