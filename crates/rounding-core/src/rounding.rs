//! # Rounding Engine
//!
//! Rounds an uncertainty to a number of significant digits, then rounds the
//! measured value to the same decimal place.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  round_measurement(value, uncertainty, digits)                          │
//! │       │                                                                 │
//! │       ├── validate value / uncertainty / digit count                    │
//! │       │                                                                 │
//! │       ├── uncertainty == 0 ──► exact path: (value verbatim, "0")        │
//! │       │                                                                 │
//! │       ├── decompose(uncertainty) ──► resolve_digits                     │
//! │       │                                                                 │
//! │       ├── carry loop (2 passes fixed, 3 passes auto):                   │
//! │       │     round_to_digits ──► decompose ──► resolve_digits            │
//! │       │                                                                 │
//! │       ├── round value to the same decimal place (half away from zero)   │
//! │       │   and reject step counts that overflow                          │
//! │       │                                                                 │
//! │       └── format both with the same number of fractional digits        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding the Uncertainty
//! The uncertainty is rounded *up* unless the discarded part is at most one
//! tenth of a unit in the last kept digit:
//! ```text
//! 0.01234 (2 digits) → 0.013    discarded 0.34 units → up
//! 0.01009 (2 digits) → 0.010    discarded 0.09 units → down
//! 0.0215  (1 digit)  → 0.03     discarded 0.15 units → up
//! ```
//! The tolerance also absorbs the binary representation error of values
//! that sit exactly on a digit boundary (0.3 × 10 is not always 3.0).

use tracing::{debug, trace};

use crate::decompose::{decompose, shift_decimal};
use crate::error::RoundingResult;
use crate::format::{format_exact, format_scaled};
use crate::types::{Decomposition, DigitCount, RoundedMeasurement};
use crate::validation::{
    parse_number, validate_digit_count, validate_steps, validate_uncertainty, validate_value,
};

/// Passes needed with a fixed digit count: one rounding may carry the
/// uncertainty into the next decade, the second pass rounds at the
/// post-carry precision and cannot carry again.
const FIXED_DIGIT_PASSES: usize = 2;

/// Auto mode needs one more pass because the digit count itself depends on
/// the post-carry leading digit (0.96 → 1.0 switches from 1 to 2 digits).
const AUTO_DIGIT_PASSES: usize = 3;

/// Share of one unit in the last kept digit that may be dropped when
/// rounding the uncertainty down.
const ROUND_DOWN_TOLERANCE: f64 = 0.1;

// =============================================================================
// Digit-Count Resolution
// =============================================================================

/// Resolves the number of significant digits for a significand.
///
/// ## Example
/// ```rust
/// use rounding_core::{resolve_digits, DigitCount};
///
/// assert_eq!(resolve_digits(1.234, DigitCount::Auto), 2);
/// assert_eq!(resolve_digits(9.99, DigitCount::Auto), 1);
/// assert_eq!(resolve_digits(9.99, DigitCount::Fixed(3)), 3);
/// ```
pub fn resolve_digits(significand: f64, requested: DigitCount) -> u32 {
    match requested {
        DigitCount::Fixed(digits) => digits,
        DigitCount::Auto if significand.floor() == 1.0 => 2,
        DigitCount::Auto => 1,
    }
}

// =============================================================================
// Magnitude Rounding
// =============================================================================

/// Rounds a magnitude to `digits` significant digits.
///
/// `decomposition` must be the decomposition of `magnitude`. The result may
/// reach the next decade (`0.0999999` at 1 digit gives `0.1`); the caller
/// re-decomposes it.
///
/// ## Example
/// ```rust
/// use rounding_core::decompose::decompose;
/// use rounding_core::round_to_digits;
///
/// let d = decompose(0.01234).unwrap();
/// assert_eq!(round_to_digits(0.01234, &d, 2), 0.013);
///
/// let d = decompose(0.01009).unwrap();
/// assert_eq!(round_to_digits(0.01009, &d, 2), 0.010);
/// ```
pub fn round_to_digits(magnitude: f64, decomposition: &Decomposition, digits: u32) -> f64 {
    let exponent = last_digit_exponent(decomposition, digits);
    let scaled = shift_decimal(decomposition.significand, digits as i32 - 1);

    let down = shift_decimal(scaled.floor(), exponent);
    let up = shift_decimal(scaled.ceil(), exponent);
    let threshold = ROUND_DOWN_TOLERANCE * shift_decimal(1.0, exponent);

    if (down - magnitude).abs() <= threshold {
        down
    } else {
        up
    }
}

/// Rounds half away from zero: `2.5 → 3`, `-2.5 → -3`.
///
/// Written out on purpose: the result must not depend on a platform
/// primitive that might round half to even.
///
/// ```rust
/// use rounding_core::round_half_away_from_zero;
///
/// assert_eq!(round_half_away_from_zero(2.5), 3.0);
/// assert_eq!(round_half_away_from_zero(-2.5), -3.0);
/// assert_eq!(round_half_away_from_zero(2.4999), 2.0);
/// ```
pub fn round_half_away_from_zero(x: f64) -> f64 {
    if x >= 0.0 {
        (x + 0.5).floor()
    } else {
        -(-x + 0.5).floor()
    }
}

/// Decimal exponent of the last kept digit.
fn last_digit_exponent(decomposition: &Decomposition, digits: u32) -> i32 {
    decomposition.characteristic - digits as i32 + 1
}

// =============================================================================
// Carry Stabilization
// =============================================================================

/// Final precision of a rounded uncertainty.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Stabilized {
    uncertainty: f64,
    decomposition: Decomposition,
    digits: u32,
}

/// Rounds the uncertainty until its decomposition and digit count stop
/// changing.
///
/// One rounding moves the characteristic by at most one decade, so the loop
/// is bounded by [`FIXED_DIGIT_PASSES`] or [`AUTO_DIGIT_PASSES`] instead of
/// searching for a fixed point.
fn stabilize_uncertainty(uncertainty: f64, requested: DigitCount) -> RoundingResult<Stabilized> {
    let passes = if requested.is_auto() {
        AUTO_DIGIT_PASSES
    } else {
        FIXED_DIGIT_PASSES
    };

    let mut rounded = uncertainty;
    let mut decomposition = decompose(uncertainty)?;
    let mut digits = resolve_digits(decomposition.significand, requested);

    for pass in 1..=passes {
        rounded = round_to_digits(rounded, &decomposition, digits);
        let next = decompose(rounded)?;
        let next_digits = resolve_digits(next.significand, requested);

        trace!(
            pass,
            rounded,
            characteristic = next.characteristic,
            digits = next_digits,
            "rounding pass"
        );

        let stable = next.characteristic == decomposition.characteristic && next_digits == digits;
        if !stable {
            debug!(
                from_characteristic = decomposition.characteristic,
                to_characteristic = next.characteristic,
                from_digits = digits,
                to_digits = next_digits,
                "uncertainty rounding moved precision"
            );
        }

        decomposition = next;
        digits = next_digits;
        if stable {
            break;
        }
    }

    Ok(Stabilized {
        uncertainty: rounded,
        decomposition,
        digits,
    })
}

// =============================================================================
// Entry Points
// =============================================================================

/// Rounds a measured value and its uncertainty to matching precision.
///
/// ## Rules
/// - `value` must be finite (any sign)
/// - `uncertainty` must be finite and non-negative; zero returns the value
///   verbatim with uncertainty `"0"`
/// - `digits` is [`DigitCount::Auto`] or a fixed count in
///   `1..=MAX_SIGNIFICANT_DIGITS`
/// - the value, counted in steps of the last kept digit, must fit in an
///   `f64` (`(1e300, 1e-10)` does not)
///
/// ## Example
/// ```rust
/// use rounding_core::{round_measurement, DigitCount};
///
/// let r = round_measurement(123.45678, 0.01234, DigitCount::Auto).unwrap();
/// assert_eq!(r.into_pair(), ("123.457".to_string(), "0.013".to_string()));
///
/// let r = round_measurement(123.4545, 0.07234, DigitCount::Fixed(2)).unwrap();
/// assert_eq!(r.into_pair(), ("123.455".to_string(), "0.073".to_string()));
///
/// let r = round_measurement(123.456, 0.0, DigitCount::Auto).unwrap();
/// assert_eq!(r.into_pair(), ("123.456".to_string(), "0".to_string()));
///
/// assert!(round_measurement(1.0, -0.01, DigitCount::Auto).is_err());
/// ```
pub fn round_measurement(
    value: f64,
    uncertainty: f64,
    digits: DigitCount,
) -> RoundingResult<RoundedMeasurement> {
    validate_value(value)?;
    validate_uncertainty(uncertainty)?;
    if let DigitCount::Fixed(fixed) = digits {
        validate_digit_count(i64::from(fixed))?;
    }

    if uncertainty == 0.0 {
        return Ok(RoundedMeasurement::exact(format_exact(value)));
    }

    let stabilized = stabilize_uncertainty(uncertainty, digits)?;
    let exponent = last_digit_exponent(&stabilized.decomposition, stabilized.digits);

    let value_steps = round_half_away_from_zero(shift_decimal(value, -exponent));
    let uncertainty_steps =
        round_half_away_from_zero(shift_decimal(stabilized.uncertainty, -exponent));
    validate_steps("value", value_steps)?;
    validate_steps("uncertainty", uncertainty_steps)?;

    let rounded = RoundedMeasurement {
        value: format_scaled(value_steps, exponent, value < 0.0),
        uncertainty: format_scaled(uncertainty_steps, exponent, false),
        digits: stabilized.digits,
        decimal_exponent: Some(exponent),
    };

    debug!(
        value,
        uncertainty,
        %digits,
        rounded_value = %rounded.value,
        rounded_uncertainty = %rounded.uncertainty,
        "rounded measurement"
    );

    Ok(rounded)
}

/// Same as [`round_measurement`] for text input.
///
/// ## Errors
/// - `TypeConversion` when any argument does not parse
/// - `InvalidArgument` when a parsed argument is out of domain
///
/// ## Example
/// ```rust
/// use rounding_core::round_measurement_str;
///
/// let r = round_measurement_str("123.45678", "0.01009", "auto").unwrap();
/// assert_eq!(r.value, "123.457");
/// assert_eq!(r.uncertainty, "0.010");
///
/// assert!(round_measurement_str("abc", "0.01", "auto").unwrap_err().is_type_conversion());
/// assert!(round_measurement_str("1.0", "0.01", "0").unwrap_err().is_invalid_argument());
/// ```
pub fn round_measurement_str(
    value: &str,
    uncertainty: &str,
    digits: &str,
) -> RoundingResult<RoundedMeasurement> {
    let value = parse_number("value", value)?;
    let uncertainty = parse_number("uncertainty", uncertainty)?;
    let digits: DigitCount = digits.parse()?;

    round_measurement(value, uncertainty, digits)
}

// =============================================================================
// Unit Tests
// =============================================================================
