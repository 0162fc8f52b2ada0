//! # Validation Module
//!
//! Input validation and text-to-number conversion for the rounding entry
//! points.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Conversion (text callers only)                               │
//! │  └── parse_number / DigitCount::from_str → TypeConversion              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain checks (THIS MODULE)                                  │
//! │  ├── value: not NaN, finite                                            │
//! │  ├── uncertainty: not NaN, finite, >= 0                                │
//! │  └── digit count: 1..=MAX_SIGNIFICANT_DIGITS                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Rounding engine: only checks that the step counts stay finite         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{RoundingError, ValidationError};
use crate::MAX_SIGNIFICANT_DIGITS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Conversion
// =============================================================================

/// Parses a decimal number, trimming surrounding whitespace.
///
/// Accepts anything `f64::from_str` accepts (`"1e-3"`, `"NaN"`, `"inf"`);
/// the domain checks below decide whether the number is usable.
///
/// ## Example
/// ```rust
/// use rounding_core::validation::parse_number;
///
/// assert_eq!(parse_number("value", " 123.45 ").unwrap(), 123.45);
/// assert!(parse_number("value", "abc").unwrap_err().is_type_conversion());
/// ```
pub fn parse_number(field: &str, input: &str) -> Result<f64, RoundingError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| RoundingError::type_conversion(field, input))
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the measured value.
///
/// ## Rules
/// - Must not be NaN
/// - Must be finite
/// - Any sign is allowed
pub fn validate_value(value: f64) -> ValidationResult<()> {
    validate_finite("value", value)
}

/// Validates the uncertainty.
///
/// ## Rules
/// - Must not be NaN
/// - Must be finite
/// - Must be non-negative (zero selects the exact path)
///
/// ## Example
/// ```rust
/// use rounding_core::validation::validate_uncertainty;
///
/// assert!(validate_uncertainty(0.01).is_ok());
/// assert!(validate_uncertainty(0.0).is_ok());
/// assert!(validate_uncertainty(-0.01).is_err());
/// ```
pub fn validate_uncertainty(uncertainty: f64) -> ValidationResult<()> {
    validate_finite("uncertainty", uncertainty)?;

    if uncertainty < 0.0 {
        return Err(ValidationError::Negative {
            field: "uncertainty".to_string(),
        });
    }

    Ok(())
}

/// Validates a requested number of significant digits.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed MAX_SIGNIFICANT_DIGITS (17): an `f64` does not carry
///   more significant decimal digits than that
///
/// ## Returns
/// The digit count as `u32`.
pub fn validate_digit_count(digits: i64) -> ValidationResult<u32> {
    let max = i64::from(MAX_SIGNIFICANT_DIGITS);
    if digits < 1 {
        return Err(ValidationError::OutOfRange {
            field: "digit count".to_string(),
            value: digits,
            min: 1,
            max,
        });
    }

    if digits > max {
        return Err(ValidationError::ExceedsPrecision {
            field: "digit count".to_string(),
            value: digits,
            max: MAX_SIGNIFICANT_DIGITS,
        });
    }

    Ok(digits as u32)
}

/// Checks that a rounded step count is a finite number.
///
/// Scaling by a tiny step can overflow even when both inputs are finite.
pub fn validate_steps(field: &str, steps: f64) -> ValidationResult<()> {
    if !steps.is_finite() {
        return Err(ValidationError::Unrepresentable {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a magnitude handed to the decomposer.
pub fn validate_magnitude(magnitude: f64) -> ValidationResult<()> {
    validate_finite("magnitude", magnitude)?;

    if magnitude <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "magnitude".to_string(),
        });
    }

    Ok(())
}

fn validate_finite(field: &str, number: f64) -> ValidationResult<()> {
    if number.is_nan() {
        return Err(ValidationError::NotANumber {
            field: field.to_string(),
        });
    }

    if number.is_infinite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("value", "1e-3").unwrap(), 0.001);
        assert_eq!(parse_number("value", "-42").unwrap(), -42.0);
        assert!(parse_number("value", "NaN").unwrap().is_nan());

        let err = parse_number("uncertainty", "").unwrap_err();
        assert_eq!(
            err,
            RoundingError::TypeConversion {
                field: "uncertainty".to_string(),
                input: "".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_value() {
        assert!(validate_value(123.456).is_ok());
        assert!(validate_value(-123.456).is_ok());
        assert!(validate_value(0.0).is_ok());

        assert!(matches!(
            validate_value(f64::NAN),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            validate_value(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_uncertainty() {
        assert!(validate_uncertainty(0.0).is_ok());
        assert!(validate_uncertainty(1e-300).is_ok());

        assert!(matches!(
            validate_uncertainty(-0.01),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_uncertainty(f64::NAN),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(validate_uncertainty(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_digit_count() {
        assert_eq!(validate_digit_count(1).unwrap(), 1);
        assert_eq!(validate_digit_count(17).unwrap(), 17);

        assert!(matches!(
            validate_digit_count(0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validate_digit_count(-1).is_err());
        assert_eq!(
            validate_digit_count(18).unwrap_err(),
            ValidationError::ExceedsPrecision {
                field: "digit count".to_string(),
                value: 18,
                max: 17,
            }
        );
    }

    #[test]
    fn test_validate_steps() {
        assert!(validate_steps("value", 12345.0).is_ok());
        assert!(validate_steps("value", -0.0).is_ok());
        assert_eq!(
            validate_steps("value", f64::INFINITY).unwrap_err(),
            ValidationError::Unrepresentable {
                field: "value".to_string()
            }
        );
        assert!(validate_steps("uncertainty", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_magnitude() {
        assert!(validate_magnitude(0.5).is_ok());
        assert!(validate_magnitude(0.0).is_err());
        assert!(validate_magnitude(-1.0).is_err());
        assert!(validate_magnitude(f64::NAN).is_err());
    }
}
