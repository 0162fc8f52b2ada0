//! # Domain Types
//!
//! Plain data types shared by the decomposer, the rounding engine and the
//! facade.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │ Decomposition   │   │   DigitCount    │   │ RoundedMeasurement  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  significand    │   │  Auto           │   │  value (String)     │   │
//! │  │  characteristic │   │  Fixed(u32)     │   │  uncertainty        │   │
//! │  │  1 ≤ s < 10     │   │                 │   │  digits, exponent   │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RoundingError;
use crate::validation::{validate_digit_count, ValidationResult};

// =============================================================================
// Decomposition
// =============================================================================

/// A positive magnitude written as `significand × 10^characteristic`.
///
/// ## Invariant
/// `1.0 <= significand < 10.0`. Only [`crate::decompose::decompose`] builds
/// these, so the invariant holds for every instance handed out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    /// Leading digits normalized into `[1.0, 10.0)`.
    pub significand: f64,

    /// Decimal exponent of the leading digit.
    pub characteristic: i32,
}

impl Decomposition {
    /// Returns `10^characteristic`.
    pub fn scale(&self) -> f64 {
        crate::decompose::shift_decimal(1.0, self.characteristic)
    }

    /// Returns the first significant digit (1..=9).
    #[inline]
    pub fn leading_digit(&self) -> u32 {
        self.significand.floor() as u32
    }

    /// Reassembles the magnitude (subject to floating point error).
    pub fn magnitude(&self) -> f64 {
        crate::decompose::shift_decimal(self.significand, self.characteristic)
    }
}

// =============================================================================
// Digit Count
// =============================================================================

/// How many significant digits the uncertainty keeps.
///
/// ## Auto Mode
/// ```text
/// leading digit 1  →  2 digits   (0.0123 → 0.013)
/// leading digit 2+ →  1 digit    (0.0215 → 0.03)
/// ```
/// Keeping two digits for a leading 1 bounds the relative rounding error of
/// the uncertainty to roughly the same size as for the other leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "DigitCountRepr", into = "DigitCountRepr")]
pub enum DigitCount {
    /// Pick 1 or 2 digits from the leading digit of the uncertainty.
    #[default]
    Auto,

    /// Always keep exactly this many digits (validated >= 1).
    Fixed(u32),
}

impl DigitCount {
    /// Creates a fixed digit count, rejecting values below 1.
    ///
    /// ## Example
    /// ```rust
    /// use rounding_core::DigitCount;
    ///
    /// assert_eq!(DigitCount::fixed(2).unwrap(), DigitCount::Fixed(2));
    /// assert!(DigitCount::fixed(0).is_err());
    /// assert!(DigitCount::fixed(-1).is_err());
    /// ```
    pub fn fixed(digits: i64) -> ValidationResult<Self> {
        validate_digit_count(digits).map(DigitCount::Fixed)
    }

    /// Checks if the digit count is chosen automatically.
    #[inline]
    pub const fn is_auto(&self) -> bool {
        matches!(self, DigitCount::Auto)
    }
}

impl fmt::Display for DigitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitCount::Auto => write!(f, "auto"),
            DigitCount::Fixed(digits) => write!(f, "{}", digits),
        }
    }
}

/// Parses `"auto"` (any case) or a positive integer.
///
/// ```rust
/// use rounding_core::DigitCount;
///
/// assert_eq!("auto".parse::<DigitCount>().unwrap(), DigitCount::Auto);
/// assert_eq!(" 3 ".parse::<DigitCount>().unwrap(), DigitCount::Fixed(3));
/// assert!("abc".parse::<DigitCount>().unwrap_err().is_type_conversion());
/// assert!("0".parse::<DigitCount>().unwrap_err().is_invalid_argument());
/// ```
impl FromStr for DigitCount {
    type Err = RoundingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(DigitCount::Auto);
        }

        let digits: i64 = trimmed
            .parse()
            .map_err(|_| RoundingError::type_conversion("digit count", s))?;
        Ok(DigitCount::fixed(digits)?)
    }
}

/// Wire shape: `"auto"` or a bare number.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DigitCountRepr {
    Number(i64),
    Text(String),
}

impl From<DigitCount> for DigitCountRepr {
    fn from(digits: DigitCount) -> Self {
        match digits {
            DigitCount::Auto => DigitCountRepr::Text("auto".to_string()),
            DigitCount::Fixed(n) => DigitCountRepr::Number(i64::from(n)),
        }
    }
}

impl TryFrom<DigitCountRepr> for DigitCount {
    type Error = RoundingError;

    fn try_from(repr: DigitCountRepr) -> Result<Self, Self::Error> {
        match repr {
            DigitCountRepr::Number(n) => Ok(DigitCount::fixed(n)?),
            DigitCountRepr::Text(text) => text.parse(),
        }
    }
}

// =============================================================================
// Rounded Measurement
// =============================================================================

/// The result of rounding a value and its uncertainty together.
///
/// Both strings carry the same number of fractional digits, except on the
/// exact (zero uncertainty) path where `decimal_exponent` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedMeasurement {
    /// Rounded value, sign preserved.
    pub value: String,

    /// Rounded uncertainty (`"0"` when exact).
    pub uncertainty: String,

    /// Resolved number of significant digits of the uncertainty (0 when exact).
    pub digits: u32,

    /// Decimal exponent of the last retained digit: `-2` means hundredths,
    /// `4` means the pair was rounded to tens of thousands.
    pub decimal_exponent: Option<i32>,
}

impl RoundedMeasurement {
    /// Builds the result of the exact path.
    pub(crate) fn exact(value: String) -> Self {
        RoundedMeasurement {
            value,
            uncertainty: "0".to_string(),
            digits: 0,
            decimal_exponent: None,
        }
    }

    /// Number of fractional digits shared by both strings.
    ///
    /// Returns `None` on the exact path.
    pub fn decimals(&self) -> Option<usize> {
        self.decimal_exponent
            .map(|exponent| exponent.min(0).unsigned_abs() as usize)
    }

    /// Checks if the pair came from the zero uncertainty path.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.decimal_exponent.is_none()
    }

    /// Splits into `(value, uncertainty)`.
    pub fn into_pair(self) -> (String, String) {
        (self.value, self.uncertainty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposition_accessors() {
        let d = Decomposition {
            significand: 1.5,
            characteristic: -2,
        };
        assert_eq!(d.leading_digit(), 1);
        assert_eq!(d.scale(), 0.01);
        assert_eq!(d.magnitude(), 0.015);
    }

    #[test]
    fn test_digit_count_parse() {
        assert_eq!("AUTO".parse::<DigitCount>().unwrap(), DigitCount::Auto);
        assert_eq!("2".parse::<DigitCount>().unwrap(), DigitCount::Fixed(2));

        assert!("1.5".parse::<DigitCount>().unwrap_err().is_type_conversion());
        assert!("-1".parse::<DigitCount>().unwrap_err().is_invalid_argument());
        assert!("18".parse::<DigitCount>().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_digit_count_display() {
        assert_eq!(DigitCount::Auto.to_string(), "auto");
        assert_eq!(DigitCount::Fixed(3).to_string(), "3");
        assert_eq!(DigitCount::default(), DigitCount::Auto);
    }

    #[test]
    fn test_digit_count_serde() {
        assert_eq!(serde_json::to_string(&DigitCount::Auto).unwrap(), "\"auto\"");
        assert_eq!(serde_json::to_string(&DigitCount::Fixed(2)).unwrap(), "2");

        let parsed: DigitCount = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(parsed, DigitCount::Auto);
        let parsed: DigitCount = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, DigitCount::Fixed(2));

        assert!(serde_json::from_str::<DigitCount>("0").is_err());
        assert!(serde_json::from_str::<DigitCount>("\"many\"").is_err());
    }

    #[test]
    fn test_rounded_measurement_decimals() {
        let rounded = RoundedMeasurement {
            value: "123.457".to_string(),
            uncertainty: "0.013".to_string(),
            digits: 2,
            decimal_exponent: Some(-3),
        };
        assert_eq!(rounded.decimals(), Some(3));
        assert!(!rounded.is_exact());

        let rounded = RoundedMeasurement {
            value: "453120000".to_string(),
            uncertainty: "330000".to_string(),
            digits: 2,
            decimal_exponent: Some(4),
        };
        assert_eq!(rounded.decimals(), Some(0));

        let exact = RoundedMeasurement::exact("123.456".to_string());
        assert!(exact.is_exact());
        assert_eq!(exact.decimals(), None);
        assert_eq!(
            exact.into_pair(),
            ("123.456".to_string(), "0".to_string())
        );
    }
}
