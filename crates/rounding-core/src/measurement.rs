//! # Measurement
//!
//! An immutable measurement that keeps its raw inputs next to the rounded
//! strings.
//!
//! ## Changing the Digit Count
//! ```text
//! let m  = Measurement::new(123.4545, 0.07234)?;        // auto → 0.08
//! let m2 = m.with_digit_count(DigitCount::Fixed(2))?;   // new value → 0.073
//! //  m is untouched; m2 was recomputed from the raw inputs
//! ```

use serde::Serialize;

use crate::error::RoundingResult;
use crate::rounding::round_measurement;
use crate::types::{DigitCount, RoundedMeasurement};

/// A value with its uncertainty, rounded at construction time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    value: f64,
    uncertainty: f64,
    digit_count: DigitCount,
    rounded: RoundedMeasurement,
}

impl Measurement {
    /// Creates a measurement with the automatic digit count.
    ///
    /// ## Example
    /// ```rust
    /// use rounding_core::Measurement;
    ///
    /// let m = Measurement::new(123.45678, 0.0215).unwrap();
    /// assert_eq!(m.value(), "123.46");
    /// assert_eq!(m.uncertainty(), "0.03");
    /// ```
    pub fn new(value: f64, uncertainty: f64) -> RoundingResult<Self> {
        Self::with_digits(value, uncertainty, DigitCount::Auto)
    }

    /// Creates a measurement with an explicit digit count.
    pub fn with_digits(
        value: f64,
        uncertainty: f64,
        digit_count: DigitCount,
    ) -> RoundingResult<Self> {
        let rounded = round_measurement(value, uncertainty, digit_count)?;
        Ok(Measurement {
            value,
            uncertainty,
            digit_count,
            rounded,
        })
    }

    /// Returns a new measurement rounded with `digit_count`.
    ///
    /// ```rust
    /// use rounding_core::{DigitCount, Measurement};
    ///
    /// let m = Measurement::new(123.4545, 0.07234).unwrap();
    /// let m2 = m.with_digit_count(DigitCount::Fixed(2)).unwrap();
    /// assert_eq!(m2.value(), "123.455");
    /// assert_eq!(m2.uncertainty(), "0.073");
    /// assert_eq!(m.uncertainty(), "0.08");
    /// ```
    pub fn with_digit_count(&self, digit_count: DigitCount) -> RoundingResult<Self> {
        Self::with_digits(self.value, self.uncertainty, digit_count)
    }

    /// Rounded value.
    pub fn value(&self) -> &str {
        &self.rounded.value
    }

    /// Rounded uncertainty.
    pub fn uncertainty(&self) -> &str {
        &self.rounded.uncertainty
    }

    /// Full rounding result.
    pub fn rounded(&self) -> &RoundedMeasurement {
        &self.rounded
    }

    pub fn raw_value(&self) -> f64 {
        self.value
    }

    pub fn raw_uncertainty(&self) -> f64 {
        self.uncertainty
    }

    /// Requested digit count (may be `Auto`; see [`RoundedMeasurement::digits`]
    /// for the resolved one).
    pub fn digit_count(&self) -> DigitCount {
        self.digit_count
    }

    /// Checks if the uncertainty is zero.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.uncertainty == 0.0
    }

    /// Returns `|uncertainty| / |value|`.
    ///
    /// Infinite when the value is zero and the uncertainty is not, NaN when
    /// both are zero.
    pub fn relative_uncertainty(&self) -> f64 {
        self.uncertainty.abs() / self.value.abs()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
