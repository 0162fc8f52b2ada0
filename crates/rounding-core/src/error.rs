//! # Error Types
//!
//! Error types for rounding-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rounding-core errors (this file)                                      │
//! │  ├── RoundingError    - What callers of the entry points see           │
//! │  │   ├── TypeConversion   - text input is not a number                 │
//! │  │   └── InvalidArgument  - wraps ValidationError                      │
//! │  └── ValidationError  - A number was parsed but is not acceptable      │
//! │                                                                         │
//! │  CLI errors (separate crate)                                           │
//! │  └── CliError         - usage, config and rounding failures            │
//! │                                                                         │
//! │  Flow: ValidationError → RoundingError → CliError → exit code          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Name the offending field in every message
//! 3. Errors are enum variants, never String
//! 4. All errors are raised before any rounding work starts

use thiserror::Error;

// =============================================================================
// Rounding Error
// =============================================================================

/// Errors returned by the rounding entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoundingError {
    /// Input text could not be interpreted as a number.
    ///
    /// ## When This Occurs
    /// - `round_measurement_str("abc", "0.01", "auto")`
    /// - A digit count such as `"two"` or `"1.5"`
    #[error("{field} must be a number, got {input:?}")]
    TypeConversion { field: String, input: String },

    /// A numeric argument was parsed but violates the input rules.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),
}

impl RoundingError {
    /// Creates a type conversion error for the named field.
    pub fn type_conversion(field: &str, input: &str) -> Self {
        RoundingError::TypeConversion {
            field: field.to_string(),
            input: input.to_string(),
        }
    }

    /// True for errors caused by unparsable input.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self, RoundingError::TypeConversion { .. })
    }

    /// True for errors caused by out-of-domain numeric input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RoundingError::InvalidArgument(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Numeric input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value is NaN.
    #[error("{field} must not be NaN")]
    NotANumber { field: String },

    /// Value is infinite.
    #[error("{field} must be finite")]
    NotFinite { field: String },

    /// Value is below zero.
    #[error("{field} must be non-negative")]
    Negative { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Integer value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// More significant digits requested than an `f64` carries.
    #[error("{field} {value} exceeds the {max} significant digits an f64 can hold")]
    ExceedsPrecision { field: String, value: i64, max: u32 },

    /// Rounded result does not fit in an `f64` at the requested precision.
    ///
    /// ## When This Occurs
    /// - `(1e300, 1e-10)`: the value spans more steps than an `f64` can count
    /// - `(1.0, 5e-324)`: the step is too small to scale to
    #[error("{field} cannot be represented at this precision")]
    Unrepresentable { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RoundingError.
pub type RoundingResult<T> = Result<T, RoundingError>;

// =============================================================================
// Unit Tests
// =============================================================================
