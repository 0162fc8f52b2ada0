//! # rounding-core: Rounding a Measurement and its Uncertainty
//!
//! Reports a measured value and its uncertainty with consistent precision:
//! the uncertainty is rounded to 1 or 2 significant digits, then the value
//! is rounded to the same decimal place.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Precise Rounding Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/cli (`precise-round`)                      │   │
//! │  │     env config ──► args ──► round ──► text / JSON output       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ rounding-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌─────────────┐  │   │
//! │  │  │ validation │ │ decompose  │ │  rounding  │ │   format    │  │   │
//! │  │  │  inputs    │ │ s × 10^c   │ │ carry loop │ │  decimals   │  │   │
//! │  │  └────────────┘ └────────────┘ └────────────┘ └─────────────┘  │   │
//! │  │                       ┌──────────────┐                          │   │
//! │  │                       │ measurement  │  immutable facade        │   │
//! │  │                       └──────────────┘                          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Decomposition, DigitCount, RoundedMeasurement
//! - [`decompose`] - significand / characteristic split
//! - [`rounding`] - digit-count resolution, rounding engine, entry points
//! - [`format`] - decimal string rendering
//! - [`measurement`] - immutable facade over the entry points
//! - [`validation`] - input rules and text conversion
//! - [`error`] - error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rounding_core::{round_measurement, DigitCount};
//!
//! // Leading digit 1: two significant digits
//! let r = round_measurement(123.45678, 0.01234, DigitCount::Auto).unwrap();
//! assert_eq!(r.value, "123.457");
//! assert_eq!(r.uncertainty, "0.013");
//!
//! // Rounding the uncertainty carries into the next decade; the value
//! // follows the new decimal place
//! let r = round_measurement(123.456789, 0.0999999, DigitCount::Fixed(1)).unwrap();
//! assert_eq!(r.value, "123.5");
//! assert_eq!(r.uncertainty, "0.1");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod decompose;
pub mod error;
pub mod format;
pub mod measurement;
pub mod rounding;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{RoundingError, RoundingResult, ValidationError};
pub use measurement::Measurement;
pub use rounding::{
    resolve_digits, round_half_away_from_zero, round_measurement, round_measurement_str,
    round_to_digits,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest accepted fixed digit count.
///
/// An `f64` round-trips through at most 17 significant decimal digits; more
/// would only print binary noise.
pub const MAX_SIGNIFICANT_DIGITS: u32 = 17;
