//! # Decomposer
//!
//! Splits a positive magnitude into `significand × 10^characteristic` with the
//! significand in `[1.0, 10.0)`.
//!
//! ## Why Exact Powers of Ten?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SCALING BY TEN IN BINARY FLOATING POINT                                │
//! │                                                                         │
//! │  0.1 has no exact f64 representation:                                   │
//! │    x * 0.001           → two rounding errors (0.001 is inexact)         │
//! │    x / 10 / 10 / 10    → three rounding errors                          │
//! │                                                                         │
//! │  10^0 ..= 10^22 ARE exact in f64:                                       │
//! │    x / 1000.0          → one correctly rounded result                   │
//! │                                                                         │
//! │  So every scaling multiplies or divides by an exact power of ten.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::trace;

use crate::types::Decomposition;
use crate::validation::{validate_magnitude, ValidationResult};

/// Powers of ten that are exactly representable as `f64`.
const EXACT_POWERS_OF_TEN: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

const MAX_EXACT_EXPONENT: i32 = 22;

/// Returns `x × 10^exponent`.
///
/// Exponents within ±22 cost a single correctly rounded operation; larger
/// ones are applied in exact chunks.
pub fn shift_decimal(x: f64, exponent: i32) -> f64 {
    let mut result = x;
    let mut remaining = exponent;

    while remaining > MAX_EXACT_EXPONENT {
        result *= EXACT_POWERS_OF_TEN[MAX_EXACT_EXPONENT as usize];
        remaining -= MAX_EXACT_EXPONENT;
    }
    while remaining < -MAX_EXACT_EXPONENT {
        result /= EXACT_POWERS_OF_TEN[MAX_EXACT_EXPONENT as usize];
        remaining += MAX_EXACT_EXPONENT;
    }

    let power = EXACT_POWERS_OF_TEN[remaining.unsigned_abs() as usize];
    if remaining >= 0 {
        result * power
    } else {
        result / power
    }
}

/// Decomposes a finite, positive magnitude.
///
/// ## Algorithm
/// 1. Estimate the characteristic from `log10`
/// 2. Step it up while the significand is `>= 10`
/// 3. Step it down while the significand is `< 1`
///
/// Each step rescales the *original* magnitude, so no error accumulates.
/// The estimate is off by at most one decade, so the loops run at most a
/// couple of times.
///
/// ## Example
/// ```rust
/// use rounding_core::decompose::decompose;
///
/// let d = decompose(0.01234).unwrap();
/// assert_eq!(d.characteristic, -2);
/// assert_eq!(d.leading_digit(), 1);
///
/// let d = decompose(323451.0).unwrap();
/// assert_eq!(d.characteristic, 5);
/// assert_eq!(d.leading_digit(), 3);
///
/// assert!(decompose(0.0).is_err());
/// ```
pub fn decompose(magnitude: f64) -> ValidationResult<Decomposition> {
    validate_magnitude(magnitude)?;

    let mut characteristic = magnitude.log10().floor() as i32;
    let mut significand = shift_decimal(magnitude, -characteristic);

    while significand >= 10.0 {
        characteristic += 1;
        significand = shift_decimal(magnitude, -characteristic);
    }
    while significand < 1.0 {
        characteristic -= 1;
        significand = shift_decimal(magnitude, -characteristic);
    }

    trace!(magnitude, significand, characteristic, "decomposed");

    Ok(Decomposition {
        significand,
        characteristic,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
