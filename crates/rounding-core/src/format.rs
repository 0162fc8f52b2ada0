//! # Decimal Formatting
//!
//! Renders rounded numbers as plain decimal strings: no exponent notation,
//! no thousands separators.
//!
//! A rounded number is handled as an integer count of steps plus the decimal
//! exponent of one step, so the digits are written out as text instead of
//! being re-derived from a binary fraction:
//! ```text
//! steps = 12301, exponent = -2   →  "123.01"
//! steps = 3,     exponent = -4   →  "0.0003"
//! steps = 45312, exponent =  4   →  "453120000"
//! steps = 10,    exponent = -1   →  "1.0"     (trailing zero is significant)
//! ```

/// Writes `steps × 10^exponent` with `max(-exponent, 0)` fractional digits.
///
/// `steps` must be a non-negative integral `f64`. A leading `-` is added
/// when `negative` is set, including for a zero result so that the sign of
/// the measured value survives rounding.
///
/// ## Example
/// ```rust
/// use rounding_core::format::format_scaled;
///
/// assert_eq!(format_scaled(12301.0, -2, false), "123.01");
/// assert_eq!(format_scaled(33.0, 4, false), "330000");
/// assert_eq!(format_scaled(5.0, -3, true), "-0.005");
/// ```
pub fn format_scaled(steps: f64, exponent: i32, negative: bool) -> String {
    let digits = format!("{:.0}", steps.abs());
    let sign = if negative { "-" } else { "" };

    if exponent >= 0 {
        if steps == 0.0 {
            return format!("{}0", sign);
        }
        let zeros = "0".repeat(exponent as usize);
        return format!("{}{}{}", sign, digits, zeros);
    }

    let decimals = exponent.unsigned_abs() as usize;
    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    format!("{}{}.{}", sign, whole, fraction)
}

/// Writes a value that is not being rounded at all.
///
/// `f64`'s `Display` emits the shortest string that parses back to the same
/// number and never switches to exponent notation, so there are no trailing
/// fractional zeros or dangling decimal point to strip.
///
/// ```rust
/// use rounding_core::format::format_exact;
///
/// assert_eq!(format_exact(123.456), "123.456");
/// assert_eq!(format_exact(100.0), "100");
/// assert_eq!(format_exact(1e-7), "0.0000001");
/// ```
pub fn format_exact(value: f64) -> String {
    value.to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_scaled_fractional() {
        assert_eq!(format_scaled(123457.0, -3, false), "123.457");
        assert_eq!(format_scaled(13.0, -3, false), "0.013");
        assert_eq!(format_scaled(10.0, -3, false), "0.010");
        assert_eq!(format_scaled(10.0, -1, false), "1.0");
        assert_eq!(format_scaled(0.0, -1, false), "0.0");
        assert_eq!(format_scaled(0.0, -1, true), "-0.0");
    }

    #[test]
    fn test_format_scaled_integral() {
        assert_eq!(format_scaled(123.0, 0, false), "123");
        assert_eq!(format_scaled(56.0, 0, false), "56");
        assert_eq!(format_scaled(45312.0, 4, false), "453120000");
        assert_eq!(format_scaled(777.0, 23, false), "77700000000000000000000000");
        assert_eq!(format_scaled(0.0, 2, false), "0");
        assert_eq!(format_scaled(12.0, 1, true), "-120");
    }

    #[test]
    fn test_format_exact() {
        assert_eq!(format_exact(-2.5), "-2.5");
        assert_eq!(format_exact(0.0), "0");
        assert_eq!(format_exact(1e21), "1000000000000000000000");
    }
}
