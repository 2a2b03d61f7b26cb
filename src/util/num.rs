use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Widens an `i64` to the nearest `f64`.
///
/// Magnitudes above `2^53` are rounded to the closest representable value.
///
/// ## Example
/// ```
/// use sluc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Formats a real the way `print` shows it.
///
/// Values keep a fractional part (`3.0`). Very large and very small
/// magnitudes use exponent notation with a signed, two-digit exponent
/// (`1e+16`, `2.5e-07`). Non-finite values print as `inf`, `-inf` and `nan`.
///
/// ## Example
/// ```
/// use sluc::util::num::format_real;
///
/// assert_eq!(format_real(3.0), "3.0");
/// assert_eq!(format_real(0.25), "0.25");
/// assert_eq!(format_real(1e16), "1e+16");
/// assert_eq!(format_real(-2.5e-7), "-2.5e-07");
/// assert_eq!(format_real(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{value:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = exponent.strip_prefix('-')
                                 .map_or(("+", exponent), |digits| ("-", digits));
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Converts an `f64` to `i64`, discarding the fractional part (truncation
/// toward zero).
///
/// ## Errors
/// - `RuntimeError::TypeError` if the value is `NaN` or infinite.
/// - `RuntimeError::Overflow` if the truncated value does not fit in an `i64`.
///
/// ## Example
/// ```
/// use sluc::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(3.9, 1).unwrap(), 3);
/// assert_eq!(f64_to_i64_truncated(-3.9, 1).unwrap(), -3);
///
/// let err = f64_to_i64_truncated(1e300, 4).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 4 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeError { details: format!("Cannot convert non-finite value {value} to int"),
                                             line });
    }
    let truncated = value.trunc();
    // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(truncated as i64)
}

/// Safely converts a non-negative `i64` exponent to `u32`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value is negative or exceeds
/// `u32::MAX`.
///
/// ## Example
/// ```
/// use sluc::{error::RuntimeError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(45, 5).unwrap(), 45);
///
/// let err = i64_to_u32_checked(i64::MAX, 11).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 11 }));
/// ```
pub fn i64_to_u32_checked(value: i64, line: usize) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}
