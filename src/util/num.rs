/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Tolerance inside which a result is displayed as an integer.
pub const INT_DISPLAY_EPS: f64 = 1e-9;

/// Number of fractional digits used when displaying non-integral values.
pub const DISPLAY_PRECISION: usize = 6;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use bitcalc::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside the safe range
/// let big = MAX_SAFE_I64_INT + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Truncates an `f64` toward zero to an `i64`.
///
/// This is the coercion applied to both operands of every bitwise and shift
/// operation: the fractional part is discarded, never rounded, so `5.7`
/// becomes `5` and `-5.7` becomes `-5`. Values outside the `i64` range
/// saturate at the bounds and NaN becomes `0`.
///
/// ## Example
/// ```
/// use bitcalc::util::num::f64_to_i64_trunc;
///
/// assert_eq!(f64_to_i64_trunc(5.7), 5);
/// assert_eq!(f64_to_i64_trunc(-5.7), -5);
/// assert_eq!(f64_to_i64_trunc(3.0), 3);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_trunc(value: f64) -> i64 {
    value as i64
}

/// Formats a value the way literals render inside a tree: fixed-point with
/// six fractional digits, trailing zeros stripped, and the decimal point
/// itself stripped when nothing follows it.
///
/// ## Example
/// ```
/// use bitcalc::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(0.125), "0.125");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let mut s = format!("{value:.DISPLAY_PRECISION$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

/// Formats an evaluation result for display.
///
/// A value within `INT_DISPLAY_EPS` of an integer prints as that integer;
/// anything else prints through [`format_number`]. Non-finite values fall
/// through to `format_number` unchanged.
///
/// ## Example
/// ```
/// use bitcalc::util::num::format_result;
///
/// assert_eq!(format_result(8.0), "8");
/// assert_eq!(format_result(2.5), "2.5");
/// assert_eq!(format_result(2.999_999_999_9), "3");
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn format_result(value: f64) -> String {
    let rounded = value.round();
    if value.is_finite()
       && (value - rounded).abs() < INT_DISPLAY_EPS
       && rounded.abs() <= MAX_SAFE_I64_INT as f64
    {
        return format!("{}", rounded as i64);
    }
    format_number(value)
}
