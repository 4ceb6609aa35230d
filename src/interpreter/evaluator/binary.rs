use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::evaluator::core::{Environment, EvalResult},
    util::num::f64_to_i64_trunc,
};

impl Environment {
    /// Evaluates both operands strictly, left before right, then applies
    /// the operator. There is no short-circuiting anywhere in the
    /// language; the right operand always evaluates, including its side
    /// effects on the store, before the operator runs.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                            left: &Expr,
                                                            op: BinaryOperator,
                                                            right: &Expr,
                                                            pos: usize)
                                                            -> EvalResult<f64> {
        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;
        apply_binary(op, lhs, rhs, pos)
    }
}

/// Applies a binary operator to two already-evaluated values.
///
/// `+`, `-` and `*` are plain floating arithmetic. `/` and `%` check for
/// an exactly-zero divisor and fail; `%` is the floating remainder whose
/// sign follows the dividend. `**` is floating exponentiation with no
/// domain check beyond what `powf` yields — a negative base with a
/// fractional exponent produces NaN, which is surfaced as-is, not treated
/// as an error.
///
/// The bitwise and shift operators truncate both operands toward zero to
/// signed integers (no rounding, pure truncation), apply the integer
/// operator, and convert the result back. Shift counts are masked into
/// `0..64`, so an oversized or negative count wraps instead of panicking.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `lhs`: The evaluated left operand.
/// - `rhs`: The evaluated right operand.
/// - `pos`: Byte offset of the operator, for error reporting.
///
/// # Returns
/// The resulting value.
///
/// # Errors
/// Returns `EvalError::DivisionByZero` or `EvalError::ModuloByZero` when
/// the respective divisor is exactly zero.
///
/// # Example
/// ```
/// use bitcalc::{ast::BinaryOperator, interpreter::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::BitAnd, 5.7, 3.0, 0).unwrap(), 1.0);
/// assert!(apply_binary(BinaryOperator::Div, 10.0, 0.0, 0).is_err());
/// ```
pub fn apply_binary(op: BinaryOperator, lhs: f64, rhs: f64, pos: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, BitAnd, BitOr, BitXor, Div, Mod, Mul, Pow, Shl, Shr, Sub};

    match op {
        Add => Ok(lhs + rhs),
        Sub => Ok(lhs - rhs),
        Mul => Ok(lhs * rhs),
        Div => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero { pos });
            }
            Ok(lhs / rhs)
        },
        Mod => {
            if rhs == 0.0 {
                return Err(EvalError::ModuloByZero { pos });
            }
            Ok(lhs % rhs)
        },
        Pow => Ok(lhs.powf(rhs)),
        BitAnd => Ok(bitwise(lhs, rhs, |l, r| l & r)),
        BitOr => Ok(bitwise(lhs, rhs, |l, r| l | r)),
        BitXor => Ok(bitwise(lhs, rhs, |l, r| l ^ r)),
        Shl => Ok(bitwise(lhs, rhs, shl_masked)),
        Shr => Ok(bitwise(lhs, rhs, shr_masked)),
    }
}

/// Truncates both operands toward zero, applies an integer operation, and
/// converts back to the numeric domain.
#[allow(clippy::cast_precision_loss)]
fn bitwise(lhs: f64, rhs: f64, f: impl FnOnce(i64, i64) -> i64) -> f64 {
    f(f64_to_i64_trunc(lhs), f64_to_i64_trunc(rhs)) as f64
}

/// Left shift with the count masked into `0..64`.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
const fn shl_masked(lhs: i64, rhs: i64) -> i64 {
    lhs.wrapping_shl(rhs as u32)
}

/// Arithmetic right shift with the count masked into `0..64`.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
const fn shr_masked(lhs: i64, rhs: i64) -> i64 {
    lhs.wrapping_shr(rhs as u32)
}
