use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::core::{Environment, EvalResult},
    util::num::f64_to_i64_trunc,
};

impl Environment {
    /// Evaluates the operand, then applies the prefix operator.
    pub(in crate::interpreter::evaluator) fn eval_unary_op(&mut self,
                                                           op: UnaryOperator,
                                                           operand: &Expr)
                                                           -> EvalResult<f64> {
        let value = self.eval(operand)?;
        Ok(apply_unary(op, value))
    }
}

/// Applies a prefix unary operator to an already-evaluated value.
///
/// `+` is the identity and `-` negates. `~` truncates the operand toward
/// zero to a signed integer, complements every bit, and returns the
/// integer as a number; the fractional part is simply discarded, so
/// `~5.9` equals `~5`, which is `-6`.
///
/// This function is total; no unary operator can fail.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `value`: The evaluated operand.
///
/// # Returns
/// The resulting value.
///
/// # Example
/// ```
/// use bitcalc::{ast::UnaryOperator, interpreter::evaluator::unary::apply_unary};
///
/// assert_eq!(apply_unary(UnaryOperator::Negate, 5.0), -5.0);
/// assert_eq!(apply_unary(UnaryOperator::BitNot, 5.0), -6.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn apply_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Negate => -value,
        UnaryOperator::BitNot => {
            let complemented = !f64_to_i64_trunc(value);
            complemented as f64
        },
    }
}
