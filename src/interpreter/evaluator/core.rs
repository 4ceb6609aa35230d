use std::collections::HashMap;

use crate::{ast::Expr, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The mutable variable store one caller session owns.
///
/// `Environment` maps variable names to numeric values. It is supplied by
/// the caller, outlives any single evaluation, and is mutated only by
/// assignment nodes; the pipeline never resets it. Multiple independent
/// sessions can run side by side because nothing here is global.
///
/// ## Usage
///
/// An `Environment` is created once per session and passed to `eval` for
/// every statement the host submits. Evaluation is single-threaded and
/// fully synchronous; the natural cancellation boundary is between
/// successive top-level evaluations.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty variable store.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    pub fn set(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns `true` when no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Number of variables currently bound.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Evaluates an expression tree against this store.
    ///
    /// This is the main entry point for evaluation. The evaluator
    /// dispatches exhaustively on the node variant; adding an operator
    /// without handling it here is a compile error, which is what keeps an
    /// "unknown operator" state unrepresentable.
    ///
    /// Operands evaluate strictly, left before right, with no
    /// short-circuiting. A failure anywhere aborts the whole expression;
    /// the store retains exactly the mutations that completed before the
    /// failing sub-expression.
    ///
    /// # Parameters
    /// - `expr`: Root node of the tree to evaluate.
    ///
    /// # Returns
    /// The numeric result of the expression.
    ///
    /// # Errors
    /// Returns an [`EvalError`] for an unknown variable, division by zero
    /// or modulo by zero.
    ///
    /// # Example
    /// ```
    /// use bitcalc::{Environment, parse_line};
    ///
    /// let mut env = Environment::new();
    /// let expr = parse_line("x = 2 + 3 * 4").unwrap();
    ///
    /// assert_eq!(env.eval(&expr).unwrap(), 14.0);
    /// assert_eq!(env.get("x"), Some(14.0));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, pos } => self.eval_variable(name, *pos),
            Expr::UnaryOp { op, expr, .. } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { left, op, right, pos } => self.eval_binary_op(left, *op, right, *pos),
            Expr::Assignment { name, value, .. } => self.eval_assignment(name, value),
        }
    }

    /// Looks up `name`, failing when the store has no such binding.
    fn eval_variable(&self, name: &str, pos: usize) -> EvalResult<f64> {
        self.get(name)
            .ok_or_else(|| EvalError::UnknownVariable { name: name.to_string(),
                                                        pos })
    }

    /// Evaluates the right-hand side first, then writes the binding.
    ///
    /// The order matters: if the right-hand side fails, its error
    /// propagates before the store is touched, so an assignment never
    /// partially applies. The assigned value is also the value of the
    /// whole node, which is what makes chained assignment work and lets
    /// the caller display it.
    fn eval_assignment(&mut self, name: &str, value: &Expr) -> EvalResult<f64> {
        let value = self.eval(value)?;
        self.set(name, value);
        Ok(value)
    }
}
