#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// Tried to read a variable that is not in the store.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The byte offset of the variable reference.
        pos:  usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset of the division operator.
        pos: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// The byte offset of the modulo operator.
        pos: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, pos } => {
                write!(f, "Error at position {pos}: Unknown variable '{name}'.")
            },

            Self::DivisionByZero { pos } => {
                write!(f, "Error at position {pos}: Division by zero.")
            },

            Self::ModuloByZero { pos } => write!(f, "Error at position {pos}: Modulo by zero."),
        }
    }
}

impl std::error::Error for EvalError {}
