/// Lexing errors.
///
/// Defines the errors that can occur while scanning a raw input line into
/// tokens: invalid characters, incomplete two-character shift operators, and
/// unrepresentable numeric literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors that can occur while building the expression tree from
/// the token sequence: unexpected tokens, unmatched parentheses, trailing
/// tokens, premature end of input, and the nesting-depth guard.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors that can be raised while walking the tree: undefined
/// variables, division by zero and modulo by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error the pipeline can produce, tagged by the stage that raised it.
///
/// Every error is raised at its point of detection and propagated unchanged
/// to the caller; no stage attempts local recovery. `CalcError` is what the
/// crate-level entry points return, so callers can match on the stage while
/// still printing a single message.
#[derive(Debug, PartialEq, Eq)]
pub enum CalcError {
    /// The lexer rejected the raw text.
    Lex(LexError),
    /// The parser rejected the token sequence.
    Parse(ParseError),
    /// Evaluation of a well-formed tree failed.
    Eval(EvalError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
