#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// Found an unexpected token where a primary expression or operator was
    /// required.
    UnexpectedToken {
        /// The token encountered, in its source spelling.
        token: String,
        /// The byte offset where the token starts.
        pos:   usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte offset of the unmatched `(`.
        pos: usize,
    },
    /// Found extra tokens after a complete statement.
    UnexpectedTrailingTokens {
        /// The first extra token, in its source spelling.
        token: String,
        /// The byte offset where the token starts.
        pos:   usize,
    },
    /// A numeric literal was too large to be represented safely.
    LiteralTooLarge {
        /// The byte offset where the literal starts.
        pos: usize,
    },
    /// The input nests deeper than the parser is willing to recurse.
    NestingTooDeep {
        /// The byte offset where the limit was exceeded.
        pos: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, pos } => {
                write!(f, "Error at position {pos}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedClosingParen { pos } => write!(f,
                                                         "Error at position {pos}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, pos } => write!(f,
                                                                    "Error at position {pos}: Extra tokens after expression. Check your input: {token}"),

            Self::LiteralTooLarge { pos } => {
                write!(f, "Error at position {pos}: Literal is too large.")
            },

            Self::NestingTooDeep { pos } => {
                write!(f, "Error at position {pos}: Expression nests too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
