#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexError {
    /// Found a character outside the recognized set.
    InvalidCharacter {
        /// The offending character.
        ch:  char,
        /// The byte offset where the character was found.
        pos: usize,
    },
    /// A `<` or `>` was not immediately followed by its twin, so no shift
    /// operator could be formed. Single-character comparison operators do
    /// not exist in this language.
    IncompleteShift {
        /// The character that started the would-be shift operator.
        found: char,
        /// The byte offset where the character was found.
        pos:   usize,
    },
    /// A numeric literal could not be represented.
    InvalidNumber {
        /// The literal text as scanned.
        literal: String,
        /// The byte offset where the literal starts.
        pos:     usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { ch, pos } => {
                write!(f, "Error at position {pos}: Invalid character '{ch}'.")
            },

            Self::IncompleteShift { found, pos } => write!(f,
                                                           "Error at position {pos}: Expected '{found}' after '{found}' to form a shift operator."),

            Self::InvalidNumber { literal, pos } => {
                write!(f, "Error at position {pos}: Invalid numeric literal '{literal}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
