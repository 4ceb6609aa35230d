use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Numeric literals come in two flavors depending on whether a decimal point
/// was scanned. The distinction is informational only; the parser collapses
/// both into a floating value when it builds a tree node.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// A numeric literal scanned with a decimal point, such as `3.14` or
    /// `5.`. At most one decimal point is consumed; a second one stops the
    /// scan and is left for the next token, where it fails as an invalid
    /// character.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    Real(f64),
    /// A numeric literal scanned without a decimal point, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable names such as `x` or `total`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `**`
    #[token("**")]
    Power,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `<<`
    #[token("<<")]
    LShift,
    /// `>>`
    #[token(">>")]
    RShift,
}

/// Prints a token in its source spelling, for error messages.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Power => write!(f, "**"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Equals => write!(f, "="),
            Self::Ampersand => write!(f, "&"),
            Self::Pipe => write!(f, "|"),
            Self::Caret => write!(f, "^"),
            Self::Tilde => write!(f, "~"),
            Self::LShift => write!(f, "<<"),
            Self::RShift => write!(f, ">>"),
        }
    }
}

/// Tokenizes one line of input into an ordered token sequence.
///
/// Each token is paired with the byte offset where it starts, for error
/// reporting. Whitespace between tokens is skipped. The exhausted sequence
/// is the end-of-input marker; the parser treats running out of tokens as
/// reaching END.
///
/// # Parameters
/// - `source`: The raw input line.
///
/// # Returns
/// The ordered `(Token, offset)` sequence.
///
/// # Errors
/// Returns a [`LexError`] on the first character outside the recognized
/// set, on a lone `<` or `>` (an incomplete shift operator), or on a
/// numeric literal that cannot be represented.
///
/// # Example
/// ```
/// use bitcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 << 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(1), 0), (Token::LShift, 2), (Token::Integer(2), 5)]);
///
/// assert!(tokenize("1 < 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let pos = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, pos)),
            Err(()) => return Err(classify_failure(lexer.slice(), pos)),
        }
    }

    Ok(tokens)
}

/// Maps an unmatched slice to the right [`LexError`] variant.
///
/// A lone `<` or `>` means a shift operator was started but never finished.
/// A slice starting with a digit means a numeric literal matched the scanner
/// but could not be represented. Everything else is a character the language
/// simply does not know.
fn classify_failure(slice: &str, pos: usize) -> LexError {
    match slice.chars().next() {
        Some(found @ ('<' | '>')) => LexError::IncompleteShift { found, pos },
        Some(ch) if ch.is_ascii_digit() => LexError::InvalidNumber { literal: slice.to_string(),
                                                                     pos },
        Some(ch) => LexError::InvalidCharacter { ch, pos },
        None => LexError::InvalidCharacter { ch: '\0', pos },
    }
}

/// Parses a floating-point literal from the current token slice.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
