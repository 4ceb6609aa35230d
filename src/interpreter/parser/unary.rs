use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            core::{ParseResult, check_depth},
        },
    },
    util::num::i64_to_f64_checked,
};

/// Parses prefix unary expressions.
///
/// Handles chains of the prefix operators `+`, `-` and `~` through right
/// recursion, so `~~x` and `--5` parse naturally. Every nesting path in the
/// grammar (parenthesized groups, power right-recursion, unary chains)
/// passes through this rule, which is where the depth guard fires.
///
/// The rule is: `unary := ("+" | "-" | "~") unary | primary`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth, incremented per prefix operator.
///
/// # Returns
/// An `Expr::UnaryOp` node, or whatever `primary` produces.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    check_depth(depth, tokens.peek().map_or(0, |(_, pos)| *pos))?;

    if let Some((token, pos)) = tokens.peek()
       && let Some(op) = token_to_unary_operator(token)
    {
        let pos = *pos;
        tokens.next();
        let operand = parse_unary(tokens, depth + 1)?;
        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(operand),
                                  pos });
    }

    parse_primary(tokens, depth)
}

/// Parses the atoms of the grammar.
///
/// A primary is a numeric literal, a variable reference, or a
/// parenthesized group. Groups re-enter the grammar at `additive`, which is
/// why assignment can never appear inside parentheses. Integer literals are
/// promoted to the floating domain here; the lexer's integer/real
/// distinction ends at this point.
///
/// The rule is: `primary := NUMBER | IDENTIFIER | "(" additive ")"`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth, incremented per parenthesized group.
///
/// # Returns
/// A leaf node, or the inner expression of a group.
///
/// # Errors
/// - `UnexpectedToken` if the current token cannot start a primary.
/// - `ExpectedClosingParen` if a group is never closed.
/// - `UnexpectedEndOfInput` if the sequence ends here.
/// - `LiteralTooLarge` if an integer literal exceeds what `f64` represents
///   exactly.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), pos)) => {
            let value = i64_to_f64_checked(*value, ParseError::LiteralTooLarge { pos: *pos })?;
            Ok(Expr::Literal { value, pos: *pos })
        },

        Some((Token::Real(value), pos)) => Ok(Expr::Literal { value: *value,
                                                              pos:   *pos, }),

        Some((Token::Identifier(name), pos)) => Ok(Expr::Variable { name: name.clone(),
                                                                    pos:  *pos, }),

        Some((Token::LParen, pos)) => {
            let expr = parse_additive(tokens, depth + 1)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { pos: *pos }),
            }
        },

        Some((token, pos)) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                                pos:   *pos, }),

        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Maps a token to its corresponding prefix unary operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(UnaryOperator)` if the token is `+`, `-` or `~`, otherwise `None`.
#[must_use]
pub const fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Minus => Some(UnaryOperator::Negate),
        Token::Tilde => Some(UnaryOperator::BitNot),
        _ => None,
    }
}
