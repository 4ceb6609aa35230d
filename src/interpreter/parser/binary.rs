use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// This is the loosest binary level; parenthesized groups re-enter the
/// grammar here. Handles left-associative `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let pos = *pos;
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative `*`, `/` and `%`. Note that the operands of
/// this level are `bitor` expressions: the whole bitwise/shift chain binds
/// tighter than multiplication in this grammar. That ordering is
/// deliberate and load-bearing; `2 * 3 | 4` is `2 * (3 | 4)`.
///
/// The rule is: `multiplicative := bitor (("*" | "/" | "%") bitor)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree combining bitor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_bitor(tokens, depth)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let pos = *pos;
            tokens.next();
            let right = parse_bitor(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses bitwise OR expressions.
///
/// Handles left-associative chains of `|`. Precedence is the loosest of
/// the bitwise family.
///
/// The rule is: `bitor := bitxor ("|" bitxor)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::BitOr`.
pub fn parse_bitor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_bitxor(tokens, depth)?;
    loop {
        if let Some((Token::Pipe, pos)) = tokens.peek() {
            let pos = *pos;
            tokens.next();
            let right = parse_bitxor(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::BitOr,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses bitwise XOR expressions.
///
/// Handles left-associative chains of `^`. Precedence is between `|` and
/// `&`.
///
/// The rule is: `bitxor := bitand ("^" bitand)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::BitXor`.
pub fn parse_bitxor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_bitand(tokens, depth)?;
    loop {
        if let Some((Token::Caret, pos)) = tokens.peek() {
            let pos = *pos;
            tokens.next();
            let right = parse_bitand(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::BitXor,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses bitwise AND expressions.
///
/// Handles left-associative chains of `&`. Precedence is the tightest of
/// the three bitwise operators; `5 | 2 & 3` is `5 | (2 & 3)`.
///
/// The rule is: `bitand := shift ("&" shift)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::BitAnd`.
pub fn parse_bitand<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_shift(tokens, depth)?;
    loop {
        if let Some((Token::Ampersand, pos)) = tokens.peek() {
            let pos = *pos;
            tokens.next();
            let right = parse_shift(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::BitAnd,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses shift expressions.
///
/// Handles left-associative `<<` and `>>`. Shifts bind tighter than every
/// bitwise operator, so `8 >> 1 & 3` is `(8 >> 1) & 3`.
///
/// The rule is: `shift := power (("<<" | ">>") power)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_shift<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_power(tokens, depth)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Shl | BinaryOperator::Shr)
        {
            let pos = *pos;
            tokens.next();
            let right = parse_power(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `**` is right-associative through right recursion: `2 ** 3 ** 2` parses
/// as `2 ** (3 ** 2)`. It is the tightest binary level, binding tighter
/// than the shifts above it.
///
/// The rule is: `power := unary ("**" power)?`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth, incremented per right recursion.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_unary(tokens, depth)?;
    if let Some((Token::Power, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();
        let right = parse_power(tokens, depth + 1)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(right),
                                   pos });
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator (`+`, `-`, `*`, `/`, `%`, `**`, `&`, `|`, `^`, `<<`, `>>`).
/// Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use bitcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Power => Some(BinaryOperator::Pow),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::LShift => Some(BinaryOperator::Shl),
        Token::RShift => Some(BinaryOperator::Shr),
        _ => None,
    }
}
