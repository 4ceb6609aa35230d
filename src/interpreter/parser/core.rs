use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser will recurse into.
///
/// Recursion depth in both parser and evaluator is proportional to input
/// nesting (parentheses, unary chains, chained power and assignment), so
/// the parser bounds it explicitly instead of riding the call stack to
/// exhaustion on pathological input.
pub const MAX_NESTING_DEPTH: usize = 200;

/// Parses one complete statement from a token sequence.
///
/// This is the entry point for parsing. It parses a single
/// assignment-or-expression statement and then requires the sequence to be
/// exhausted; anything left over is a trailing-token error.
///
/// Grammar: `statement := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The root node of the parsed tree.
///
/// # Errors
/// Propagates any grammar error, and returns
/// `ParseError::UnexpectedTrailingTokens` if tokens remain after a complete
/// statement.
///
/// # Example
/// ```
/// use bitcalc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("x = 2 + 3").unwrap();
/// let expr = parse(&mut tokens.iter().peekable()).unwrap();
/// assert_eq!(expr.to_string(), "(x = (2 + 3))");
/// ```
pub fn parse<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_assignment(tokens, 0)?;
    match tokens.peek() {
        Some((token, pos)) => Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                                         pos:   *pos, }),
        None => Ok(expr),
    }
}

/// Parses an assignment or falls through to an ordinary expression.
///
/// When the current token is an identifier and the token after it is `=`,
/// both are consumed and the right-hand side recurses into this same rule,
/// which is what makes chained assignment (`x = y = 5`) work. In every
/// other case the rule defers to `additive`, where a leading identifier is
/// later consumed as a variable reference.
///
/// The extra lookahead slot is the only place the parser looks more than
/// one token ahead; it is implemented by cloning the token iterator, which
/// is cheap because items are references. Parenthesized sub-expressions
/// re-enter the grammar at `additive`, so assignment is only legal at the
/// top of the input or as the right-hand side of another assignment, never
/// inside parentheses.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `depth`: Current nesting depth, incremented per chained assignment.
///
/// # Returns
/// An `Expr::Assignment` node, or whatever `additive` produces.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    check_depth(depth, tokens.peek().map_or(0, |(_, pos)| *pos))?;

    let target = match tokens.peek() {
        Some((Token::Identifier(name), pos)) => Some((name.clone(), *pos)),
        _ => None,
    };

    if let Some((name, pos)) = target {
        let mut ahead = tokens.clone();
        ahead.next();

        if let Some((Token::Equals, _)) = ahead.peek() {
            tokens.next(); // consume identifier
            tokens.next(); // consume '='

            let value = parse_assignment(tokens, depth + 1)?;

            return Ok(Expr::Assignment { name,
                                         value: Box::new(value),
                                         pos });
        }
    }

    parse_additive(tokens, depth)
}

/// Fails with `ParseError::NestingTooDeep` once `depth` passes the limit.
///
/// Called on every path that genuinely nests (assignment chains and the
/// unary rule, which every parenthesized group and power recursion passes
/// through), so tree depth stays bounded no matter the input.
pub(in crate::interpreter::parser) const fn check_depth(depth: usize,
                                                        pos: usize)
                                                        -> ParseResult<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { pos });
    }
    Ok(())
}
