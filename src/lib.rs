//! # bitcalc
//!
//! bitcalc is an expression evaluator written in Rust. It lexes, parses and
//! evaluates arithmetic/logical expression text — numeric literals, named
//! variables, assignment, arithmetic, modulus, power, and the bitwise and
//! shift operators — rendering both the parsed structure and the numeric
//! result.
//!
//! The pipeline has three stages: text goes through the [lexer] into an
//! ordered token sequence, the [parser] builds one expression tree per
//! statement honoring a deliberately non-conventional precedence ladder
//! (bitwise and shift operators bind tighter than multiplication; power
//! binds tighter still), and the [evaluator] walks the tree against a
//! caller-owned [`Environment`] of variables.
//!
//! [lexer]: interpreter::lexer
//! [parser]: interpreter::parser
//! [evaluator]: interpreter::evaluator

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{lexer::tokenize, parser::core::parse};

/// Defines the structure of parsed statements.
///
/// This module declares the `Expr` enum and the operator enums that
/// represent the syntactic structure of one statement as a tree. The tree
/// is built by the parser, walked by the evaluator, and rendered through
/// `Display` in a canonical parenthesized form.
///
/// # Responsibilities
/// - Defines the five expression node variants and their operator tags.
/// - Attaches byte offsets to nodes for error reporting.
/// - Renders trees as unambiguous, fully parenthesized text.
pub mod ast;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating a statement, plus the `CalcError` sum the crate-level
/// entry points return. Every error carries a byte offset where one is
/// known and is propagated unchanged to the caller.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for user feedback.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the three pipeline stages.
///
/// This module ties together lexing, parsing and evaluation to provide a
/// complete runtime for one-statement-at-a-time evaluation. Each stage runs
/// to completion before the next begins; there is no suspension point
/// anywhere in the pipeline.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator modules.
/// - Manages the flow of tokens, trees and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and display.
///
/// This module provides the conversion routines shared by the parser and
/// evaluator — safe integer-to-float promotion and the truncating coercion
/// used by bitwise operations — along with the display formatters for
/// literals and results.
///
/// # Responsibilities
/// - Converts between `i64` and `f64` without silent data loss where the
///   contract requires it, and with deliberate truncation where it does.
/// - Formats values for tree rendering and result printing.
pub mod util;

pub use ast::Expr;
pub use error::CalcError;
pub use interpreter::evaluator::core::Environment;

/// Lexes and parses one line into an expression tree.
///
/// The input must contain exactly one assignment-or-expression statement;
/// trailing tokens are an error. The returned tree can be rendered with
/// `to_string()` and evaluated any number of times.
///
/// # Errors
/// Returns a [`CalcError`] wrapping the lexer or parser failure.
///
/// # Example
/// ```
/// use bitcalc::parse_line;
///
/// let expr = parse_line("(2 + 3) * 4").unwrap();
/// assert_eq!(expr.to_string(), "((2 + 3) * 4)");
///
/// // Assignment is only legal at the top level, never inside parentheses.
/// assert!(parse_line("(x = 5)").is_err());
/// ```
pub fn parse_line(source: &str) -> Result<Expr, CalcError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    Ok(parse(&mut iter)?)
}

/// Runs the full pipeline on one line: lex, parse, evaluate.
///
/// The variable store is supplied by the caller and persists across calls;
/// assignments made by earlier lines are visible to later ones. On any
/// failure the error propagates unchanged and the store retains exactly
/// the mutations that completed before the failing sub-expression.
///
/// # Errors
/// Returns a [`CalcError`] wrapping whichever stage failed.
///
/// # Example
/// ```
/// use bitcalc::{Environment, eval_line};
///
/// let mut env = Environment::new();
///
/// assert_eq!(eval_line("x = 5", &mut env).unwrap(), 5.0);
/// assert_eq!(eval_line("y = x + 3", &mut env).unwrap(), 8.0);
///
/// // 'z' is not defined, so this fails.
/// assert!(eval_line("z + 1", &mut env).is_err());
/// ```
pub fn eval_line(source: &str, env: &mut Environment) -> Result<f64, CalcError> {
    let expr = parse_line(source)?;
    Ok(env.eval(&expr)?)
}
