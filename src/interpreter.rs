/// The evaluator module walks expression trees and computes results.
///
/// The evaluator traverses the tree produced by the parser, performs the
/// arithmetic, bitwise and shift operations, and reads and writes the
/// variable store. It is the execution engine of the pipeline.
///
/// # Responsibilities
/// - Evaluates every tree node variant against a caller-owned variable
///   store.
/// - Applies the numeric coercion rules for bitwise and shift operations.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes one line of input for further parsing.
///
/// The lexer (tokenizer) reads the raw text and produces a stream of
/// tokens, each corresponding to a meaningful language element such as a
/// number, identifier, operator or delimiter. This is the first stage of
/// the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Handles numeric literals, identifiers and one- and two-character
///   operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a tree that encodes the precedence and associativity of every
/// operator. One statement yields exactly one root node.
///
/// # Responsibilities
/// - Converts tokens into structured tree nodes.
/// - Enforces the grammar, reporting errors with byte offsets.
/// - Disambiguates assignment from variable reference with one extra token
///   of lookahead.
pub mod parser;
