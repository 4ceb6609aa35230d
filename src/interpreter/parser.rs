/// Parser entry point and assignment handling.
///
/// Contains the top-level `parse` function, the assignment rule with its
/// one-token-ahead disambiguation, and the nesting-depth guard shared by
/// all rules.
pub mod core;

/// Binary operator rules.
///
/// Implements the seven left-recursive precedence levels from additive down
/// to the right-associative power rule.
pub mod binary;

/// Unary and primary rules.
///
/// Handles prefix operators and the atoms of the grammar: literals,
/// variable references and parenthesized groups.
pub mod unary;
