/// Core evaluation logic and the variable store.
///
/// Contains the `Environment` type, the main dispatch over tree node
/// variants, and variable lookup and assignment.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the prefix operators, including the truncating coercion behind
/// bitwise complement.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, power, and the bitwise/shift family with its
/// integer coercion rules.
pub mod binary;
