/// Numeric conversion and display helpers.
///
/// Provides the safe integer/float conversions used by the parser, the
/// truncating coercion applied before bitwise operations, and the two
/// display formatters shared by tree rendering and result printing.
pub mod num;
