/// Binary operator parsing.
///
/// One procedure per binary precedence level, lowest to highest: additive,
/// multiplicative, exponent.
pub mod binary;

/// Parser entry points.
///
/// Provides the top-level `parse` function and the expression-level rule that
/// the precedence chain starts from.
pub mod core;

/// Unary operator and primary parsing.
///
/// Handles prefix signs, numeric literals and parenthesized groupings at the
/// tightest-binding level of the grammar.
pub mod unary;
