/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unexpected characters, unclosed
/// parentheses, truncated input and trailing garbage after a complete
/// expression.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types that can be raised while walking a finished
/// expression tree, such as division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
