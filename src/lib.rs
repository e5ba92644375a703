//! # treeval
//!
//! treeval is a small arithmetic calculator written in Rust.
//! It parses an expression into an explicit tree, renders that tree as
//! indented text, and walks it to compute a double-precision result.

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

use crate::{
    interpreter::{lexer::lex, parser::core::parse},
    report::{Level, MessageSink},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum that represents an expression as a
/// tree: operand leaves holding numeric values, and operator nodes owning
/// their child subtrees. Trees are built bottom-up by the parser and
/// traversed by the printer and the evaluator.
///
/// # Responsibilities
/// - Defines the two node variants and the operator tag set.
/// - Encodes tree ownership: every child is exclusively owned by its parent.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// the information needed to point at the failure, such as byte positions and
/// offending tokens.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, printing and evaluation to
/// provide a complete pipeline from an expression string to a numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, printer and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Diagnostic message reporting.
///
/// Defines the severity levels and the message-sink capability through which
/// the pipeline emits diagnostics such as the tree dump. The sink is passed
/// explicitly wherever it is needed; there is no global logger.
pub mod report;

/// Parses, prints and evaluates one expression.
///
/// This is the main entry point of the crate: the source string is lexed and
/// parsed into an expression tree, the tree is rendered through `sink` at
/// [`Level::Debug`], and the tree is then evaluated to its final value.
/// Nothing about the request persists afterwards; the tree is discarded once
/// the value is computed.
///
/// # Errors
/// Returns an error if lexing or parsing fails, or if a runtime error such as
/// division by zero occurs during evaluation.
///
/// # Examples
/// ```
/// use treeval::{
///     evaluate_expression,
///     report::{ConsoleSink, Level},
/// };
///
/// let sink = ConsoleSink::new(Level::Info);
///
/// let result = evaluate_expression("2 + 3 * 4", &sink).unwrap();
/// assert_eq!(result, 14.0);
///
/// // Division by zero is an evaluation error, not a panic.
/// assert!(evaluate_expression("5 / 0", &sink).is_err());
/// ```
pub fn evaluate_expression(source: &str,
                           sink: &dyn MessageSink)
                           -> Result<f64, Box<dyn std::error::Error>> {
    let tokens = lex(source)?;
    let root = parse(&tokens)?;
    sink.log(Level::Debug, &root.render());

    let value = root.evaluate()?;
    Ok(value)
}
