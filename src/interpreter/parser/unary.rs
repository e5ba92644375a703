use std::iter::Peekable;

use crate::{
    ast::{Node, OperatorKind},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix sign operators:
/// - `-`  (numeric negation)
/// - `+`  (identity)
///
/// Unary operators recurse into `unary` rather than `exponent`, so they bind
/// tighter than every binary operator (including `^`) and chain correctly for
/// repeated signs such as `--3` or `-+3`. Note that this makes `-2^2` parse
/// as `(-2)^2`; the behavior is kept as-is.
///
/// If no sign operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A unary operator node (with an absent left child) or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let right = parse_unary(tokens)?;
        Ok(Node::Operator { op:    OperatorKind::Negate,
                            left:  None,
                            right: Box::new(right), })
    } else if let Some((Token::Plus, _)) = tokens.peek() {
        tokens.next();
        let right = parse_unary(tokens)?;
        Ok(Node::Operator { op:    OperatorKind::Identity,
                            left:  None,
                            right: Box::new(right), })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - parenthesized expressions
///
/// A `(` recurses into the full expression rule and requires a matching `)`;
/// a missing close parenthesis is a parse failure. Any other leading token is
/// an invalid expression, and running out of tokens where an operand was
/// expected is reported as unexpected end of input.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Node`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(Node::Operand { value: *value }),

        Some((Token::LParen, position)) => {
            let node = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(node),
                _ => Err(ParseError::MismatchedParentheses { position: *position }),
            }
        },

        Some((token, position)) => {
            Err(ParseError::InvalidExpression { token:    token.to_string(),
                                                position: *position, })
        },

        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
