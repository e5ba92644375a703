use std::iter::Peekable;

use crate::{
    ast::{Node, OperatorKind},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// A `Node::Operator` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_operator(token)
           && matches!(op, OperatorKind::Add | OperatorKind::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Node::Operator { op,
                                    left: Some(Box::new(left)),
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := exponent (("*" | "/") exponent)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// A binary expression tree combining exponent-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_exponent(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_operator(token)
           && matches!(op, OperatorKind::Mul | OperatorKind::Div)
        {
            tokens.next();
            let right = parse_exponent(tokens)?;
            left = Node::Operator { op,
                                    left: Some(Box::new(left)),
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Handles repeated exponentiation with left-associativity, so `a ^ b ^ c`
/// parses as `(a ^ b) ^ c`. This deviates from the usual mathematical
/// convention of a right fold and is kept deliberately.
///
/// The rule is: `exponent := unary ("^" unary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;
    while let Some((token, _)) = tokens.peek() {
        if let Some(op) = token_to_operator(token)
           && matches!(op, OperatorKind::Pow)
        {
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Node::Operator { op,
                                    left: Some(Box::new(left)),
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(OperatorKind)` when the token represents one of the binary
/// operators `+`, `-`, `*`, `/` or `^`. Returns `None` for all other tokens,
/// including numbers and parentheses.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(OperatorKind)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use treeval::{
///     ast::OperatorKind,
///     interpreter::{lexer::Token, parser::binary::token_to_operator},
/// };
///
/// assert_eq!(token_to_operator(&Token::Plus), Some(OperatorKind::Add));
/// assert_eq!(token_to_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<OperatorKind> {
    match token {
        Token::Plus => Some(OperatorKind::Add),
        Token::Minus => Some(OperatorKind::Sub),
        Token::Star => Some(OperatorKind::Mul),
        Token::Slash => Some(OperatorKind::Div),
        Token::Caret => Some(OperatorKind::Pow),
        _ => None,
    }
}
